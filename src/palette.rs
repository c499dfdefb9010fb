//! Display colors derived from the key and mode tables.

use serde::Serialize;

use crate::error::TrainerError;
use crate::theory::{Key, Mode};

pub const BLACK: &str = "#000000";
pub const WHITE: &str = "#FFFFFF";

/// Parse `#RRGGBB` into its channels.
pub fn parse_hex(hex: &str) -> Result<(u8, u8, u8), TrainerError> {
    let invalid = || TrainerError::InvalidColor(hex.to_string());
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
    };
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Black or white, whichever reads better on top of `hex`.
pub fn contrast_color(hex: &str) -> Result<&'static str, TrainerError> {
    let (r, g, b) = parse_hex(hex)?;
    let luminance = (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0;
    Ok(if luminance > 0.5 { BLACK } else { WHITE })
}

/// Symbol color for a key's checkbox.
pub fn key_symbol_color(key: Key) -> &'static str {
    // Table colors are always well-formed.
    contrast_color(key.color()).unwrap_or(BLACK)
}

pub fn mode_symbol_color(mode: Mode) -> &'static str {
    contrast_color(mode.color()).unwrap_or(BLACK)
}

/// One entry of the key or mode filter: a label drawn on its color swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkbox {
    pub label: &'static str,
    pub color: &'static str,
    pub symbol_color: &'static str,
    pub checked: bool,
}

/// Key filter entries in circle-of-fifths order, checked where `allowed` has the key.
pub fn key_checkboxes(allowed: &[Key]) -> Vec<Checkbox> {
    Key::ALL
        .iter()
        .map(|&key| Checkbox {
            label: key.label(),
            color: key.color(),
            symbol_color: key_symbol_color(key),
            checked: allowed.contains(&key),
        })
        .collect()
}

pub fn mode_checkboxes(allowed: &[Mode]) -> Vec<Checkbox> {
    Mode::ALL
        .iter()
        .map(|&mode| Checkbox {
            label: mode.name(),
            color: mode.color(),
            symbol_color: mode_symbol_color(mode),
            checked: allowed.contains(&mode),
        })
        .collect()
}

/// CSS background for a selection, fading from the mode color to the key color.
pub fn background_gradient(mode: Mode, key: Key) -> String {
    format!(
        "linear-gradient(135deg, {} 0%, {} 100%)",
        mode.color(),
        key.color()
    )
}
