//! # Drill Settings
//!
//! Settings come from a small YAML document. Every field is optional:
//!
//! ```yaml
//! keys: [C, G, "B♭"]      # tonics to draw from (default: all twelve)
//! modes: [Dorian, Lydian] # modes to draw from (default: all seven)
//! hands: [Left]           # hands to draw from (default: both)
//! viewport-width: 1024    # decides two or three octaves
//! seed: 42                # repeatable drills
//! ```
//!
//! An empty list means the same as leaving the field out. Labels are parsed
//! with the same rules as the command line, so `Bb` and `dor` work too.
//!
//! ## Example
//! ```rust
//! use modal_trainer::{Key, Settings};
//!
//! let settings = Settings::from_yaml("keys: [C, Bb]\nseed: 7")?;
//! assert_eq!(settings.keys, vec![Key::C, Key::BFlat]);
//! assert_eq!(settings.seed, Some(7));
//! # Ok::<(), modal_trainer::TrainerError>(())
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::TrainerError;
use crate::theory::{Hand, Key, Mode};

pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1024.0;

/// Settings exactly as written in YAML, before validation.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawSettings {
    pub keys: Option<Vec<String>>,
    pub modes: Option<Vec<String>>,
    pub hands: Option<Vec<String>>,
    pub viewport_width: Option<f64>,
    pub seed: Option<u64>,
}

/// Validated drill settings. Empty filters mean "everything".
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub keys: Vec<Key>,
    pub modes: Vec<Mode>,
    pub hands: Vec<Hand>,
    pub viewport_width: f64,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keys: Key::ALL.to_vec(),
            modes: Mode::ALL.to_vec(),
            hands: Hand::ALL.to_vec(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_yaml(content: &str) -> Result<Self, TrainerError> {
        // An empty document deserializes as null rather than an empty map.
        let raw: RawSettings = if content.trim().is_empty() {
            RawSettings::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| TrainerError::SettingsError(e.to_string()))?
        };
        Self::from_raw(raw)
    }

    pub fn load(path: &Path) -> Result<Self, TrainerError> {
        let content = fs::read_to_string(path).map_err(|e| TrainerError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_raw(raw: RawSettings) -> Result<Self, TrainerError> {
        let defaults = Settings::default();

        let viewport_width = match raw.viewport_width {
            Some(width) if !(width.is_finite() && width > 0.0) => {
                return Err(TrainerError::SettingsError(format!(
                    "viewport-width must be a positive number, got {}",
                    width
                )));
            }
            Some(width) => width,
            None => defaults.viewport_width,
        };

        Ok(Settings {
            keys: parse_filter(raw.keys, defaults.keys)?,
            modes: parse_filter(raw.modes, defaults.modes)?,
            hands: parse_filter(raw.hands, defaults.hands)?,
            viewport_width,
            seed: raw.seed,
        })
    }
}

/// Parse a list of labels, keeping the first occurrence of each value.
fn parse_filter<T>(labels: Option<Vec<String>>, all: Vec<T>) -> Result<Vec<T>, TrainerError>
where
    T: FromStr<Err = TrainerError> + PartialEq,
{
    let labels = match labels {
        Some(labels) if !labels.is_empty() => labels,
        _ => return Ok(all),
    };
    let mut parsed = Vec::with_capacity(labels.len());
    for label in &labels {
        let value = label.parse::<T>()?;
        if !parsed.contains(&value) {
            parsed.push(value);
        }
    }
    Ok(parsed)
}
