//! # Modal Piano Scale Trainer
//!
//! Drills piano scale fingerings for random keys, modes and hands.
//!
//! Fingerings are stored for the twelve major scales only. Every mode is
//! derived from its parent major scale by reading the fingering from the
//! mode's starting degree, so 24 tables cover all 168 key/mode/hand drills.
//!
//! ## Modules
//! - [`pitch`] - pitch classes and the sharp/flat spelling table
//! - [`theory`] - `Key`, `Mode` and `Hand`
//! - [`fingering`] - parent keys, scale notes and finger sequences
//! - [`keyboard`] - piano layout and pixel geometry
//! - [`positions`] - placing fingers on keyboard keys
//! - [`session`] - drill state and the view derived from it
//! - [`render`] - text and JSON output
//!
//! ## Example
//! ```rust
//! use modal_trainer::{drill, Hand, Key, Mode};
//!
//! let text = drill(Key::D, Mode::Dorian, Hand::Right, 1024.0);
//! assert!(text.starts_with("D Dorian (Right hand)"));
//! ```

pub mod config;
pub mod error;
pub mod fingering;
pub mod keyboard;
pub mod palette;
pub mod pitch;
pub mod positions;
pub mod render;
pub mod session;
pub mod theory;

pub use config::Settings;
pub use error::TrainerError;
pub use fingering::{finger_sequence, relative_key, scale_notes, FingerSequence};
pub use keyboard::{KeyRect, KeyboardGeometry, KeyboardLayout};
pub use palette::Checkbox;
pub use pitch::PitchClass;
pub use positions::{finger_positions, FingerPosition, Selection};
pub use session::{TrainerState, TrainerView};
pub use theory::{Hand, Key, Mode};

/// Render one drill as text for a viewport `viewport_width` pixels wide.
pub fn drill(key: Key, mode: Mode, hand: Hand, viewport_width: f64) -> String {
    let view = TrainerView::build(Some(Selection::new(key, mode, hand)), viewport_width);
    render::to_text(&view)
}
