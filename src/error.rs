//! # Error Types
//!
//! Errors only arise at the text boundary: parsing key, mode and hand labels,
//! reading drill settings, and decoding colors. The theory engine itself takes
//! closed enumerations and cannot fail.
//!
//! ## Usage
//! ```rust
//! use modal_trainer::{Key, TrainerError};
//!
//! match "H".parse::<Key>() {
//!     Ok(key) => println!("{}", key),
//!     Err(TrainerError::UnknownKey(label)) => eprintln!("no such key: {}", label),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainerError {
    /// A tonic label outside the twelve-key set.
    ///
    /// # Example
    /// ```
    /// # use modal_trainer::TrainerError;
    /// let err = TrainerError::UnknownKey("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown key: H");
    /// ```
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// A mode name that is not one of the seven diatonic modes.
    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    /// Anything other than left or right.
    #[error("Unknown hand: {0}")]
    UnknownHand(String),

    /// A color string that is not `#RRGGBB`.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Invalid drill settings.
    ///
    /// Covers YAML syntax errors as well as values that parse but make no sense,
    /// like a negative viewport width.
    ///
    /// # Example
    /// ```
    /// # use modal_trainer::TrainerError;
    /// let err = TrainerError::SettingsError("viewport-width must be positive".to_string());
    /// assert_eq!(err.to_string(), "Invalid settings: viewport-width must be positive");
    /// ```
    #[error("Invalid settings: {0}")]
    SettingsError(String),

    /// A view that could not be written out as JSON.
    #[error("Serialization error: {0}")]
    SerializeError(String),

    /// A settings file that could not be read.
    #[error("Error reading '{path}': {message}")]
    Io { path: String, message: String },
}
