//! # Keys, Modes and Hands
//!
//! The three closed enumerations a drill is built from.
//!
//! ## Key
//! Twelve tonics listed around the circle of fifths, C G D A E B G♭ D♭ A♭ E♭ B♭ F.
//! Each has a display color stepping around the hue wheel.
//!
//! ## Mode
//! The seven diatonic modes, listed from brightest (Lydian) to darkest (Locrian).
//! Each mode is a rotation of the major scale:
//!
//! | Mode       | Degree | Steps           |
//! |------------|--------|-----------------|
//! | Ionian     | 1      | 2 2 1 2 2 2 1   |
//! | Dorian     | 2      | 2 1 2 2 2 1 2   |
//! | Phrygian   | 3      | 1 2 2 2 1 2 2   |
//! | Lydian     | 4      | 2 2 2 1 2 2 1   |
//! | Mixolydian | 5      | 2 2 1 2 2 1 2   |
//! | Aeolian    | 6      | 2 1 2 2 1 2 2   |
//! | Locrian    | 7      | 1 2 2 1 2 2 2   |
//!
//! The degree picks which note of the parent major scale the mode starts on.
//!
//! ## Hand
//! Left or right. The right hand plays one octave above the left.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::TrainerError;
use crate::pitch::{self, PitchClass};

/// Semitones above the tonic for each degree of the major scale (degree 1 first).
pub const MAJOR_DEGREE_OFFSETS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Semitone offset of a major-scale degree (1 through 7).
///
/// Degrees outside 1..=7 wrap, so 8 is treated like 1.
pub fn semitones_for_degree(degree: u8) -> u8 {
    MAJOR_DEGREE_OFFSETS[(degree.max(1) as usize - 1) % 7]
}

/// A tonic, spelled with sharps for naturals and flats for the five black keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Key {
    C,
    G,
    D,
    A,
    E,
    B,
    GFlat,
    DFlat,
    AFlat,
    EFlat,
    BFlat,
    F,
}

impl Key {
    pub const ALL: [Key; 12] = [
        Key::C,
        Key::G,
        Key::D,
        Key::A,
        Key::E,
        Key::B,
        Key::GFlat,
        Key::DFlat,
        Key::AFlat,
        Key::EFlat,
        Key::BFlat,
        Key::F,
    ];

    pub fn label(self) -> &'static str {
        self.pitch_class().display_name()
    }

    pub fn pitch_class(self) -> PitchClass {
        PitchClass::new(match self {
            Key::C => 0,
            Key::DFlat => 1,
            Key::D => 2,
            Key::EFlat => 3,
            Key::E => 4,
            Key::F => 5,
            Key::GFlat => 6,
            Key::G => 7,
            Key::AFlat => 8,
            Key::A => 9,
            Key::BFlat => 10,
            Key::B => 11,
        })
    }

    /// The key whose tonic is `pitch`. Total: every pitch class names a key.
    pub fn from_pitch_class(pitch: PitchClass) -> Key {
        match pitch.index() {
            0 => Key::C,
            1 => Key::DFlat,
            2 => Key::D,
            3 => Key::EFlat,
            4 => Key::E,
            5 => Key::F,
            6 => Key::GFlat,
            7 => Key::G,
            8 => Key::AFlat,
            9 => Key::A,
            10 => Key::BFlat,
            _ => Key::B,
        }
    }

    /// Display color as `#RRGGBB`.
    pub fn color(self) -> &'static str {
        match self {
            Key::C => "#FF0000",
            Key::G => "#FF7F00",
            Key::D => "#FFFF00",
            Key::A => "#7FFF00",
            Key::E => "#00FF00",
            Key::B => "#00FF7F",
            Key::GFlat => "#00FFFF",
            Key::DFlat => "#007FFF",
            Key::AFlat => "#0000FF",
            Key::EFlat => "#7F00FF",
            Key::BFlat => "#FF00FF",
            Key::F => "#FF007F",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Key> for &'static str {
    fn from(key: Key) -> Self {
        key.label()
    }
}

/// Accepts any spelling of the pitch class: "B♭", "Bb" and "A#" are all `Key::BFlat`.
impl FromStr for Key {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        pitch::parse_label(s)
            .map(Key::from_pitch_class)
            .ok_or_else(|| TrainerError::UnknownKey(s.to_string()))
    }
}

/// One of the seven diatonic modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mode {
    Lydian,
    Ionian,
    Mixolydian,
    Dorian,
    Aeolian,
    Phrygian,
    Locrian,
}

impl Mode {
    /// Brightest to darkest.
    pub const ALL: [Mode; 7] = [
        Mode::Lydian,
        Mode::Ionian,
        Mode::Mixolydian,
        Mode::Dorian,
        Mode::Aeolian,
        Mode::Phrygian,
        Mode::Locrian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mode::Lydian => "Lydian",
            Mode::Ionian => "Ionian",
            Mode::Mixolydian => "Mixolydian",
            Mode::Dorian => "Dorian",
            Mode::Aeolian => "Aeolian",
            Mode::Phrygian => "Phrygian",
            Mode::Locrian => "Locrian",
        }
    }

    /// Three-letter label used on the mode checkboxes.
    pub fn abbreviation(self) -> &'static str {
        &self.name()[..3]
    }

    /// Position of the mode within the major-scale rotation, Ionian = 1.
    pub fn degree(self) -> u8 {
        match self {
            Mode::Ionian => 1,
            Mode::Dorian => 2,
            Mode::Phrygian => 3,
            Mode::Lydian => 4,
            Mode::Mixolydian => 5,
            Mode::Aeolian => 6,
            Mode::Locrian => 7,
        }
    }

    /// Semitones from the parent major tonic up to this mode's tonic.
    pub fn semitones_from_parent(self) -> u8 {
        semitones_for_degree(self.degree())
    }

    /// Semitone steps between consecutive scale degrees. Always sums to 12.
    pub fn intervals(self) -> [u8; 7] {
        match self {
            Mode::Ionian => [2, 2, 1, 2, 2, 2, 1],
            Mode::Dorian => [2, 1, 2, 2, 2, 1, 2],
            Mode::Phrygian => [1, 2, 2, 2, 1, 2, 2],
            Mode::Lydian => [2, 2, 2, 1, 2, 2, 1],
            Mode::Mixolydian => [2, 2, 1, 2, 2, 1, 2],
            Mode::Aeolian => [2, 1, 2, 2, 1, 2, 2],
            Mode::Locrian => [1, 2, 2, 1, 2, 2, 2],
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Mode::Lydian => "#FFD700",
            Mode::Ionian => "#FFFF00",
            Mode::Mixolydian => "#FFA500",
            Mode::Dorian => "#98FB98",
            Mode::Aeolian => "#4169E1",
            Mode::Phrygian => "#FF4500",
            Mode::Locrian => "#483D8B",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive; also accepts the three-letter abbreviation ("dor").
impl FromStr for Mode {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Mode::ALL
            .iter()
            .copied()
            .find(|m| {
                m.name().to_ascii_lowercase() == wanted
                    || m.abbreviation().to_ascii_lowercase() == wanted
            })
            .ok_or_else(|| TrainerError::UnknownMode(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub const ALL: [Hand; 2] = [Hand::Left, Hand::Right];

    pub fn name(self) -> &'static str {
        match self {
            Hand::Left => "Left",
            Hand::Right => "Right",
        }
    }

    /// Keyboard offset of the hand's register: the right hand plays an octave up.
    pub fn octave_offset(self) -> usize {
        match self {
            Hand::Left => 0,
            Hand::Right => pitch::OCTAVE,
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Hand {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Hand::Left),
            "right" | "r" => Ok(Hand::Right),
            _ => Err(TrainerError::UnknownHand(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_key_labels_round_trip_through_pitch_class() {
        for key in Key::ALL {
            assert_eq!(Key::from_pitch_class(key.pitch_class()), key);
            assert_eq!(key.label().parse::<Key>(), Ok(key));
        }
    }

    #[test]
    fn test_key_labels_in_circle_order() {
        let labels: Vec<&str> = Key::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            vec!["C", "G", "D", "A", "E", "B", "G♭", "D♭", "A♭", "E♭", "B♭", "F"]
        );
    }

    #[test]
    fn test_key_parses_enharmonics() {
        assert_eq!("A#".parse::<Key>(), Ok(Key::BFlat));
        assert_eq!("Bb".parse::<Key>(), Ok(Key::BFlat));
        assert_eq!(
            "X".parse::<Key>(),
            Err(TrainerError::UnknownKey("X".to_string()))
        );
    }

    #[test]
    fn test_mode_intervals_span_an_octave() {
        for mode in Mode::ALL {
            let total: u8 = mode.intervals().iter().sum();
            assert_eq!(total, 12, "{} intervals", mode);
        }
    }

    #[test]
    fn test_mode_intervals_are_rotations_of_ionian() {
        let ionian = Mode::Ionian.intervals();
        for mode in Mode::ALL {
            let mut rotated = ionian;
            rotated.rotate_left(mode.degree() as usize - 1);
            assert_eq!(mode.intervals(), rotated, "{}", mode);
        }
    }

    #[test]
    fn test_degree_semitones() {
        let offsets: Vec<u8> = (1..=7).map(semitones_for_degree).collect();
        assert_eq!(offsets, vec![0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(Mode::Dorian.semitones_from_parent(), 2);
        assert_eq!(Mode::Locrian.semitones_from_parent(), 11);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("dorian".parse::<Mode>(), Ok(Mode::Dorian));
        assert_eq!("Mix".parse::<Mode>(), Ok(Mode::Mixolydian));
        assert!("Major".parse::<Mode>().is_err());
        assert_eq!(Mode::Locrian.abbreviation(), "Loc");
    }

    #[test]
    fn test_hand_parsing_and_offset() {
        assert_eq!("Right".parse::<Hand>(), Ok(Hand::Right));
        assert_eq!("l".parse::<Hand>(), Ok(Hand::Left));
        assert!("both".parse::<Hand>().is_err());
        assert_eq!(Hand::Left.octave_offset(), 0);
        assert_eq!(Hand::Right.octave_offset(), 12);
    }
}
