//! # Pitch Classes and Enharmonic Spelling
//!
//! Every note in this crate is one of twelve pitch classes, numbered from C = 0.
//! Arithmetic happens on the numbers; names only appear at the edges.
//!
//! ## Spelling
//! One table holds both spellings for each pitch class plus a flag saying which
//! one the trainer displays. Naturals spell the same both ways. The five black
//! keys display as flats (G♭ D♭ A♭ E♭ B♭), while the canonical name used for
//! lookup is always the sharp spelling.
//!
//! ```text
//!  0 C    1 C#/D♭   2 D    3 D#/E♭   4 E    5 F
//!  6 F#/G♭   7 G    8 G#/A♭   9 A   10 A#/B♭  11 B
//! ```
//!
//! ## Example
//! ```rust
//! use modal_trainer::pitch::{canonical_name, display_spelling, PitchClass};
//!
//! assert_eq!(canonical_name("B♭"), Some("A#"));
//! assert_eq!(display_spelling("A#"), Some("B♭"));
//! assert_eq!(PitchClass::new(10).transpose(-2).display_name(), "A♭");
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// Number of pitch classes in an octave.
pub const OCTAVE: usize = 12;

struct Spelling {
    sharp: &'static str,
    flat: &'static str,
    prefers_flat: bool,
    /// Alternate ASCII flat spelling accepted on input ("Bb" for "B♭")
    ascii_flat: &'static str,
}

const SPELLINGS: [Spelling; OCTAVE] = [
    Spelling {
        sharp: "C",
        flat: "C",
        prefers_flat: false,
        ascii_flat: "C",
    },
    Spelling {
        sharp: "C#",
        flat: "D♭",
        prefers_flat: true,
        ascii_flat: "Db",
    },
    Spelling {
        sharp: "D",
        flat: "D",
        prefers_flat: false,
        ascii_flat: "D",
    },
    Spelling {
        sharp: "D#",
        flat: "E♭",
        prefers_flat: true,
        ascii_flat: "Eb",
    },
    Spelling {
        sharp: "E",
        flat: "E",
        prefers_flat: false,
        ascii_flat: "E",
    },
    Spelling {
        sharp: "F",
        flat: "F",
        prefers_flat: false,
        ascii_flat: "F",
    },
    Spelling {
        sharp: "F#",
        flat: "G♭",
        prefers_flat: true,
        ascii_flat: "Gb",
    },
    Spelling {
        sharp: "G",
        flat: "G",
        prefers_flat: false,
        ascii_flat: "G",
    },
    Spelling {
        sharp: "G#",
        flat: "A♭",
        prefers_flat: true,
        ascii_flat: "Ab",
    },
    Spelling {
        sharp: "A",
        flat: "A",
        prefers_flat: false,
        ascii_flat: "A",
    },
    Spelling {
        sharp: "A#",
        flat: "B♭",
        prefers_flat: true,
        ascii_flat: "Bb",
    },
    Spelling {
        sharp: "B",
        flat: "B",
        prefers_flat: false,
        ascii_flat: "B",
    },
];

/// A note identity independent of octave, 0 (C) through 11 (B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Wraps any integer into the octave.
    pub fn new(value: u8) -> Self {
        PitchClass(value % OCTAVE as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Move up (positive) or down (negative) by semitones, wrapping mod 12.
    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass((self.0 as i32 + semitones).rem_euclid(OCTAVE as i32) as u8)
    }

    /// Sharp spelling, used as the canonical name for lookups.
    pub fn sharp_name(self) -> &'static str {
        SPELLINGS[self.index()].sharp
    }

    /// The spelling the trainer shows: flats for the five black keys.
    pub fn display_name(self) -> &'static str {
        let spelling = &SPELLINGS[self.index()];
        if spelling.prefers_flat {
            spelling.flat
        } else {
            spelling.sharp
        }
    }

    /// Whether this pitch class sits on a black piano key.
    pub fn is_black(self) -> bool {
        SPELLINGS[self.index()].prefers_flat
    }

    /// Iterate C through B.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..OCTAVE as u8).map(PitchClass)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Serializes as the display spelling.
impl Serialize for PitchClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

/// Parse a note label in any accepted spelling: "C#", "D♭" or "Db".
pub fn parse_label(label: &str) -> Option<PitchClass> {
    let label = label.trim();
    SPELLINGS
        .iter()
        .position(|s| s.sharp == label || s.flat == label || s.ascii_flat == label)
        .map(|i| PitchClass(i as u8))
}

/// Canonical (sharp) name for a label in either spelling.
pub fn canonical_name(label: &str) -> Option<&'static str> {
    parse_label(label).map(PitchClass::sharp_name)
}

/// Preferred display spelling for a sharp-spelled name.
pub fn display_spelling(sharp: &str) -> Option<&'static str> {
    SPELLINGS
        .iter()
        .position(|s| s.sharp == sharp.trim())
        .map(|i| PitchClass(i as u8).display_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_transpose_wraps_both_directions() {
        assert_eq!(PitchClass::new(11).transpose(1), PitchClass::C);
        assert_eq!(PitchClass::C.transpose(-1), PitchClass::new(11));
        assert_eq!(PitchClass::new(2).transpose(-122), PitchClass::new(0));
    }

    #[test]
    fn test_new_wraps() {
        assert_eq!(PitchClass::new(14), PitchClass::new(2));
    }

    #[test]
    fn test_black_keys_display_as_flats() {
        let names: Vec<&str> = PitchClass::all().map(PitchClass::display_name).collect();
        assert_eq!(
            names,
            vec!["C", "D♭", "D", "E♭", "E", "F", "G♭", "G", "A♭", "A", "B♭", "B"]
        );
        let black: Vec<usize> = PitchClass::all()
            .filter(|p| p.is_black())
            .map(PitchClass::index)
            .collect();
        assert_eq!(black, vec![1, 3, 6, 8, 10]);
    }

    #[test]
    fn test_parse_label_accepts_all_spellings() {
        assert_eq!(parse_label("G♭"), Some(PitchClass::new(6)));
        assert_eq!(parse_label("Gb"), Some(PitchClass::new(6)));
        assert_eq!(parse_label("F#"), Some(PitchClass::new(6)));
        assert_eq!(parse_label(" E "), Some(PitchClass::new(4)));
        assert_eq!(parse_label("H"), None);
        assert_eq!(parse_label(""), None);
    }

    #[test]
    fn test_canonical_and_display_are_inverse() {
        for pitch in PitchClass::all() {
            let shown = pitch.display_name();
            let canonical = canonical_name(shown).unwrap();
            assert_eq!(canonical, pitch.sharp_name());
            assert_eq!(display_spelling(canonical), Some(shown));
        }
    }

    #[test]
    fn test_display_spelling_rejects_flats() {
        assert_eq!(display_spelling("B♭"), None);
        assert_eq!(display_spelling("C"), Some("C"));
    }
}
