//! # Scale Fingerings
//!
//! Fingerings are stored only for the twelve major scales, one table per hand.
//! Every other mode reuses the fingering of its parent major scale, read from
//! the degree the mode starts on.
//!
//! ## Pipeline
//! 1. Find the parent major key: transpose the modal tonic down by the
//!    semitone offset of the mode's degree (C Dorian → B♭ major).
//! 2. Look up the parent's 8-finger string for the hand.
//! 3. Keep the first seven fingers, one per scale degree.
//! 4. Rotate left by `degree - 1` so the modal tonic comes first.
//! 5. Repeat the first finger for the octave above.
//!
//! ## Example
//! ```rust
//! use modal_trainer::{finger_sequence, Hand, Key, Mode};
//!
//! let fingers = finger_sequence(Key::C, Mode::Dorian, Hand::Left);
//! assert_eq!(fingers.to_string(), "21432132");
//! ```
//!
//! Finger numbers run from 1 (thumb) to 5 (little finger).

use serde::Serialize;
use std::fmt;

use crate::pitch::PitchClass;
use crate::theory::{Hand, Key, Mode};

/// Notes per drilled scale: seven degrees plus the tonic an octave up.
pub const SCALE_LEN: usize = 8;

/// Standard left-hand major-scale fingering from the root.
fn left_fingering(key: Key) -> &'static str {
    match key {
        Key::C => "14321321",
        Key::DFlat => "32143213",
        Key::D => "14321321",
        Key::EFlat => "32143213",
        Key::E => "14321321",
        Key::F => "14321321",
        Key::GFlat => "43213214",
        Key::G => "14321321",
        Key::AFlat => "32143213",
        Key::A => "14321321",
        Key::BFlat => "32143213",
        Key::B => "13214321",
    }
}

/// Standard right-hand major-scale fingering from the root.
fn right_fingering(key: Key) -> &'static str {
    match key {
        Key::C => "12312341",
        Key::DFlat => "23123412",
        Key::D => "12312341",
        Key::EFlat => "31234123",
        Key::E => "12312341",
        Key::F => "12341231",
        Key::GFlat => "23412312",
        Key::G => "12312341",
        Key::AFlat => "34123123",
        Key::A => "12312341",
        Key::BFlat => "41231234",
        Key::B => "12312341",
    }
}

/// The stored major-scale fingering for `key` played by `hand`.
pub fn major_fingering(key: Key, hand: Hand) -> &'static str {
    match hand {
        Hand::Left => left_fingering(key),
        Hand::Right => right_fingering(key),
    }
}

/// Eight finger numbers, one per scale note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FingerSequence([u8; SCALE_LEN]);

impl FingerSequence {
    pub fn fingers(&self) -> [u8; SCALE_LEN] {
        self.0
    }

    pub fn get(&self, degree: usize) -> Option<u8> {
        self.0.get(degree).copied()
    }
}

impl fmt::Display for FingerSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for finger in self.0 {
            write!(f, "{}", finger)?;
        }
        Ok(())
    }
}

/// Parent major key of a modal tonic, `semitones_down` below it.
///
/// ```rust
/// use modal_trainer::{relative_key, Key};
///
/// assert_eq!(relative_key(Key::C, 2), Key::BFlat);
/// assert_eq!(relative_key(Key::A, 9), Key::C);
/// ```
pub fn relative_key(tonic: Key, semitones_down: u8) -> Key {
    Key::from_pitch_class(tonic.pitch_class().transpose(-(semitones_down as i32)))
}

/// Parent major key of `tonic` played in `mode`.
pub fn parent_key(tonic: Key, mode: Mode) -> Key {
    relative_key(tonic, mode.semitones_from_parent())
}

/// The seven scale notes of `tonic` in `mode`, plus the tonic again.
pub fn scale_notes(tonic: Key, mode: Mode) -> [PitchClass; SCALE_LEN] {
    let mut notes = [tonic.pitch_class(); SCALE_LEN];
    let mut current = tonic.pitch_class();
    for (i, step) in mode.intervals().iter().enumerate() {
        current = current.transpose(*step as i32);
        notes[i + 1] = current;
    }
    notes
}

/// Display names of [`scale_notes`].
pub fn scale_note_names(tonic: Key, mode: Mode) -> Vec<&'static str> {
    scale_notes(tonic, mode)
        .iter()
        .map(|p| p.display_name())
        .collect()
}

/// Fingering for `tonic` in `mode`, aligned so position 0 is the modal tonic.
pub fn finger_sequence(tonic: Key, mode: Mode, hand: Hand) -> FingerSequence {
    let parent = parent_key(tonic, mode);
    let mut base = [0u8; SCALE_LEN - 1];
    for (slot, digit) in base.iter_mut().zip(major_fingering(parent, hand).bytes()) {
        *slot = digit - b'0';
    }
    base.rotate_left(mode.degree() as usize - 1);

    let mut fingers = [base[0]; SCALE_LEN];
    fingers[..SCALE_LEN - 1].copy_from_slice(&base);
    FingerSequence(fingers)
}
