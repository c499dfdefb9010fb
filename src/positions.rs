//! # Finger Positions
//!
//! Places a fingered scale on the rendered keyboard.
//!
//! The left hand starts on the first occurrence of the tonic, the right hand
//! one octave higher. If a full octave from the start would not fit, the
//! start drops an octave. Positions are then walked up through the mode's
//! intervals, so indices always increase, and any that still fall off the
//! keyboard are dropped.
//!
//! Each position also carries whether its note is the tonic of the parent
//! major scale. That is where the major-scale fingering pattern resets, and
//! the renderer marks it.
//!
//! ## Example
//! ```rust
//! use modal_trainer::{finger_positions, Hand, Key, KeyboardLayout, Mode, Selection};
//!
//! let layout = KeyboardLayout::new(3);
//! let selection = Selection::new(Key::D, Mode::Dorian, Hand::Left);
//! let positions = finger_positions(Some(selection), &layout);
//!
//! assert_eq!(positions.len(), 8);
//! assert_eq!(positions[0].index, 2);
//! // C is the parent tonic of D Dorian.
//! assert!(positions[6].is_parent_tonic);
//! ```

use serde::Serialize;
use std::fmt;

use crate::fingering::{finger_sequence, parent_key, scale_notes, SCALE_LEN};
use crate::keyboard::KeyboardLayout;
use crate::pitch::OCTAVE;
use crate::theory::{Hand, Key, Mode};

/// One drilled scale: tonic, mode and the hand that plays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Selection {
    pub key: Key,
    pub mode: Mode,
    pub hand: Hand,
}

impl Selection {
    pub fn new(key: Key, mode: Mode, hand: Hand) -> Self {
        Self { key, mode, hand }
    }
}

/// "D Dorian"
impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.mode)
    }
}

/// A finger number to draw on one keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FingerPosition {
    /// Index into the keyboard layout.
    pub index: usize,
    /// 1 (thumb) through 5.
    pub finger: u8,
    pub is_parent_tonic: bool,
}

/// Keyboard index the scale starts from, after the octave clamp.
///
/// Negative when the keyboard is too short to hold even the clamped start,
/// `None` when the keyboard has no keys.
fn start_index(selection: &Selection, layout: &KeyboardLayout) -> Option<isize> {
    let octave = OCTAVE as isize;
    let tonic = layout.first_index_of(selection.key.pitch_class())?;
    let mut start = (tonic + selection.hand.octave_offset()) as isize;
    if start + octave >= layout.len() as isize {
        start -= octave;
    }
    Some(start)
}

/// Finger positions for `selection` on `layout`, at most eight, in keyboard order.
///
/// Returns an empty list when nothing is selected yet. Layouts of two or more
/// octaves always hold all eight. On a single octave the clamped start can be
/// negative, and positions left of the first key are dropped along with those
/// past the last, so the list may begin after the tonic.
pub fn finger_positions(
    selection: Option<Selection>,
    layout: &KeyboardLayout,
) -> Vec<FingerPosition> {
    let Some(selection) = selection else {
        return Vec::new();
    };
    let Some(start) = start_index(&selection, layout) else {
        return Vec::new();
    };

    let fingers = finger_sequence(selection.key, selection.mode, selection.hand);
    let notes = scale_notes(selection.key, selection.mode);
    let parent_tonic = parent_key(selection.key, selection.mode).pitch_class();

    let mut absolute = [0isize; SCALE_LEN];
    absolute[0] = start;
    for (i, step) in selection.mode.intervals().iter().enumerate() {
        absolute[i + 1] = absolute[i] + *step as isize;
    }

    absolute
        .iter()
        .zip(fingers.fingers())
        .zip(notes)
        .filter_map(|((&position, finger), note)| {
            let index = usize::try_from(position).ok()?;
            (index < layout.len()).then_some(FingerPosition {
                index,
                finger,
                is_parent_tonic: note == parent_tonic,
            })
        })
        .collect()
}
