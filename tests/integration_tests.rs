//! Integration tests for the trainer
//!
//! Checks the fingering pipeline across every key, mode and hand, and the
//! drill flow from settings to rendered output.

use modal_trainer::fingering::{major_fingering, scale_note_names};
use modal_trainer::pitch::{canonical_name, display_spelling};
use modal_trainer::{
    finger_positions, finger_sequence, relative_key, render, scale_notes, Hand, Key,
    KeyboardLayout, Mode, Selection, Settings, TrainerState,
};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn all_selections() -> impl Iterator<Item = Selection> {
    Key::ALL.into_iter().flat_map(|key| {
        Mode::ALL.into_iter().flat_map(move |mode| {
            Hand::ALL
                .into_iter()
                .map(move |hand| Selection::new(key, mode, hand))
        })
    })
}

#[test]
fn test_every_key_label_round_trips() {
    for key in Key::ALL {
        let canonical = canonical_name(key.label()).unwrap();
        assert_eq!(display_spelling(canonical), Some(key.label()));
    }
}

#[test]
fn test_every_scale_has_eight_notes_ending_on_tonic() {
    for key in Key::ALL {
        for mode in Mode::ALL {
            let notes = scale_notes(key, mode);
            assert_eq!(notes.len(), 8);
            assert_eq!(notes[0], notes[7], "{} {}", key, mode);
            assert_eq!(notes[0], key.pitch_class());
        }
    }
}

#[test]
fn test_every_finger_sequence_is_well_formed() {
    for s in all_selections() {
        let fingers = finger_sequence(s.key, s.mode, s.hand).to_string();
        assert_eq!(fingers.len(), 8, "{} {}", s, s.hand);
        assert!(fingers.chars().all(|c| ('1'..='5').contains(&c)), "{}", fingers);
        assert_eq!(fingers.chars().next(), fingers.chars().last());
    }
}

#[test]
fn test_modes_share_parent_scale_notes() {
    // Every mode's notes are the parent major scale's notes, just starting elsewhere.
    for key in Key::ALL {
        for mode in Mode::ALL {
            let parent = relative_key(key, mode.semitones_from_parent());
            let mut modal: Vec<_> = scale_notes(key, mode)[..7].to_vec();
            let mut major: Vec<_> = scale_notes(parent, Mode::Ionian)[..7].to_vec();
            modal.sort();
            major.sort();
            assert_eq!(modal, major, "{} {}", key, mode);
        }
    }
}

#[test]
fn test_modal_fingering_is_rotated_parent_fingering() {
    for s in all_selections() {
        let parent = relative_key(s.key, s.mode.semitones_from_parent());
        let table = major_fingering(parent, s.hand).as_bytes();
        let fingers = finger_sequence(s.key, s.mode, s.hand).fingers();
        let offset = s.mode.degree() as usize - 1;
        for (i, finger) in fingers.iter().take(7).enumerate() {
            assert_eq!(*finger, table[(i + offset) % 7] - b'0', "{} {}", s, s.hand);
        }
    }
}

#[test]
fn test_c_dorian_left_example() {
    assert_eq!(relative_key(Key::C, 2), Key::BFlat);
    assert_eq!(
        finger_sequence(Key::C, Mode::Dorian, Hand::Left).to_string(),
        "21432132"
    );
}

#[test]
fn test_positions_increase_and_stay_on_keyboard() {
    for octaves in 1..=3 {
        let layout = KeyboardLayout::new(octaves);
        for s in all_selections() {
            let positions = finger_positions(Some(s), &layout);
            assert!(positions.len() <= 8);
            assert!(positions.iter().all(|p| p.index < layout.len()));
            assert!(
                positions.windows(2).all(|w| w[0].index < w[1].index),
                "{} {} on {} octaves",
                s,
                s.hand,
                octaves
            );
        }
    }
}

#[test]
fn test_full_scale_fits_on_two_and_three_octaves() {
    for octaves in 2..=3 {
        let layout = KeyboardLayout::new(octaves);
        for s in all_selections() {
            let positions = finger_positions(Some(s), &layout);
            assert_eq!(positions.len(), 8, "{} {} on {} octaves", s, s.hand, octaves);
            let first = layout.key(positions[0].index);
            assert_eq!(first, Some(s.key.pitch_class()));
        }
    }
}

#[test]
fn test_right_hand_clamp_on_two_octaves() {
    let layout = KeyboardLayout::new(2);
    for key in Key::ALL {
        let s = Selection::new(key, Mode::Ionian, Hand::Right);
        let positions = finger_positions(Some(s), &layout);
        // Naive start is tonic + 12, always too high for 24 keys.
        assert_eq!(positions[0].index, key.pitch_class().index());
    }
}

#[test]
fn test_fingers_match_sequence_and_note_names() {
    let layout = KeyboardLayout::new(3);
    let s = Selection::new(Key::AFlat, Mode::Lydian, Hand::Right);
    let positions = finger_positions(Some(s), &layout);
    let fingers = finger_sequence(s.key, s.mode, s.hand).fingers();
    let names = scale_note_names(s.key, s.mode);
    assert_eq!(names, vec!["A♭", "B♭", "C", "D", "E♭", "F", "G", "A♭"]);
    for (i, p) in positions.iter().enumerate() {
        assert_eq!(p.finger, fingers[i]);
        assert_eq!(layout.key(p.index).map(|k| k.display_name()), Some(names[i]));
        // A♭ Lydian lives in E♭ major.
        assert_eq!(p.is_parent_tonic, names[i] == "E♭");
    }
}

#[test]
fn test_no_selection_renders_nothing() {
    for octaves in 0..=3 {
        assert!(finger_positions(None, &KeyboardLayout::new(octaves)).is_empty());
    }
}

#[test]
fn test_drill_session_from_settings() {
    let settings = Settings::from_yaml(
        r#"
keys: [D]
modes: [Mixolydian]
hands: [Left]
viewport-width: 600
"#,
    )
    .unwrap();
    let mut state = TrainerState::new(&settings);
    let mut rng = Pcg32::seed_from_u64(11);
    state.select_random(&mut rng);

    let text = render::to_text(state.view());
    assert!(text.starts_with("D Mixolydian (Left hand)\n"));
    assert!(text.contains("Parent:  G Ionian"));
    assert_eq!(state.view().layout.len(), 24);

    let json = render::to_json(state.view()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["selection"]["mode"], "Mixolydian");
    assert_eq!(value["positions"][0]["index"], 2);
}
