//! # Trainer Session
//!
//! The state a presentation layer owns between drills, and the view derived
//! from it.
//!
//! `TrainerState` holds the allowed key, mode and hand sets, the viewport
//! width and the current selection. Every mutator finishes with one call to
//! `recompute`, which rebuilds the `TrainerView` from scratch and hands it to
//! each registered observer. Nothing in the view is ever patched in place.
//!
//! ## Example
//! ```rust
//! use modal_trainer::{Settings, TrainerState};
//! use rand::SeedableRng;
//! use rand_pcg::Pcg32;
//!
//! let mut state = TrainerState::new(&Settings::default());
//! assert!(state.view().positions.is_empty());
//!
//! let mut rng = Pcg32::seed_from_u64(1);
//! state.select_random(&mut rng);
//! assert_eq!(state.view().positions.len(), 8);
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::config::Settings;
use crate::fingering::{finger_sequence, parent_key, scale_notes, FingerSequence};
use crate::keyboard::{KeyRect, KeyboardGeometry, KeyboardLayout};
use crate::palette::{background_gradient, key_checkboxes, mode_checkboxes, Checkbox};
use crate::pitch::PitchClass;
use crate::positions::{finger_positions, FingerPosition, Selection};
use crate::theory::{Hand, Key, Mode};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerView {
    pub selection: Option<Selection>,
    /// "D Dorian", or empty before the first drill.
    pub title: String,
    pub scale_notes: Vec<PitchClass>,
    pub fingers: Option<FingerSequence>,
    pub parent_key: Option<Key>,
    pub layout: KeyboardLayout,
    pub geometry: KeyboardGeometry,
    pub keyboard_width: f64,
    pub key_rects: Vec<KeyRect>,
    pub positions: Vec<FingerPosition>,
    pub background: Option<String>,
    pub key_checkboxes: Vec<Checkbox>,
    pub mode_checkboxes: Vec<Checkbox>,
}

impl TrainerView {
    /// The view with every key and mode checked.
    pub fn build(selection: Option<Selection>, viewport_width: f64) -> Self {
        Self::build_filtered(selection, viewport_width, &Key::ALL, &Mode::ALL)
    }

    pub fn build_filtered(
        selection: Option<Selection>,
        viewport_width: f64,
        allowed_keys: &[Key],
        allowed_modes: &[Mode],
    ) -> Self {
        let layout = KeyboardLayout::for_viewport(viewport_width);
        let geometry = KeyboardGeometry::for_viewport(viewport_width, &layout);
        let mut view = TrainerView {
            selection,
            title: String::new(),
            scale_notes: Vec::new(),
            fingers: None,
            parent_key: None,
            keyboard_width: geometry.total_width(&layout),
            key_rects: geometry.key_rects(&layout),
            positions: finger_positions(selection, &layout),
            layout,
            geometry,
            background: None,
            key_checkboxes: key_checkboxes(allowed_keys),
            mode_checkboxes: mode_checkboxes(allowed_modes),
        };
        if let Some(s) = selection {
            view.title = s.to_string();
            view.scale_notes = scale_notes(s.key, s.mode).to_vec();
            view.fingers = Some(finger_sequence(s.key, s.mode, s.hand));
            view.parent_key = Some(parent_key(s.key, s.mode));
            view.background = Some(background_gradient(s.mode, s.key));
        }
        view
    }
}

type Observer = Box<dyn FnMut(&TrainerView)>;

pub struct TrainerState {
    allowed_keys: Vec<Key>,
    allowed_modes: Vec<Mode>,
    allowed_hands: Vec<Hand>,
    viewport_width: f64,
    selection: Option<Selection>,
    view: TrainerView,
    observers: Vec<Observer>,
}

impl TrainerState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            allowed_keys: settings.keys.clone(),
            allowed_modes: settings.modes.clone(),
            allowed_hands: settings.hands.clone(),
            viewport_width: settings.viewport_width,
            selection: None,
            view: TrainerView::build_filtered(
                None,
                settings.viewport_width,
                &settings.keys,
                &settings.modes,
            ),
            observers: Vec::new(),
        }
    }

    /// Register a callback run after every recompute.
    pub fn observe(&mut self, observer: impl FnMut(&TrainerView) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn view(&self) -> &TrainerView {
        &self.view
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn allowed_keys(&self) -> &[Key] {
        &self.allowed_keys
    }

    pub fn allowed_modes(&self) -> &[Mode] {
        &self.allowed_modes
    }

    pub fn allowed_hands(&self) -> &[Hand] {
        &self.allowed_hands
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Check or uncheck a key. Order of the remaining keys is preserved.
    pub fn set_key_allowed(&mut self, key: Key, allowed: bool) {
        toggle(&mut self.allowed_keys, key, allowed);
        self.recompute();
    }

    pub fn set_mode_allowed(&mut self, mode: Mode, allowed: bool) {
        toggle(&mut self.allowed_modes, mode, allowed);
        self.recompute();
    }

    pub fn set_hand_allowed(&mut self, hand: Hand, allowed: bool) {
        toggle(&mut self.allowed_hands, hand, allowed);
        self.recompute();
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
        self.recompute();
    }

    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
        self.recompute();
    }

    /// Draw a key, mode and hand uniformly from the allowed sets.
    ///
    /// An empty filter draws from the full set instead.
    pub fn select_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Selection {
        let selection = Selection {
            key: pick(&self.allowed_keys, &Key::ALL, rng),
            mode: pick(&self.allowed_modes, &Mode::ALL, rng),
            hand: pick(&self.allowed_hands, &Hand::ALL, rng),
        };
        self.set_selection(Some(selection));
        selection
    }

    fn recompute(&mut self) {
        self.view = TrainerView::build_filtered(
            self.selection,
            self.viewport_width,
            &self.allowed_keys,
            &self.allowed_modes,
        );
        for observer in &mut self.observers {
            observer(&self.view);
        }
    }
}

fn toggle<T: PartialEq + Copy>(items: &mut Vec<T>, item: T, present: bool) {
    if present {
        if !items.contains(&item) {
            items.push(item);
        }
    } else {
        items.retain(|&i| i != item);
    }
}

fn pick<T: Copy, R: Rng + ?Sized>(allowed: &[T], all: &[T], rng: &mut R) -> T {
    let pool = if allowed.is_empty() { all } else { allowed };
    // `all` is one of the non-empty ALL tables, so the pool is never empty.
    *pool.choose(rng).unwrap_or(&all[0])
}
