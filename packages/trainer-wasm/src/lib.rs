use modal_trainer::{
    finger_positions, finger_sequence, relative_key, scale_notes, Hand, Key, KeyboardLayout,
    Mode, Selection, Settings, TrainerError, TrainerState,
};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct BindingError {
    message: String,
    kind: &'static str,
}

fn to_binding_error(e: TrainerError) -> BindingError {
    let kind = match e {
        TrainerError::UnknownKey(_) => "key",
        TrainerError::UnknownMode(_) => "mode",
        TrainerError::UnknownHand(_) => "hand",
        TrainerError::InvalidColor(_) => "color",
        TrainerError::SettingsError(_) | TrainerError::Io { .. } => "settings",
        TrainerError::SerializeError(_) => "serialize",
    };
    BindingError {
        message: e.to_string(),
        kind,
    }
}

fn to_js_error(e: TrainerError) -> JsValue {
    let error = to_binding_error(e);
    JsValue::from_str(
        &serde_json::to_string(&error).unwrap_or_else(|_| error.message.clone()),
    )
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| to_js_error(TrainerError::SerializeError(e.to_string())))
}

/// Parent major key of `tonic`, `semitones_down` below it
#[wasm_bindgen(js_name = relativeKey)]
pub fn relative_key_js(tonic: &str, semitones_down: u8) -> Result<String, JsValue> {
    let tonic: Key = tonic.parse().map_err(to_js_error)?;
    Ok(relative_key(tonic, semitones_down).label().to_string())
}

/// Scale note names as a JSON array
#[wasm_bindgen(js_name = scaleNotes)]
pub fn scale_notes_js(tonic: &str, mode: &str) -> Result<String, JsValue> {
    let tonic: Key = tonic.parse().map_err(to_js_error)?;
    let mode: Mode = mode.parse().map_err(to_js_error)?;
    to_json(&scale_notes(tonic, mode))
}

/// Eight-digit finger string, e.g. "21432132"
#[wasm_bindgen(js_name = fingerSequence)]
pub fn finger_sequence_js(tonic: &str, mode: &str, hand: &str) -> Result<String, JsValue> {
    let tonic: Key = tonic.parse().map_err(to_js_error)?;
    let mode: Mode = mode.parse().map_err(to_js_error)?;
    let hand: Hand = hand.parse().map_err(to_js_error)?;
    Ok(finger_sequence(tonic, mode, hand).to_string())
}

/// Finger positions as a JSON array for a keyboard of `octaves` octaves.
///
/// Any missing part of the selection yields an empty array. Two or more
/// octaves always give eight positions. A single octave can lose positions
/// from the front as well as the back, since the clamped start may fall left
/// of the first key.
#[wasm_bindgen(js_name = fingerPositions)]
pub fn finger_positions_js(
    key: Option<String>,
    mode: Option<String>,
    hand: Option<String>,
    octaves: usize,
) -> Result<String, JsValue> {
    let selection = match (key, mode, hand) {
        (Some(key), Some(mode), Some(hand)) => Some(Selection::new(
            key.parse().map_err(to_js_error)?,
            mode.parse().map_err(to_js_error)?,
            hand.parse().map_err(to_js_error)?,
        )),
        _ => None,
    };
    to_json(&finger_positions(selection, &KeyboardLayout::new(octaves)))
}

/// A drill session driven from JavaScript
#[wasm_bindgen]
pub struct Trainer {
    state: TrainerState,
    rng: Pcg32,
}

#[wasm_bindgen]
impl Trainer {
    /// Create a session from YAML settings (may be empty) with its first drill drawn
    #[wasm_bindgen(constructor)]
    pub fn new(settings_yaml: &str, seed: u64) -> Result<Trainer, JsValue> {
        let settings = Settings::from_yaml(settings_yaml).map_err(to_js_error)?;
        let seed = settings.seed.unwrap_or(seed);
        let mut trainer = Trainer {
            state: TrainerState::new(&settings),
            rng: Pcg32::seed_from_u64(seed),
        };
        trainer.state.select_random(&mut trainer.rng);
        Ok(trainer)
    }

    /// Draw the next drill and return the new view as JSON
    #[wasm_bindgen(js_name = nextKey)]
    pub fn next_key(&mut self) -> Result<String, JsValue> {
        self.state.select_random(&mut self.rng);
        self.view()
    }

    #[wasm_bindgen(js_name = setKeyAllowed)]
    pub fn set_key_allowed(&mut self, key: &str, allowed: bool) -> Result<(), JsValue> {
        let key: Key = key.parse().map_err(to_js_error)?;
        self.state.set_key_allowed(key, allowed);
        Ok(())
    }

    #[wasm_bindgen(js_name = setModeAllowed)]
    pub fn set_mode_allowed(&mut self, mode: &str, allowed: bool) -> Result<(), JsValue> {
        let mode: Mode = mode.parse().map_err(to_js_error)?;
        self.state.set_mode_allowed(mode, allowed);
        Ok(())
    }

    #[wasm_bindgen(js_name = setHandAllowed)]
    pub fn set_hand_allowed(&mut self, hand: &str, allowed: bool) -> Result<(), JsValue> {
        let hand: Hand = hand.parse().map_err(to_js_error)?;
        self.state.set_hand_allowed(hand, allowed);
        Ok(())
    }

    /// Resize and return the recomputed view as JSON
    pub fn resize(&mut self, width: f64) -> Result<String, JsValue> {
        self.state.set_viewport_width(width);
        self.view()
    }

    pub fn view(&self) -> Result<String, JsValue> {
        to_json(self.state.view())
    }
}
