//! # Keyboard Layout and Geometry
//!
//! The on-screen piano is a run of whole octaves starting on C. Narrow
//! viewports get two octaves, wider ones three.
//!
//! Geometry follows the white keys: the piano fills 95% of the viewport up to
//! 40 px per white key, and every other size is a fixed ratio of the white key
//! width. Black keys straddle the boundary after the white key to their left.
//!
//! ```text
//!  |  |D♭| |E♭|  |  |G♭| |A♭| |B♭|  |
//!  |  |__| |__|  |  |__| |__| |__|  |
//!  | C  | D  | E  | F  | G  | A  | B  |
//! ```

use serde::Serialize;

use crate::pitch::PitchClass;

/// Viewports narrower than this get the compact two-octave piano.
pub const COMPACT_VIEWPORT_WIDTH: f64 = 768.0;

pub const COMPACT_OCTAVES: usize = 2;
pub const FULL_OCTAVES: usize = 3;

/// Largest white key width in pixels.
pub const DEFAULT_WHITE_KEY_WIDTH: f64 = 40.0;

/// Share of the viewport the piano may take.
pub const VIEWPORT_FILL: f64 = 0.95;

pub const BLACK_WIDTH_RATIO: f64 = 0.6;
pub const WHITE_HEIGHT_RATIO: f64 = 4.0;
pub const BLACK_HEIGHT_RATIO: f64 = 2.4;

const WHITE_KEYS_PER_OCTAVE: usize = 7;

/// Ordered pitch classes of every key on the rendered piano.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyboardLayout {
    octaves: usize,
    keys: Vec<PitchClass>,
}

impl KeyboardLayout {
    /// A piano of `octaves` octaves, each C through B. Zero octaves is an empty piano.
    pub fn new(octaves: usize) -> Self {
        let keys = (0..octaves).flat_map(|_| PitchClass::all()).collect();
        Self { octaves, keys }
    }

    /// Octave count for a viewport `width` pixels wide.
    pub fn octaves_for_viewport(width: f64) -> usize {
        if width < COMPACT_VIEWPORT_WIDTH {
            COMPACT_OCTAVES
        } else {
            FULL_OCTAVES
        }
    }

    pub fn for_viewport(width: f64) -> Self {
        Self::new(Self::octaves_for_viewport(width))
    }

    pub fn octaves(&self) -> usize {
        self.octaves
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn key(&self, index: usize) -> Option<PitchClass> {
        self.keys.get(index).copied()
    }

    pub fn keys(&self) -> &[PitchClass] {
        &self.keys
    }

    pub fn white_key_count(&self) -> usize {
        self.octaves * WHITE_KEYS_PER_OCTAVE
    }

    /// Index of the first key sounding `pitch`, if the piano has one.
    pub fn first_index_of(&self, pitch: PitchClass) -> Option<usize> {
        self.keys.iter().position(|&k| k == pitch)
    }
}

/// Pixel sizes of the piano keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardGeometry {
    pub white_width: f64,
    pub black_width: f64,
    pub white_height: f64,
    pub black_height: f64,
    /// How far a black key is pulled left of the boundary it sits on.
    pub black_offset: f64,
}

impl KeyboardGeometry {
    pub fn for_viewport(width: f64, layout: &KeyboardLayout) -> Self {
        let white_keys = layout.white_key_count().max(1) as f64;
        let target = (width * VIEWPORT_FILL).min(white_keys * DEFAULT_WHITE_KEY_WIDTH);
        let white_width = target / white_keys;
        let black_width = white_width * BLACK_WIDTH_RATIO;
        Self {
            white_width,
            black_width,
            white_height: white_width * WHITE_HEIGHT_RATIO,
            black_height: white_width * BLACK_HEIGHT_RATIO,
            black_offset: black_width / 2.0,
        }
    }

    pub fn total_width(&self, layout: &KeyboardLayout) -> f64 {
        self.white_width * layout.white_key_count() as f64
    }

    /// Rectangles for each key, in keyboard order.
    pub fn key_rects(&self, layout: &KeyboardLayout) -> Vec<KeyRect> {
        let mut left = 0.0;
        layout
            .keys()
            .iter()
            .enumerate()
            .map(|(index, &pitch)| {
                let black = pitch.is_black();
                let rect = if black {
                    KeyRect {
                        index,
                        pitch,
                        black,
                        left: left - self.black_offset,
                        width: self.black_width,
                        height: self.black_height,
                    }
                } else {
                    KeyRect {
                        index,
                        pitch,
                        black,
                        left,
                        width: self.white_width,
                        height: self.white_height,
                    }
                };
                if !black {
                    left += self.white_width;
                }
                rect
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyRect {
    pub index: usize,
    pub pitch: PitchClass,
    pub black: bool,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_viewport_picks_octaves() {
        assert_eq!(KeyboardLayout::for_viewport(500.0).len(), 24);
        assert_eq!(KeyboardLayout::for_viewport(767.9).octaves(), 2);
        assert_eq!(KeyboardLayout::for_viewport(768.0).len(), 36);
    }

    #[test]
    fn test_layout_repeats_octave() {
        let layout = KeyboardLayout::new(2);
        assert_eq!(layout.key(0), Some(PitchClass::C));
        assert_eq!(layout.key(12), Some(PitchClass::C));
        assert_eq!(layout.key(23), Some(PitchClass::new(11)));
        assert_eq!(layout.key(24), None);
        assert_eq!(layout.white_key_count(), 14);
        assert_eq!(layout.first_index_of(PitchClass::new(9)), Some(9));
    }

    #[test]
    fn test_empty_layout() {
        let layout = KeyboardLayout::new(0);
        assert!(layout.is_empty());
        assert_eq!(layout.first_index_of(PitchClass::C), None);
    }

    #[test]
    fn test_geometry_caps_at_default_width() {
        let layout = KeyboardLayout::for_viewport(2000.0);
        let geometry = KeyboardGeometry::for_viewport(2000.0, &layout);
        assert_eq!(geometry.white_width, 40.0);
        assert_eq!(geometry.white_height, 160.0);
        assert_eq!(geometry.black_width, 24.0);
        assert_eq!(geometry.black_offset, 12.0);
        assert_eq!(geometry.total_width(&layout), 840.0);
    }

    #[test]
    fn test_geometry_shrinks_to_viewport() {
        let layout = KeyboardLayout::for_viewport(400.0);
        let geometry = KeyboardGeometry::for_viewport(400.0, &layout);
        assert!((geometry.total_width(&layout) - 380.0).abs() < 1e-9);
    }

    #[test]
    fn test_key_rects_place_black_keys_on_boundaries() {
        let layout = KeyboardLayout::new(1);
        let geometry = KeyboardGeometry::for_viewport(2000.0, &layout);
        let rects = geometry.key_rects(&layout);
        assert_eq!(rects.len(), 12);
        assert_eq!(rects[0].left, 0.0);
        assert!(!rects[0].black);
        // C# straddles the C/D boundary.
        assert!(rects[1].black);
        assert_eq!(rects[1].left, 40.0 - 12.0);
        assert_eq!(rects[2].left, 40.0);
        // F follows E directly.
        assert_eq!(rects[5].left, 120.0);
        assert_eq!(rects[11].left, 240.0);
    }
}
