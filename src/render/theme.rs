// src/render/theme.rs
//
// Light and dark palettes for the input.

use nannou::color::{rgb8, rgba8, Rgb8, Rgba8 as NannouRgba8};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    pub fn background(&self) -> Rgb8 {
        if self.dark {
            rgb8(24, 24, 27)
        } else {
            rgb8(243, 244, 246)
        }
    }

    pub fn surface(&self, filled: bool) -> Rgb8 {
        match (self.dark, filled) {
            (true, false) => rgb8(39, 39, 42),
            (true, true) => rgb8(63, 63, 70),
            (false, false) => rgb8(255, 255, 255),
            (false, true) => rgb8(249, 250, 251),
        }
    }

    pub fn border(&self) -> Rgb8 {
        if self.dark {
            rgb8(75, 85, 99)
        } else {
            rgb8(229, 231, 235)
        }
    }

    pub fn text(&self, disabled: bool) -> NannouRgba8 {
        let alpha = if disabled { 153 } else { 255 };
        if self.dark {
            rgba8(255, 255, 255, alpha)
        } else {
            rgba8(0, 0, 0, alpha)
        }
    }

    pub fn placeholder(&self, opacity: f32) -> NannouRgba8 {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
        if self.dark {
            rgba8(113, 113, 122, alpha)
        } else {
            rgba8(115, 115, 115, alpha)
        }
    }

    pub fn button(&self, enabled: bool) -> Rgb8 {
        match (enabled, self.dark) {
            (true, _) => rgb8(37, 99, 235),
            (false, true) => rgb8(39, 39, 42),
            (false, false) => rgb8(243, 244, 246),
        }
    }

    /// The overlay samples white glyphs; light mode shows them inverted.
    pub fn invert_overlay(&self) -> bool {
        !self.dark
    }
}
