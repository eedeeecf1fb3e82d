// src/services/rasterizer.rs
//
// Draws a single line of text into the offscreen bitmap.

use nannou::text::{self, rt::point, Scale};
use std::path::Path;
use tracing::debug;

use super::Bitmap;
use crate::error::{Error, Result};
use crate::models::Rgba8;

pub trait TextRasterizer {
    /// Fill `line` with its left edge at `x` and its baseline at `baseline`.
    fn fill_line(
        &self,
        bitmap: &mut Bitmap,
        line: &str,
        x: f32,
        baseline: f32,
        size_px: f32,
        color: Rgba8,
    );
}

/// Glyph coverage rasterizer backed by the rusttype font nannou ships with.
pub struct GlyphRasterizer {
    font: text::Font,
}

impl GlyphRasterizer {
    pub fn new(font: text::Font) -> Self {
        Self { font }
    }

    /// Nannou's bundled Noto Sans.
    pub fn bundled() -> Self {
        Self::new(text::font::default_notosans())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let font = text::font::from_file(path).map_err(|e| Error::Font {
            path: path.to_path_buf(),
            reason: format!("{e:?}"),
        })?;
        debug!(path = %path.display(), "loaded font");
        Ok(Self::new(font))
    }

    pub fn from_optional_file(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::bundled()),
        }
    }
}

impl TextRasterizer for GlyphRasterizer {
    fn fill_line(
        &self,
        bitmap: &mut Bitmap,
        line: &str,
        x: f32,
        baseline: f32,
        size_px: f32,
        color: Rgba8,
    ) {
        let scale = Scale::uniform(size_px);
        for glyph in self.font.layout(line, scale, point(x, baseline)) {
            let Some(bounds) = glyph.pixel_bounding_box() else {
                continue; // whitespace
            };
            glyph.draw(|gx, gy, coverage| {
                bitmap.blend_pixel(
                    bounds.min.x + gx as i32,
                    bounds.min.y + gy as i32,
                    color,
                    coverage,
                );
            });
        }
    }
}

/// Deterministic stand-in for glyph rendering: every non-whitespace
/// character becomes a solid block sitting on the baseline.
#[cfg(test)]
pub(crate) struct BlockRasterizer;

#[cfg(test)]
impl BlockRasterizer {
    pub(crate) const ADVANCE: f32 = 0.5;
    pub(crate) const HEIGHT: f32 = 0.5;
}

#[cfg(test)]
impl TextRasterizer for BlockRasterizer {
    fn fill_line(
        &self,
        bitmap: &mut Bitmap,
        line: &str,
        x: f32,
        baseline: f32,
        size_px: f32,
        color: Rgba8,
    ) {
        let advance = (size_px * Self::ADVANCE).round() as i32;
        let height = (size_px * Self::HEIGHT).round() as i32;
        let left = x.round() as i32;
        let bottom = baseline.round() as i32;
        for (i, ch) in line.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let x0 = left + i as i32 * advance;
            // leave a one pixel gap between blocks
            for py in bottom - height..bottom {
                for px in x0..x0 + advance - 1 {
                    bitmap.blend_pixel(px, py, color, 1.0);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_pixels(bitmap: &Bitmap) -> usize {
        bitmap
            .as_raw()
            .chunks_exact(4)
            .filter(|px| px[0] != 0 || px[1] != 0 || px[2] != 0)
            .count()
    }

    #[test]
    fn test_bundled_font_draws_visible_glyphs() {
        let rasterizer = GlyphRasterizer::bundled();
        let mut bitmap = Bitmap::square(200);
        rasterizer.fill_line(&mut bitmap, "Hi", 16.0, 40.0, 32.0, Rgba8::WHITE);
        assert!(lit_pixels(&bitmap) > 0);
    }

    #[test]
    fn test_whitespace_draws_nothing() {
        let rasterizer = GlyphRasterizer::bundled();
        let mut bitmap = Bitmap::square(200);
        rasterizer.fill_line(&mut bitmap, "   ", 16.0, 40.0, 32.0, Rgba8::WHITE);
        assert_eq!(lit_pixels(&bitmap), 0);
    }

    #[test]
    fn test_missing_font_file() {
        let result = GlyphRasterizer::from_file("/no/such/font.ttf");
        assert!(matches!(result, Err(Error::Font { .. })));
    }

    #[test]
    fn test_block_rasterizer_geometry() {
        let mut bitmap = Bitmap::square(100);
        BlockRasterizer.fill_line(&mut bitmap, "a b", 10.0, 20.0, 10.0, Rgba8::WHITE);
        // two blocks of 4x5 pixels, the space is skipped
        assert_eq!(lit_pixels(&bitmap), 2 * 4 * 5);
        assert_eq!(bitmap.pixel(10, 15), Some(Rgba8::WHITE));
        assert_eq!(bitmap.pixel(10, 20), Some(Rgba8::TRANSPARENT));
    }
}
