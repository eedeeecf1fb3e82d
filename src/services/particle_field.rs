// src/services/particle_field.rs
//
// Turns the input's text into a particle list: rasterize line by line
// at twice the font size, then sample every touched pixel.

use rayon::prelude::*;
use tracing::trace;

use super::{Bitmap, TextRasterizer};
use crate::models::{FontSpec, Particle, Rgba8};

const ORIGIN_X: f32 = 16.0;
const FIRST_BASELINE: f32 = 40.0;
const FONT_SCALE: f32 = 2.0;
const LINE_SPACING: f32 = 2.2; // in units of the un-scaled font size

pub struct ParticleFieldBuilder {
    rasterizer: Box<dyn TextRasterizer>,
}

impl ParticleFieldBuilder {
    pub fn new(rasterizer: Box<dyn TextRasterizer>) -> Self {
        Self { rasterizer }
    }

    /// Redraws `text` into `bitmap` and returns one particle per lit pixel,
    /// in row-major order.
    pub fn build(&self, bitmap: &mut Bitmap, text: &str, font: &FontSpec) -> Vec<Particle> {
        bitmap.clear();
        if text.is_empty() {
            return Vec::new();
        }

        for (index, line) in text.split('\n').enumerate() {
            let baseline = FIRST_BASELINE + index as f32 * font.size_px * LINE_SPACING;
            self.rasterizer.fill_line(
                bitmap,
                line,
                ORIGIN_X,
                baseline,
                font.size_px * FONT_SCALE,
                Rgba8::WHITE,
            );
        }

        let particles = sample(bitmap);
        trace!(count = particles.len(), "built particle field");
        particles
    }
}

fn sample(bitmap: &Bitmap) -> Vec<Particle> {
    let row_len = bitmap.width() as usize * 4;
    if row_len == 0 {
        return Vec::new();
    }
    bitmap
        .as_raw()
        .par_chunks(row_len)
        .enumerate()
        .flat_map_iter(|(y, row)| {
            row.chunks_exact(4).enumerate().filter_map(move |(x, px)| {
                let color = Rgba8([px[0], px[1], px[2], px[3]]);
                (!color.is_black()).then(|| Particle::new(x as f32, y as f32, color))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::rasterizer::{BlockRasterizer, GlyphRasterizer};

    fn builder() -> ParticleFieldBuilder {
        ParticleFieldBuilder::new(Box::new(BlockRasterizer))
    }

    #[test]
    fn test_empty_text_has_no_particles() {
        let mut bitmap = Bitmap::square(800);
        let particles = builder().build(&mut bitmap, "", &FontSpec::default());
        assert!(particles.is_empty());
    }

    #[test]
    fn test_whitespace_renders_as_background() {
        let mut bitmap = Bitmap::square(800);
        let particles = builder().build(&mut bitmap, "  \n ", &FontSpec::default());
        assert!(particles.is_empty());
    }

    #[test]
    fn test_particles_match_lit_pixels() {
        let mut bitmap = Bitmap::square(800);
        let font = FontSpec::new(10.0, "test");
        // font size doubles to 20: blocks are 9 wide, 10 tall
        let particles = builder().build(&mut bitmap, "ab", &font);
        assert_eq!(particles.len(), 2 * 9 * 10);
        assert!(particles.iter().all(|p| p.radius == 1.0));
        assert!(particles.iter().all(|p| p.color == Rgba8::WHITE));

        let min_x = particles.iter().map(|p| p.x).fold(f32::MAX, f32::min);
        let max_y = particles.iter().map(|p| p.y).fold(0.0, f32::max);
        assert_eq!(min_x, ORIGIN_X);
        assert_eq!(max_y, FIRST_BASELINE - 1.0);
    }

    #[test]
    fn test_row_major_order() {
        let mut bitmap = Bitmap::square(800);
        let particles = builder().build(&mut bitmap, "xy", &FontSpec::new(10.0, "test"));
        assert!(particles
            .windows(2)
            .all(|w| (w[0].y, w[0].x) < (w[1].y, w[1].x)));
    }

    #[test]
    fn test_lines_are_spaced_by_font_size() {
        let mut bitmap = Bitmap::square(800);
        let font = FontSpec::new(10.0, "test");
        let particles = builder().build(&mut bitmap, "a\nb", &font);
        let second_line_bottom = FIRST_BASELINE + 10.0 * LINE_SPACING - 1.0;
        assert!(particles.iter().any(|p| p.y == second_line_bottom));
        assert_eq!(particles.len(), 2 * 9 * 10);
    }

    #[test]
    fn test_rebuild_replaces_previous_field() {
        let mut bitmap = Bitmap::square(800);
        let font = FontSpec::new(10.0, "test");
        let b = builder();
        let long = b.build(&mut bitmap, "abcd", &font);
        let short = b.build(&mut bitmap, "a", &font);
        assert_eq!(long.len(), 4 * short.len());
    }

    #[test]
    fn test_bundled_font_field() {
        let builder = ParticleFieldBuilder::new(Box::new(GlyphRasterizer::bundled()));
        let mut bitmap = Bitmap::square(800);
        let particles = builder.build(&mut bitmap, "hi\nthere", &FontSpec::new(16.0, "Noto Sans"));

        assert!(!particles.is_empty());
        assert!(particles.iter().all(|p| p.radius == 1.0));
        assert!(particles.iter().all(|p| p.x >= ORIGIN_X));
        assert!(particles.iter().all(|p| !p.color.is_black()));
        // the second line sits below the first baseline
        let max_y = particles.iter().map(|p| p.y).fold(0.0, f32::max);
        assert!(max_y > FIRST_BASELINE);
    }
}
