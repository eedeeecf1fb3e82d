// src/services/bitmap.rs
//
// Offscreen RGBA canvas the text is rasterized into and the vanish
// animation redraws every frame. Owned by a single widget.

use crate::models::Rgba8;

#[derive(Debug, Clone)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Clears every column at or right of `x`.
    pub fn clear_from_x(&mut self, x: f32) {
        let start = x.max(0.0).floor() as usize;
        let width = self.width as usize;
        if start >= width {
            return;
        }
        for row in self.data.chunks_exact_mut(width * 4) {
            row[start * 4..].fill(0);
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        let i = self.index(x as i64, y as i64)?;
        let mut px = [0; 4];
        px.copy_from_slice(&self.data[i..i + 4]);
        Some(Rgba8(px))
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    /// Source-over composite of `color` at `coverage` onto one pixel.
    /// Out-of-bounds coordinates are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba8, coverage: f32) {
        let Some(i) = self.index(x as i64, y as i64) else {
            return;
        };
        let src_a = color.alpha() as f32 / 255.0 * coverage.clamp(0.0, 1.0);
        if src_a <= 0.0 {
            return;
        }
        let dst = &mut self.data[i..i + 4];
        let dst_a = dst[3] as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        for c in 0..3 {
            let src_c = color.0[c] as f32;
            let dst_c = dst[c] as f32;
            let out_c = (src_c * src_a + dst_c * dst_a * (1.0 - src_a)) / out_a;
            dst[c] = out_c.round().clamp(0.0, 255.0) as u8;
        }
        dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    /// Fills an axis-aligned square with its top-left corner at (x, y).
    /// Sides below one pixel still touch one pixel, at reduced coverage.
    pub fn fill_square(&mut self, x: f32, y: f32, side: f32, color: Rgba8) {
        if side <= 0.0 {
            return;
        }
        let x0 = x.floor() as i32;
        let y0 = y.floor() as i32;
        let span = side.ceil().max(1.0) as i32;
        let coverage = side.min(1.0);
        for dy in 0..span {
            for dx in 0..span {
                self.blend_pixel(x0 + dx, y0 + dy, color, coverage);
            }
        }
    }
}
