// src/models/particle.rs
//
// A single pixel sample of rasterized text, dissolved by the vanish animation.

/// Unpremultiplied 8-bit RGBA colour as read back from the offscreen canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba8(pub [u8; 4]);

impl Rgba8 {
    pub const TRANSPARENT: Rgba8 = Rgba8([0, 0, 0, 0]);
    pub const WHITE: Rgba8 = Rgba8([255, 255, 255, 255]);

    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    pub fn red(&self) -> u8 {
        self.0[0]
    }
    pub fn green(&self) -> u8 {
        self.0[1]
    }
    pub fn blue(&self) -> u8 {
        self.0[2]
    }
    pub fn alpha(&self) -> u8 {
        self.0[3]
    }

    /// True for pixels the glyph renderer never touched.
    pub fn is_black(&self) -> bool {
        self.red() == 0 && self.green() == 0 && self.blue() == 0
    }

    pub fn inverted(&self) -> Self {
        Self([255 - self.red(), 255 - self.green(), 255 - self.blue(), self.alpha()])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgba8,
}

impl Particle {
    pub fn new(x: f32, y: f32, color: Rgba8) -> Self {
        Self {
            x,
            y,
            radius: 1.0,
            color,
        }
    }
}
