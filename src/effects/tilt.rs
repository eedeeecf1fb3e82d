// src/effects/tilt.rs
//
// Pointer-driven 3D tilt for the card wrapping the input.

use nannou::prelude::*;

use crate::config::TiltConfig;

const HOVER_SCALE: f32 = 1.02;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTransform {
    pub rotate_x: f32, // degrees
    pub rotate_y: f32, // degrees
    pub translation: Vec2,
    pub scale: f32,
}

impl Default for TiltTransform {
    fn default() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            translation: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl TiltTransform {
    /// Translation in nannou's y-up world space.
    pub fn world_translation(&self) -> Vec2 {
        vec2(self.translation.x, -self.translation.y)
    }

    /// Rotations about the x and y axes, in radians, as applied when drawing.
    pub fn world_radians(&self) -> (f32, f32) {
        (deg_to_rad(-self.rotate_x), deg_to_rad(self.rotate_y))
    }

    /// Maps a window point back into the untilted card's space. Drawing
    /// applies scale, then the y and x rotations, then the translation,
    /// under an orthographic projection.
    pub fn unproject(&self, point: Point2) -> Point2 {
        let (rx, ry) = self.world_radians();
        let q = point - self.world_translation();
        let x = q.x / ry.cos();
        let y = (q.y - x * ry.sin() * rx.sin()) / rx.cos();
        pt2(x, y) / self.scale
    }
}

#[derive(Debug, Clone)]
pub struct TiltCard {
    rotate_depth: f32,
    translate_depth: f32,
    hovered: bool,
    transform: TiltTransform,
}

impl TiltCard {
    pub fn new(config: &TiltConfig) -> Self {
        Self {
            rotate_depth: config.rotate_depth,
            translate_depth: config.translate_depth,
            hovered: false,
            transform: TiltTransform::default(),
        }
    }

    /// `offset` is the pointer position relative to the card centre, in
    /// screen orientation (y grows downward). `size` is the card's size.
    pub fn pointer_moved(&mut self, offset: Vec2, size: Vec2) {
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        self.hovered = true;
        let nx = offset.x / size.x;
        let ny = offset.y / size.y;
        self.transform = TiltTransform {
            rotate_x: ny * self.rotate_depth,
            rotate_y: -nx * self.rotate_depth,
            translation: vec2(nx, ny) * self.translate_depth,
            scale: HOVER_SCALE,
        };
    }

    pub fn pointer_left(&mut self) {
        self.hovered = false;
        self.transform = TiltTransform::default();
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn transform(&self) -> TiltTransform {
        self.transform
    }
}
