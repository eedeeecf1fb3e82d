// src/render/overlay.rs
//
// Converts the offscreen canvas into an image nannou can upload.

use nannou::image::{DynamicImage, RgbaImage};

use crate::models::Rgba8;
use crate::services::Bitmap;

pub fn overlay_image(bitmap: &Bitmap, invert: bool) -> Option<DynamicImage> {
    let mut data = bitmap.as_raw().to_vec();
    if invert {
        for px in data.chunks_exact_mut(4) {
            let color = Rgba8([px[0], px[1], px[2], px[3]]).inverted();
            px.copy_from_slice(&color.0);
        }
    }
    RgbaImage::from_raw(bitmap.width(), bitmap.height(), data).map(DynamicImage::ImageRgba8)
}
