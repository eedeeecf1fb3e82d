pub mod bitmap;
pub mod particle_field;
pub mod rasterizer;

pub use bitmap::Bitmap;
pub use particle_field::ParticleFieldBuilder;
pub use rasterizer::{GlyphRasterizer, TextRasterizer};
