pub mod font_spec;
pub mod particle;
pub mod placeholder_set;

pub use font_spec::FontSpec;
pub use particle::{Particle, Rgba8};
pub use placeholder_set::PlaceholderSet;
