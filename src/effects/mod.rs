pub mod placeholder_fx;
pub mod tilt;

pub use placeholder_fx::{IntensityFade, PlaceholderFade, PlaceholderFrame};
pub use tilt::{TiltCard, TiltTransform};
