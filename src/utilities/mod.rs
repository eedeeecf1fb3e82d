pub mod easing;
pub mod text;

pub use easing::{ease, EasingType};
