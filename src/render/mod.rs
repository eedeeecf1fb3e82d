// src/render/mod.rs
// Nannou drawing of the input and its particle overlay

pub mod input_renderer;
pub mod overlay;
pub mod theme;

pub use input_renderer::InputRenderer;
pub use overlay::overlay_image;
pub use theme::Theme;
