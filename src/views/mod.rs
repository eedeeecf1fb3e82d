// src/views/mod.rs

pub mod layout;
pub mod shape;

pub use layout::{measure, AutoResize, InputShape, ViewState};
pub use shape::rounded_rect_points;
