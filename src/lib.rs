// src/lib.rs
//
// Placeholder-rotating text input that dissolves submitted text into particles.

pub mod animation;
pub mod config;
pub mod controllers;
pub mod effects;
pub mod error;
pub mod models;
pub mod render;
pub mod services;
pub mod utilities;
pub mod views;

pub use error::{Error, Result};
