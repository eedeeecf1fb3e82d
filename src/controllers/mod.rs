// src/controllers/mod.rs

pub mod input_controller;
pub mod keyboard;

pub use input_controller::{
    ChangeEvent, InputController, InputOptions, SubmitEvent, TickReport,
};
pub use keyboard::{Key, KeyEvent, Modifiers};
