// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;
use std::time::Duration;

use crate::error::{Error, Result};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 540,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct InputConfig {
    pub multiline: bool,
    pub rows: u32,
    pub max_rows: u32,
    pub auto_resize: bool,
    pub disabled: bool,
    pub show_submit_button: bool,
    pub submit_button_content: Option<String>,
    pub left_actions: Vec<String>,
    pub right_actions: Vec<String>,
    pub wrap_columns: Option<usize>, // soft wrap used by auto-resize
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            multiline: false,
            rows: 1,
            max_rows: 10,
            auto_resize: false,
            disabled: false,
            show_submit_button: true,
            submit_button_content: None,
            left_actions: Vec::new(),
            right_actions: Vec::new(),
            wrap_columns: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FontConfig {
    pub shorthand: String,   // CSS-like "16px Family, fallback"
    pub file: Option<String>, // TTF/OTF to rasterize with; bundled Noto Sans otherwise
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            shorthand: "16px sans-serif".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RotationConfig {
    pub interval_ms: u64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self { interval_ms: 3000 }
    }
}

impl RotationConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/************************* Animation Configs ********************/
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct VanishConfig {
    pub canvas_size: u32,   // square working canvas, logical pixels
    pub max_decay: f32,     // radius lost per frame is max_decay * rand[0, 1)
    pub frontier_step: f32, // columns the erase frontier moves per frame
}

impl Default for VanishConfig {
    fn default() -> Self {
        Self {
            canvas_size: 800,
            max_decay: 0.05,
            frontier_step: 8.0,
        }
    }
}

impl VanishConfig {
    /// The sweep only terminates with a positive frontier step and decay.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_size == 0 {
            return Err(Error::InvalidConfig("vanish.canvas_size must be > 0".into()));
        }
        if !(self.max_decay.is_finite() && self.max_decay > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "vanish.max_decay must be > 0, got {}",
                self.max_decay
            )));
        }
        if !(self.frontier_step.is_finite() && self.frontier_step > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "vanish.frontier_step must be > 0, got {}",
                self.frontier_step
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TiltConfig {
    pub rotate_depth: f32,
    pub translate_depth: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            rotate_depth: 17.5,
            translate_depth: 20.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StyleConfig {
    pub dark_mode: bool,
    pub line_height: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            line_height: 24.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct PathConfig {
    pub placeholders_file: Option<String>,
}
