// src/views/layout.rs
//
// Layout-derived state of the input: auto-resize height, the expanded
// flag and the resulting outline shape.

/// Result of measuring multi-line content against the configured rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoResize {
    pub height: f32,
    pub expanded: bool,
}

/// Height tracks content up to `max_rows`; content taller than `rows`
/// counts as expanded.
pub fn measure(content_lines: usize, line_height: f32, rows: u32, max_rows: u32) -> AutoResize {
    let content_height = content_lines as f32 * line_height;
    let max_height = line_height * max_rows as f32;
    AutoResize {
        height: content_height.min(max_height),
        expanded: content_height > line_height * rows as f32,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputShape {
    #[default]
    Pill,
    Rounded,
}

impl InputShape {
    pub fn for_input(multiline: bool, expanded: bool) -> Self {
        if multiline && expanded {
            InputShape::Rounded
        } else {
            InputShape::Pill
        }
    }
}

/// Everything the renderer needs to know beyond the raw value.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub placeholder: Option<String>,
    pub placeholder_index: usize,
    pub text_transparent: bool,
    pub overlay_visible: bool,
    pub submit_enabled: bool,
    pub filled: bool,
    pub expanded: bool,
    pub shape: InputShape,
    pub height: Option<f32>,
}
