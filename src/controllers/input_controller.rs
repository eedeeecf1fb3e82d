// src/controllers/input_controller.rs
//
// InputController owns the input's value and coordinates the placeholder
// rotation, the particle field and the vanish animation. Interaction is
// frozen while disabled, and while animating for everything but caret moves.

use rand::Rng;
use std::time::Duration;
use tracing::{debug, trace, warn};

use super::keyboard::{Key, KeyEvent};
use crate::animation::{
    rotator::DEFAULT_INTERVAL, AnimationState, FrameOutcome, PlaceholderRotator, Scheduler,
    VanishAnimator,
};
use crate::config::{InputConfig, StyleConfig, VanishConfig};
use crate::models::{FontSpec, Particle, PlaceholderSet};
use crate::services::{Bitmap, ParticleFieldBuilder};
use crate::utilities::text::{
    clamp_to_char_boundary, next_boundary, prev_boundary, strip_newlines, visual_line_count,
};
use crate::views::{measure, AutoResize, InputShape, ViewState};

#[derive(Debug, Clone)]
pub struct InputOptions {
    pub multiline: bool,
    pub rows: u32,
    pub max_rows: u32,
    pub auto_resize: bool,
    pub disabled: bool,
    pub show_submit_button: bool,
    pub submit_button_content: Option<String>,
    pub left_actions: Vec<String>,
    pub right_actions: Vec<String>,
    pub wrap_columns: Option<usize>,
    pub line_height: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self::from_config(&InputConfig::default(), &StyleConfig::default())
    }
}

impl InputOptions {
    pub fn from_config(input: &InputConfig, style: &StyleConfig) -> Self {
        Self {
            multiline: input.multiline,
            rows: input.rows.max(1),
            max_rows: input.max_rows.max(input.rows.max(1)),
            auto_resize: input.auto_resize,
            disabled: input.disabled,
            show_submit_button: input.show_submit_button,
            submit_button_content: input.submit_button_content.clone(),
            left_actions: input.left_actions.clone(),
            right_actions: input.right_actions.clone(),
            wrap_columns: input.wrap_columns,
            line_height: style.line_height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    pub value: String,
}

/// What happened during one `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// (previous, current) placeholder index when the hint rotated.
    pub placeholder_changed: Option<(usize, usize)>,
    pub frame_ran: bool,
    pub animation_finished: bool,
}

type ChangeHandler = Box<dyn FnMut(&ChangeEvent)>;
type SubmitHandler = Box<dyn FnMut(&SubmitEvent)>;
type KeyHandler = Box<dyn FnMut(&mut KeyEvent)>;

pub struct InputController {
    value: String,
    caret: usize, // byte offset, always on a char boundary
    options: InputOptions,
    font: FontSpec,

    scheduler: Scheduler,
    rotator: PlaceholderRotator,

    canvas: Bitmap,
    field_builder: Option<ParticleFieldBuilder>,
    particles: Vec<Particle>,
    animator: VanishAnimator,

    resize: Option<AutoResize>,
    expanded: bool,

    on_change: Option<ChangeHandler>,
    on_submit: Option<SubmitHandler>,
    on_key_down: Option<KeyHandler>,
}

impl InputController {
    pub fn new(options: InputOptions, font: FontSpec, vanish: &VanishConfig) -> Self {
        let mut controller = Self {
            value: String::new(),
            caret: 0,
            options,
            font,
            scheduler: Scheduler::new(),
            rotator: PlaceholderRotator::new(PlaceholderSet::default(), DEFAULT_INTERVAL),
            canvas: Bitmap::square(vanish.canvas_size),
            field_builder: None,
            particles: Vec::new(),
            animator: VanishAnimator::new(vanish),
            resize: None,
            expanded: false,
            on_change: None,
            on_submit: None,
            on_key_down: None,
        };
        controller.remeasure();
        controller
    }

    /// Without a field builder the input still works, but submits clear
    /// the value at once instead of dissolving it.
    pub fn with_field_builder(mut self, builder: ParticleFieldBuilder) -> Self {
        self.field_builder = Some(builder);
        self.rebuild_field();
        self
    }

    pub fn with_rotation_interval(mut self, period: Duration) -> Self {
        let placeholders = self.rotator.placeholders().clone();
        self.rotator.stop(&mut self.scheduler);
        self.rotator = PlaceholderRotator::new(placeholders, period);
        self.rotator.start(&mut self.scheduler);
        self
    }

    pub fn with_placeholders(mut self, placeholders: PlaceholderSet) -> Self {
        self.set_placeholders(placeholders);
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    /************************ callback registration ************************/

    pub fn on_change(&mut self, handler: impl FnMut(&ChangeEvent) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    pub fn on_submit(&mut self, handler: impl FnMut(&SubmitEvent) + 'static) {
        self.on_submit = Some(Box::new(handler));
    }

    /// Runs before the input's own key handling and may mark the event
    /// as handled.
    pub fn on_key_down(&mut self, handler: impl FnMut(&mut KeyEvent) + 'static) {
        self.on_key_down = Some(Box::new(handler));
    }

    /****************************** editing ******************************/

    fn is_locked(&self) -> bool {
        self.options.disabled || self.animator.is_animating()
    }

    /// Replaces the whole value. Ignored while disabled or animating.
    pub fn set_value(&mut self, text: &str) -> bool {
        if self.is_locked() {
            return false;
        }
        self.value = self.sanitize(text);
        self.caret = self.value.len();
        self.value_changed();
        true
    }

    pub fn insert_str(&mut self, text: &str) -> bool {
        if self.is_locked() {
            return false;
        }
        let text = self.sanitize(text);
        if text.is_empty() {
            return false;
        }
        self.value.insert_str(self.caret, &text);
        self.caret += text.len();
        self.value_changed();
        true
    }

    /// Typed characters; control characters other than '\n' are dropped.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if ch.is_control() && ch != '\n' {
            return false;
        }
        let mut buf = [0; 4];
        self.insert_str(ch.encode_utf8(&mut buf))
    }

    pub fn backspace(&mut self) -> bool {
        if self.is_locked() || self.caret == 0 {
            return false;
        }
        let start = prev_boundary(&self.value, self.caret);
        self.value.replace_range(start..self.caret, "");
        self.caret = start;
        self.value_changed();
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.is_locked() || self.caret >= self.value.len() {
            return false;
        }
        let end = next_boundary(&self.value, self.caret);
        self.value.replace_range(self.caret..end, "");
        self.value_changed();
        true
    }

    pub fn move_left(&mut self) {
        if !self.options.disabled {
            self.caret = prev_boundary(&self.value, self.caret);
        }
    }

    pub fn move_right(&mut self) {
        if !self.options.disabled {
            self.caret = next_boundary(&self.value, self.caret);
        }
    }

    /// Start of the caret's line.
    pub fn move_home(&mut self) {
        if !self.options.disabled {
            self.caret = self.value[..self.caret]
                .rfind('\n')
                .map(|i| i + 1)
                .unwrap_or(0);
        }
    }

    /// End of the caret's line.
    pub fn move_end(&mut self) {
        if !self.options.disabled {
            self.caret = self.value[self.caret..]
                .find('\n')
                .map(|i| self.caret + i)
                .unwrap_or(self.value.len());
        }
    }

    pub fn set_caret(&mut self, caret: usize) {
        self.caret = clamp_to_char_boundary(&self.value, caret);
    }

    fn sanitize(&self, text: &str) -> String {
        if self.options.multiline {
            text.replace("\r\n", "\n")
        } else {
            strip_newlines(text)
        }
    }

    fn value_changed(&mut self) {
        trace!(len = self.value.len(), "value changed");
        self.rebuild_field();
        self.remeasure();
        if let Some(handler) = self.on_change.as_mut() {
            handler(&ChangeEvent {
                value: self.value.clone(),
            });
        }
    }

    // keeps the field ready to animate from the current content
    fn rebuild_field(&mut self) {
        if let Some(builder) = &self.field_builder {
            self.particles = builder.build(&mut self.canvas, &self.value, &self.font);
        }
    }

    fn remeasure(&mut self) {
        if !(self.options.auto_resize && self.options.multiline) {
            return;
        }
        let lines = visual_line_count(&self.value, self.options.wrap_columns);
        let resize = measure(
            lines,
            self.options.line_height,
            self.options.rows,
            self.options.max_rows,
        );
        self.expanded = resize.expanded;
        self.resize = Some(resize);
    }

    fn clear_value(&mut self) {
        self.value.clear();
        self.caret = 0;
        self.value_changed();
    }

    /***************************** submission *****************************/

    /// Starts the vanish animation and reports the value. Empty values,
    /// a running animation and the disabled state make this a no-op.
    pub fn submit(&mut self) -> bool {
        if self.value.trim().is_empty()
            || self.animator.is_animating()
            || self.options.disabled
            || self.scheduler.is_torn_down()
        {
            return false;
        }
        let value = self.value.clone();

        let animated = match &self.field_builder {
            Some(builder) => {
                self.particles = builder.build(&mut self.canvas, &self.value, &self.font);
                self.animator.start(std::mem::take(&mut self.particles));
                self.scheduler.request_frame();
                true
            }
            None => false,
        };
        debug!(len = value.len(), animated, "submit");

        if let Some(handler) = self.on_submit.as_mut() {
            handler(&SubmitEvent { value });
        }

        if !animated {
            self.clear_value();
        }
        true
    }

    pub fn key_down(&mut self, mut event: KeyEvent) -> bool {
        if let Some(handler) = self.on_key_down.as_mut() {
            handler(&mut event);
        }
        if event.is_handled() {
            return false;
        }

        match event.key {
            Key::Enter => {
                if self.animator.is_animating() || self.options.disabled {
                    return false;
                }
                if self.options.multiline && event.modifiers.inserts_line_break() {
                    self.insert_char('\n')
                } else {
                    self.submit()
                }
            }
            Key::Backspace => self.backspace(),
            Key::Delete => self.delete_forward(),
            Key::Left => {
                self.move_left();
                true
            }
            Key::Right => {
                self.move_right();
                true
            }
            Key::Home => {
                self.move_home();
                true
            }
            Key::End => {
                self.move_end();
                true
            }
            Key::Other => false,
        }
    }

    /******************************* driving *******************************/

    /// Advances timers by `dt` and runs at most one pending vanish frame.
    pub fn tick<R: Rng>(&mut self, dt: Duration, rng: &mut R) -> TickReport {
        let mut report = TickReport::default();
        if self.scheduler.is_torn_down() {
            return report;
        }

        for id in self.scheduler.advance(dt) {
            let previous = self.rotator.index();
            if self.rotator.on_timer(id) {
                report.placeholder_changed = Some((previous, self.rotator.index()));
            }
        }

        if self.scheduler.take_frame().is_some() {
            report.frame_ran = true;
            match self.animator.step(&mut self.canvas, rng) {
                FrameOutcome::Continue => {
                    self.scheduler.request_frame();
                }
                FrameOutcome::Finished => {
                    report.animation_finished = true;
                    self.clear_value();
                }
            }
        }
        report
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.rotator.set_visible(&mut self.scheduler, visible);
    }

    pub fn set_placeholders(&mut self, placeholders: PlaceholderSet) {
        self.rotator.set_placeholders(&mut self.scheduler, placeholders);
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.options.disabled = disabled;
    }

    /// Stops every timer and frame. Nothing runs after this.
    pub fn teardown(&mut self) {
        if self.scheduler.is_torn_down() {
            return;
        }
        self.rotator.stop(&mut self.scheduler);
        self.scheduler.teardown();
        if self.animator.is_animating() {
            warn!("input torn down mid-animation");
        }
        self.animator.stop();
    }

    /****************************** accessors ******************************/

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn animation_state(&self) -> AnimationState {
        self.animator.state()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn has_field_builder(&self) -> bool {
        self.field_builder.is_some()
    }

    /// The field built from the current value. Empty while animating,
    /// when the animator owns it.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn animator(&self) -> &VanishAnimator {
        &self.animator
    }

    pub fn canvas(&self) -> &Bitmap {
        &self.canvas
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn rotator(&self) -> &PlaceholderRotator {
        &self.rotator
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn view_state(&self) -> ViewState {
        let animating = self.animator.is_animating();
        ViewState {
            placeholder: if self.value.is_empty() {
                self.rotator.current().map(str::to_string)
            } else {
                None
            },
            placeholder_index: self.rotator.index(),
            text_transparent: animating,
            overlay_visible: animating,
            submit_enabled: !self.value.trim().is_empty() && !self.options.disabled && !animating,
            filled: !self.value.is_empty(),
            expanded: self.expanded,
            shape: InputShape::for_input(self.options.multiline, self.expanded),
            height: self.resize.map(|r| r.height),
        }
    }
}
