// src/render/input_renderer.rs
//
// Draws the input container, its text or placeholder, the action slots,
// the submit affordance and, while vanishing, the particle canvas.

use nannou::prelude::*;

use super::Theme;
use crate::controllers::{InputController, TickReport};
use crate::effects::{placeholder_fx::PLACEHOLDER_FADE_DURATION, IntensityFade, PlaceholderFade};
use crate::views::{rounded_rect_points, InputShape, ViewState};

const PILL_HEIGHT: f32 = 56.0;
const ROUNDED_RADIUS: f32 = 16.0;
const PADDING_X: f32 = 24.0;
const PADDING_Y: f32 = 16.0;
const ACTION_WIDTH: f32 = 40.0;
const BUTTON_RADIUS: f32 = 20.0;

// canvas glyphs are drawn at twice the font size and shown at half scale
const OVERLAY_SCALE: f32 = 0.5;
const CANVAS_ORIGIN_X: f32 = 16.0;
const CANVAS_ORIGIN_Y: f32 = 40.0;

pub struct InputRenderer {
    theme: Theme,
    centre: Point2,
    width: f32,
    placeholder_fade: PlaceholderFade,
    affordance: IntensityFade,
}

impl InputRenderer {
    pub fn new(theme: Theme, centre: Point2, width: f32) -> Self {
        Self {
            theme,
            centre,
            width,
            placeholder_fade: PlaceholderFade::new(),
            affordance: IntensityFade::new(0.5, PLACEHOLDER_FADE_DURATION),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// First display of the placeholder fades it in.
    pub fn mount(&mut self, controller: &InputController, time: f32) {
        self.placeholder_fade
            .start(None, controller.rotator().index(), time);
    }

    pub fn update(&mut self, controller: &InputController, report: &TickReport, time: f32) {
        if let Some((previous, current)) = report.placeholder_changed {
            self.placeholder_fade.start(Some(previous), current, time);
        }
        let has_text = !controller.value().trim().is_empty();
        self.affordance
            .set_target(if has_text { 1.0 } else { 0.5 }, time);
    }

    fn height(&self, state: &ViewState) -> f32 {
        match state.height {
            Some(h) if state.shape == InputShape::Rounded => h + PADDING_Y * 2.0,
            _ => PILL_HEIGHT,
        }
    }

    /// Bounds of the container; it grows downward from a fixed top edge.
    pub fn bounds(&self, state: &ViewState) -> Rect {
        let h = self.height(state);
        let top = self.centre.y + PILL_HEIGHT / 2.0;
        Rect::from_x_y_w_h(self.centre.x, top - h / 2.0, self.width, h)
    }

    fn text_left(&self, bounds: &Rect, controller: &InputController) -> f32 {
        let left_slots = controller.options().left_actions.len() as f32;
        bounds.left() + PADDING_X + left_slots * ACTION_WIDTH
    }

    fn text_right(&self, bounds: &Rect, controller: &InputController) -> f32 {
        let options = controller.options();
        let mut slots = options.right_actions.len() as f32;
        if options.show_submit_button {
            slots += 1.0;
        }
        bounds.right() - PADDING_X - slots * ACTION_WIDTH
    }

    fn submit_button_centre(&self, bounds: &Rect) -> Point2 {
        pt2(
            bounds.right() - PADDING_X / 2.0 - ACTION_WIDTH / 2.0,
            bounds.y(),
        )
    }

    /// Whether `point`, in untilted card space, lands on the submit button.
    pub fn submit_button_contains(&self, controller: &InputController, point: Point2) -> bool {
        if !controller.options().show_submit_button {
            return false;
        }
        let bounds = self.bounds(&controller.view_state());
        self.submit_button_centre(&bounds).distance(point) <= BUTTON_RADIUS
    }

    pub fn draw(
        &self,
        draw: &Draw,
        controller: &InputController,
        overlay: Option<&wgpu::Texture>,
        time: f32,
    ) {
        let state = controller.view_state();
        let bounds = self.bounds(&state);
        self.draw_container(draw, &bounds, &state);
        self.draw_actions(draw, &bounds, controller);
        self.draw_text(draw, &bounds, controller, &state, time);

        if state.overlay_visible {
            if let Some(texture) = overlay {
                self.draw_overlay(draw, &bounds, controller, texture);
            }
        }

        if controller.options().show_submit_button {
            self.draw_submit_button(draw, &bounds, controller, &state, time);
        }
    }

    fn draw_container(&self, draw: &Draw, bounds: &Rect, state: &ViewState) {
        let radius = match state.shape {
            InputShape::Pill => bounds.h() / 2.0,
            InputShape::Rounded => ROUNDED_RADIUS,
        };
        let points: Vec<Point2> = rounded_rect_points(bounds.w(), bounds.h(), radius)
            .into_iter()
            .map(|p| p + bounds.xy())
            .collect();

        draw.polygon()
            .points(points.iter().copied())
            .color(self.theme.surface(state.filled));
        draw.polyline()
            .weight(1.0)
            .points_closed(points)
            .color(self.theme.border());
    }

    fn draw_actions(&self, draw: &Draw, bounds: &Rect, controller: &InputController) {
        let options = controller.options();
        let color = self.theme.text(options.disabled);

        for (i, label) in options.left_actions.iter().enumerate() {
            let x = bounds.left() + PADDING_X / 2.0 + ACTION_WIDTH * (i as f32 + 0.5);
            draw.text(label)
                .x_y(x, bounds.y())
                .w_h(ACTION_WIDTH, bounds.h())
                .font_size(16)
                .color(color);
        }

        let button_slots = if options.show_submit_button { 1.0 } else { 0.0 };
        for (i, label) in options.right_actions.iter().rev().enumerate() {
            let slot = button_slots + i as f32;
            let x = bounds.right() - PADDING_X / 2.0 - ACTION_WIDTH * (slot + 0.5);
            draw.text(label)
                .x_y(x, bounds.y())
                .w_h(ACTION_WIDTH, bounds.h())
                .font_size(16)
                .color(color);
        }
    }

    fn draw_text(
        &self,
        draw: &Draw,
        bounds: &Rect,
        controller: &InputController,
        state: &ViewState,
        time: f32,
    ) {
        let left = self.text_left(bounds, controller);
        let right = self.text_right(bounds, controller);
        let width = (right - left).max(1.0);
        let font_size = controller.font().size_px.round() as u32;
        let text_box_h = bounds.h() - PADDING_Y * 2.0;
        let text_centre = pt2(left + width / 2.0, bounds.y());

        if let Some(fallback) = &state.placeholder {
            let frame = self.placeholder_fade.sample(time);
            let hint = controller
                .rotator()
                .placeholders()
                .get(frame.index)
                .unwrap_or(fallback.as_str());
            draw.text(hint)
                .xy(text_centre - vec2(0.0, frame.offset_y))
                .w_h(width, text_box_h)
                .font_size(font_size)
                .left_justify()
                .align_text_top()
                .no_line_wrap()
                .color(self.theme.placeholder(frame.opacity));
            return;
        }

        // the overlay takes over while vanishing
        if state.text_transparent {
            return;
        }
        draw.text(controller.value())
            .xy(text_centre)
            .w_h(width, text_box_h)
            .font_size(font_size)
            .left_justify()
            .align_text_top()
            .color(self.theme.text(controller.options().disabled));
    }

    fn draw_overlay(
        &self,
        draw: &Draw,
        bounds: &Rect,
        controller: &InputController,
        texture: &wgpu::Texture,
    ) {
        let size = controller.canvas().width() as f32 * OVERLAY_SCALE;
        let left = self.text_left(bounds, controller);
        let first_baseline = bounds.top() - PADDING_Y - controller.font().size_px;

        // place canvas (16, 40) on the first line's baseline
        let origin = pt2(
            left - CANVAS_ORIGIN_X * OVERLAY_SCALE,
            first_baseline + CANVAS_ORIGIN_Y * OVERLAY_SCALE,
        );
        draw.texture(texture)
            .x_y(origin.x + size / 2.0, origin.y - size / 2.0)
            .w_h(size, size);
    }

    fn draw_submit_button(
        &self,
        draw: &Draw,
        bounds: &Rect,
        controller: &InputController,
        state: &ViewState,
        time: f32,
    ) {
        let centre = self.submit_button_centre(bounds);
        draw.ellipse()
            .xy(centre)
            .radius(BUTTON_RADIUS)
            .color(self.theme.button(state.submit_enabled));

        let intensity = self.affordance.value(time);
        let label = controller
            .options()
            .submit_button_content
            .as_deref()
            .unwrap_or("↑");
        draw.text(label)
            .xy(centre)
            .w_h(BUTTON_RADIUS * 2.0, BUTTON_RADIUS * 2.0)
            .font_size(16)
            .color(rgba(1.0, 1.0, 1.0, intensity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VanishConfig;
    use crate::controllers::InputOptions;
    use crate::models::FontSpec;

    fn renderer() -> InputRenderer {
        InputRenderer::new(Theme::new(true), pt2(0.0, 0.0), 600.0)
    }

    #[test]
    fn test_pill_bounds() {
        let controller = InputController::new(
            InputOptions::default(),
            FontSpec::default(),
            &VanishConfig::default(),
        );
        let bounds = renderer().bounds(&controller.view_state());
        assert_eq!(bounds.h(), PILL_HEIGHT);
        assert_eq!(bounds.w(), 600.0);
    }

    #[test]
    fn test_submit_button_hit_area() {
        let controller = InputController::new(
            InputOptions::default(),
            FontSpec::default(),
            &VanishConfig::default(),
        );
        let r = renderer();
        let centre = pt2(300.0 - PADDING_X / 2.0 - ACTION_WIDTH / 2.0, 0.0);
        assert!(r.submit_button_contains(&controller, centre));
        assert!(r.submit_button_contains(&controller, centre + vec2(0.0, BUTTON_RADIUS - 1.0)));
        assert!(!r.submit_button_contains(&controller, centre + vec2(BUTTON_RADIUS + 1.0, 0.0)));
        assert!(!r.submit_button_contains(&controller, pt2(0.0, 0.0)));
    }

    #[test]
    fn test_hidden_submit_button_is_not_clickable() {
        let options = InputOptions {
            show_submit_button: false,
            ..InputOptions::default()
        };
        let controller =
            InputController::new(options, FontSpec::default(), &VanishConfig::default());
        let centre = pt2(300.0 - PADDING_X / 2.0 - ACTION_WIDTH / 2.0, 0.0);
        assert!(!renderer().submit_button_contains(&controller, centre));
    }

    #[test]
    fn test_expanded_grows_downward() {
        let options = InputOptions {
            multiline: true,
            auto_resize: true,
            ..InputOptions::default()
        };
        let controller =
            InputController::new(options, FontSpec::default(), &VanishConfig::default())
                .with_value("1\n2\n3");
        let r = renderer();
        let state = controller.view_state();
        let bounds = r.bounds(&state);
        assert_eq!(bounds.h(), 72.0 + PADDING_Y * 2.0);
        assert_eq!(bounds.top(), PILL_HEIGHT / 2.0);
    }

    #[test]
    fn test_text_area_leaves_room_for_slots() {
        let options = InputOptions {
            left_actions: vec!["+".into()],
            right_actions: vec!["@".into()],
            ..InputOptions::default()
        };
        let controller =
            InputController::new(options, FontSpec::default(), &VanishConfig::default());
        let r = renderer();
        let bounds = r.bounds(&controller.view_state());
        assert_eq!(
            r.text_left(&bounds, &controller),
            -300.0 + PADDING_X + ACTION_WIDTH
        );
        assert_eq!(
            r.text_right(&bounds, &controller),
            300.0 - PADDING_X - 2.0 * ACTION_WIDTH
        );
    }
}
