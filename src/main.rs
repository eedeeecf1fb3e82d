// src/main.rs
use nannou::prelude::*;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vanishvis::{
    config::Config,
    controllers::{InputController, InputOptions, Key as InputKey, KeyEvent, Modifiers},
    effects::TiltCard,
    models::{FontSpec, PlaceholderSet},
    render::{overlay_image, InputRenderer, Theme},
    services::{GlyphRasterizer, ParticleFieldBuilder},
};

const HISTORY_LIMIT: usize = 6;
const INPUT_WIDTH_RATIO: f32 = 0.7;

struct Model {
    // Core components:
    input: InputController,
    renderer: InputRenderer,
    tilt: TiltCard,

    // Rendering components:
    overlay: Option<wgpu::Texture>,
    random: rand::rngs::ThreadRng,

    // Submitted values, newest first
    history: Rc<RefCell<VecDeque<String>>>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vanishvis=info")),
        )
        .init();

    nannou::app(model).update(update).exit(exit).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().unwrap_or_else(|e| {
        warn!("{e}; using default config");
        Config::default()
    });

    let placeholders = load_placeholders(&config);
    let font = config.font.shorthand.parse::<FontSpec>().unwrap_or_else(|e| {
        warn!("{e}; using default font");
        FontSpec::default()
    });
    info!(family = font.primary_family(), size = font.size_px, "input font");

    // Create window
    let window_id = app
        .new_window()
        .title("vanishvis 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .received_character(received_character)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .mouse_exited(mouse_exited)
        .focused(focused)
        .unfocused(unfocused)
        .build()
        .unwrap();
    let window = app.window(window_id).unwrap();

    // Without a font the input still works, just without the vanish effect
    let field_builder = match GlyphRasterizer::from_optional_file(config.resolve_font_path().as_deref()) {
        Ok(rasterizer) => Some(ParticleFieldBuilder::new(Box::new(rasterizer))),
        Err(e) => {
            warn!("{e}; vanish animation disabled");
            None
        }
    };

    let options = InputOptions::from_config(&config.input, &config.style);
    let mut input = InputController::new(options, font, &config.vanish)
        .with_rotation_interval(config.rotation.interval())
        .with_placeholders(placeholders);
    if let Some(builder) = field_builder {
        input = input.with_field_builder(builder);
    }

    let history = Rc::new(RefCell::new(VecDeque::new()));
    let sink = history.clone();
    input.on_submit(move |event| {
        info!(value = %event.value, "submitted");
        let mut history = sink.borrow_mut();
        history.push_front(event.value.clone());
        history.truncate(HISTORY_LIMIT);
    });

    let width = window.rect().w() * INPUT_WIDTH_RATIO;
    let mut renderer = InputRenderer::new(Theme::new(config.style.dark_mode), pt2(0.0, 0.0), width);
    renderer.mount(&input, app.time);

    Model {
        input,
        renderer,
        tilt: TiltCard::new(&config.tilt),
        overlay: None,
        random: rand::thread_rng(),
        history,
    }
}

fn load_placeholders(config: &Config) -> PlaceholderSet {
    let Some(path) = config.resolve_placeholders_path() else {
        return PlaceholderSet::default();
    };
    match PlaceholderSet::load(&path) {
        Ok(set) => {
            info!(count = set.len(), path = %path.display(), "loaded placeholders");
            set
        }
        Err(e) => {
            warn!("{e}; continuing without placeholders");
            PlaceholderSet::default()
        }
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    let mods = &app.keys.mods;
    let modifiers = Modifiers {
        shift: mods.shift(),
        ctrl: mods.ctrl(),
        alt: mods.alt(),
        meta: mods.logo(),
    };

    let input_key = match key {
        Key::Return | Key::NumpadEnter => InputKey::Enter,
        Key::Back => InputKey::Backspace,
        Key::Delete => InputKey::Delete,
        Key::Left => InputKey::Left,
        Key::Right => InputKey::Right,
        Key::Home => InputKey::Home,
        Key::End => InputKey::End,
        // toggle the disabled state
        Key::F2 => {
            let disabled = !model.input.options().disabled;
            model.input.set_disabled(disabled);
            info!(disabled, "toggled input");
            return;
        }
        _ => InputKey::Other,
    };
    model
        .input
        .key_down(KeyEvent::with_modifiers(input_key, modifiers));
}

fn received_character(_app: &App, model: &mut Model, ch: char) {
    // Enter and Backspace arrive through key_pressed
    if ch == '\r' || ch == '\n' {
        return;
    }
    model.input.insert_char(ch);
}

fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    let bounds = model.renderer.bounds(&model.input.view_state());
    if bounds.contains(pos) {
        // screen orientation: y grows downward
        let offset = vec2(pos.x - bounds.x(), bounds.y() - pos.y);
        model.tilt.pointer_moved(offset, bounds.wh());
    } else if model.tilt.is_hovered() {
        model.tilt.pointer_left();
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    // hit-test in the card's own space, before the tilt
    let local = model.tilt.transform().unproject(app.mouse.position());
    if model.renderer.submit_button_contains(&model.input, local) {
        model.input.submit();
    }
}

fn mouse_exited(_app: &App, model: &mut Model) {
    model.tilt.pointer_left();
}

fn focused(_app: &App, model: &mut Model) {
    model.input.set_visible(true);
}

fn unfocused(_app: &App, model: &mut Model) {
    model.input.set_visible(false);
}

fn update(app: &App, model: &mut Model, update: Update) {
    let report = model.input.tick(update.since_last, &mut model.random);
    model.renderer.update(&model.input, &report, app.time);

    // upload the canvas only while it is on screen
    if model.input.view_state().overlay_visible {
        if report.frame_ran || model.overlay.is_none() {
            let invert = model.renderer.theme().invert_overlay();
            model.overlay = overlay_image(model.input.canvas(), invert)
                .map(|image| wgpu::Texture::from_image(app, &image));
        }
    } else {
        model.overlay = None;
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.renderer.theme().background());

    let t = model.tilt.transform();
    let (rx, ry) = t.world_radians();
    let card = draw
        .xy(t.world_translation())
        .x_radians(rx)
        .y_radians(ry)
        .scale(t.scale);
    model
        .renderer
        .draw(&card, &model.input, model.overlay.as_ref(), app.time);

    // recent submissions above the input
    let color = model.renderer.theme().text(false);
    for (i, value) in model.history.borrow().iter().enumerate() {
        draw.text(value)
            .x_y(0.0, 80.0 + i as f32 * 28.0)
            .w_h(app.window_rect().w() * INPUT_WIDTH_RATIO, 24.0)
            .font_size(14)
            .left_justify()
            .color(color);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        warn!("failed to draw frame: {e:?}");
    }
}

fn exit(_app: &App, mut model: Model) {
    model.input.teardown();
    info!("input torn down");
}
