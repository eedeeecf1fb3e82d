// src/animation/vanish.rs
//
// Dissolves a particle field right to left. Every frame the erase
// frontier moves left; particles at or past it jitter and shrink until
// they disappear, particles behind it stay where they are.

use rand::Rng;
use tracing::{debug, trace, warn};

use crate::config::VanishConfig;
use crate::models::Particle;
use crate::services::Bitmap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Animating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Finished,
}

#[derive(Debug)]
pub struct VanishAnimator {
    state: AnimationState,
    particles: Vec<Particle>,
    frontier: f32,
    max_decay: f32,
    frontier_step: f32,
    frames: u32,
}

impl VanishAnimator {
    /// Invalid step or decay values would never finish, so they fall
    /// back to the defaults.
    pub fn new(config: &VanishConfig) -> Self {
        let defaults = VanishConfig::default();
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!("{e}; using default vanish settings");
                &defaults
            }
        };
        Self {
            state: AnimationState::Idle,
            particles: Vec::new(),
            frontier: 0.0,
            max_decay: config.max_decay,
            frontier_step: config.frontier_step,
            frames: 0,
        }
    }

    /// Takes ownership of a freshly built field and starts sweeping from
    /// its rightmost particle.
    pub fn start(&mut self, particles: Vec<Particle>) {
        self.frontier = particles.iter().map(|p| p.x).fold(0.0, f32::max);
        self.particles = particles;
        self.frames = 0;
        self.state = AnimationState::Animating;
        debug!(
            particles = self.particles.len(),
            frontier = self.frontier,
            "vanish started"
        );
    }

    /// Runs one frame: mutate particles, redraw the region from the
    /// frontier rightward, then move the frontier.
    pub fn step<R: Rng>(&mut self, bitmap: &mut Bitmap, rng: &mut R) -> FrameOutcome {
        if self.state == AnimationState::Idle {
            return FrameOutcome::Finished;
        }

        let frontier = self.frontier;
        let max_decay = self.max_decay;
        self.particles.retain_mut(|p| {
            if p.x < frontier {
                return true;
            }
            p.x += if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            p.y += if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            p.radius -= max_decay * rng.gen::<f32>();
            p.radius > 0.0
        });

        bitmap.clear_from_x(frontier);
        for p in self.particles.iter().filter(|p| p.x > frontier) {
            bitmap.fill_square(p.x, p.y, p.radius, p.color);
        }

        self.frontier -= self.frontier_step;
        self.frames += 1;
        trace!(
            frame = self.frames,
            frontier = self.frontier,
            remaining = self.particles.len(),
            "vanish frame"
        );

        if self.particles.is_empty() {
            self.state = AnimationState::Idle;
            debug!(frames = self.frames, "vanish finished");
            FrameOutcome::Finished
        } else {
            FrameOutcome::Continue
        }
    }

    /// Abandons the animation without finishing it.
    pub fn stop(&mut self) {
        self.particles.clear();
        self.state = AnimationState::Idle;
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.state == AnimationState::Animating
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn frontier(&self) -> f32 {
        self.frontier
    }

    pub fn frames_run(&self) -> u32 {
        self.frames
    }
}
