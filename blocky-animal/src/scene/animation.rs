// src/scene/animation.rs
use super::state::{AnimationClock, SceneState};
use crate::config::AnimationConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Tail and legs sway.
    Idle,
    /// Tail held straight while the hat hops.
    Acting,
}

/// Idle pose at one instant, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleSway {
    pub proximal_y: f32,
    pub mid_y: f32,
    pub distal_y: f32,
    pub left_legs: f32,
    pub right_legs: f32,
}

pub fn idle_sway(frame: f64, sway_divisor: f64) -> IdleSway {
    let phase = frame / sway_divisor;
    let s = phase.sin();
    IdleSway {
        proximal_y: (45.0 * s) as f32,
        mid_y: (20.0 * s) as f32,
        distal_y: (10.0 * s) as f32,
        left_legs: (20.0 * s) as f32,
        right_legs: (20.0 * (phase + 0.5).cos()) as f32,
    }
}

/// Hat lift `-5t² + v·t` with `t = elapsed / speed`. Zero at both ends of the
/// acting window.
pub fn hop_height(elapsed: u64, config: &AnimationConfig) -> f32 {
    let t = elapsed as f32 / config.speed;
    t * (config.velocity - 5.0 * t)
}

impl AnimationClock {
    pub fn phase(&self, config: &AnimationConfig) -> Phase {
        if self.action_elapsed as f32 <= config.action_threshold() {
            Phase::Acting
        } else {
            Phase::Idle
        }
    }

    /// Restarts the acting window.
    pub fn trigger(&mut self) {
        self.action_elapsed = 0;
    }

    pub fn advance(&mut self) {
        self.frame += 1;
        self.action_elapsed = self.action_elapsed.saturating_add(1);
    }
}

/// One animation tick: poses the model from the current counters, then moves
/// both counters forward.
pub fn step(state: &mut SceneState) -> Phase {
    let config = state.animation;
    let phase = state.clock.phase(&config);
    match phase {
        Phase::Acting => {
            state.sliders.proximal.y = 0.0;
            state.sliders.mid.y = 0.0;
            state.sliders.distal.y = 0.0;
            state.hat_height = hop_height(state.clock.action_elapsed, &config);
        }
        Phase::Idle => {
            let sway = idle_sway(state.clock.frame as f64, config.sway_divisor as f64);
            state.sliders.proximal.y = sway.proximal_y;
            state.sliders.mid.y = sway.mid_y;
            state.sliders.distal.y = sway.distal_y;
            state.left_legs_deg = sway.left_legs;
            state.right_legs_deg = sway.right_legs;
        }
    }
    state.clock.advance();
    phase
}

/// Frames per second over a sampling window, from the shared frame counter.
#[derive(Clone, Copy, Debug)]
pub struct FpsSampler {
    last_frame: u64,
    last_ms: f64,
}

impl FpsSampler {
    pub fn new(frame: u64, now_ms: f64) -> Self {
        Self {
            last_frame: frame,
            last_ms: now_ms,
        }
    }

    /// Rounded to one decimal. `None` when no wall time has passed.
    pub fn sample(&mut self, frame: u64, now_ms: f64) -> Option<f64> {
        let frames = frame.saturating_sub(self.last_frame) as f64;
        let elapsed_ms = now_ms - self.last_ms;
        self.last_frame = frame;
        self.last_ms = now_ms;

        if elapsed_ms <= 0.0 {
            return None;
        }
        Some((frames * 10_000.0 / elapsed_ms).round() / 10.0)
    }
}
