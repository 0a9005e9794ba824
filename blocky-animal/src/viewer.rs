// src/viewer.rs
use crate::backend::RenderBackend;
use crate::config::ViewerConfig;
use crate::controls::{self, InputEvent, Response};
use crate::error::Result;
use crate::scene::animation::{self, FpsSampler, Phase};
use crate::scene::{SceneState, assemble};

/// Wall clock in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// `Date.now()` from the host.
#[derive(Clone, Copy, Debug, Default)]
pub struct DateClock;

impl Clock for DateClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

/// Identifies the interval a tick callback was scheduled by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickToken(u64);

/// Start/stop state of the tick interval. Every transition moves to a new
/// generation, so callbacks from a cancelled interval are recognisably stale.
#[derive(Debug, Default)]
pub struct TickToggle {
    generation: u64,
    running: bool,
}

impl TickToggle {
    pub fn start(&mut self) -> Option<TickToken> {
        if self.running {
            return None;
        }
        self.generation += 1;
        self.running = true;
        Some(TickToken(self.generation))
    }

    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.generation += 1;
        self.running = false;
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn accepts(&self, token: TickToken) -> bool {
        self.running && token.0 == self.generation
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    /// Schedule ticks carrying this token.
    Started(TickToken),
    /// Cancel the scheduled interval.
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    pub phase: Phase,
    pub frame: u64,
    /// Wall time spent posing and drawing.
    pub frame_ms: f64,
}

pub struct Viewer<B, C = DateClock> {
    state: SceneState,
    backend: B,
    clock: C,
    ticks: TickToggle,
    fps: FpsSampler,
    last_frame_ms: f64,
}

impl<B: RenderBackend, C: Clock> Viewer<B, C> {
    pub fn new(config: &ViewerConfig, backend: B, clock: C) -> Self {
        let state = SceneState::new(config);
        let fps = FpsSampler::new(state.clock.frame, clock.now_ms());
        Self {
            state,
            backend,
            clock,
            ticks: TickToggle::default(),
            fps,
            last_frame_ms: 0.0,
        }
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_animating(&self) -> bool {
        self.ticks.is_running()
    }

    pub fn last_frame_ms(&self) -> f64 {
        self.last_frame_ms
    }

    /// Draws the current state. Returns the number of draw calls issued.
    pub fn render(&mut self) -> Result<usize> {
        self.backend.begin_frame()?;
        self.backend
            .set_global_rotation(self.state.global_rotation.matrix());

        let mut draws = 0;
        for posed in assemble(&self.state) {
            posed.primitive.render(&mut self.backend)?;
            draws += posed.primitive.draw_call_count();
        }
        Ok(draws)
    }

    /// One animation step. A token from a stopped interval does nothing.
    pub fn tick(&mut self, token: TickToken) -> Result<Option<TickReport>> {
        if !self.ticks.accepts(token) {
            log::trace!("dropping stale tick {token:?}");
            return Ok(None);
        }
        let started = self.clock.now_ms();
        let phase = animation::step(&mut self.state);
        self.render()?;
        self.last_frame_ms = self.clock.now_ms() - started;

        Ok(Some(TickReport {
            phase,
            frame: self.state.clock.frame,
            frame_ms: self.last_frame_ms,
        }))
    }

    pub fn handle_input(&mut self, event: InputEvent) -> Result<Response> {
        let response = controls::handle(event, &mut self.state);
        if response == Response::Render {
            self.render()?;
        }
        Ok(response)
    }

    pub fn start_animation(&mut self) -> Option<TickToken> {
        let token = self.ticks.start();
        if token.is_some() {
            log::info!("animation started at frame {}", self.state.clock.frame);
        }
        token
    }

    /// Flips the animation. Stopping leaves the last frame on screen.
    pub fn toggle_animation(&mut self) -> Toggle {
        if self.ticks.stop() {
            log::info!("animation stopped at frame {}", self.state.clock.frame);
            return Toggle::Stopped;
        }
        match self.start_animation() {
            Some(token) => Toggle::Started(token),
            None => Toggle::Stopped,
        }
    }

    pub fn sample_fps(&mut self) -> Option<f64> {
        let now = self.clock.now_ms();
        self.fps.sample(self.state.clock.frame, now)
    }
}
