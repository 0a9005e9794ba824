// src/backend.rs
use crate::error::Result;
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawMode {
    Triangles,
    TriangleFan,
}

/// One `drawArrays` worth of work: vertices, model matrix and flat color.
#[derive(Clone, Copy, Debug)]
pub struct DrawCall<'a> {
    pub mode: DrawMode,
    pub vertices: &'a [f32],
    pub model: &'a Mat4,
    pub color: Vec3,
}

impl DrawCall<'_> {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// RGBA as uploaded to the color uniform; alpha is always opaque.
    pub fn rgba(&self) -> [f32; 4] {
        [self.color.x, self.color.y, self.color.z, 1.0]
    }
}

/// What a frame needs from the graphics API.
pub trait RenderBackend {
    /// Clears color and depth for a new frame.
    fn begin_frame(&mut self) -> Result<()>;
    fn set_global_rotation(&mut self, rotation: &Mat4);
    fn draw(&mut self, call: &DrawCall<'_>) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedDraw {
    pub mode: DrawMode,
    pub vertices: Vec<f32>,
    pub model: Mat4,
    pub rgba: [f32; 4],
}

/// Headless backend that keeps every call of the current frame.
#[derive(Default, Debug)]
pub struct RecordingBackend {
    pub frames: usize,
    pub global_rotation: Mat4,
    pub draws: Vec<RecordedDraw>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderBackend for RecordingBackend {
    fn begin_frame(&mut self) -> Result<()> {
        self.frames += 1;
        self.draws.clear();
        Ok(())
    }

    fn set_global_rotation(&mut self, rotation: &Mat4) {
        self.global_rotation = *rotation;
    }

    fn draw(&mut self, call: &DrawCall<'_>) -> Result<()> {
        self.draws.push(RecordedDraw {
            mode: call.mode,
            vertices: call.vertices.to_vec(),
            model: *call.model,
            rgba: call.rgba(),
        });
        Ok(())
    }
}
