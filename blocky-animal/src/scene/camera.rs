// src/scene/camera.rs
use crate::primitives::rotation;
use glam::{Mat4, Vec3};

/// Whole-model rotation fed to `u_GlobalRotateMatrix`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobalRotation {
    matrix: Mat4,
}

impl GlobalRotation {
    pub fn new(yaw_deg: f32) -> Self {
        Self {
            matrix: rotation(yaw_deg, Vec3::Y),
        }
    }

    /// Replaces the matrix with a pure yaw (rotation slider).
    pub fn set_rotate(&mut self, yaw_deg: f32) {
        self.matrix = rotation(yaw_deg, Vec3::Y);
    }

    /// Post-multiplies a relative rotation.
    pub fn rotate(&mut self, angle_deg: f32, axis: Vec3) {
        self.matrix *= rotation(angle_deg, axis);
    }

    /// Canvas drag: one degree per pixel, yaw then pitch.
    pub fn drag(&mut self, movement_x: f32, movement_y: f32) {
        self.rotate(-movement_x, Vec3::Y);
        self.rotate(-movement_y, Vec3::X);
    }

    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }
}
