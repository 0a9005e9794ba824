// src/primitives.rs
use crate::backend::{DrawCall, DrawMode, RenderBackend};
use crate::error::Result;
use crate::geometry::{CUBE_TRIANGLES, ConeGeometry, FaceColors, Geometry};
use glam::{Mat4, Vec3};

// --- Shapes ---

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Cube {
        geometry: Geometry,
        colors: FaceColors,
    },
    Cone {
        geometry: ConeGeometry,
        color: Vec3,
    },
}

/// A drawable shape with its own model matrix. Built fresh every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    pub transform: Mat4,
    pub shape: Shape,
}

/// Rotation of `angle_deg` degrees about `axis`; the axis need not be unit
/// length. A zero axis yields the identity.
pub fn rotation(angle_deg: f32, axis: Vec3) -> Mat4 {
    match axis.try_normalize() {
        Some(axis) => Mat4::from_axis_angle(axis, angle_deg.to_radians()),
        None => Mat4::IDENTITY,
    }
}

impl Primitive {
    pub fn cube(transform: Mat4, colors: impl Into<FaceColors>, scale: Vec3) -> Self {
        Self {
            transform,
            shape: Shape::Cube {
                geometry: Geometry::cube(scale),
                colors: colors.into(),
            },
        }
    }

    pub fn cone(transform: Mat4, color: Vec3, radius: f32, height: f32) -> Self {
        Self {
            transform,
            shape: Shape::Cone {
                geometry: ConeGeometry::new(radius, height, ConeGeometry::HAT_SEGMENTS),
                color,
            },
        }
    }

    // Transform edits post-multiply, so later calls act in the local frame.

    pub fn translate(&mut self, offset: Vec3) -> &mut Self {
        self.transform *= Mat4::from_translation(offset);
        self
    }

    pub fn rotate(&mut self, angle_deg: f32, axis: Vec3) -> &mut Self {
        self.transform *= rotation(angle_deg, axis);
        self
    }

    pub fn multiply(&mut self, other: &Mat4) -> &mut Self {
        self.transform *= *other;
        self
    }

    pub fn draw_call_count(&self) -> usize {
        match &self.shape {
            Shape::Cube { .. } => CUBE_TRIANGLES,
            Shape::Cone { .. } => 2,
        }
    }

    pub fn draw_calls(&self) -> Vec<DrawCall<'_>> {
        match &self.shape {
            Shape::Cube { geometry, colors } => (0..CUBE_TRIANGLES)
                .map(|tri| DrawCall {
                    mode: DrawMode::Triangles,
                    vertices: geometry.triangle(tri),
                    model: &self.transform,
                    color: colors.for_triangle(tri),
                })
                .collect(),
            Shape::Cone { geometry, color } => [&geometry.base, &geometry.top]
                .into_iter()
                .map(|fan| DrawCall {
                    mode: DrawMode::TriangleFan,
                    vertices: &fan.vertices,
                    model: &self.transform,
                    color: *color,
                })
                .collect(),
        }
    }

    pub fn render(&self, backend: &mut impl RenderBackend) -> Result<()> {
        for call in self.draw_calls() {
            backend.draw(&call)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;
    use glam::vec3;

    #[test]
    fn cube_renders_one_call_per_triangle() {
        let colors: Vec<Vec3> = (0..8).map(|i| Vec3::splat(i as f32 / 8.0)).collect();
        let cube = Primitive::cube(
            Mat4::IDENTITY,
            FaceColors::per_face(&colors).unwrap(),
            vec3(0.05, 0.05, 0.005),
        );
        let mut backend = RecordingBackend::new();
        cube.render(&mut backend).unwrap();

        assert_eq!(backend.draws.len(), 12);
        for (k, draw) in backend.draws.iter().enumerate() {
            assert_eq!(draw.mode, DrawMode::Triangles);
            assert_eq!(draw.vertices.len(), 9);
            let c = colors[k / 2];
            assert_eq!(draw.rgba, [c.x, c.y, c.z, 1.0]);
        }
    }

    #[test]
    fn cone_renders_two_fans() {
        let t = Mat4::from_translation(vec3(0.0, 0.2, -0.6));
        let hat = Primitive::cone(t, vec3(1.0, 0.3, 0.3), 0.08, 0.16);
        let mut backend = RecordingBackend::new();
        hat.render(&mut backend).unwrap();

        assert_eq!(backend.draws.len(), hat.draw_call_count());
        for draw in &backend.draws {
            assert_eq!(draw.mode, DrawMode::TriangleFan);
            assert_eq!(draw.vertices.len(), 12 * 3);
            assert_eq!(draw.model, t);
            assert_eq!(draw.rgba[3], 1.0);
        }
    }

    #[test]
    fn edits_compose_in_local_frame() {
        let mut p = Primitive::cube(Mat4::IDENTITY, Vec3::ONE, Vec3::ONE);
        p.translate(vec3(1.0, 0.0, 0.0))
            .rotate(90.0, Vec3::Y)
            .translate(vec3(0.0, 0.0, 1.0));
        // local +z after a 90° yaw points along world +x
        let origin = p.transform.transform_point3(Vec3::ZERO);
        assert!((origin - vec3(2.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn rotation_normalizes_axis() {
        let a = rotation(54.17, vec3(0.22, -0.54, -0.81));
        let b = Mat4::from_axis_angle(vec3(0.22, -0.54, -0.81).normalize(), 54.17f32.to_radians());
        assert!(a.abs_diff_eq(b, 1e-6));
        assert_eq!(rotation(0.0, Vec3::ZERO), Mat4::IDENTITY);
    }
}
