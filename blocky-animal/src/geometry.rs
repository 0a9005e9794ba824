// src/geometry.rs
use crate::error::ConfigError;
use glam::{Vec3, vec3};
use std::f32::consts::PI;

pub const FLOATS_PER_VERTEX: usize = 3;
pub const FLOATS_PER_TRIANGLE: usize = 3 * FLOATS_PER_VERTEX;
pub const CUBE_TRIANGLES: usize = 12;
pub const CUBE_FLOATS: usize = CUBE_TRIANGLES * FLOATS_PER_TRIANGLE;
pub const FACE_COLOR_SLOTS: usize = 8;

// Unit cube corners, indexed by the triples below.
const CUBE_CORNERS: [[f32; 3]; 8] = [
    [0., 0., 0.],
    [0., 0., 1.],
    [0., 1., 0.],
    [0., 1., 1.],
    [1., 0., 0.],
    [1., 0., 1.],
    [1., 1., 0.],
    [1., 1., 1.],
];

// Two triangles per face, in color-slot order.
const CUBE_INDICES: [usize; CUBE_TRIANGLES * 3] = [
    2, 6, 7, 2, 3, 7, // top
    0, 4, 5, 0, 1, 5, // bottom
    0, 2, 6, 0, 4, 6, // left
    1, 3, 7, 1, 5, 7, // right
    0, 2, 3, 0, 1, 3, // front
    4, 6, 7, 4, 5, 7, // back
];

/// One color for the whole shape, or one per face slot.
///
/// Slot order is top, bottom, left, right, front, back; a cube only reads
/// the first six of the eight slots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FaceColors {
    Uniform(Vec3),
    PerFace([Vec3; FACE_COLOR_SLOTS]),
}

impl FaceColors {
    pub fn per_face(colors: &[Vec3]) -> Result<Self, ConfigError> {
        let slots: [Vec3; FACE_COLOR_SLOTS] = colors
            .try_into()
            .map_err(|_| ConfigError::FaceColorCount {
                found: colors.len(),
            })?;
        Ok(FaceColors::PerFace(slots))
    }

    /// Color used for the `triangle`-th triangle of a cube.
    pub fn for_triangle(&self, triangle: usize) -> Vec3 {
        match self {
            FaceColors::Uniform(c) => *c,
            FaceColors::PerFace(slots) => slots[triangle / 2],
        }
    }
}

impl From<Vec3> for FaceColors {
    fn from(color: Vec3) -> Self {
        FaceColors::Uniform(color)
    }
}

/// Flat, non-indexed vertex list: `[x, y, z]` per vertex.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Geometry {
    pub vertices: Vec<f32>,
}

impl Geometry {
    fn push_vertex(&mut self, v: Vec3) {
        self.vertices.extend_from_slice(&[v.x, v.y, v.z]);
    }

    /// Cube centred on the origin spanning `±scale` on each axis.
    pub fn cube(scale: Vec3) -> Self {
        let mut geom = Self {
            vertices: Vec::with_capacity(CUBE_FLOATS),
        };
        for &i in &CUBE_INDICES {
            let corner = Vec3::from_array(CUBE_CORNERS[i]);
            geom.push_vertex((corner - 0.5) * 2.0 * scale);
        }
        geom
    }

    /// Triangle fan: the apex followed by the ring.
    pub fn fan(apex: Vec3, ring: &[Vec3]) -> Self {
        let mut geom = Self {
            vertices: Vec::with_capacity((ring.len() + 1) * FLOATS_PER_VERTEX),
        };
        geom.push_vertex(apex);
        for &p in ring {
            geom.push_vertex(p);
        }
        geom
    }

    /// The `triangle`-th 9-float slice of a triangle list.
    pub fn triangle(&self, triangle: usize) -> &[f32] {
        let start = triangle * FLOATS_PER_TRIANGLE;
        &self.vertices[start..start + FLOATS_PER_TRIANGLE]
    }
}

/// Ring of `segments + 1` points on the XZ plane; the last repeats the first
/// so a fan drawn over it is closed.
pub fn cone_ring(radius: f32, segments: usize) -> Vec<Vec3> {
    (0..=segments)
        .map(|i| {
            let angle = 2.0 * PI / segments as f32 * i as f32;
            vec3(angle.cos() * radius, 0.0, angle.sin() * radius)
        })
        .collect()
}

/// Cone standing on the XZ plane: a base disc fan and a side fan that share
/// one ring.
#[derive(Clone, Debug, PartialEq)]
pub struct ConeGeometry {
    pub base: Geometry,
    pub top: Geometry,
}

impl ConeGeometry {
    pub const HAT_SEGMENTS: usize = 10;

    pub fn new(radius: f32, height: f32, segments: usize) -> Self {
        let ring = cone_ring(radius, segments);
        Self {
            base: Geometry::fan(Vec3::ZERO, &ring),
            top: Geometry::fan(vec3(0.0, height, 0.0), &ring),
        }
    }
}
