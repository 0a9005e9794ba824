// src/scene/assembler.rs
// Builds the cat from scratch for one frame. Children copy their parent's
// matrix by value, so posing a child never moves its parent.
use super::node::{Part, PosedPrimitive};
use super::state::SceneState;
use crate::geometry::{FACE_COLOR_SLOTS, FaceColors};
use crate::primitives::Primitive;
use glam::{Mat4, Vec3, vec3};

pub mod palette {
    use glam::{Vec3, vec3};

    pub const FUR_LIGHT: Vec3 = vec3(255. / 255., 153. / 255., 20. / 255.);
    pub const FUR_DARK: Vec3 = vec3(173. / 255., 104. / 255., 14. / 255.);
    pub const TOE: Vec3 = FUR_LIGHT;
    pub const BLACK: Vec3 = vec3(0., 0., 0.);
    pub const NOSE: Vec3 = vec3(235. / 255., 89. / 255., 121. / 255.);
    pub const HAT: Vec3 = vec3(1., 0.3, 0.3);
}

// --- Tail ---

const PROXIMAL_LEN: f32 = 0.08;
const MID_LEN: f32 = 0.085;
const DISTAL_LEN: f32 = 0.09;

// --- Legs ---

pub const LEG_SCALE: Vec3 = vec3(0.03, 0.1, 0.03);
/// Hip hinge, relative to the leg's centre.
pub const LEG_PIVOT: Vec3 = vec3(0.0, 0.07, 0.015);
pub const BACK_TOE_OFFSET: Vec3 = vec3(0.0, -0.254 + 0.178, -0.040);
pub const FRONT_TOE_OFFSET: Vec3 = vec3(0.0, -0.254 + 0.178, -0.494 + 0.455);
const TOE_SCALE: Vec3 = vec3(0.03, 0.02, 0.03);

pub const BODY_CENTER: Vec3 = vec3(0.0, -0.014, -0.238);
pub const HAT_BASE: Vec3 = vec3(0.0, 0.2, -0.6);

fn cube(colors: impl Into<FaceColors>, scale: Vec3) -> Primitive {
    Primitive::cube(Mat4::IDENTITY, colors, scale)
}

fn place(colors: impl Into<FaceColors>, scale: Vec3, at: Vec3) -> Primitive {
    let mut p = cube(colors, scale);
    p.translate(at);
    p
}

/// Leg hinged at the hip by `swing_deg` about the lateral axis.
pub fn posed_leg(center: Vec3, swing_deg: f32) -> Primitive {
    let mut leg = cube(palette::FUR_DARK, LEG_SCALE);
    leg.translate(center)
        .translate(LEG_PIVOT)
        .rotate(swing_deg, Vec3::X)
        .translate(-LEG_PIVOT);
    leg
}

/// Toe riding on a posed leg.
pub fn toe_of(leg: &Primitive, offset: Vec3) -> Primitive {
    let mut toe = Primitive::cube(leg.transform, palette::TOE, TOE_SCALE);
    toe.translate(offset);
    toe
}

fn ear_colors() -> FaceColors {
    let mut slots = [palette::FUR_DARK; FACE_COLOR_SLOTS];
    slots[2] = palette::NOSE;
    FaceColors::PerFace(slots)
}

/// The whole model for the current pose, in draw order.
pub fn assemble(state: &SceneState) -> Vec<PosedPrimitive> {
    let s = &state.sliders;

    let mut proximal_tail = cube(palette::FUR_LIGHT, vec3(0.03, 0.03, PROXIMAL_LEN));
    proximal_tail
        .translate(vec3(0.008, 0.025, 0.06))
        .rotate(s.proximal.y, Vec3::Y)
        .rotate(s.proximal.x, Vec3::X)
        .translate(vec3(0.0, 0.0, PROXIMAL_LEN / 2.0));

    let mut mid_tail = cube(palette::FUR_DARK, vec3(0.025, 0.025, MID_LEN));
    mid_tail
        .multiply(&proximal_tail.transform)
        .translate(vec3(0.0, 0.0, 0.13 - MID_LEN / 2.0))
        .rotate(s.mid.y, Vec3::Y)
        .rotate(s.mid.x, Vec3::X)
        .translate(vec3(0.0, 0.0, MID_LEN / 2.0));

    let mut distal_tail = cube(palette::FUR_LIGHT, vec3(0.02, 0.02, DISTAL_LEN));
    distal_tail
        .multiply(&mid_tail.transform)
        .translate(vec3(0.0, 0.0, 0.14 - DISTAL_LEN / 2.0))
        .rotate(s.distal.y, Vec3::Y)
        .rotate(s.distal.x, Vec3::X)
        .translate(vec3(0.0, 0.0, DISTAL_LEN / 2.0));

    let head = place(palette::FUR_LIGHT, Vec3::splat(0.13), vec3(0.0, 0.086, -0.627));

    let ear_scale = vec3(0.05, 0.05, 0.005);
    let mut left_ear = place(ear_colors(), ear_scale, vec3(-0.06, 0.196, -0.707));
    left_ear.rotate(54.17, vec3(0.22, -0.54, -0.81));
    let mut right_ear = place(ear_colors(), ear_scale, vec3(0.06, 0.196, -0.707));
    right_ear.rotate(54.17, vec3(-0.22, 0.54, -0.81));

    let eye_scale = vec3(0.01, 0.03, 0.0);
    let left_eye = place(palette::BLACK, eye_scale, vec3(-0.064, 0.142, -0.763));
    let right_eye = place(palette::BLACK, eye_scale, vec3(0.064, 0.142, -0.763));

    let whisker_scale = vec3(0.01, 0.04, 0.0);
    let whisker = |at: Vec3, angle: f32, axis: Vec3| {
        let mut w = place(palette::BLACK, whisker_scale, at);
        w.rotate(angle, axis);
        w
    };
    let left_bottom_whisker = whisker(vec3(-0.124, 0.037, -0.763), 73.32, Vec3::NEG_Z);
    let left_top_whisker = whisker(vec3(-0.124, 0.086, -0.763), 73.32, Vec3::Z);
    let right_bottom_whisker = whisker(vec3(0.124, 0.037, -0.763), 106.68, Vec3::NEG_Z);
    let right_top_whisker = whisker(vec3(0.124, 0.086, -0.763), 106.69, Vec3::Z);

    let nose_top = place(palette::NOSE, vec3(0.03, 0.01, 0.0), vec3(0.0, 0.072, -0.765));
    let nose_bottom = place(palette::NOSE, vec3(0.01, 0.01, 0.0), vec3(0.0, 0.049, -0.765));

    let mut party_hat = Primitive::cone(Mat4::IDENTITY, palette::HAT, 0.08, 0.16);
    party_hat.translate(HAT_BASE + vec3(0.0, state.hat_height, 0.0));

    let body = place(palette::FUR_LIGHT, vec3(0.12, 0.07, 0.26), BODY_CENTER);

    let left_back_leg = posed_leg(vec3(-0.086, -0.178, -0.015), state.left_legs_deg);
    let left_back_toe = toe_of(&left_back_leg, BACK_TOE_OFFSET);
    let left_front_leg = posed_leg(vec3(-0.086, -0.178, -0.455), state.left_legs_deg);
    let left_front_toe = toe_of(&left_front_leg, FRONT_TOE_OFFSET);
    let right_front_leg = posed_leg(vec3(0.086, -0.178, -0.455), state.right_legs_deg);
    let right_front_toe = toe_of(&right_front_leg, FRONT_TOE_OFFSET);
    let right_back_leg = posed_leg(vec3(0.086, -0.178, -0.015), state.right_legs_deg);
    let right_back_toe = toe_of(&right_back_leg, BACK_TOE_OFFSET);

    let primitives = [
        proximal_tail,
        mid_tail,
        distal_tail,
        head,
        left_ear,
        left_eye,
        left_bottom_whisker,
        left_top_whisker,
        nose_top,
        nose_bottom,
        right_ear,
        right_eye,
        right_bottom_whisker,
        right_top_whisker,
        body,
        left_back_leg,
        left_front_leg,
        right_front_toe,
        right_back_leg,
        right_front_leg,
        left_front_toe,
        left_back_toe,
        right_back_toe,
        party_hat,
    ];

    Part::DRAW_ORDER
        .into_iter()
        .zip(primitives)
        .map(|(part, primitive)| PosedPrimitive { part, primitive })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Shape;

    fn find(parts: &[PosedPrimitive], part: Part) -> &Primitive {
        &parts
            .iter()
            .find(|p| p.part == part)
            .expect("part is assembled")
            .primitive
    }

    #[test]
    fn every_part_once_in_draw_order() {
        let parts = assemble(&SceneState::default());
        let order: Vec<Part> = parts.iter().map(|p| p.part).collect();
        assert_eq!(order, Part::DRAW_ORDER.to_vec());
    }

    #[test]
    fn only_the_hat_is_a_cone() {
        let parts = assemble(&SceneState::default());
        for p in &parts {
            let is_cone = matches!(p.primitive.shape, Shape::Cone { .. });
            assert_eq!(is_cone, p.part == Part::PartyHat, "{}", p.part.name());
        }
    }

    #[test]
    fn hat_rides_on_hop_height() {
        let mut state = SceneState::default();
        state.hat_height = 0.05;
        let parts = assemble(&state);
        let hat = find(&parts, Part::PartyHat);
        let origin = hat.transform.transform_point3(Vec3::ZERO);
        assert!((origin - vec3(0.0, 0.25, -0.6)).length() < 1e-6);
    }

    #[test]
    fn ears_have_a_pink_inner_face() {
        let parts = assemble(&SceneState::default());
        let Shape::Cube { colors, .. } = &find(&parts, Part::LeftEar).shape else {
            panic!("ear is a cube");
        };
        assert_eq!(colors.for_triangle(4), palette::NOSE);
        assert_eq!(colors.for_triangle(0), palette::FUR_DARK);
    }

    #[test]
    fn tail_segments_chain_end_to_end() {
        let mut state = SceneState::default();
        state.sliders.proximal = Default::default();
        state.sliders.mid = Default::default();
        state.sliders.distal = Default::default();
        let parts = assemble(&state);

        let centre = |part| find(&parts, part).transform.transform_point3(Vec3::ZERO);
        let prox = centre(Part::ProximalTail);
        let mid = centre(Part::MidTail);
        let dist = centre(Part::DistalTail);
        assert!((prox - vec3(0.008, 0.025, 0.1)).length() < 1e-6);
        assert!((mid.z - prox.z - 0.13).abs() < 1e-6);
        assert!((dist.z - mid.z - 0.14).abs() < 1e-6);
    }

    #[test]
    fn tail_follows_proximal_joint() {
        let mut state = SceneState::default();
        let before = assemble(&state);
        state.sliders.proximal.y += 30.0;
        let after = assemble(&state);

        for part in [Part::ProximalTail, Part::MidTail, Part::DistalTail] {
            assert_ne!(find(&before, part).transform, find(&after, part).transform);
        }
        assert_eq!(
            find(&before, Part::Head).transform,
            find(&after, Part::Head).transform
        );
    }
}
