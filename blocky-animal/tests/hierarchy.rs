use blocky_animal::scene::assembler::{
    BACK_TOE_OFFSET, BODY_CENTER, FRONT_TOE_OFFSET, LEG_PIVOT, posed_leg, toe_of,
};
use blocky_animal::scene::{Part, PosedPrimitive, SceneState, assemble};
use glam::{Mat4, Vec3, vec3};

fn transform_of(parts: &[PosedPrimitive], part: Part) -> Mat4 {
    parts
        .iter()
        .find(|p| p.part == part)
        .map(|p| p.primitive.transform)
        .unwrap_or_else(|| panic!("{} missing", part.name()))
}

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-5
}

#[test]
fn swinging_legs_leaves_the_body_alone() {
    let mut state = SceneState::default();
    let still = assemble(&state);
    state.left_legs_deg = 20.0;
    state.right_legs_deg = -15.0;
    let swung = assemble(&state);

    assert_eq!(
        transform_of(&still, Part::Body),
        transform_of(&swung, Part::Body)
    );
    assert_eq!(
        transform_of(&swung, Part::Body),
        Mat4::from_translation(BODY_CENTER)
    );
    assert_ne!(
        transform_of(&still, Part::LeftBackLeg),
        transform_of(&swung, Part::LeftBackLeg)
    );
}

#[test]
fn legs_hinge_at_the_hip() {
    let center = vec3(-0.086, -0.178, -0.015);
    let hip = center + LEG_PIVOT;
    for angle in [-20.0, -5.0, 0.0, 12.5, 20.0] {
        let leg = posed_leg(center, angle);
        // the hip point in the leg's local frame stays put
        assert!(close(leg.transform.transform_point3(LEG_PIVOT), hip), "{angle}");
    }
    let leg = posed_leg(center, 20.0);
    assert!(!close(leg.transform.transform_point3(Vec3::ZERO), center));
}

#[test]
fn toes_move_rigidly_with_their_leg() {
    for angle in [-20.0, 0.0, 7.0, 20.0] {
        let mut state = SceneState::default();
        state.left_legs_deg = angle;
        state.right_legs_deg = -angle;
        let parts = assemble(&state);

        for (leg, toe, offset) in [
            (Part::LeftBackLeg, Part::LeftBackToe, BACK_TOE_OFFSET),
            (Part::LeftFrontLeg, Part::LeftFrontToe, FRONT_TOE_OFFSET),
            (Part::RightFrontLeg, Part::RightFrontToe, FRONT_TOE_OFFSET),
            (Part::RightBackLeg, Part::RightBackToe, BACK_TOE_OFFSET),
        ] {
            let leg_m = transform_of(&parts, leg);
            let toe_m = transform_of(&parts, toe);
            let anchor = leg_m.transform_point3(offset);
            assert!(close(toe_m.transform_point3(Vec3::ZERO), anchor));
            assert!(toe_m.abs_diff_eq(leg_m * Mat4::from_translation(offset), 1e-6));
        }
    }
}

#[test]
fn toe_copies_leg_without_aliasing() {
    let leg = posed_leg(vec3(0.086, -0.178, -0.455), 10.0);
    let before = leg.transform;
    let toe = toe_of(&leg, FRONT_TOE_OFFSET);
    assert_eq!(leg.transform, before);
    assert_ne!(toe.transform, leg.transform);
}

#[test]
fn legs_on_one_side_share_a_swing() {
    let mut state = SceneState::default();
    state.left_legs_deg = 18.0;
    state.right_legs_deg = 0.0;
    let parts = assemble(&state);

    let rotation_of = |part| {
        let (_, rot, _) = transform_of(&parts, part).to_scale_rotation_translation();
        rot
    };
    assert!(rotation_of(Part::LeftBackLeg).abs_diff_eq(rotation_of(Part::LeftFrontLeg), 1e-6));
    assert!(rotation_of(Part::RightBackLeg).abs_diff_eq(glam::Quat::IDENTITY, 1e-6));
}
