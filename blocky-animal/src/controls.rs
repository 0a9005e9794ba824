// src/controls.rs
use crate::scene::{Axis, PoseSliders, SceneState, TailJoint};

/// `MouseEvent.buttons` while only the primary button is held.
pub const PRIMARY_BUTTON: u16 = 1;

pub const ROTATION_SLIDER_ID: &str = "Rotation";

pub const POSE_SLIDERS: [(&str, TailJoint, Axis); 6] = [
    ("proxTX", TailJoint::Proximal, Axis::X),
    ("proxTY", TailJoint::Proximal, Axis::Y),
    ("midTX", TailJoint::Mid, Axis::X),
    ("midTY", TailJoint::Mid, Axis::Y),
    ("distTX", TailJoint::Distal, Axis::X),
    ("distTY", TailJoint::Distal, Axis::Y),
];

/// Sliders the animation driver writes each tick, with their current values.
/// The others only ever change from the page, so they are never written back.
pub fn animated_sliders(
    sliders: &PoseSliders,
) -> impl Iterator<Item = (&'static str, f32)> + '_ {
    POSE_SLIDERS
        .iter()
        .filter(|(_, _, axis)| *axis == Axis::Y)
        .map(|&(id, joint, _)| (id, sliders.joint(joint).y))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer moved over the rotation slider.
    RotationSlider { buttons: u16, degrees: f32 },
    /// Pointer moved over the canvas; deltas in CSS pixels.
    CanvasDrag {
        buttons: u16,
        movement_x: f32,
        movement_y: f32,
    },
    CanvasPointerDown { shift_key: bool },
    /// Pointer moved over one of the tail sliders.
    PoseSlider {
        buttons: u16,
        joint: TailJoint,
        axis: Axis,
        degrees: f32,
    },
    /// The rotation slider's value changed, by pointer or keyboard.
    RotationInput { degrees: f32 },
    /// A tail slider's value changed, by pointer or keyboard.
    PoseInput {
        joint: TailJoint,
        axis: Axis,
        degrees: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    /// State changed; draw now instead of waiting for the next tick.
    Render,
    /// Hop started; the next tick picks it up.
    Triggered,
    Ignored,
}

pub fn handle(event: InputEvent, state: &mut SceneState) -> Response {
    match event {
        InputEvent::RotationSlider { buttons, degrees } => {
            if buttons != PRIMARY_BUTTON {
                return Response::Ignored;
            }
            state.sliders.rotation = degrees;
            state.global_rotation.set_rotate(degrees);
            Response::Render
        }
        InputEvent::CanvasDrag {
            buttons,
            movement_x,
            movement_y,
        } => {
            if buttons != PRIMARY_BUTTON {
                return Response::Ignored;
            }
            state.global_rotation.drag(movement_x, movement_y);
            Response::Render
        }
        InputEvent::CanvasPointerDown { shift_key } => {
            if !shift_key {
                return Response::Ignored;
            }
            log::debug!("hop triggered at frame {}", state.clock.frame);
            state.clock.trigger();
            Response::Triggered
        }
        InputEvent::PoseSlider {
            buttons,
            joint,
            axis,
            degrees,
        } => {
            if buttons != PRIMARY_BUTTON {
                return Response::Ignored;
            }
            state.sliders.set(joint, axis, degrees);
            Response::Render
        }
        InputEvent::RotationInput { degrees } => {
            state.sliders.rotation = degrees;
            state.global_rotation.set_rotate(degrees);
            Response::Render
        }
        InputEvent::PoseInput {
            joint,
            axis,
            degrees,
        } => {
            state.sliders.set(joint, axis, degrees);
            Response::Render
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    #[test]
    fn only_tail_y_sliders_are_written_back() {
        let mut state = SceneState::default();
        state.sliders.mid.y = 12.0;
        let written: Vec<_> = animated_sliders(&state.sliders).collect();
        assert_eq!(written, vec![("proxTY", 0.0), ("midTY", 12.0), ("distTY", -10.0)]);
    }

    #[test]
    fn value_changes_apply_without_a_held_button() {
        let mut state = SceneState::default();
        let response = handle(
            InputEvent::PoseInput {
                joint: TailJoint::Proximal,
                axis: Axis::X,
                degrees: 15.0,
            },
            &mut state,
        );
        assert_eq!(response, Response::Render);
        assert_eq!(state.sliders.proximal.x, 15.0);

        let response = handle(InputEvent::RotationInput { degrees: 30.0 }, &mut state);
        assert_eq!(response, Response::Render);
        assert_eq!(state.sliders.rotation, 30.0);
        let expected = Mat4::from_rotation_y(30f32.to_radians());
        assert!(state.global_rotation.matrix().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn hover_without_button_is_ignored() {
        let mut state = SceneState::default();
        let before = state.clone();
        for buttons in [0, 2, 3] {
            let events = [
                InputEvent::RotationSlider { buttons, degrees: 10.0 },
                InputEvent::CanvasDrag {
                    buttons,
                    movement_x: 4.0,
                    movement_y: 4.0,
                },
                InputEvent::PoseSlider {
                    buttons,
                    joint: TailJoint::Mid,
                    axis: Axis::X,
                    degrees: 40.0,
                },
            ];
            for event in events {
                assert_eq!(handle(event, &mut state), Response::Ignored);
            }
        }
        assert_eq!(state, before);
    }

    #[test]
    fn rotation_slider_sets_absolute_yaw() {
        let mut state = SceneState::default();
        handle(
            InputEvent::CanvasDrag {
                buttons: 1,
                movement_x: 30.0,
                movement_y: 5.0,
            },
            &mut state,
        );
        let response = handle(
            InputEvent::RotationSlider {
                buttons: 1,
                degrees: -45.0,
            },
            &mut state,
        );
        assert_eq!(response, Response::Render);
        let expected = Mat4::from_rotation_y((-45f32).to_radians());
        assert!(state.global_rotation.matrix().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn canvas_drag_accumulates() {
        let mut state = SceneState::default();
        let start = *state.global_rotation.matrix();
        let drag = InputEvent::CanvasDrag {
            buttons: 1,
            movement_x: 10.0,
            movement_y: 0.0,
        };
        handle(drag, &mut state);
        handle(drag, &mut state);
        let expected = start * Mat4::from_rotation_y((-20f32).to_radians());
        assert!(state.global_rotation.matrix().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn shift_click_restarts_the_hop() {
        let mut state = SceneState::default();
        assert_eq!(
            handle(InputEvent::CanvasPointerDown { shift_key: false }, &mut state),
            Response::Ignored
        );
        assert_ne!(state.clock.action_elapsed, 0);

        assert_eq!(
            handle(InputEvent::CanvasPointerDown { shift_key: true }, &mut state),
            Response::Triggered
        );
        assert_eq!(state.clock.action_elapsed, 0);
    }

    #[test]
    fn pose_slider_sets_one_joint() {
        let mut state = SceneState::default();
        let response = handle(
            InputEvent::PoseSlider {
                buttons: 1,
                joint: TailJoint::Distal,
                axis: Axis::X,
                degrees: 33.0,
            },
            &mut state,
        );
        assert_eq!(response, Response::Render);
        assert_eq!(state.sliders.distal.x, 33.0);
        assert_eq!(state.sliders.distal.y, -10.0);
    }
}
