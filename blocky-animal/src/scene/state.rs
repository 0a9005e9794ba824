// src/scene/state.rs
use super::camera::GlobalRotation;
use crate::config::{AnimationConfig, ViewerConfig};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct JointAngles {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TailJoint {
    Proximal,
    Mid,
    Distal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Values of the seven sliders on the page, in degrees.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PoseSliders {
    pub rotation: f32,
    pub proximal: JointAngles,
    pub mid: JointAngles,
    pub distal: JointAngles,
}

impl Default for PoseSliders {
    fn default() -> Self {
        Self {
            rotation: 90.0,
            proximal: JointAngles { x: -30.0, y: 0.0 },
            mid: JointAngles { x: -10.0, y: 0.0 },
            distal: JointAngles { x: 0.0, y: -10.0 },
        }
    }
}

impl PoseSliders {
    pub fn joint(&self, joint: TailJoint) -> &JointAngles {
        match joint {
            TailJoint::Proximal => &self.proximal,
            TailJoint::Mid => &self.mid,
            TailJoint::Distal => &self.distal,
        }
    }

    pub fn joint_mut(&mut self, joint: TailJoint) -> &mut JointAngles {
        match joint {
            TailJoint::Proximal => &mut self.proximal,
            TailJoint::Mid => &mut self.mid,
            TailJoint::Distal => &mut self.distal,
        }
    }

    pub fn set(&mut self, joint: TailJoint, axis: Axis, degrees: f32) {
        let angles = self.joint_mut(joint);
        match axis {
            Axis::X => angles.x = degrees,
            Axis::Y => angles.y = degrees,
        }
    }
}

/// Frame counter plus ticks since the last hop trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationClock {
    pub frame: u64,
    pub action_elapsed: u64,
}

impl AnimationClock {
    // Large enough that the viewer starts idle.
    pub const IDLE_ELAPSED: u64 = 10_000_000;
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self {
            frame: 0,
            action_elapsed: Self::IDLE_ELAPSED,
        }
    }
}

/// Everything a frame is assembled from.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneState {
    pub sliders: PoseSliders,
    pub left_legs_deg: f32,
    pub right_legs_deg: f32,
    pub hat_height: f32,
    pub clock: AnimationClock,
    pub global_rotation: GlobalRotation,
    pub animation: AnimationConfig,
}

impl SceneState {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            sliders: config.initial_pose,
            left_legs_deg: 0.0,
            right_legs_deg: 0.0,
            hat_height: 0.0,
            clock: AnimationClock::default(),
            global_rotation: GlobalRotation::new(config.initial_pose.rotation),
            animation: config.animation,
        }
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}
