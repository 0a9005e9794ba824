// src/scene/mod.rs
pub mod animation;
pub mod assembler;
pub mod camera;
pub mod node;
pub mod state;

pub use animation::{FpsSampler, Phase};
pub use assembler::assemble;
pub use camera::GlobalRotation;
pub use node::{Part, PosedPrimitive};
pub use state::{AnimationClock, Axis, JointAngles, PoseSliders, SceneState, TailJoint};
