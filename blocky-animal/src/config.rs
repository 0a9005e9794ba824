// src/config.rs
use crate::error::ConfigError;
use crate::scene::PoseSliders;
use serde::Deserialize;

/// Everything the host page may override. Missing keys keep their defaults,
/// so `{}` is a valid config.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    pub animation: AnimationConfig,
    /// Slider values at load; `rotation` is also the starting yaw.
    pub initial_pose: PoseSliders,
    pub clear_color: [f32; 4],
    pub canvas_id: String,
    pub log_level: String,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Launch velocity of the hat hop.
    pub velocity: f32,
    /// Ticks per unit of hop time.
    pub speed: f32,
    /// Idle sway phase is `frame / sway_divisor` radians.
    pub sway_divisor: f32,
    pub tick_interval_ms: i32,
    pub fps_window_ms: i32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            velocity: 1.0,
            speed: 100.0,
            sway_divisor: 30.0,
            tick_interval_ms: 10,
            fps_window_ms: 500,
        }
    }
}

impl AnimationConfig {
    /// Action-elapsed ticks after which the driver falls back to Idle.
    pub fn action_threshold(&self) -> f32 {
        self.speed * self.velocity / 5.0
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            animation: AnimationConfig::default(),
            initial_pose: PoseSliders::default(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            canvas_id: "webgl".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: ViewerConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let anim = &self.animation;
        let checks: [(&'static str, f64); 5] = [
            ("animation.velocity", anim.velocity as f64),
            ("animation.speed", anim.speed as f64),
            ("animation.sway_divisor", anim.sway_divisor as f64),
            ("animation.tick_interval_ms", anim.tick_interval_ms as f64),
            ("animation.fps_window_ms", anim.fps_window_ms as f64),
        ];
        for (field, value) in checks {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_json_is_the_default_config() {
        let config = ViewerConfig::from_json("{}").unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.animation.action_threshold(), 20.0);
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let json = r#"{ "animation": { "speed": 50 }, "initial_pose": { "rotation": 0 } }"#;
        let config = ViewerConfig::from_json(json).unwrap();
        assert_eq!(config.animation.speed, 50.0);
        assert_eq!(config.animation.velocity, 1.0);
        assert_eq!(config.animation.tick_interval_ms, 10);
        assert_eq!(config.initial_pose.rotation, 0.0);
        assert_eq!(config.initial_pose.proximal, PoseSliders::default().proximal);
    }

    #[test]
    fn rejects_non_positive_timing() {
        let err = ViewerConfig::from_json(r#"{ "animation": { "fps_window_ms": 0 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                field: "animation.fps_window_ms",
                ..
            }
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ViewerConfig::from_json("{ animation").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = ViewerConfig {
            log_level: "chatty".into(),
            ..ViewerConfig::default()
        };
        assert_eq!(config.log_level(), log::LevelFilter::Info);

        let config = ViewerConfig {
            log_level: "debug".into(),
            ..ViewerConfig::default()
        };
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }
}
