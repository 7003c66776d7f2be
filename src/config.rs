//! # Island Configuration
//!
//! Every tunable constant of the island game lives in [`IslandConfig`]. The
//! defaults reproduce the classic layout: ten shells per round on a five unit
//! island, a one second camera flight and a two second celebration hold.
//!
//! ## Usage
//!
//! ```rust
//! use shell_island::config::IslandConfig;
//!
//! let config = IslandConfig::new()
//!     .with_items_per_round(5)
//!     .with_seed(7)
//!     .build()
//!     .expect("valid config");
//! assert_eq!(config.items_per_round, 5);
//! ```

use std::f32::consts::PI;
use std::ops::Range;

use cgmath::Vector3;

/// Reasons an [`IslandConfig`] is rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("items per round must be at least 1")]
    NoItems,
    #[error("island radius must be greater than 1.0, got {0}")]
    IslandTooSmall(f32),
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("celebration hold must not be negative, got {0}")]
    NegativeHold(f32),
    #[error("drop height range {start}..{end} is empty")]
    EmptyDropRange { start: f32, end: f32 },
    #[error("drop height {start} must be above rest height {rest}")]
    DropBelowRest { start: f32, rest: f32 },
    #[error("invalid {name} bounds: {min}..={max}")]
    InvalidBounds {
        name: &'static str,
        min: f32,
        max: f32,
    },
}

/// Tunables for the island scene, the round flow and the orbit camera
#[derive(Debug, Clone, PartialEq)]
pub struct IslandConfig {
    /// Radius of the sand disc; shells spawn within `island_radius - 1`
    pub island_radius: f32,
    pub items_per_round: u32,
    /// Settled Y of every shell
    pub rest_height: f32,
    /// Spawn heights for shells dropped in at the start of a new round
    pub drop_height: Range<f32>,
    /// Velocity added to a falling shell each frame
    pub gravity_step: f32,

    /// Seconds for one camera flight (out or back)
    pub camera_animation_duration: f32,
    /// Seconds the camera lingers behind the character before flying back
    pub celebration_hold: f32,
    /// Distance behind the character the celebration camera settles at
    pub celebration_offset: f32,
    pub celebration_height: f32,

    pub character_position: Vector3<f32>,
    /// Yaw of the character in radians
    pub character_facing: f32,

    pub camera_eye: Vector3<f32>,
    pub orbit_focus: Vector3<f32>,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Elevation bounds of the orbit camera in radians above the horizon
    pub min_pitch: f32,
    pub max_pitch: f32,
    pub damping_factor: f32,
    /// Radians of orbit per pixel of mouse motion
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    /// Vertical field of view in degrees
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,

    /// Fixed RNG seed for shell placement; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for IslandConfig {
    fn default() -> Self {
        let island_radius = 5.0;
        Self {
            island_radius,
            items_per_round: 10,
            rest_height: 0.5,
            drop_height: 20.0..25.0,
            gravity_step: 0.01,

            camera_animation_duration: 1.0,
            celebration_hold: 2.0,
            celebration_offset: 6.0,
            celebration_height: 8.0,

            // On the shore, facing the palm at the centre
            character_position: Vector3::new(island_radius * 0.8, 0.0, 0.0),
            character_facing: -PI / 2.0,

            camera_eye: Vector3::new(0.0, 8.0, 12.0),
            orbit_focus: Vector3::new(0.0, 0.0, 0.0),
            min_distance: 8.0,
            max_distance: 20.0,
            min_pitch: PI / 6.0,
            max_pitch: PI / 3.0,
            damping_factor: 0.05,
            rotate_speed: 0.0025,
            zoom_speed: 0.7,
            fovy_degrees: 75.0,
            znear: 0.1,
            zfar: 1000.0,

            seed: None,
        }
    }
}

impl IslandConfig {
    /// Start from the default layout
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items_per_round(mut self, count: u32) -> Self {
        self.items_per_round = count;
        self
    }

    pub fn with_island_radius(mut self, radius: f32) -> Self {
        self.island_radius = radius;
        self
    }

    pub fn with_rest_height(mut self, height: f32) -> Self {
        self.rest_height = height;
        self
    }

    pub fn with_drop_height(mut self, range: Range<f32>) -> Self {
        self.drop_height = range;
        self
    }

    pub fn with_gravity_step(mut self, step: f32) -> Self {
        self.gravity_step = step;
        self
    }

    /// Set the camera flight duration and the hold between the two flights
    pub fn with_celebration_timing(mut self, flight: f32, hold: f32) -> Self {
        self.camera_animation_duration = flight;
        self.celebration_hold = hold;
        self
    }

    pub fn with_character(mut self, position: Vector3<f32>, facing: f32) -> Self {
        self.character_position = position;
        self.character_facing = facing;
        self
    }

    pub fn with_camera_eye(mut self, eye: Vector3<f32>) -> Self {
        self.camera_eye = eye;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate and return the finished config
    pub fn build(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items_per_round == 0 {
            return Err(ConfigError::NoItems);
        }
        if self.island_radius <= 1.0 {
            return Err(ConfigError::IslandTooSmall(self.island_radius));
        }

        for (name, value) in [
            ("gravity step", self.gravity_step),
            ("camera animation duration", self.camera_animation_duration),
            ("damping factor", self.damping_factor),
            ("field of view", self.fovy_degrees),
            ("near plane", self.znear),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if !(self.celebration_hold >= 0.0) {
            return Err(ConfigError::NegativeHold(self.celebration_hold));
        }

        let Range { start, end } = self.drop_height;
        if !(start < end) {
            return Err(ConfigError::EmptyDropRange { start, end });
        }
        if start <= self.rest_height {
            return Err(ConfigError::DropBelowRest {
                start,
                rest: self.rest_height,
            });
        }

        for (name, min, max) in [
            ("distance", self.min_distance, self.max_distance),
            ("pitch", self.min_pitch, self.max_pitch),
            ("clip plane", self.znear, self.zfar),
        ] {
            if !(min <= max) {
                return Err(ConfigError::InvalidBounds { name, min, max });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = IslandConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.items_per_round, 10);
        assert_eq!(config.character_position, Vector3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_builder_overrides() {
        let config = IslandConfig::new()
            .with_items_per_round(3)
            .with_celebration_timing(0.5, 1.0)
            .with_seed(42)
            .build()
            .unwrap();

        assert_eq!(config.items_per_round, 3);
        assert_eq!(config.camera_animation_duration, 0.5);
        assert_eq!(config.celebration_hold, 1.0);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            IslandConfig::new().with_items_per_round(0).build(),
            Err(ConfigError::NoItems)
        );
        assert!(matches!(
            IslandConfig::new().with_celebration_timing(0.0, 2.0).build(),
            Err(ConfigError::NonPositive { .. })
        ));
        assert!(matches!(
            IslandConfig::new().with_celebration_timing(1.0, -1.0).build(),
            Err(ConfigError::NegativeHold(_))
        ));
        assert!(matches!(
            IslandConfig::new().with_drop_height(5.0..5.0).build(),
            Err(ConfigError::EmptyDropRange { .. })
        ));
        assert!(matches!(
            IslandConfig::new().with_drop_height(0.2..3.0).build(),
            Err(ConfigError::DropBelowRest { .. })
        ));
        assert!(matches!(
            IslandConfig::new().with_island_radius(1.0).build(),
            Err(ConfigError::IslandTooSmall(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::NonPositive {
            name: "gravity step",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "gravity step must be positive, got -1");
    }
}
