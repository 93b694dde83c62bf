//! Locomotion domain: tuning resource and its validation.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::smoothing::smooth_speed;

/// Tuning for the locomotion integrator. Speeds are in m/s, timers in seconds.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Walking speed
    pub move_speed: f32,
    /// Speed while sprint is held
    pub sprint_speed: f32,
    /// Acceleration and deceleration
    pub speed_change_rate: f32,
    /// Divider used to normalize the target speed for animation blending
    pub move_speed_animation: f32,
    /// Jump apex parameter; launch speed is derived from it and gravity
    pub jump_speed: f32,
    /// Ramping of the vertical speed toward its target. Too low and a launch
    /// never outruns gravity on its first tick; see `launch_lift`
    pub jump_change_rate: f32,
    /// Maximum time a jump can be held
    pub jump_duration: f32,
    /// Downward acceleration, positive
    pub gravity: f32,
    /// Time before another jump can trigger. 0 allows an instant re-jump
    pub jump_timeout: f32,
    /// Time off the ground before the fall state is reported
    pub fall_timeout: f32,
    /// Lowest vertical speed a tick may produce, negative
    pub terminal_velocity: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 4.0,
            sprint_speed: 6.0,
            speed_change_rate: 10.0,
            move_speed_animation: 6.0,
            jump_speed: 1.2,
            jump_change_rate: 40.0,
            jump_duration: 0.5,
            gravity: 15.0,
            jump_timeout: 0.1,
            fall_timeout: 0.15,
            terminal_velocity: -53.0,
        }
    }
}

impl LocomotionConfig {
    /// Vertical launch speed that reaches the configured jump apex.
    /// From projectile kinematics: v = sqrt(2 * h * g)
    pub fn jump_launch_speed(&self) -> f32 {
        (2.0 * self.jump_speed * self.gravity).sqrt()
    }

    /// Vertical speed left after the launch tick of a jump from rest, for a
    /// tick of `dt` seconds. Must be positive for the body to leave the ground.
    pub fn launch_lift(&self, dt: f32) -> f32 {
        let eased = smooth_speed(0.0, self.jump_launch_speed(), 1.0, dt * self.jump_change_rate);
        eased - self.gravity * dt
    }

    /// Check every field against the domain the integrator relies on.
    /// Returns all violations, empty if the config is usable.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let non_negative = [
            ("move_speed", self.move_speed),
            ("sprint_speed", self.sprint_speed),
            ("speed_change_rate", self.speed_change_rate),
            ("jump_speed", self.jump_speed),
            ("jump_change_rate", self.jump_change_rate),
            ("jump_duration", self.jump_duration),
            ("gravity", self.gravity),
            ("jump_timeout", self.jump_timeout),
            ("fall_timeout", self.fall_timeout),
        ];

        for (field, value) in non_negative {
            if !value.is_finite() {
                errors.push(ConfigError::NotFinite { field });
            } else if value < 0.0 {
                errors.push(ConfigError::Negative { field, value });
            }
        }

        if !self.move_speed_animation.is_finite() {
            errors.push(ConfigError::NotFinite {
                field: "move_speed_animation",
            });
        } else if self.move_speed_animation <= 0.0 {
            errors.push(ConfigError::NotPositive {
                field: "move_speed_animation",
                value: self.move_speed_animation,
            });
        }

        if !self.terminal_velocity.is_finite() {
            errors.push(ConfigError::NotFinite {
                field: "terminal_velocity",
            });
        } else if self.terminal_velocity > 0.0 {
            errors.push(ConfigError::TerminalVelocityAboveZero(
                self.terminal_velocity,
            ));
        }

        errors
    }
}

/// A single invalid field in a `LocomotionConfig`.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NotFinite { field: &'static str },
    Negative { field: &'static str, value: f32 },
    NotPositive { field: &'static str, value: f32 },
    TerminalVelocityAboveZero(f32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFinite { field } => write!(f, "'{}' must be finite", field),
            ConfigError::Negative { field, value } => {
                write!(f, "'{}' must be >= 0, got {}", field, value)
            }
            ConfigError::NotPositive { field, value } => {
                write!(f, "'{}' must be > 0, got {}", field, value)
            }
            ConfigError::TerminalVelocityAboveZero(value) => {
                write!(f, "'terminal_velocity' must be <= 0, got {}", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
