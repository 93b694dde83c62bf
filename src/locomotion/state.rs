//! Locomotion domain: integrator state, timers and per-tick intent.

use bevy::prelude::*;
use serde::Serialize;

use super::config::LocomotionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1.0 for right, -1.0 for left
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Ground contact as reported by the physical body on the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Contact {
    #[default]
    Grounded,
    Airborne,
}

impl Contact {
    pub fn from_grounded(grounded: bool) -> Self {
        if grounded {
            Contact::Grounded
        } else {
            Contact::Airborne
        }
    }

    pub fn is_grounded(self) -> bool {
        self == Contact::Grounded
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LocomotionState {
    pub target_horizontal_speed: f32,
    /// Always >= 0; direction is applied when building the displacement
    pub horizontal_speed: f32,
    pub target_vertical_speed: f32,
    pub vertical_speed: f32,
    pub facing: Facing,
}

/// Countdowns driving the jump state machine. Each one is decremented
/// while non-negative, so it settles at most one tick below zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct JumpTimers {
    pub jump_cooldown: f32,
    pub jump_hold: f32,
    pub fall_grace: f32,
}

impl JumpTimers {
    pub fn new(config: &LocomotionConfig) -> Self {
        Self {
            jump_cooldown: config.jump_timeout,
            jump_hold: 0.0,
            fall_grace: config.fall_timeout,
        }
    }
}

/// Everything the integrator owns between ticks.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Locomotion {
    pub state: LocomotionState,
    pub timers: JumpTimers,
    pub contact: Contact,
}

impl Locomotion {
    pub fn new(config: &LocomotionConfig) -> Self {
        Self {
            state: LocomotionState::default(),
            timers: JumpTimers::new(config),
            contact: Contact::Grounded,
        }
    }

    /// Debounced fall signal: off the ground and past the fall grace window.
    pub fn is_falling(&self) -> bool {
        !self.contact.is_grounded() && self.timers.fall_grace <= 0.0
    }
}

/// Movement intent sampled from the player's devices.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct LocomotionInput {
    pub move_axis: Vec2,
    pub jump: bool,
    pub sprint: bool,
    pub crouch: bool,
    /// Scale horizontal speed by |move_axis.x| instead of treating input as digital
    pub analog_movement: bool,
}

/// What the physical body reports at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BodySample {
    pub velocity: Vec3,
    pub grounded: bool,
}

impl BodySample {
    /// Speed in the plane perpendicular to the vertical axis.
    pub fn planar_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }
}
