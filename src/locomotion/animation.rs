//! Animation parameters and the coarse animation state derived from them.
//!
//! The integrator writes named parameters into `AnimatorParams`; the sprite
//! side reads them back and picks an `AnimationState` for the visual child.

use std::collections::HashMap;

use bevy::prelude::*;
use serde::Serialize;

use super::bootstrap::PLAYER_SIZE;
use super::integrator::{AnimationSink, params};
use super::{Player, PlayerVisual};

/// Named float and bool parameters, in the style of an animator controller.
#[derive(Component, Debug, Default, Clone)]
pub struct AnimatorParams {
    floats: HashMap<String, f32>,
    bools: HashMap<String, bool>,
}

impl AnimatorParams {
    pub fn float(&self, name: &str) -> f32 {
        self.floats.get(name).copied().unwrap_or(0.0)
    }

    pub fn bool(&self, name: &str) -> bool {
        self.bools.get(name).copied().unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.floats.is_empty() && self.bools.is_empty()
    }
}

impl AnimationSink for AnimatorParams {
    fn set_float(&mut self, name: &str, value: f32) {
        self.floats.insert(name.to_string(), value);
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.bools.insert(name.to_string(), value);
    }
}

/// Animation states for the player sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Run,
    Jump,
    Fall,
    Crouch,
}

/// Normalized move speed above which walking reads as running.
const RUN_THRESHOLD: f32 = 0.8;

/// Planar speed below which the character reads as standing still.
const IDLE_SPEED: f32 = 0.05;

impl AnimationState {
    pub fn from_params(animator: &AnimatorParams) -> Self {
        if animator.bool(params::FALL) {
            return AnimationState::Fall;
        }
        if !animator.bool(params::GROUNDED) {
            if animator.bool(params::JUMP) {
                return AnimationState::Jump;
            }
            // Brief ground loss inside the fall grace window keeps the ground pose
            return Self::locomotion_pose(animator);
        }
        if animator.bool(params::CROUCH) {
            return AnimationState::Crouch;
        }
        Self::locomotion_pose(animator)
    }

    /// Idle, walk or run from the speed parameters.
    fn locomotion_pose(animator: &AnimatorParams) -> Self {
        if animator.float(params::SPEED) < IDLE_SPEED {
            return AnimationState::Idle;
        }
        if animator.float(params::MOVE_SPEED) > RUN_THRESHOLD {
            AnimationState::Run
        } else {
            AnimationState::Walk
        }
    }

    /// Vertical scale of the visual for this state.
    pub fn height_scale(self) -> f32 {
        match self {
            AnimationState::Crouch => 0.6,
            AnimationState::Jump => 1.1,
            _ => 1.0,
        }
    }

    pub fn tint(self) -> Color {
        match self {
            AnimationState::Idle => Color::srgb(0.9, 0.9, 0.9),
            AnimationState::Walk => Color::srgb(0.85, 0.92, 0.85),
            AnimationState::Run => Color::srgb(0.8, 0.95, 0.8),
            AnimationState::Jump => Color::srgb(0.85, 0.85, 0.98),
            AnimationState::Fall => Color::srgb(0.95, 0.8, 0.8),
            AnimationState::Crouch => Color::srgb(0.9, 0.85, 0.7),
        }
    }
}

/// Current animation state of a character.
#[derive(Component, Debug, Default)]
pub struct CharacterAnimation {
    pub state: AnimationState,
    pub previous_state: AnimationState,
}

impl CharacterAnimation {
    /// Set the state. Returns true when it changed.
    pub fn set_state(&mut self, state: AnimationState) -> bool {
        if self.state == state {
            return false;
        }
        self.previous_state = self.state;
        self.state = state;
        true
    }
}

pub(crate) fn update_animation_state(
    mut query: Query<(&AnimatorParams, &mut CharacterAnimation), With<Player>>,
) {
    for (animator, mut animation) in &mut query {
        if animator.is_empty() {
            continue;
        }
        if animation.set_state(AnimationState::from_params(animator)) {
            debug!(
                "Animation: {:?} -> {:?}",
                animation.previous_state, animation.state
            );
        }
    }
}

pub(crate) fn apply_animation_visuals(
    characters: Query<&CharacterAnimation, With<Player>>,
    mut visuals: Query<(&ChildOf, &mut Transform, &mut Sprite), With<PlayerVisual>>,
) {
    for (child_of, mut transform, mut sprite) in &mut visuals {
        let Ok(animation) = characters.get(child_of.parent()) else {
            continue;
        };
        let height_scale = animation.state.height_scale();
        transform.scale.y = height_scale;
        // Keep the feet on the collider's bottom edge
        transform.translation.y = (height_scale - 1.0) * PLAYER_SIZE.y * 0.5;
        sprite.color = animation.state.tint();
    }
}
