//! Debug domain: overlay state and the locomotion snapshot.

use bevy::prelude::*;
use serde::Serialize;

use crate::locomotion::{AnimationState, Locomotion};

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the overlay panel is visible
    pub ui_visible: bool,
    /// Number of snapshots logged this session
    pub snapshots_logged: u32,
}

/// Serializable view of the player's locomotion at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct LocomotionSnapshot {
    pub position: [f32; 2],
    pub locomotion: Locomotion,
    pub falling: bool,
    pub animation: AnimationState,
}

impl LocomotionSnapshot {
    pub fn new(position: Vec2, locomotion: &Locomotion, animation: AnimationState) -> Self {
        Self {
            position: position.to_array(),
            locomotion: *locomotion,
            falling: locomotion.is_falling(),
            animation,
        }
    }

    /// Multi-line summary shown in the overlay panel.
    pub fn summary(&self) -> String {
        let state = &self.locomotion.state;
        let timers = &self.locomotion.timers;
        format!(
            "Pos: ({:.2}, {:.2})\nContact: {:?}  Facing: {:?}\nH speed: {:.3} -> {:.3}\nV speed: {:.3} -> {:.3}\nCooldown: {:.3}  Hold: {:.3}\nFall grace: {:.3}  Falling: {}\nAnim: {:?}",
            self.position[0],
            self.position[1],
            self.locomotion.contact,
            state.facing,
            state.horizontal_speed,
            state.target_horizontal_speed,
            state.vertical_speed,
            state.target_vertical_speed,
            timers.jump_cooldown,
            timers.jump_hold,
            timers.fall_grace,
            self.falling,
            self.animation,
        )
    }
}
