//! Locomotion domain: fixed-tick character movement.
//!
//! Input is sampled every frame in `Update`; ground probing, integration and
//! facing run in `FixedUpdate`; animation state follows in `Update`.

mod animation;
mod bootstrap;
mod components;
mod config;
mod dev;
mod integrator;
mod loader;
mod smoothing;
mod state;
mod systems;

use bevy::prelude::*;

pub use animation::{AnimationState, AnimatorParams, CharacterAnimation};
pub use bootstrap::PLAYER_SIZE;
pub use components::{GameLayer, Ground, GroundContact, Player, PlayerVisual, Wall};
pub use config::{ConfigError, LocomotionConfig};
pub use integrator::{
    AnimationSignals, AnimationSink, ContactTransition, PhysicalBody, TickOutput, drive,
    horizontal_direction, next_facing, params, target_horizontal_speed, tick,
};
pub use loader::{
    ConfigLoadError, LOCOMOTION_CONFIG_PATH, load_locomotion_config, parse_locomotion_config,
};
pub use smoothing::{QUANTIZE_SCALE, SPEED_DEAD_ZONE, quantize, smooth_speed};
pub use state::{BodySample, Contact, Facing, JumpTimers, Locomotion, LocomotionInput, LocomotionState};
pub use systems::integrate::AvianBody;

use animation::{apply_animation_visuals, update_animation_state};
use systems::{apply_facing, detect_ground, integrate_locomotion, read_input};

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionConfig>()
            .init_resource::<LocomotionInput>()
            .add_systems(
                Startup,
                (
                    loader::load_locomotion_config_system,
                    bootstrap::spawn_camera,
                    dev::spawn_test_room,
                    bootstrap::spawn_player,
                )
                    .chain(),
            )
            .add_systems(Update, read_input)
            .add_systems(
                FixedUpdate,
                (detect_ground, integrate_locomotion, apply_facing).chain(),
            )
            .add_systems(
                Update,
                (update_animation_state, apply_animation_visuals)
                    .chain()
                    .after(read_input),
            );
    }
}
