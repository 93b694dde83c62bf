//! Locomotion domain: camera and player spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{
    AnimatorParams, CharacterAnimation, GameLayer, GroundContact, Locomotion, LocomotionConfig,
    Player, PlayerVisual,
};

/// Player collider size in meters.
pub const PLAYER_SIZE: Vec2 = Vec2::new(0.6, 1.2);

/// World units (meters) shown per screen pixel.
const CAMERA_SCALE: f32 = 1.0 / 48.0;

pub(crate) fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<LocomotionConfig>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    commands
        .spawn((
            // Identity & Locomotion
            (
                Player,
                Locomotion::new(&config),
                GroundContact::default(),
                AnimatorParams::default(),
                CharacterAnimation::default(),
            ),
            Transform::from_xyz(0.0, 2.0, 0.0),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0), // Gravity is integrated by the locomotion tick
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                PlayerVisual,
                Sprite {
                    color: Color::srgb(0.9, 0.9, 0.9),
                    custom_size: Some(PLAYER_SIZE),
                    ..default()
                },
                Transform::default(),
            ));
        });

    info!(
        "Spawned player: move={}, sprint={}, launch={:.3}",
        config.move_speed,
        config.sprint_speed,
        config.jump_launch_speed()
    );
}
