//! Locomotion domain: test room for exercising the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{GameLayer, Ground, Wall};

fn spawn_block<M: Component>(
    commands: &mut Commands,
    marker: M,
    layers: CollisionLayers,
    color: Color,
    size: Vec2,
    position: Vec2,
) {
    commands.spawn((
        marker,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        layers,
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Floor
    spawn_block(
        &mut commands,
        Ground,
        ground_layers,
        ground_color,
        Vec2::new(20.0, 1.0),
        Vec2::new(0.0, -4.5),
    );

    // Walls
    for x in [-10.5, 10.5] {
        spawn_block(
            &mut commands,
            Wall,
            wall_layers,
            wall_color,
            Vec2::new(1.0, 12.0),
            Vec2::new(x, 1.0),
        );
    }

    // Stairs, for the fall grace window
    for step in 0..4 {
        let step = step as f32;
        spawn_block(
            &mut commands,
            Ground,
            ground_layers,
            platform_color,
            Vec2::new(1.0, 0.25),
            Vec2::new(3.0 + step, -3.875 + step * 0.25),
        );
    }

    // Platforms
    spawn_block(
        &mut commands,
        Ground,
        ground_layers,
        platform_color,
        Vec2::new(3.0, 0.4),
        Vec2::new(-5.0, -2.0),
    );
    spawn_block(
        &mut commands,
        Ground,
        ground_layers,
        platform_color,
        Vec2::new(3.0, 0.4),
        Vec2::new(-1.0, -0.5),
    );

    info!("Spawned locomotion test room");
}
