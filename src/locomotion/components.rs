//! Locomotion domain: components and physics layers for the player body.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Sprite child of the player. Facing mirrors this entity only, so the
/// collider on the parent is never scaled negatively.
#[derive(Component, Debug)]
pub struct PlayerVisual;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Result of the latest ground probe.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct GroundContact {
    pub grounded: bool,
}
