//! Locomotion domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{GameLayer, GroundContact, Player};

/// Length of the ground ray below the collider's bottom edge.
const GROUND_PROBE_DISTANCE: f32 = 0.1;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut GroundContact), With<Player>>,
) {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut contact) in &mut query {
        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 0.5,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);

        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            GROUND_PROBE_DISTANCE,
            true,
            &ground_filter,
        );

        contact.grounded = hit.is_some();
    }
}
