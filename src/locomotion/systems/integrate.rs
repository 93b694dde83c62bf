//! Locomotion domain: fixed-tick integration against the avian2d body.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{
    AnimatorParams, ContactTransition, GroundContact, Locomotion, LocomotionConfig,
    LocomotionInput, PhysicalBody, Player, PlayerVisual, drive,
};

/// `PhysicalBody` over an avian2d dynamic body.
///
/// avian2d integrates velocity itself, so a displacement is handed over as
/// the velocity that covers it in one tick.
pub struct AvianBody<'a> {
    pub velocity: &'a mut LinearVelocity,
    pub grounded: bool,
    pub dt: f32,
}

impl PhysicalBody for AvianBody<'_> {
    fn velocity(&self) -> Vec3 {
        self.velocity.0.extend(0.0)
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_by(&mut self, displacement: Vec3) {
        if self.dt <= 0.0 {
            return;
        }
        self.velocity.0 = displacement.truncate() / self.dt;
    }
}

pub(crate) fn integrate_locomotion(
    time: Res<Time>,
    config: Res<LocomotionConfig>,
    input: Res<LocomotionInput>,
    mut query: Query<
        (
            &mut Locomotion,
            &GroundContact,
            &mut LinearVelocity,
            Option<&mut AnimatorParams>,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (mut locomotion, contact, mut velocity, mut animator) in &mut query {
        let mut body = AvianBody {
            velocity: &mut *velocity,
            grounded: contact.grounded,
            dt,
        };

        let output = drive(
            &mut *locomotion,
            &config,
            &input,
            &mut body,
            animator.as_deref_mut(),
            dt,
        );

        if output.jumped {
            debug!(
                "Jump: launch={:.3}, hold={:.3}",
                locomotion.state.target_vertical_speed, locomotion.timers.jump_hold
            );
        }
        match output.transition {
            Some(ContactTransition::Landed) => {
                debug!("Landed: vertical_speed={:.3}", locomotion.state.vertical_speed)
            }
            Some(ContactTransition::LeftGround) => debug!(
                "Left ground: fall_grace={:.3}",
                locomotion.timers.fall_grace
            ),
            None => {}
        }
    }
}

/// Mirror the visual child along X to match facing.
pub(crate) fn apply_facing(
    bodies: Query<&Locomotion, With<Player>>,
    mut visuals: Query<(&ChildOf, &mut Transform), With<PlayerVisual>>,
) {
    for (child_of, mut transform) in &mut visuals {
        let Ok(locomotion) = bodies.get(child_of.parent()) else {
            continue;
        };
        transform.scale.x = locomotion.state.facing.sign() * transform.scale.x.abs();
    }
}
