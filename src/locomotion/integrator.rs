//! Locomotion domain: the fixed-tick integrator.
//!
//! `tick` is a pure transform from the previous `Locomotion` plus this tick's
//! intent and body sample to the next `Locomotion` and its outputs. `drive`
//! wires it to the collaborators: it samples a `PhysicalBody`, runs `tick`,
//! forwards animation parameters to an optional `AnimationSink` and hands the
//! displacement back to the body.

use bevy::prelude::*;

use super::config::LocomotionConfig;
use super::smoothing::smooth_speed;
use super::state::{BodySample, Contact, Facing, Locomotion, LocomotionInput};

/// Animation parameter names forwarded every tick.
pub mod params {
    pub const SPEED: &str = "Speed";
    pub const MOVE_SPEED: &str = "MoveSpeed";
    pub const JUMP: &str = "Jump";
    pub const GROUNDED: &str = "Grounded";
    pub const FALL: &str = "Fall";
    pub const CROUCH: &str = "Crouch";
}

/// The body the integrator moves. Collision response belongs to the implementor.
pub trait PhysicalBody {
    fn velocity(&self) -> Vec3;
    fn is_grounded(&self) -> bool;
    fn move_by(&mut self, displacement: Vec3);
}

/// Receiver for named animation parameters.
pub trait AnimationSink {
    fn set_float(&mut self, name: &str, value: f32);
    fn set_bool(&mut self, name: &str, value: bool);
}

/// Derived signals for the animation sink.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationSignals {
    /// Measured planar speed of the body
    pub speed: f32,
    /// Target horizontal speed normalized by `move_speed_animation`
    pub move_speed: f32,
    pub jump: bool,
    pub grounded: bool,
    pub falling: bool,
    pub crouch: bool,
}

impl AnimationSignals {
    pub fn forward_to(&self, sink: &mut impl AnimationSink) {
        sink.set_float(params::SPEED, self.speed);
        sink.set_float(params::MOVE_SPEED, self.move_speed);
        sink.set_bool(params::JUMP, self.jump);
        sink.set_bool(params::GROUNDED, self.grounded);
        sink.set_bool(params::FALL, self.falling);
        sink.set_bool(params::CROUCH, self.crouch);
    }
}

/// Contact change observed on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTransition {
    Landed,
    LeftGround,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickOutput {
    /// Displacement for this tick, already scaled by dt
    pub displacement: Vec3,
    pub animation: AnimationSignals,
    /// Whether a jump launched on this tick
    pub jumped: bool,
    pub transition: Option<ContactTransition>,
}

/// Target horizontal speed for the current intent: sprint or walk, zero when idle.
pub fn target_horizontal_speed(input: &LocomotionInput, config: &LocomotionConfig) -> f32 {
    if input.move_axis == Vec2::ZERO {
        0.0
    } else if input.sprint {
        config.sprint_speed
    } else {
        config.move_speed
    }
}

/// Horizontal direction for the displacement. Zero input keeps the facing
/// direction so easing to a stop does not snap the body in place.
pub fn horizontal_direction(move_x: f32, facing: Facing) -> f32 {
    if move_x > 0.0 {
        1.0
    } else if move_x < 0.0 {
        -1.0
    } else {
        facing.sign()
    }
}

/// Facing after this tick's input; unchanged when there is no horizontal input.
pub fn next_facing(move_x: f32, facing: Facing) -> Facing {
    if move_x > 0.0 && facing == Facing::Left {
        Facing::Right
    } else if move_x < 0.0 && facing == Facing::Right {
        Facing::Left
    } else {
        facing
    }
}

/// Advance the integrator by one fixed tick of `dt` seconds.
pub fn tick(
    previous: Locomotion,
    config: &LocomotionConfig,
    input: &LocomotionInput,
    body: BodySample,
    dt: f32,
) -> (Locomotion, TickOutput) {
    let mut next = previous;
    let mut output = TickOutput::default();

    // Horizontal
    let measured_horizontal = body.planar_speed();
    let input_magnitude = if input.analog_movement {
        input.move_axis.x.abs()
    } else {
        1.0
    };
    next.state.target_horizontal_speed = target_horizontal_speed(input, config);
    next.state.horizontal_speed = smooth_speed(
        measured_horizontal,
        next.state.target_horizontal_speed,
        input_magnitude,
        dt * config.speed_change_rate,
    );

    // Vertical
    next.contact = Contact::from_grounded(body.grounded);
    output.transition = match (previous.contact, next.contact) {
        (Contact::Airborne, Contact::Grounded) => Some(ContactTransition::Landed),
        (Contact::Grounded, Contact::Airborne) => Some(ContactTransition::LeftGround),
        _ => None,
    };

    let launch_speed = config.jump_launch_speed();
    let timers = &mut next.timers;

    match next.contact {
        Contact::Grounded => {
            timers.fall_grace = config.fall_timeout;

            if input.jump && timers.jump_cooldown <= 0.0 {
                next.state.target_vertical_speed = launch_speed;
                timers.jump_cooldown = config.jump_timeout;
                timers.jump_hold = config.jump_duration;
                output.jumped = true;
            } else {
                next.state.target_vertical_speed = previous.state.vertical_speed;
            }

            if timers.jump_cooldown >= 0.0 {
                timers.jump_cooldown -= dt;
            }
        }
        Contact::Airborne => {
            // Holding jump keeps re-applying the launch speed for variable height
            next.state.target_vertical_speed = if input.jump && timers.jump_hold >= 0.0 {
                launch_speed
            } else {
                previous.state.vertical_speed
            };

            if timers.jump_hold >= 0.0 {
                timers.jump_hold -= dt;
            }
            if timers.fall_grace >= 0.0 {
                timers.fall_grace -= dt;
            }
        }
    }

    let eased_vertical = smooth_speed(
        body.velocity.y,
        next.state.target_vertical_speed,
        1.0,
        dt * config.jump_change_rate,
    );
    next.state.vertical_speed =
        (eased_vertical - config.gravity * dt).max(config.terminal_velocity);

    // Pose
    next.state.facing = next_facing(input.move_axis.x, previous.state.facing);
    output.animation = AnimationSignals {
        speed: measured_horizontal,
        move_speed: (next.state.target_horizontal_speed / config.move_speed_animation).abs(),
        jump: input.jump,
        grounded: next.contact.is_grounded(),
        falling: next.is_falling(),
        crouch: input.crouch,
    };

    // Motion
    let direction = horizontal_direction(input.move_axis.x, next.state.facing);
    output.displacement = Vec3::new(
        next.state.horizontal_speed * direction,
        next.state.vertical_speed,
        0.0,
    ) * dt;

    (next, output)
}

/// Run one tick against live collaborators. The sink is skipped when absent.
pub fn drive<B, S>(
    locomotion: &mut Locomotion,
    config: &LocomotionConfig,
    input: &LocomotionInput,
    body: &mut B,
    sink: Option<&mut S>,
    dt: f32,
) -> TickOutput
where
    B: PhysicalBody,
    S: AnimationSink,
{
    let sample = BodySample {
        velocity: body.velocity(),
        grounded: body.is_grounded(),
    };

    let (next, output) = tick(*locomotion, config, input, sample, dt);
    *locomotion = next;

    if let Some(sink) = sink {
        output.animation.forward_to(sink);
    }

    body.move_by(output.displacement);
    output
}
