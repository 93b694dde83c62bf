//! Locomotion domain: system modules for input, ground probing and integration.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod integrate;

pub(crate) use collisions::detect_ground;
pub(crate) use input::read_input;
pub(crate) use integrate::{apply_facing, integrate_locomotion};
