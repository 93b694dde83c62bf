//! Debug domain: tests for the locomotion snapshot.

use bevy::prelude::Vec2;

use super::LocomotionSnapshot;
use crate::locomotion::{AnimationState, Contact, Facing, Locomotion, LocomotionConfig};

fn airborne_locomotion() -> Locomotion {
    let mut locomotion = Locomotion::new(&LocomotionConfig::default());
    locomotion.contact = Contact::Airborne;
    locomotion.timers.fall_grace = -0.01;
    locomotion.state.facing = Facing::Left;
    locomotion.state.vertical_speed = -2.5;
    locomotion
}

#[test]
fn test_snapshot_captures_falling_flag() {
    let snapshot = LocomotionSnapshot::new(
        Vec2::new(1.0, 2.0),
        &airborne_locomotion(),
        AnimationState::Fall,
    );
    assert!(snapshot.falling);
    assert_eq!(snapshot.position, [1.0, 2.0]);
}

#[test]
fn test_snapshot_summary_lists_state() {
    let snapshot =
        LocomotionSnapshot::new(Vec2::ZERO, &airborne_locomotion(), AnimationState::Fall);
    let summary = snapshot.summary();

    assert!(summary.contains("Contact: Airborne"));
    assert!(summary.contains("Facing: Left"));
    assert!(summary.contains("V speed: -2.500"));
    assert!(summary.contains("Falling: true"));
    assert!(summary.contains("Anim: Fall"));
}

#[test]
fn test_snapshot_serializes_to_json() {
    let snapshot =
        LocomotionSnapshot::new(Vec2::ZERO, &airborne_locomotion(), AnimationState::Fall);
    let value = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(value["falling"], true);
    assert_eq!(value["animation"], "Fall");
    assert_eq!(value["locomotion"]["contact"], "Airborne");
    assert_eq!(value["locomotion"]["state"]["facing"], "Left");
    assert_eq!(value["locomotion"]["state"]["vertical_speed"], -2.5);
}
