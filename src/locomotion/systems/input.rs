//! Locomotion domain: input sampling.

use bevy::prelude::*;

use crate::locomotion::LocomotionInput;

/// Stick deflection below which the gamepad is ignored.
const STICK_DEAD_ZONE: f32 = 0.15;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut input: ResMut<LocomotionInput>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    let mut axis = Vec2::new(x, y);
    let mut jump = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK);
    let mut sprint = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);
    let mut crouch =
        keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::KeyC);
    let mut analog = false;

    // First connected gamepad overrides the keyboard axis when deflected
    if let Some(gamepad) = gamepads.iter().next() {
        let stick = gamepad.left_stick();
        if stick.length() > STICK_DEAD_ZONE {
            axis = stick;
            analog = true;
        }
        jump |= gamepad.pressed(GamepadButton::South);
        sprint |= gamepad.pressed(GamepadButton::West);
        crouch |= gamepad.pressed(GamepadButton::East);
    }

    input.move_axis = axis;
    input.jump = jump;
    input.sprint = sprint;
    input.crouch = crouch;
    input.analog_movement = analog;
}
