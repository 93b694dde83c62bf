//! Debug domain: overlay toggling and readouts.

use bevy::prelude::*;

use crate::debug::state::{DebugState, LocomotionSnapshot};
use crate::debug::ui::{DebugInfoText, DebugUI, spawn_debug_ui};
use crate::locomotion::{CharacterAnimation, Locomotion, Player};

/// Toggle the overlay with F1 or backtick key
pub(crate) fn toggle_debug_ui(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_ui: Query<Entity, With<DebugUI>>,
) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);

    if toggle {
        debug_state.ui_visible = !debug_state.ui_visible;

        if debug_state.ui_visible {
            spawn_debug_ui(&mut commands);
        } else {
            for entity in &existing_ui {
                commands.entity(entity).despawn();
            }
        }
    }
}

/// Refresh the overlay text with the player's current locomotion
pub(crate) fn update_debug_info(
    player_query: Query<(&Transform, &Locomotion, &CharacterAnimation), With<Player>>,
    mut text_query: Query<&mut Text, With<DebugInfoText>>,
) {
    if let (Some((transform, locomotion, animation)), Ok(mut text)) =
        (player_query.iter().next(), text_query.single_mut())
    {
        let snapshot =
            LocomotionSnapshot::new(transform.translation.truncate(), locomotion, animation.state);
        **text = snapshot.summary();
    }
}

/// Log a JSON snapshot of the player's locomotion on F2
pub(crate) fn log_locomotion_snapshot(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    player_query: Query<(&Transform, &Locomotion, &CharacterAnimation), With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F2) {
        return;
    }

    let Some((transform, locomotion, animation)) = player_query.iter().next() else {
        warn!("[DEBUG] No player to snapshot");
        return;
    };

    let snapshot =
        LocomotionSnapshot::new(transform.translation.truncate(), locomotion, animation.state);
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => {
            debug_state.snapshots_logged += 1;
            info!("[DEBUG] Locomotion snapshot #{}:\n{}", debug_state.snapshots_logged, json);
        }
        Err(e) => error!("[DEBUG] Failed to serialize snapshot: {}", e),
    }
}
