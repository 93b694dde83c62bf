//! Debug overlay for watching the locomotion integrator live.
//!
//! Features:
//! - F1 or ` toggles a panel with speeds, timers and contact state
//! - F2 logs a JSON snapshot of the player's locomotion

mod state;
mod systems;
#[cfg(test)]
mod tests;
mod ui;

use bevy::prelude::*;

pub use state::{DebugState, LocomotionSnapshot};
pub use ui::{DebugInfoText, DebugUI};

use systems::{log_locomotion_snapshot, toggle_debug_ui, update_debug_info};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_debug_ui, log_locomotion_snapshot))
            .add_systems(
                Update,
                update_debug_info
                    .after(toggle_debug_ui)
                    .run_if(|state: Res<DebugState>| state.ui_visible),
            );
    }
}
