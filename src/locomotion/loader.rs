//! Loader for the locomotion RON tuning file at startup.

use bevy::prelude::*;
use std::fs;
use std::path::Path;

use super::config::LocomotionConfig;

/// Tuning file, relative to the working directory.
pub const LOCOMOTION_CONFIG_PATH: &str = "assets/data/locomotion.ron";

/// Error type for tuning load failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ConfigLoadError {}

/// Parse and validate a tuning document. `file` is only used for error context.
pub fn parse_locomotion_config(
    contents: &str,
    file: &str,
) -> Result<LocomotionConfig, ConfigLoadError> {
    let config: LocomotionConfig = ron::from_str(contents).map_err(|e| ConfigLoadError {
        file: file.to_string(),
        message: format!("Parse error: {}", e),
    })?;

    let errors = config.validate();
    if !errors.is_empty() {
        let message = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ConfigLoadError {
            file: file.to_string(),
            message: format!("Validation error: {}", message),
        });
    }

    Ok(config)
}

/// Read, parse and validate a tuning file.
pub fn load_locomotion_config(path: &Path) -> Result<LocomotionConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_locomotion_config(&contents, &file_name)
}

/// Startup system: replace the default tuning with the file contents when valid.
pub(crate) fn load_locomotion_config_system(
    fixed_time: Res<Time<Fixed>>,
    mut config: ResMut<LocomotionConfig>,
) {
    match load_locomotion_config(Path::new(LOCOMOTION_CONFIG_PATH)) {
        Ok(loaded) => {
            info!(
                "Loaded locomotion tuning: move={}, sprint={}, launch={:.3}, gravity={}",
                loaded.move_speed,
                loaded.sprint_speed,
                loaded.jump_launch_speed(),
                loaded.gravity
            );
            *config = loaded;
        }
        Err(e) => {
            warn!("{}; using default locomotion tuning", e);
        }
    }

    let dt = fixed_time.timestep().as_secs_f32();
    let lift = config.launch_lift(dt);
    if lift <= 0.0 {
        warn!(
            "jump_change_rate {} cannot lift off at a {:.3}s tick (launch leaves {:.3} m/s)",
            config.jump_change_rate, dt, lift
        );
    }
}
