#[cfg(feature = "dev-tools")]
mod debug;
mod locomotion;

use avian2d::prelude::*;
use bevy::prelude::*;

/// Fixed simulation rate for locomotion and physics.
const FIXED_TICK_HZ: f64 = 50.0;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Stride 2D".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(Time::<Fixed>::from_hz(FIXED_TICK_HZ))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins(locomotion::LocomotionPlugin);

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
