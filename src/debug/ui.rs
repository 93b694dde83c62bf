//! Debug domain: overlay panel layout.

use bevy::prelude::*;

/// Marker for the debug panel root
#[derive(Component, Debug)]
pub struct DebugUI;

/// Marker for the locomotion readout text
#[derive(Component, Debug)]
pub struct DebugInfoText;

pub(crate) fn spawn_debug_ui(commands: &mut Commands) {
    let bg_color = Color::srgba(0.1, 0.1, 0.15, 0.9);
    let text_color = Color::srgb(0.9, 0.9, 0.9);
    let title_color = Color::srgb(0.9, 0.7, 0.3);
    let muted_text = Color::srgb(0.6, 0.6, 0.7);

    // Anchored to the top right corner of the screen
    commands
        .spawn((
            DebugUI,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(8.0),
                top: Val::Px(8.0),
                width: Val::Px(256.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(8.0)),
                row_gap: Val::Px(6.0),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(bg_color),
            BorderColor::all(Color::srgb(0.4, 0.35, 0.2)),
            ZIndex(500),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("LOCOMOTION"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(title_color),
            ));

            parent.spawn((
                Text::new("F1 or ` to toggle | F2 to log snapshot"),
                TextFont {
                    font_size: 11.0,
                    ..default()
                },
                TextColor(muted_text),
            ));

            parent.spawn((
                DebugInfoText,
                Text::new("No player"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(text_color),
            ));
        });
}
