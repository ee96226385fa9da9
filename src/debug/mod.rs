//! Debug domain: sensor gizmos and a toggleable locomotion-state overlay.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{AnimationSignals, Contacts, JumpTriggered, MovementState, MovementTuning, Player};

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub overlay_visible: bool,
}

/// Marker for the overlay text root
#[derive(Component, Debug)]
pub struct DebugOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_overlay,
                update_overlay,
                draw_sensor_gizmos,
                log_jump_triggers,
            ),
        );
    }
}

fn toggle_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugOverlay>>,
) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);
    if !toggle {
        return;
    }

    debug_state.overlay_visible = !debug_state.overlay_visible;

    if debug_state.overlay_visible {
        commands.spawn((
            DebugOverlay,
            Text::new(""),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.9, 0.9)),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(12.0),
                top: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.15, 0.8)),
            ZIndex(500),
        ));
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

fn update_overlay(
    player: Query<(&MovementState, &Contacts, &AnimationSignals), With<Player>>,
    mut overlay: Query<&mut Text, With<DebugOverlay>>,
) {
    let Ok(mut text) = overlay.single_mut() else {
        return;
    };
    let Ok((state, contacts, signals)) = player.single() else {
        return;
    };

    text.0 = format!(
        "speed: {:.2}  vy: {:.2}\n\
         on_ground: {}  on_wall: {}\n\
         sliding: {}  wall_jumping: {}  rolling: {}\n\
         jumps: {}  window: {:.2}  launch_dir: {:+.0}\n\
         facing: {:?}",
        signals.horizontal_speed,
        signals.vertical_velocity,
        contacts.on_ground,
        contacts.on_wall,
        state.is_wall_sliding,
        state.is_wall_jumping,
        signals.is_rolling,
        state.current_jump_count,
        state.wall_jump_timer,
        state.wall_jump_direction,
        state.facing,
    );
}

fn log_jump_triggers(mut jump_events: MessageReader<JumpTriggered>) {
    for event in jump_events.read() {
        debug!("Jump trigger fired for {:?}", event.entity);
    }
}

/// Ground probe in red, wall probe in blue, mirroring the configured sensor
/// geometry exactly as the sensors sample it.
fn draw_sensor_gizmos(
    mut gizmos: Gizmos,
    tuning: Res<MovementTuning>,
    query: Query<(&Transform, &MovementState), With<Player>>,
) {
    for (transform, state) in &query {
        let origin = transform.translation.truncate();

        gizmos.rect_2d(
            Isometry2d::from_translation(origin + tuning.ground_check_offset),
            tuning.ground_check_size,
            Color::srgb(0.9, 0.2, 0.2),
        );

        let wall_offset = Vec2::new(
            tuning.wall_check_offset.x * state.facing.sign(),
            tuning.wall_check_offset.y,
        );
        gizmos.rect_2d(
            Isometry2d::from_translation(origin + wall_offset),
            tuning.wall_check_size,
            Color::srgb(0.2, 0.4, 0.9),
        );
    }
}
