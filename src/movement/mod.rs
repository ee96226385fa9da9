//! Movement domain: the platformer locomotion controller.
//!
//! Everything runs as one chained pass per fixed tick: contact sensors, roll
//! edges, gravity shaping, wall slide, wall-jump timers, jump edges, then
//! momentum and facing (both suppressed while a wall jump is in flight), and
//! finally the published animation signals. Avian integrates velocities after
//! this pass within the same fixed step.

use avian2d::prelude::*;
use bevy::prelude::*;

mod components;
pub(crate) mod dev;
mod events;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{
    AnimationSignals, Contacts, Facing, GameLayer, Ground, MovementState, Player, Wall,
};
pub use events::JumpTriggered;
pub use resources::{MovementInput, MovementTuning};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<JumpTriggered>()
            .add_systems(Startup, (spawn_player, dev::spawn_test_room))
            .add_systems(Update, (systems::read_input, systems::apply_visual_facing))
            .add_systems(
                FixedUpdate,
                (
                    systems::detect_ground,
                    systems::detect_walls,
                    systems::apply_roll,
                    systems::apply_gravity,
                    systems::apply_wall_slide,
                    systems::update_wall_jump_window,
                    systems::apply_jump,
                    systems::apply_horizontal_movement,
                    systems::update_facing,
                    systems::publish_signals,
                    systems::clear_input_edges,
                )
                    .chain(),
            );
    }
}

fn spawn_player(mut commands: Commands, tuning: Res<MovementTuning>) {
    let size = Vec2::new(0.6, 1.2);

    commands.spawn((
        Player,
        MovementState {
            current_jump_count: tuning.max_jump_count,
            ..default()
        },
        Contacts::default(),
        AnimationSignals::default(),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(0.0, 1.0, 0.0),
        (
            RigidBody::Dynamic,
            Collider::rectangle(size.x, size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(tuning.gravity_scale),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));

    info!(
        "Spawned player: move_speed={}, jump_force={}, max_jumps={}",
        tuning.move_speed, tuning.jump_force, tuning.max_jump_count
    );
}
