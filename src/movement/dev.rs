//! Movement domain: sandbox room for exercising the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let wall_color = Color::srgb(0.3, 0.3, 0.4);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Floor
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(16.0, 0.8)),
            ..default()
        },
        Transform::from_xyz(0.0, -4.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(16.0, 0.8),
        ground_layers,
    ));

    // A platform to double-jump onto
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(3.0, 0.4)),
            ..default()
        },
        Transform::from_xyz(2.5, -0.5, 0.0),
        RigidBody::Static,
        Collider::rectangle(3.0, 0.4),
        ground_layers,
    ));

    // Left wall
    commands.spawn((
        Wall,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(0.8, 10.0)),
            ..default()
        },
        Transform::from_xyz(-8.4, 1.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(0.8, 10.0),
        wall_layers,
    ));

    // Right wall
    commands.spawn((
        Wall,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(0.8, 10.0)),
            ..default()
        },
        Transform::from_xyz(8.4, 1.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(0.8, 10.0),
        wall_layers,
    ));
}
