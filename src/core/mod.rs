//! Core domain: camera and world-scale plumbing shared by every other domain.

use avian2d::prelude::*;
use bevy::prelude::*;

/// World units are meters; the camera zooms so one meter reads as ~50 px.
const CAMERA_SCALE: f32 = 1.0 / 50.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Gravity(Vec2::NEG_Y * 9.81))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_scale(Vec3::splat(CAMERA_SCALE)),
    ));
}
