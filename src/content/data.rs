//! Serialized movement configuration, as stored in `assets/data/movement.ron`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

/// On-disk movement tunables. Pairs are (x, y); sensor boxes are full sizes,
/// not half extents.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementDef {
    pub move_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub air_control: f32,
    pub jump_force: f32,
    pub max_jump_count: u32,
    pub release_damping: f32,
    pub gravity_scale: f32,
    pub max_fall_speed: f32,
    pub fall_multiplier: f32,
    pub wall_slide_speed: f32,
    pub wall_jump_force: (f32, f32),
    pub wall_jump_time: f32,
    pub roll_speed: f32,
    pub roll_acceleration_mult: f32,
    pub roll_jump_mult: f32,
    pub ground_check_offset: (f32, f32),
    pub ground_check_size: (f32, f32),
    pub wall_check_offset: (f32, f32),
    pub wall_check_size: (f32, f32),
}

impl From<MovementDef> for MovementTuning {
    fn from(def: MovementDef) -> Self {
        Self {
            move_speed: def.move_speed,
            acceleration: def.acceleration,
            deceleration: def.deceleration,
            air_control: def.air_control,
            jump_force: def.jump_force,
            max_jump_count: def.max_jump_count,
            release_damping: def.release_damping,
            gravity_scale: def.gravity_scale,
            max_fall_speed: def.max_fall_speed,
            fall_multiplier: def.fall_multiplier,
            wall_slide_speed: def.wall_slide_speed,
            wall_jump_force: Vec2::new(def.wall_jump_force.0, def.wall_jump_force.1),
            wall_jump_time: def.wall_jump_time,
            roll_speed: def.roll_speed,
            roll_acceleration_mult: def.roll_acceleration_mult,
            roll_jump_mult: def.roll_jump_mult,
            ground_check_offset: Vec2::new(def.ground_check_offset.0, def.ground_check_offset.1),
            ground_check_size: Vec2::new(def.ground_check_size.0, def.ground_check_size.1),
            wall_check_offset: Vec2::new(def.wall_check_offset.0, def.wall_check_offset.1),
            wall_check_size: Vec2::new(def.wall_check_size.0, def.wall_check_size.1),
        }
    }
}
