//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    /// Multiplier on acceleration/deceleration while airborne.
    pub air_control: f32,
    pub jump_force: f32,
    pub max_jump_count: u32,
    /// Fraction of vertical velocity kept when jump is released early.
    pub release_damping: f32,
    pub gravity_scale: f32,
    pub max_fall_speed: f32,
    /// Multiplier on gravity scale while falling.
    pub fall_multiplier: f32,
    pub wall_slide_speed: f32,
    pub wall_jump_force: Vec2,
    /// Duration of the wall-jump window opened by a slide.
    pub wall_jump_time: f32,
    pub roll_speed: f32,
    pub roll_acceleration_mult: f32,
    pub roll_jump_mult: f32,
    /// Ground sensor box center, relative to the body origin.
    pub ground_check_offset: Vec2,
    pub ground_check_size: Vec2,
    /// Wall sensor box center for a right-facing character; mirrored by
    /// current facing.
    pub wall_check_offset: Vec2,
    pub wall_check_size: Vec2,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            acceleration: 20.0,
            deceleration: 35.0,
            air_control: 1.1,
            jump_force: 8.0,
            max_jump_count: 2,
            release_damping: 0.4,
            gravity_scale: 1.5,
            max_fall_speed: 4.0,
            fall_multiplier: 2.0,
            wall_slide_speed: 2.0,
            wall_jump_force: Vec2::new(5.0, 8.0),
            wall_jump_time: 0.5,
            roll_speed: 10.0,
            roll_acceleration_mult: 2.0,
            roll_jump_mult: 0.5,
            ground_check_offset: Vec2::new(0.0, -0.62),
            ground_check_size: Vec2::new(0.5, 0.05),
            wall_check_offset: Vec2::new(0.35, 0.0),
            wall_check_size: Vec2::new(0.5, 0.05),
        }
    }
}

/// Input intents for the current tick. The axis is level-triggered; the rest
/// are one-shot edges accumulated in `Update` and cleared at the end of each
/// fixed tick.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis_x: f32,
    pub jump_pressed: bool,
    pub jump_released: bool,
    pub roll_pressed: bool,
    pub roll_released: bool,
}

impl MovementInput {
    pub fn clear_edges(&mut self) {
        self.jump_pressed = false;
        self.jump_released = false;
        self.roll_pressed = false;
        self.roll_released = false;
    }
}
