//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Per-tick contact snapshot, written only by the sensor stage and read
/// immutably by every later stage in the same tick.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Contacts {
    pub on_ground: bool,
    pub on_wall: bool,
}

/// Locomotion state for one character, mutated once per fixed tick.
#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub facing: Facing,
    pub is_wall_sliding: bool,
    pub is_wall_jumping: bool,
    pub is_rolling: bool,
    /// Remaining jump charges; refilled to the configured max every tick
    /// the ground sensor reports contact.
    pub current_jump_count: u32,
    /// Launch direction captured at slide start, -1.0 or 1.0 (0.0 until the
    /// first slide).
    pub wall_jump_direction: f32,
    /// Wall-jump window countdown; a jump press is a wall jump only while
    /// this is positive.
    pub wall_jump_timer: f32,
    /// Deferred deactivation of `is_wall_jumping`; re-armed on launch,
    /// canceled whenever a new slide starts.
    pub wall_jump_cancel_timer: Option<f32>,
}

/// Per-tick signals for the presentation layer. The controller writes these;
/// it has no dependency on how they are rendered.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct AnimationSignals {
    pub horizontal_speed: f32,
    pub vertical_velocity: f32,
    pub is_rolling: bool,
}
