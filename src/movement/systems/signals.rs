//! Movement domain: per-tick signal publishing for the presentation layer.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{AnimationSignals, Facing, MovementState, Player};

pub(crate) fn publish_signals(
    mut query: Query<(&MovementState, &LinearVelocity, &mut AnimationSignals), With<Player>>,
) {
    for (state, velocity, mut signals) in &mut query {
        signals.horizontal_speed = velocity.x.abs();
        signals.vertical_velocity = velocity.y;
        signals.is_rolling = state.is_rolling;
    }
}

/// Sprite mirroring is the one piece of presentation the controller feeds
/// directly; everything else goes through `AnimationSignals`.
pub(crate) fn apply_visual_facing(
    mut query: Query<(&MovementState, &mut Sprite), With<Player>>,
) {
    for (state, mut sprite) in &mut query {
        sprite.flip_x = state.facing == Facing::Left;
    }
}
