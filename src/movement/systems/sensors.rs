//! Movement domain: ground and wall overlap sensors.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{Contacts, GameLayer, MovementState, MovementTuning, Player};

/// Overlap-box test against one collision layer. Finding nothing is an
/// ordinary `false`, never an error.
fn overlap_box(
    spatial_query: &SpatialQuery,
    origin: Vec2,
    size: Vec2,
    filter: &SpatialQueryFilter,
) -> bool {
    let probe = Collider::rectangle(size.x, size.y);
    !spatial_query
        .shape_intersections(&probe, origin, 0.0, filter)
        .is_empty()
}

/// Ground contact is a refill edge, re-fired every grounded tick.
pub(crate) fn refill_jumps(state: &mut MovementState, on_ground: bool, max_jump_count: u32) {
    if on_ground {
        state.current_jump_count = max_jump_count;
    }
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &mut Contacts, &mut MovementState), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mut contacts, mut state) in &mut query {
        let was_on_ground = contacts.on_ground;
        let origin = transform.translation.truncate() + tuning.ground_check_offset;

        contacts.on_ground = overlap_box(
            &spatial_query,
            origin,
            tuning.ground_check_size,
            &ground_filter,
        );

        refill_jumps(&mut state, contacts.on_ground, tuning.max_jump_count);

        if contacts.on_ground && !was_on_ground {
            debug!("Landed: jump charges refilled to {}", tuning.max_jump_count);
        } else if !contacts.on_ground && was_on_ground {
            debug!("Left ground: charges={}", state.current_jump_count);
        }
    }
}

pub(crate) fn detect_walls(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &MovementState, &mut Contacts), With<Player>>,
) {
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (transform, state, mut contacts) in &mut query {
        // The wall probe sits on the side the character is facing.
        let offset = Vec2::new(
            tuning.wall_check_offset.x * state.facing.sign(),
            tuning.wall_check_offset.y,
        );
        let origin = transform.translation.truncate() + offset;

        contacts.on_wall = overlap_box(
            &spatial_query,
            origin,
            tuning.wall_check_size,
            &wall_filter,
        );
    }
}
