//! Movement domain: the per-tick locomotion state machine.
//!
//! Each stage is a pure step function over the character's state, velocity and
//! tuning, wrapped by a thin system. The orchestrating order lives in the
//! plugin (`movement::MovementPlugin`): sensors, roll edges, gravity, wall
//! slide, wall-jump timers, jump edges, then momentum and facing. Momentum and
//! facing are suppressed for the whole duration of a wall jump so the launch
//! impulse is not overwritten in the same tick.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    Contacts, JumpTriggered, MovementInput, MovementState, MovementTuning, Player,
};

/// Extra slack on the deferred wall-jump deactivation so normal control always
/// resumes even with no further input.
pub(crate) const WALL_JUMP_GRACE: f32 = 0.1;

/// Below this target speed the deceleration rate applies instead of
/// acceleration.
pub(crate) const SPEED_EPSILON: f32 = 0.01;

/// Asymmetric gravity: heavier while falling, with a terminal velocity. Rising
/// velocity is left untouched so jump apex height is unaffected.
pub(crate) fn gravity_step(
    tuning: &MovementTuning,
    velocity: &mut LinearVelocity,
    gravity: &mut GravityScale,
) {
    if velocity.y < 0.0 {
        gravity.0 = tuning.gravity_scale * tuning.fall_multiplier;
        velocity.y = velocity.y.max(-tuning.max_fall_speed);
    } else {
        gravity.0 = tuning.gravity_scale;
    }
}

/// Wall slide: airborne, touching a wall, and holding a direction. Clamps
/// descent to the slide speed; never speeds it up.
pub(crate) fn wall_slide_step(
    tuning: &MovementTuning,
    contacts: Contacts,
    axis_x: f32,
    state: &mut MovementState,
    velocity: &mut LinearVelocity,
) {
    if !contacts.on_ground && contacts.on_wall && axis_x != 0.0 {
        state.is_wall_sliding = true;
        velocity.y = velocity.y.max(-tuning.wall_slide_speed);
    } else {
        state.is_wall_sliding = false;
    }
}

/// Wall-jump window bookkeeping. While sliding, the window is held open at its
/// full duration, the launch direction is pinned to the side opposite current
/// facing, and any pending deferred deactivation is canceled. Once the slide
/// ends the window counts down; a pending deactivation counts down regardless.
pub(crate) fn wall_jump_window_step(tuning: &MovementTuning, state: &mut MovementState, dt: f32) {
    if state.is_wall_sliding {
        state.is_wall_jumping = false;
        state.wall_jump_direction = -state.facing.sign();
        state.wall_jump_timer = tuning.wall_jump_time;
        state.wall_jump_cancel_timer = None;
    } else if state.wall_jump_timer > 0.0 {
        state.wall_jump_timer -= dt;
    }

    if let Some(remaining) = &mut state.wall_jump_cancel_timer {
        *remaining -= dt;
        if *remaining <= 0.0 {
            state.is_wall_jumping = false;
            state.wall_jump_cancel_timer = None;
        }
    }
}

/// Jump press: two independent branches, both of which may fire on the same
/// press. A remaining charge produces a vertical impulse (scaled down while
/// rolling) and spends the charge; an open wall-jump window produces the wall
/// launch and consumes the window. Returns whether anything fired.
pub(crate) fn jump_press_step(
    tuning: &MovementTuning,
    state: &mut MovementState,
    velocity: &mut LinearVelocity,
) -> bool {
    let mut triggered = false;

    if state.current_jump_count > 0 {
        let impulse = if state.is_rolling {
            tuning.jump_force * tuning.roll_jump_mult
        } else {
            tuning.jump_force
        };
        velocity.y = impulse;
        state.current_jump_count -= 1;
        triggered = true;
    }

    if state.wall_jump_timer > 0.0 {
        state.is_wall_jumping = true;
        velocity.x = state.wall_jump_direction * tuning.wall_jump_force.x;
        velocity.y = tuning.wall_jump_force.y;
        state.wall_jump_timer = 0.0;
        triggered = true;

        // Launch direction wins over whatever the player is holding.
        if state.facing.sign() != state.wall_jump_direction {
            state.facing = state.facing.flipped();
        }

        state.wall_jump_cancel_timer = Some(tuning.wall_jump_time + WALL_JUMP_GRACE);
    }

    triggered
}

/// Jump release: truncates upward velocity for variable jump height. Spends a
/// charge as well, matching the press path; with no charges left this is a
/// no-op. Returns whether it fired.
pub(crate) fn jump_release_step(
    tuning: &MovementTuning,
    state: &mut MovementState,
    velocity: &mut LinearVelocity,
) -> bool {
    if state.current_jump_count == 0 {
        return false;
    }
    velocity.y *= tuning.release_damping;
    state.current_jump_count -= 1;
    true
}

/// Momentum: accelerate toward the intended horizontal speed without ever
/// overshooting it. Acceleration applies toward a nonzero target, deceleration
/// toward rest; both are scaled by air control when airborne and by the roll
/// multiplier while rolling. A no-op while a wall jump owns the velocity.
pub(crate) fn momentum_step(
    tuning: &MovementTuning,
    state: &MovementState,
    on_ground: bool,
    axis_x: f32,
    velocity: &mut LinearVelocity,
    dt: f32,
) {
    if state.is_wall_jumping {
        return;
    }

    let target_speed = axis_x
        * if state.is_rolling {
            tuning.roll_speed
        } else {
            tuning.move_speed
        };
    let gap = target_speed - velocity.x;

    let mut rate = if target_speed.abs() > SPEED_EPSILON {
        tuning.acceleration
    } else {
        tuning.deceleration
    };
    if !on_ground {
        rate *= tuning.air_control;
    }
    if state.is_rolling {
        rate *= tuning.roll_acceleration_mult;
    }

    let mut step = gap.signum() * rate * dt;
    if gap.abs() < step.abs() {
        step = gap;
    }
    velocity.x += step;
}

/// Flip facing when intent disagrees with it. A no-op while wall-jumping; the
/// launch itself flips facing in `jump_press_step`.
pub(crate) fn facing_step(state: &mut MovementState, axis_x: f32) {
    if state.is_wall_jumping {
        return;
    }
    let opposes = (state.facing.sign() > 0.0 && axis_x < 0.0)
        || (state.facing.sign() < 0.0 && axis_x > 0.0);
    if opposes {
        state.facing = state.facing.flipped();
    }
}

/// Roll activation needs ground under the feet; cancellation never does.
pub(crate) fn roll_press_step(state: &mut MovementState, on_ground: bool) {
    if on_ground {
        state.is_rolling = true;
    }
}

pub(crate) fn roll_release_step(state: &mut MovementState) {
    state.is_rolling = false;
}

pub(crate) fn apply_roll(
    input: Res<MovementInput>,
    mut query: Query<(&Contacts, &mut MovementState), With<Player>>,
) {
    for (contacts, mut state) in &mut query {
        if input.roll_pressed {
            roll_press_step(&mut state, contacts.on_ground);
            if state.is_rolling {
                debug!("Roll started");
            }
        }
        if input.roll_released && state.is_rolling {
            roll_release_step(&mut state);
            debug!("Roll ended");
        }
    }
}

pub(crate) fn apply_gravity(
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut LinearVelocity, &mut GravityScale), With<Player>>,
) {
    for (mut velocity, mut gravity) in &mut query {
        gravity_step(&tuning, &mut velocity, &mut gravity);
    }
}

pub(crate) fn apply_wall_slide(
    tuning: Res<MovementTuning>,
    input: Res<MovementInput>,
    mut query: Query<(&Contacts, &mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (contacts, mut state, mut velocity) in &mut query {
        wall_slide_step(&tuning, *contacts, input.axis_x, &mut state, &mut velocity);
    }
}

pub(crate) fn update_wall_jump_window(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    let dt = time.delta_secs();
    for mut state in &mut query {
        wall_jump_window_step(&tuning, &mut state, dt);
    }
}

pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(Entity, &mut MovementState, &mut LinearVelocity), With<Player>>,
    mut jump_events: MessageWriter<JumpTriggered>,
) {
    for (entity, mut state, mut velocity) in &mut query {
        let mut triggered = false;

        if input.jump_pressed {
            triggered |= jump_press_step(&tuning, &mut state, &mut velocity);
        }
        if input.jump_released {
            triggered |= jump_release_step(&tuning, &mut state, &mut velocity);
        }

        if triggered {
            jump_events.write(JumpTriggered { entity });
            debug!(
                "Jump triggered: charges_left={}, wall_jumping={}",
                state.current_jump_count, state.is_wall_jumping
            );
        }
    }
}

pub(crate) fn apply_horizontal_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Contacts, &MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();
    for (contacts, state, mut velocity) in &mut query {
        momentum_step(&tuning, state, contacts.on_ground, input.axis_x, &mut velocity, dt);
    }
}

pub(crate) fn update_facing(
    input: Res<MovementInput>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    for mut state in &mut query {
        facing_step(&mut state, input.axis_x);
    }
}

pub(crate) fn clear_input_edges(mut input: ResMut<MovementInput>) {
    input.clear_edges();
}
