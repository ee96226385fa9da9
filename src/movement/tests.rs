//! Movement domain: unit tests for the locomotion state machine.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::systems::locomotion::{
    facing_step, gravity_step, jump_press_step, jump_release_step, momentum_step,
    roll_press_step, roll_release_step, wall_jump_window_step, wall_slide_step,
};
use super::systems::sensors::refill_jumps;
use super::{Contacts, Facing, MovementState, MovementTuning};

fn tuning() -> MovementTuning {
    MovementTuning::default()
}

fn state_with_jumps(count: u32) -> MovementState {
    MovementState {
        current_jump_count: count,
        ..default()
    }
}

fn vel(x: f32, y: f32) -> LinearVelocity {
    LinearVelocity(Vec2::new(x, y))
}

const AIRBORNE_ON_WALL: Contacts = Contacts {
    on_ground: false,
    on_wall: true,
};

#[test]
fn ground_contact_refills_jumps_every_tick() {
    let tuning = tuning();
    let mut state = state_with_jumps(0);

    refill_jumps(&mut state, true, tuning.max_jump_count);
    assert_eq!(state.current_jump_count, tuning.max_jump_count);

    // Refiring while already grounded is harmless.
    refill_jumps(&mut state, true, tuning.max_jump_count);
    assert_eq!(state.current_jump_count, tuning.max_jump_count);

    state.current_jump_count = 1;
    refill_jumps(&mut state, false, tuning.max_jump_count);
    assert_eq!(state.current_jump_count, 1);
}

#[test]
fn double_jump_consumes_both_charges_then_ignores_presses() {
    let tuning = tuning();
    let mut state = state_with_jumps(2);
    let mut velocity = vel(0.0, 0.0);

    assert!(jump_press_step(&tuning, &mut state, &mut velocity));
    assert_eq!(velocity.y, tuning.jump_force);
    assert_eq!(state.current_jump_count, 1);

    assert!(jump_press_step(&tuning, &mut state, &mut velocity));
    assert_eq!(velocity.y, tuning.jump_force);
    assert_eq!(state.current_jump_count, 0);

    // Third press is a no-op.
    velocity.y = 3.0;
    assert!(!jump_press_step(&tuning, &mut state, &mut velocity));
    assert_eq!(velocity.y, 3.0);
    assert_eq!(state.current_jump_count, 0);
}

#[test]
fn roll_scales_jump_impulse() {
    let tuning = tuning();
    let mut state = state_with_jumps(2);
    state.is_rolling = true;
    let mut velocity = vel(0.0, 0.0);

    assert!(jump_press_step(&tuning, &mut state, &mut velocity));
    assert_eq!(velocity.y, tuning.jump_force * tuning.roll_jump_mult);
}

#[test]
fn release_truncates_velocity_and_spends_a_charge() {
    let tuning = tuning();
    let mut state = state_with_jumps(1);
    let mut velocity = vel(0.0, 6.0);

    assert!(jump_release_step(&tuning, &mut state, &mut velocity));
    assert!((velocity.y - 6.0 * tuning.release_damping).abs() < 1e-6);
    assert_eq!(state.current_jump_count, 0);

    // Exhausted counter: release is a silent no-op.
    let before = velocity.y;
    assert!(!jump_release_step(&tuning, &mut state, &mut velocity));
    assert_eq!(velocity.y, before);
}

#[test]
fn momentum_caps_delta_at_remaining_gap() {
    let tuning = tuning();
    let state = MovementState::default();

    // Huge dt would overshoot by an order of magnitude; it must land exactly
    // on the target instead.
    let mut velocity = vel(0.0, 0.0);
    momentum_step(&tuning, &state, true, 1.0, &mut velocity, 1.0);
    assert_eq!(velocity.x, tuning.move_speed);

    let mut velocity = vel(4.9, 0.0);
    momentum_step(&tuning, &state, true, 1.0, &mut velocity, 0.02);
    assert_eq!(velocity.x, tuning.move_speed);
}

#[test]
fn momentum_stays_between_previous_velocity_and_target() {
    let tuning = tuning();
    let state = MovementState::default();
    let mut velocity = vel(-3.0, 0.0);
    let target = tuning.move_speed;

    for _ in 0..200 {
        let before = velocity.x;
        momentum_step(&tuning, &state, true, 1.0, &mut velocity, 0.016);
        assert!(velocity.x >= before);
        assert!(velocity.x <= target + 1e-6);
    }
    assert!((velocity.x - target).abs() < 1e-4);
}

#[test]
fn momentum_decelerates_to_rest_on_neutral_intent() {
    let tuning = tuning();
    let state = MovementState::default();
    let mut velocity = vel(5.0, 0.0);

    momentum_step(&tuning, &state, true, 0.0, &mut velocity, 1.0);
    assert_eq!(velocity.x, 0.0);
}

#[test]
fn momentum_multipliers_compose() {
    let tuning = tuning();
    let mut state = MovementState::default();
    state.is_rolling = true;
    let mut velocity = vel(0.0, 0.0);
    let dt = 0.01;

    momentum_step(&tuning, &state, false, 1.0, &mut velocity, dt);

    let expected = tuning.acceleration * tuning.air_control * tuning.roll_acceleration_mult * dt;
    assert!((velocity.x - expected).abs() < 1e-5);
}

#[test]
fn gravity_is_heavier_while_falling_and_caps_fall_speed() {
    let tuning = tuning();
    let mut gravity = GravityScale(tuning.gravity_scale);

    let mut velocity = vel(0.0, -10.0);
    gravity_step(&tuning, &mut velocity, &mut gravity);
    assert_eq!(gravity.0, tuning.gravity_scale * tuning.fall_multiplier);
    assert_eq!(velocity.y, -tuning.max_fall_speed);

    let mut velocity = vel(0.0, 2.0);
    gravity_step(&tuning, &mut velocity, &mut gravity);
    assert_eq!(gravity.0, tuning.gravity_scale);
    assert_eq!(velocity.y, 2.0);
}

#[test]
fn wall_slide_clamps_descent() {
    let tuning = tuning();
    let mut state = MovementState::default();

    let mut velocity = vel(0.0, -6.0);
    wall_slide_step(&tuning, AIRBORNE_ON_WALL, 1.0, &mut state, &mut velocity);
    assert!(state.is_wall_sliding);
    assert_eq!(velocity.y, -tuning.wall_slide_speed);

    // Slower descent is left alone; the clamp never speeds it up.
    let mut velocity = vel(0.0, -1.0);
    wall_slide_step(&tuning, AIRBORNE_ON_WALL, 1.0, &mut state, &mut velocity);
    assert_eq!(velocity.y, -1.0);
}

#[test]
fn wall_slide_requires_airborne_wall_and_intent() {
    let tuning = tuning();
    let mut state = MovementState::default();
    let mut velocity = vel(0.0, -6.0);

    // No horizontal intent
    wall_slide_step(&tuning, AIRBORNE_ON_WALL, 0.0, &mut state, &mut velocity);
    assert!(!state.is_wall_sliding);
    assert_eq!(velocity.y, -6.0);

    // Grounded
    let grounded = Contacts {
        on_ground: true,
        on_wall: true,
    };
    wall_slide_step(&tuning, grounded, 1.0, &mut state, &mut velocity);
    assert!(!state.is_wall_sliding);

    // No wall
    let no_wall = Contacts {
        on_ground: false,
        on_wall: false,
    };
    wall_slide_step(&tuning, no_wall, 1.0, &mut state, &mut velocity);
    assert!(!state.is_wall_sliding);
}

#[test]
fn slide_opens_window_opposite_current_facing() {
    let tuning = tuning();
    let mut state = MovementState::default();
    state.facing = Facing::Right;
    state.is_wall_sliding = true;
    state.is_wall_jumping = true;
    state.wall_jump_cancel_timer = Some(0.05);

    wall_jump_window_step(&tuning, &mut state, 0.016);

    assert!(!state.is_wall_jumping);
    assert_eq!(state.wall_jump_direction, -1.0);
    assert_eq!(state.wall_jump_timer, tuning.wall_jump_time);
    assert!(state.wall_jump_cancel_timer.is_none());
}

#[test]
fn window_decays_and_press_mid_window_still_launches() {
    let tuning = tuning();
    let mut state = state_with_jumps(0);
    state.facing = Facing::Right;
    state.wall_jump_direction = -1.0;
    state.wall_jump_timer = tuning.wall_jump_time;

    // Half the window elapses off the wall.
    wall_jump_window_step(&tuning, &mut state, tuning.wall_jump_time / 2.0);
    assert!((state.wall_jump_timer - tuning.wall_jump_time / 2.0).abs() < 1e-6);

    let mut velocity = vel(0.0, 0.0);
    assert!(jump_press_step(&tuning, &mut state, &mut velocity));
    assert!(state.is_wall_jumping);
    assert_eq!(velocity.x, -tuning.wall_jump_force.x);
    assert_eq!(velocity.y, tuning.wall_jump_force.y);
    assert_eq!(state.wall_jump_timer, 0.0);
    assert_eq!(state.facing, Facing::Left);
}

#[test]
fn press_after_window_expiry_does_nothing() {
    let tuning = tuning();
    let mut state = state_with_jumps(0);
    state.wall_jump_direction = -1.0;
    state.wall_jump_timer = tuning.wall_jump_time;

    let steps = 8;
    for _ in 0..steps {
        wall_jump_window_step(&tuning, &mut state, tuning.wall_jump_time / steps as f32);
    }
    assert!(state.wall_jump_timer <= 0.0);

    let mut velocity = vel(0.0, 0.0);
    assert!(!jump_press_step(&tuning, &mut state, &mut velocity));
    assert!(!state.is_wall_jumping);
    assert_eq!(velocity.y, 0.0);
}

#[test]
fn launch_direction_comes_from_slide_start_not_press_time() {
    let tuning = tuning();
    let mut state = MovementState::default();
    state.facing = Facing::Right;
    state.is_wall_sliding = true;
    wall_jump_window_step(&tuning, &mut state, 0.016);
    assert_eq!(state.wall_jump_direction, -1.0);

    // Player flips facing during the window; the launch direction holds.
    state.is_wall_sliding = false;
    facing_step(&mut state, -1.0);
    assert_eq!(state.facing, Facing::Left);

    let mut velocity = vel(0.0, 0.0);
    state.current_jump_count = 0;
    assert!(jump_press_step(&tuning, &mut state, &mut velocity));
    assert_eq!(velocity.x, -tuning.wall_jump_force.x);
    // Facing already matches the launch direction, so no flip.
    assert_eq!(state.facing, Facing::Left);
}

#[test]
fn one_press_can_fire_both_ground_and_wall_branches() {
    let tuning = tuning();
    let mut state = state_with_jumps(1);
    state.facing = Facing::Right;
    state.wall_jump_direction = -1.0;
    state.wall_jump_timer = 0.3;

    let mut velocity = vel(0.0, 0.0);
    assert!(jump_press_step(&tuning, &mut state, &mut velocity));

    // Charge spent by the ground branch, window consumed by the wall branch.
    assert_eq!(state.current_jump_count, 0);
    assert!(state.is_wall_jumping);
    assert_eq!(state.wall_jump_timer, 0.0);
    assert_eq!(velocity.x, -tuning.wall_jump_force.x);
    assert_eq!(velocity.y, tuning.wall_jump_force.y);
    assert_eq!(
        state.wall_jump_cancel_timer,
        Some(tuning.wall_jump_time + super::systems::locomotion::WALL_JUMP_GRACE)
    );
}

#[test]
fn deferred_cancel_restores_normal_control() {
    let tuning = tuning();
    let mut state = MovementState::default();
    state.is_wall_jumping = true;
    state.wall_jump_cancel_timer = Some(0.6);

    wall_jump_window_step(&tuning, &mut state, 0.4);
    assert!(state.is_wall_jumping);

    wall_jump_window_step(&tuning, &mut state, 0.4);
    assert!(!state.is_wall_jumping);
    assert!(state.wall_jump_cancel_timer.is_none());
}

#[test]
fn momentum_and_facing_are_noops_while_wall_jumping() {
    let tuning = tuning();
    let mut state = MovementState::default();
    state.is_wall_jumping = true;
    state.facing = Facing::Right;

    let mut velocity = vel(5.0, 0.0);
    momentum_step(&tuning, &state, false, -1.0, &mut velocity, 0.016);
    assert_eq!(velocity.x, 5.0);

    facing_step(&mut state, -1.0);
    assert_eq!(state.facing, Facing::Right);
}

#[test]
fn roll_activates_only_on_ground_and_cancels_anywhere() {
    let mut state = MovementState::default();

    roll_press_step(&mut state, false);
    assert!(!state.is_rolling);

    roll_press_step(&mut state, true);
    assert!(state.is_rolling);

    // Release mid-air still cancels.
    roll_release_step(&mut state);
    assert!(!state.is_rolling);
}

#[test]
fn facing_flips_on_intent_reversal_only() {
    let mut state = MovementState::default();
    assert_eq!(state.facing, Facing::Right);

    facing_step(&mut state, 0.0);
    assert_eq!(state.facing, Facing::Right);

    facing_step(&mut state, -1.0);
    assert_eq!(state.facing, Facing::Left);

    facing_step(&mut state, -1.0);
    assert_eq!(state.facing, Facing::Left);

    facing_step(&mut state, 1.0);
    assert_eq!(state.facing, Facing::Right);
}
