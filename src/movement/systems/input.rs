//! Movement domain: input sampling for locomotion.
//!
//! Runs every render frame; edges are OR-accumulated so a press between fixed
//! ticks is never lost, and the tick orchestrator clears them after reading.

use bevy::prelude::*;

use crate::movement::MovementInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }
    input.axis_x = x;

    input.jump_pressed |=
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.jump_released |=
        keyboard.just_released(KeyCode::Space) || keyboard.just_released(KeyCode::KeyK);
    input.roll_pressed |=
        keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::KeyJ);
    input.roll_released |=
        keyboard.just_released(KeyCode::ShiftLeft) || keyboard.just_released(KeyCode::KeyJ);
}
