//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod locomotion;
pub(crate) mod sensors;
pub(crate) mod signals;

pub(crate) use input::read_input;
pub(crate) use locomotion::{
    apply_gravity, apply_horizontal_movement, apply_jump, apply_roll, apply_wall_slide,
    clear_input_edges, update_facing, update_wall_jump_window,
};
pub(crate) use sensors::{detect_ground, detect_walls};
pub(crate) use signals::{apply_visual_facing, publish_signals};
