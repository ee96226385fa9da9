//! Validation for movement configuration values.

use crate::movement::MovementTuning;

/// A validation error with context about which tunable failed.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "movement tunable '{}': {}", self.field, self.message)
    }
}

/// Check the invariants the tick loop relies on. Sensor geometry must be a
/// real box; rates must not be negative. A zero wall-jump window is allowed
/// and simply means wall jumps never become eligible.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut require_positive = |field: &'static str, value: f32| {
        if value <= 0.0 {
            errors.push(ValidationError {
                field,
                message: format!("must be positive, got {}", value),
            });
        }
    };

    require_positive("ground_check_size.x", tuning.ground_check_size.x);
    require_positive("ground_check_size.y", tuning.ground_check_size.y);
    require_positive("wall_check_size.x", tuning.wall_check_size.x);
    require_positive("wall_check_size.y", tuning.wall_check_size.y);
    require_positive("move_speed", tuning.move_speed);
    require_positive("acceleration", tuning.acceleration);
    require_positive("deceleration", tuning.deceleration);
    require_positive("jump_force", tuning.jump_force);
    require_positive("max_fall_speed", tuning.max_fall_speed);

    if tuning.wall_jump_time < 0.0 {
        errors.push(ValidationError {
            field: "wall_jump_time",
            message: format!("must not be negative, got {}", tuning.wall_jump_time),
        });
    }
    if !(0.0..=1.0).contains(&tuning.release_damping) {
        errors.push(ValidationError {
            field: "release_damping",
            message: format!("must lie in [0, 1], got {}", tuning.release_damping),
        });
    }

    errors
}
