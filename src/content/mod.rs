//! Content domain: RON-backed configuration loading.

use bevy::prelude::*;
use std::path::Path;

mod data;
mod loader;
mod validation;

pub use data::MovementDef;
pub use loader::{ContentLoadError, load_movement_def};
pub use validation::{ValidationError, validate_tuning};

use crate::movement::MovementTuning;

const MOVEMENT_CONFIG_PATH: &str = "assets/data/movement.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_movement_config);
    }
}

/// Resolve the movement tuning before anything spawns. A missing file falls
/// back to defaults; a present-but-broken file or invalid values abort
/// startup rather than letting bad geometry reach the tick loop.
fn load_movement_config(mut commands: Commands) {
    let tuning = match load_movement_def(Path::new(MOVEMENT_CONFIG_PATH)) {
        Ok(Some(def)) => {
            info!("Loaded movement config from {}", MOVEMENT_CONFIG_PATH);
            MovementTuning::from(def)
        }
        Ok(None) => {
            warn!(
                "Movement config {} not found, using defaults",
                MOVEMENT_CONFIG_PATH
            );
            MovementTuning::default()
        }
        Err(e) => {
            panic!("{}", e);
        }
    };

    let errors = validate_tuning(&tuning);
    if !errors.is_empty() {
        for error in &errors {
            error!("{}", error);
        }
        panic!("invalid movement config ({} errors)", errors.len());
    }

    commands.insert_resource(tuning);
}
