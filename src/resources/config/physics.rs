use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::DEFAULT_TIMESTEP;

/// Fixed physics step shared by every vehicle.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Step length (s)
    pub timestep: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
        }
    }
}
