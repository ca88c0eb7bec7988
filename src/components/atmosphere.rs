use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::SEA_LEVEL_DENSITY;

/// Air the vehicle flies through during one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereState {
    /// Wind in the world frame, turbulence included [m/s]
    pub wind: Vector3<f64>,
    /// Ambient wind used to scale turbulence [m/s]
    pub wind_low_altitude: Vector3<f64>,
    /// Air density [kg/m³]
    pub density: f64,
}

impl Default for AtmosphereState {
    fn default() -> Self {
        Self {
            wind: Vector3::zeros(),
            wind_low_altitude: Vector3::zeros(),
            density: SEA_LEVEL_DENSITY,
        }
    }
}

impl AtmosphereState {
    pub fn new(wind: Vector3<f64>, density: f64) -> Self {
        Self {
            wind,
            wind_low_altitude: wind,
            density,
        }
    }

    /// Reference wind speed for the turbulence intensity [m/s]
    pub fn reference_wind_speed(&self) -> f64 {
        self.wind_low_altitude.norm()
    }
}
