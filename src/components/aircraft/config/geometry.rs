use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Reference geometry used to dimensionalise aerodynamic coefficients.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftGeometry {
    /// Reference areas for the x, y and z wind axes (m²). Fixed-wing
    /// airframes use the wing area on every axis.
    pub reference_area: Vector3<f64>,
    /// The wingspan of the aircraft (m).
    pub wing_span: f64,
    /// The mean aerodynamic chord of the aircraft (m).
    pub mac: f64,
}

impl AircraftGeometry {
    /// Creates a new `AircraftGeometry` with one reference area for all axes.
    ///
    /// # Arguments
    /// * `wing_area` - The total wing area of the aircraft (m²).
    /// * `wing_span` - The wing span of the aircraft (m).
    /// * `mac` - The mean aerodynamic chord (m).
    pub fn new(wing_area: f64, wing_span: f64, mac: f64) -> Self {
        AircraftGeometry {
            reference_area: Vector3::repeat(wing_area),
            wing_span,
            mac,
        }
    }

    pub fn with_reference_areas(mut self, areas: Vector3<f64>) -> Self {
        self.reference_area = areas;
        self
    }

    pub fn aerosonde() -> Self {
        Self::new(0.55, 2.8956, 0.18994)
    }

    pub fn generic_quadrotor() -> Self {
        Self::new(0.0, 0.45, 0.45).with_reference_areas(Vector3::new(0.02, 0.02, 0.06))
    }
}
