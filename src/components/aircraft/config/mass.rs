use bevy::prelude::*;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::ConfigError;

/// Principal and cross moments of inertia as they appear in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassProperties {
    /// Total mass (kg).
    pub mass: f64,
    pub ixx: f64,
    pub iyy: f64,
    pub izz: f64,
    #[serde(default)]
    pub ixz: f64,
}

#[derive(Component, Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MassProperties", into = "MassProperties")]
pub struct MassModel {
    /// Total mass of the vehicle (kg).
    pub mass: f64,
    /// The inertia matrix (3x3) representing the moments and products of inertia.
    pub inertia: Matrix3<f64>,
    /// Precomputed inverse of the inertia matrix.
    pub inertia_inv: Matrix3<f64>,
    properties: MassProperties,
}

impl MassModel {
    /// Creates a new `MassModel` instance with specified mass and inertia components.
    ///
    /// # Arguments
    /// * `mass` - Total mass of the vehicle (kg).
    /// * `ixx` - Moment of inertia about the x-axis (kg·m²).
    /// * `iyy` - Moment of inertia about the y-axis (kg·m²).
    /// * `izz` - Moment of inertia about the z-axis (kg·m²).
    /// * `ixz` - Product of inertia between the x and z axes (kg·m²).
    ///
    /// # Returns
    /// A `MassModel` instance with the specified parameters.
    /// If the inertia matrix is not invertible, a zero matrix is used for the inverse, and an error is logged.
    pub fn new(mass: f64, ixx: f64, iyy: f64, izz: f64, ixz: f64) -> Self {
        let inertia = Matrix3::from_columns(&[
            Vector3::new(ixx, 0.0, -ixz),
            Vector3::new(0.0, iyy, 0.0),
            Vector3::new(-ixz, 0.0, izz),
        ]);
        let inertia_inv = inertia.try_inverse().unwrap_or_else(|| {
            error!("Inertia matrix is uninvertable, defaulting to zero matrix.");
            Matrix3::zeros()
        });

        Self {
            mass,
            inertia,
            inertia_inv,
            properties: MassProperties {
                mass,
                ixx,
                iyy,
                izz,
                ixz,
            },
        }
    }

    pub fn properties(&self) -> &MassProperties {
        &self.properties
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mass > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "mass must be positive, got {}",
                self.mass
            )));
        }
        if self.inertia.try_inverse().is_none() {
            return Err(ConfigError::ValidationError(
                "inertia tensor is not invertible".to_string(),
            ));
        }
        Ok(())
    }

    pub fn aerosonde() -> Self {
        Self::new(13.5, 0.8244, 1.135, 1.759, 0.1204)
    }

    pub fn generic_quadrotor() -> Self {
        Self::new(1.5, 0.0347, 0.0458, 0.0977, 0.0)
    }
}

impl TryFrom<MassProperties> for MassModel {
    type Error = ConfigError;

    fn try_from(p: MassProperties) -> Result<Self, Self::Error> {
        let model = Self::new(p.mass, p.ixx, p.iyy, p.izz, p.ixz);
        model.validate()?;
        Ok(model)
    }
}

impl From<MassModel> for MassProperties {
    fn from(model: MassModel) -> Self {
        model.properties
    }
}
