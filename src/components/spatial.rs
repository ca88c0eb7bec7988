use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Kinematic state of a vehicle, advanced once per step.
///
/// World frame is North-East-Down, body frame is forward-right-down.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpatialComponent {
    /// NED position [m]
    pub position: Vector3<f64>,
    /// NED velocity [m/s]
    pub velocity: Vector3<f64>,
    /// Body to world rotation
    pub attitude: UnitQuaternion<f64>,
    /// Body rates p, q, r [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self::at_position(Vector3::zeros())
    }
}

impl SpatialComponent {
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_velocity,
        }
    }

    /// At rest and level at `position`.
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self::new(
            position,
            Vector3::zeros(),
            UnitQuaternion::identity(),
            Vector3::zeros(),
        )
    }

    /// Replaces the attitude with roll, pitch and yaw [rad].
    pub fn with_euler(mut self, roll: f64, pitch: f64, yaw: f64) -> Self {
        self.attitude = UnitQuaternion::from_euler_angles(roll, pitch, yaw);
        self
    }

    /// Roll, pitch and yaw [rad].
    pub fn euler_angles(&self) -> (f64, f64, f64) {
        self.attitude.euler_angles()
    }

    /// Height above the origin [m], positive up.
    pub fn altitude(&self) -> f64 {
        -self.position.z
    }

    pub fn body_velocity(&self) -> Vector3<f64> {
        self.attitude.inverse_transform_vector(&self.velocity)
    }
}
