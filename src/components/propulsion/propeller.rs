use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::actuators::{Actuator, ActuatorConfig, ActuatorModel};
use crate::components::propulsion::PropellerTable;
use crate::components::ConfigError;
use crate::systems::propulsion::{calculate_propeller_forces_moments, PropellerInputs};
use crate::utils::{rpm_to_rad_per_s, ForcesAndMoments, DEFAULT_HUB_DRAG_COEFFICIENT};

/// Spin direction seen from the side the thrust points toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// +1 when the propeller's angular velocity points along the thrust axis.
    pub fn sign(&self) -> f64 {
        match self {
            RotationDirection::CounterClockwise => 1.0,
            RotationDirection::Clockwise => -1.0,
        }
    }
}

fn default_hub_drag_coefficient() -> f64 {
    DEFAULT_HUB_DRAG_COEFFICIENT
}

/// Static description of one propeller and its drive.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct PropellerConfig {
    pub name: String,
    /// Hub position relative to the centre of mass, body frame (m)
    pub position: Vector3<f64>,
    /// Roll, pitch and yaw of the propeller frame relative to the body (rad).
    /// The thrust acts along the propeller frame's -z axis.
    #[serde(default)]
    pub orientation: Vector3<f64>,
    /// Propeller diameter (m)
    pub diameter: f64,
    /// Rotation speed at full command (RPM)
    pub max_rpm: f64,
    pub direction: RotationDirection,
    /// Moment of inertia about the spin axis (kg·m²)
    #[serde(default)]
    pub inertia: f64,
    /// Lumped drag coefficient on the two axes transverse to the thrust
    #[serde(default = "default_hub_drag_coefficient")]
    pub hub_drag_coefficient: f64,
    /// Thrust and power coefficient table
    #[serde(default)]
    pub table: PropellerTable,
    /// Motor dynamics, fed with `command * max_rpm` and producing RPM
    #[serde(default)]
    pub motor: Option<ActuatorConfig>,
}

impl PropellerConfig {
    /// Rotation from the propeller frame to the body frame.
    pub fn mount_rotation(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_euler_angles(
            self.orientation.x,
            self.orientation.y,
            self.orientation.z,
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.diameter > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "propeller '{}' must have a positive diameter",
                self.name
            )));
        }
        if self.max_rpm < 0.0 || self.inertia < 0.0 || self.hub_drag_coefficient < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "propeller '{}' has a negative rpm, inertia or drag coefficient",
                self.name
            )));
        }
        Ok(())
    }
}

/// Values computed for a propeller during the last step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PropellerState {
    /// Rotation speed (rad/s)
    pub omega: f64,
    /// Advance ratio
    pub advance_ratio: f64,
    /// rho * n^2 * D^4 with n in rev/s
    pub aerodynamic_constant: f64,
    pub thrust_coefficient: f64,
    pub power_coefficient: f64,
    /// Thrust magnitude along the thrust axis (N)
    pub thrust: f64,
}

/// A propeller instance: configuration, optional motor and last computed state.
#[derive(Debug, Clone)]
pub struct Propeller {
    config: PropellerConfig,
    mount: UnitQuaternion<f64>,
    motor: Option<Actuator>,
    state: PropellerState,
}

impl Propeller {
    pub fn new(config: PropellerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mount = config.mount_rotation();
        let motor = config.motor.as_ref().map(ActuatorConfig::build);
        Ok(Self {
            config,
            mount,
            motor,
            state: PropellerState::default(),
        })
    }

    pub fn config(&self) -> &PropellerConfig {
        &self.config
    }

    pub fn state(&self) -> &PropellerState {
        &self.state
    }

    /// Moment arm of the hub about the centre of mass (body frame).
    pub fn position(&self) -> &Vector3<f64> {
        &self.config.position
    }

    /// Drives the propeller with a command in [0, 1] and returns the new
    /// rotation speed in rad/s.
    pub fn apply_command(&mut self, command: f64, dt: f64) -> f64 {
        let target_rpm = command.clamp(0.0, 1.0) * self.config.max_rpm;
        let rpm = match self.motor.as_mut() {
            Some(motor) => motor.apply_command(target_rpm, dt),
            None => target_rpm,
        };
        self.state.omega = rpm_to_rad_per_s(rpm);
        self.state.omega
    }

    /// Computes thrust, hub drag, aerodynamic torque and gyroscopic moment at
    /// the current rotation speed. The result is expressed in the world frame
    /// and acts at the hub.
    pub fn update(&mut self, inputs: &PropellerInputs) -> ForcesAndMoments {
        let (forces, state) =
            calculate_propeller_forces_moments(&self.config, &self.mount, self.state.omega, inputs);
        self.state = state;
        forces
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::actuators::FirstOrderConfig;
    use approx::assert_relative_eq;

    fn config() -> PropellerConfig {
        PropellerConfig {
            name: "front".to_string(),
            position: Vector3::new(0.3, 0.0, 0.0),
            orientation: Vector3::zeros(),
            diameter: 0.25,
            max_rpm: 6000.0,
            direction: RotationDirection::Clockwise,
            inertia: 1.0e-4,
            hub_drag_coefficient: 0.01,
            table: PropellerTable::default(),
            motor: None,
        }
    }

    #[test]
    fn test_direct_drive_scales_command() {
        let mut propeller = Propeller::new(config()).unwrap();
        let omega = propeller.apply_command(0.5, 0.01);
        assert_relative_eq!(omega, rpm_to_rad_per_s(3000.0));

        // Commands are clamped to [0, 1]
        assert_relative_eq!(propeller.apply_command(2.0, 0.01), rpm_to_rad_per_s(6000.0));
        assert_eq!(propeller.apply_command(-1.0, 0.01), 0.0);
    }

    #[test]
    fn test_motor_lags_command() {
        let mut cfg = config();
        cfg.motor = Some(ActuatorConfig::FirstOrder(FirstOrderConfig::new(5.0)));
        let mut propeller = Propeller::new(cfg).unwrap();

        let first = propeller.apply_command(1.0, 0.01);
        assert!(first > 0.0 && first < rpm_to_rad_per_s(6000.0));

        for _ in 0..1000 {
            propeller.apply_command(1.0, 0.01);
        }
        assert_relative_eq!(
            propeller.state().omega,
            rpm_to_rad_per_s(6000.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_rejects_non_positive_diameter() {
        let mut cfg = config();
        cfg.diameter = 0.0;
        assert!(Propeller::new(cfg).is_err());
    }

    #[test]
    fn test_rotation_direction_sign() {
        assert_eq!(RotationDirection::CounterClockwise.sign(), 1.0);
        assert_eq!(RotationDirection::Clockwise.sign(), -1.0);
    }
}
