use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::path::{Path, PathBuf};

use crate::components::actuators::{ActuatorConfig, FirstOrderConfig};
use crate::components::aircraft::config::{
    load_yaml, AeroCoefficients, AircraftGeometry, AirframeConfig, ConfigError,
    ControlDerivatives, FixedWingConfig, MassModel, MultiRotorConfig, MultiRotorLayout,
    SurfaceLayout,
};
use crate::components::control_surface::ControlSurfaceConfig;
use crate::components::propulsion::{
    PropellerConfig, PropellerTable, PropellerTableRow, RotationDirection,
};
use crate::utils::deg_to_rad;

/// Scalars from physical motion to display motion. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Multiplies propeller speed; watch out for aliasing
    pub propeller_speed_scalar: f64,
    /// Multiplies surface deflection angles
    pub surface_angle_scalar: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            propeller_speed_scalar: 1.0,
            surface_angle_scalar: 1.0,
        }
    }
}

/// Everything needed to build a vehicle, loaded once at start up.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct VehicleConfig {
    /// Name of the vehicle.
    pub name: String,
    /// Mass and inertia.
    pub mass: MassModel,
    /// Reference geometry for the aerodynamic coefficients.
    pub geometry: AircraftGeometry,
    /// Stability derivatives and stall model.
    #[serde(default)]
    pub aero_coef: AeroCoefficients,
    /// Fixed wing surfaces or multirotor mixing.
    pub airframe: AirframeConfig,
    /// Propulsion units, in the order commands are routed to them.
    #[serde(default)]
    pub propellers: Vec<PropellerConfig>,
    #[serde(default)]
    pub animation: AnimationConfig,
}

/// Source for a vehicle configuration.
#[derive(Debug, Clone)]
pub enum VehicleSource {
    Programmed(VehicleType),
    File(PathBuf),
}

/// Built-in vehicle presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Aerosonde,
    GenericQuadrotor,
}

impl VehicleConfig {
    /// Creates a vehicle configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - A built-in preset (`Programmed`) or a YAML file (`File`).
    ///
    /// # Returns
    /// The validated configuration, or the error that stopped it loading.
    pub fn new(source: VehicleSource) -> Result<Self, ConfigError> {
        match source {
            VehicleSource::Programmed(vehicle_type) => Ok(Self::from_programmed(vehicle_type)),
            VehicleSource::File(path) => Self::from_file(path),
        }
    }

    fn from_programmed(vehicle_type: VehicleType) -> Self {
        match vehicle_type {
            VehicleType::Aerosonde => Self::aerosonde(),
            VehicleType::GenericQuadrotor => Self::generic_quadrotor(),
        }
    }

    /// Reads a configuration from a YAML file and validates it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config: Self = load_yaml(path)?;
        config.validate()?;
        info!("Loaded vehicle configuration '{}'", config.name);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.mass.validate()?;
        self.airframe.validate(self.propellers.len())?;
        for propeller in &self.propellers {
            propeller.validate()?;
        }
        Ok(())
    }

    /// Small fixed-wing UAV with a single tractor propeller.
    pub fn aerosonde() -> Self {
        let max_deflection = deg_to_rad(25.0);
        let surfaces = ["elevator", "left_aileron", "right_aileron", "rudder"]
            .iter()
            .map(|name| ControlSurfaceConfig::new(name, max_deflection))
            .collect();

        Self {
            name: "Aerosonde".to_string(),
            mass: MassModel::aerosonde(),
            geometry: AircraftGeometry::aerosonde(),
            aero_coef: AeroCoefficients::aerosonde(),
            airframe: AirframeConfig::FixedWing(FixedWingConfig {
                layout: SurfaceLayout::Standard,
                surfaces,
                control: ControlDerivatives::aerosonde(),
            }),
            propellers: vec![PropellerConfig {
                name: "propeller".to_string(),
                position: Vector3::new(0.4, 0.0, 0.0),
                orientation: Vector3::new(0.0, -FRAC_PI_2, 0.0),
                diameter: 0.508,
                max_rpm: 6000.0,
                direction: RotationDirection::CounterClockwise,
                inertia: 2.0e-3,
                hub_drag_coefficient: 0.01,
                table: fixed_pitch_table(),
                motor: Some(ActuatorConfig::FirstOrder(FirstOrderConfig::new(10.0))),
            }],
            animation: AnimationConfig {
                propeller_speed_scalar: 590.0,
                surface_angle_scalar: 1.0,
            },
        }
    }

    /// 1.5 kg quad-rotor in the cross layout with 10 inch propellers.
    pub fn generic_quadrotor() -> Self {
        let arm = 0.18 * std::f64::consts::FRAC_1_SQRT_2;
        // PX4 numbering: front right, rear left, front left, rear right
        let mounts = [
            ("propeller_1", Vector3::new(arm, arm, 0.0), RotationDirection::CounterClockwise),
            ("propeller_2", Vector3::new(-arm, -arm, 0.0), RotationDirection::CounterClockwise),
            ("propeller_3", Vector3::new(arm, -arm, 0.0), RotationDirection::Clockwise),
            ("propeller_4", Vector3::new(-arm, arm, 0.0), RotationDirection::Clockwise),
        ];
        let propellers = mounts
            .iter()
            .map(|(name, position, direction)| PropellerConfig {
                name: name.to_string(),
                position: *position,
                orientation: Vector3::zeros(),
                diameter: 0.254,
                max_rpm: 12000.0,
                direction: *direction,
                inertia: 3.0e-5,
                hub_drag_coefficient: 0.01,
                table: rotor_table(),
                motor: Some(ActuatorConfig::FirstOrder(FirstOrderConfig::new(25.0))),
            })
            .collect();

        Self {
            name: "GenericQuadrotor".to_string(),
            mass: MassModel::generic_quadrotor(),
            geometry: AircraftGeometry::generic_quadrotor(),
            aero_coef: AeroCoefficients::generic_quadrotor(),
            airframe: AirframeConfig::MultiRotor(MultiRotorConfig {
                layout: MultiRotorLayout::Cross,
                thrust_offset: 0.3,
            }),
            propellers,
            animation: AnimationConfig {
                propeller_speed_scalar: 5.0,
                surface_angle_scalar: 1.0,
            },
        }
    }
}

// Built from constant rows, which are sorted and complete by construction.
fn table_from_rows(rows: Vec<PropellerTableRow>) -> PropellerTable {
    PropellerTable::new(rows).unwrap_or_else(|e| {
        error!("Built-in propeller table rejected: {}", e);
        PropellerTable::default()
    })
}

fn fixed_pitch_table() -> PropellerTable {
    let advance_ratio = vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0];
    table_from_rows(vec![
        PropellerTableRow {
            rpm: 2000.0,
            advance_ratio: advance_ratio.clone(),
            thrust_coefficient: vec![0.110, 0.100, 0.086, 0.066, 0.042, 0.012],
            power_coefficient: vec![0.049, 0.049, 0.047, 0.042, 0.033, 0.019],
        },
        PropellerTableRow {
            rpm: 4000.0,
            advance_ratio: advance_ratio.clone(),
            thrust_coefficient: vec![0.113, 0.103, 0.089, 0.069, 0.044, 0.014],
            power_coefficient: vec![0.050, 0.050, 0.048, 0.043, 0.034, 0.020],
        },
        PropellerTableRow {
            rpm: 6000.0,
            advance_ratio,
            thrust_coefficient: vec![0.115, 0.105, 0.090, 0.070, 0.045, 0.015],
            power_coefficient: vec![0.050, 0.050, 0.048, 0.043, 0.034, 0.020],
        },
    ])
}

fn rotor_table() -> PropellerTable {
    table_from_rows(vec![
        PropellerTableRow {
            rpm: 3000.0,
            advance_ratio: vec![0.0, 0.3, 0.6],
            thrust_coefficient: vec![0.105, 0.080, 0.035],
            power_coefficient: vec![0.046, 0.044, 0.030],
        },
        PropellerTableRow {
            rpm: 9000.0,
            advance_ratio: vec![0.0, 0.25, 0.5, 0.75],
            thrust_coefficient: vec![0.110, 0.090, 0.055, 0.010],
            power_coefficient: vec![0.047, 0.046, 0.038, 0.020],
        },
        PropellerTableRow {
            rpm: 12000.0,
            advance_ratio: vec![0.0, 0.25, 0.5, 0.75],
            thrust_coefficient: vec![0.112, 0.092, 0.058, 0.012],
            power_coefficient: vec![0.048, 0.047, 0.039, 0.021],
        },
    ])
}
