use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::airframe::Airframe;
use crate::components::{
    AirData, AirframeConfig, AtmosphereState, ControlCommands, ControlSurfaces, DrydenConfig,
    DrydenTurbulence, Propeller, PropellerState, SpatialComponent, VehicleConfig,
};
use crate::resources::Environment;
use crate::systems::{
    additional_coefficients, build_effectors, calculate_aerodynamic_forces_moments,
    calculate_air_data, calculate_atmosphere, calculate_coefficients,
    calculate_net_forces_moments, integrate_rigid_body, surface_animation_angles,
    ControlEffector, PropellerInputs,
};
use crate::utils::{rad_to_deg, ForcesAndMoments, SimError};

/// Display values for meshes: propeller speeds (deg/s) and surface angles (deg).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    pub propeller_speeds: Vec<f64>,
    pub surface_angles: Vec<f64>,
}

/// Everything one step produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOutput {
    /// Kinematic state after the step
    pub state: SpatialComponent,
    /// Net force and moment, world frame
    pub forces: ForcesAndMoments,
    pub air_data: AirData,
    pub atmosphere: AtmosphereState,
    /// Equivalent elevator, aileron and rudder (rad)
    pub surfaces: ControlSurfaces,
    /// Individual surface deflections in layout order (rad)
    pub surface_deflections: Vec<f64>,
    pub propellers: Vec<PropellerState>,
    pub animation: AnimationState,
}

/// A vehicle assembled from its configuration, owning every piece of
/// continuous state the step pipeline mutates.
#[derive(Component, Debug)]
pub struct FlightVehicle {
    config: VehicleConfig,
    airframe: Airframe,
    propellers: Vec<Propeller>,
    effectors: Vec<Box<dyn ControlEffector>>,
    turbulence: Option<DrydenTurbulence>,
}

impl FlightVehicle {
    /// Builds a vehicle, validating the configuration first.
    ///
    /// # Arguments
    /// * `config` - Vehicle description.
    /// * `turbulence` - Dryden settings, or None for smooth air.
    pub fn new(config: VehicleConfig, turbulence: Option<DrydenConfig>) -> Result<Self, SimError> {
        config.validate()?;

        let propellers = config
            .propellers
            .iter()
            .cloned()
            .map(Propeller::new)
            .collect::<Result<Vec<_>, _>>()?;

        let effectors = match &config.airframe {
            AirframeConfig::FixedWing(fixed_wing) => build_effectors(&fixed_wing.control),
            AirframeConfig::MultiRotor(_) => Vec::new(),
        };

        info!(
            "Built vehicle '{}' with {} propeller(s), {} effector(s), turbulence {}",
            config.name,
            propellers.len(),
            effectors.len(),
            if turbulence.is_some() { "on" } else { "off" }
        );

        Ok(Self {
            airframe: Airframe::new(&config.airframe),
            propellers,
            effectors,
            turbulence: turbulence.map(DrydenTurbulence::new),
            config,
        })
    }

    pub fn config(&self) -> &VehicleConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn propellers(&self) -> &[Propeller] {
        &self.propellers
    }

    pub fn airframe(&self) -> &Airframe {
        &self.airframe
    }

    /// Advances the vehicle by one fixed step.
    ///
    /// Order: atmosphere, air data, actuators, airframe aerodynamics,
    /// propulsion, force summation, rigid body integration. A non-finite or
    /// negative `dt` is treated as zero.
    pub fn step(
        &mut self,
        state: &SpatialComponent,
        commands: &ControlCommands,
        environment: &Environment,
        dt: f64,
    ) -> StepOutput {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        let atmosphere = calculate_atmosphere(environment, self.turbulence.as_mut(), state, dt);
        let air_data = calculate_air_data(
            &state.attitude,
            &state.velocity,
            &atmosphere.wind,
            atmosphere.density,
        );

        let (surfaces, surface_deflections) =
            self.airframe.actuate(commands, &mut self.propellers, dt);

        let additional = additional_coefficients(&self.effectors, &surfaces);
        let coefficients = calculate_coefficients(
            &self.config.geometry,
            &self.config.aero_coef,
            &air_data,
            &state.angular_velocity,
            &additional,
        );
        let aerodynamic =
            calculate_aerodynamic_forces_moments(&self.config.geometry, &coefficients, &air_data);

        let inputs = PropellerInputs {
            attitude: state.attitude,
            velocity: state.velocity,
            wind: atmosphere.wind,
            angular_velocity: state.angular_velocity,
            density: atmosphere.density,
        };
        let propulsion: Vec<_> = self
            .propellers
            .iter_mut()
            .map(|propeller| (propeller.update(&inputs), *propeller.position()))
            .collect();

        let total = calculate_net_forces_moments(
            &state.attitude,
            &aerodynamic,
            &propulsion,
            &environment.gravity,
            self.config.mass.mass,
        );
        let next = integrate_rigid_body(state, &self.config.mass, &total, dt);

        StepOutput {
            state: next,
            forces: total.rotated(&state.attitude),
            air_data,
            atmosphere,
            surfaces,
            animation: self.animation_state(&surface_deflections),
            surface_deflections,
            propellers: self.propellers.iter().map(|p| *p.state()).collect(),
        }
    }

    fn animation_state(&self, surface_deflections: &[f64]) -> AnimationState {
        let animation = &self.config.animation;
        AnimationState {
            propeller_speeds: self
                .propellers
                .iter()
                .map(|p| rad_to_deg(p.state().omega) * animation.propeller_speed_scalar)
                .collect(),
            surface_angles: self
                .airframe
                .surface_layout()
                .map(|layout| {
                    surface_animation_angles(
                        layout,
                        surface_deflections,
                        animation.surface_angle_scalar,
                    )
                })
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{MultiRotorConfig, MultiRotorLayout};
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    #[test]
    fn test_quadrotor_at_rest_falls_without_thrust() {
        let mut config = VehicleConfig::generic_quadrotor();
        config.airframe = AirframeConfig::MultiRotor(MultiRotorConfig {
            layout: MultiRotorLayout::Cross,
            thrust_offset: 0.0,
        });
        let mut vehicle = FlightVehicle::new(config, None).unwrap();
        let output = vehicle.step(
            &SpatialComponent::default(),
            &ControlCommands::default(),
            &Environment::default(),
            0.01,
        );
        assert_relative_eq!(output.forces.force.z, 1.5 * 9.80665, epsilon = 1e-9);
        assert_relative_eq!(output.state.velocity.z, 9.80665 * 0.01, epsilon = 1e-9);
        assert_eq!(output.propellers.len(), 4);
        assert!(output.surface_deflections.is_empty());
    }

    #[test]
    fn test_fixed_wing_reports_surfaces() {
        let mut vehicle = FlightVehicle::new(VehicleConfig::aerosonde(), None).unwrap();
        let state = SpatialComponent {
            velocity: Vector3::new(25.0, 0.0, 0.0),
            ..Default::default()
        };
        let output = vehicle.step(
            &state,
            &ControlCommands::new(0.5, 0.0, 0.0, 0.5),
            &Environment::default(),
            0.01,
        );
        assert_eq!(output.surface_deflections.len(), 4);
        assert_relative_eq!(output.surfaces.elevator, 0.5 * crate::utils::deg_to_rad(25.0));
        assert_eq!(output.animation.surface_angles.len(), 4);
        assert!(output.air_data.true_airspeed > 24.0);
    }

    #[test]
    fn test_invalid_dt_leaves_state() {
        let mut vehicle = FlightVehicle::new(VehicleConfig::generic_quadrotor(), None).unwrap();
        let state = SpatialComponent::at_position(Vector3::new(1.0, 2.0, -3.0));
        let output = vehicle.step(
            &state,
            &ControlCommands::default(),
            &Environment::default(),
            f64::NAN,
        );
        assert_eq!(output.state, state);
    }
}
