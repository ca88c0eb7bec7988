use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

use crate::components::propulsion::{PropellerConfig, PropellerState};
use crate::utils::{
    is_nearly_zero, rad_per_s_to_rpm, remove_numerical_errors, ForcesAndMoments,
    VECTOR_NEARLY_ZERO,
};

/// Vehicle and air state a propeller needs for one step.
#[derive(Debug, Clone, Copy)]
pub struct PropellerInputs {
    /// Vehicle attitude, body to world
    pub attitude: UnitQuaternion<f64>,
    /// Vehicle velocity, world frame (m/s)
    pub velocity: Vector3<f64>,
    /// Wind velocity, world frame (m/s)
    pub wind: Vector3<f64>,
    /// Vehicle angular velocity, body frame (rad/s)
    pub angular_velocity: Vector3<f64>,
    /// Air density (kg/m³)
    pub density: f64,
}

/// Calculates the forces and moments produced by one propeller.
///
/// Works in the propeller frame, where thrust acts along -z, and returns the
/// result rotated to the world frame together with the intermediate state.
///
/// # Arguments
/// * `config` - Propeller geometry, table and drag coefficient.
/// * `mount` - Rotation from the propeller frame to the body frame.
/// * `omega` - Rotation speed (rad/s).
/// * `inputs` - Vehicle motion, wind and density.
pub fn calculate_propeller_forces_moments(
    config: &PropellerConfig,
    mount: &UnitQuaternion<f64>,
    omega: f64,
    inputs: &PropellerInputs,
) -> (ForcesAndMoments, PropellerState) {
    let prop_to_world = inputs.attitude * mount;

    // Relative air velocity and body rates in the propeller frame
    let airspeed = remove_numerical_errors(
        &prop_to_world.inverse_transform_vector(&(inputs.velocity - inputs.wind)),
    );
    let angular_velocity = mount.inverse_transform_vector(&inputs.angular_velocity);

    let diameter = config.diameter;
    let n = omega / (2.0 * PI);
    let airspeed_norm = airspeed.norm();

    let advance_ratio = if airspeed_norm < VECTOR_NEARLY_ZERO {
        0.0
    } else if is_nearly_zero(n) {
        // Drives the table lookup to its lower edge
        -f64::MAX
    } else {
        airspeed_norm / (n * diameter)
    };

    let aerodynamic_constant = inputs.density * n * n * diameter.powi(4);
    let (thrust_coefficient, power_coefficient) = config
        .table
        .coefficients(rad_per_s_to_rpm(omega), advance_ratio);

    let thrust = thrust_coefficient * aerodynamic_constant;
    let thrust_axis = -Vector3::z();
    let mut force = thrust * thrust_axis;

    // Hub drag on the transverse axes
    let transverse = Vector3::new(airspeed.x, airspeed.y, 0.0);
    if !is_nearly_zero(thrust) && transverse.norm() >= VECTOR_NEARLY_ZERO {
        force += -thrust * config.hub_drag_coefficient * transverse;
    }

    // Reaction of the air torque and the gyroscopic moment of the spinning disc
    let spin_axis = config.direction.sign() * thrust_axis;
    let torque = power_coefficient / (2.0 * PI) * aerodynamic_constant * diameter;
    let aerodynamic_moment = -torque * spin_axis;
    let angular_momentum = config.inertia * omega * spin_axis;
    let gyroscopic_moment = angular_momentum.cross(&angular_velocity);

    let prop_frame = ForcesAndMoments::new(
        remove_numerical_errors(&force),
        remove_numerical_errors(&(aerodynamic_moment + gyroscopic_moment)),
    );

    let state = PropellerState {
        omega,
        advance_ratio,
        aerodynamic_constant,
        thrust_coefficient,
        power_coefficient,
        thrust,
    };

    (prop_frame.rotated(&prop_to_world), state)
}
