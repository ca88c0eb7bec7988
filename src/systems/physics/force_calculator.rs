use nalgebra::{UnitQuaternion, Vector3};

use crate::utils::ForcesAndMoments;

/// Weight of the vehicle expressed in the body frame.
pub fn gravity_body_force(
    attitude: &UnitQuaternion<f64>,
    gravity: &Vector3<f64>,
    mass: f64,
) -> Vector3<f64> {
    attitude.inverse_transform_vector(&(gravity * mass))
}

/// Brings a propulsor's world-frame load to the body frame at the centre of
/// gravity, adding the moment of its force about the mounting arm.
pub fn propulsor_about_cg(
    attitude: &UnitQuaternion<f64>,
    world: &ForcesAndMoments,
    arm: &Vector3<f64>,
) -> ForcesAndMoments {
    world.rotated(&attitude.inverse()).about_reference(arm)
}

/// Net body-frame force and moment on the vehicle.
///
/// # Arguments
/// * `attitude` - Body to world rotation.
/// * `aerodynamic` - Airframe load, body frame.
/// * `propulsion` - Each propulsor's world-frame load and body-frame arm.
/// * `gravity` - Gravitational acceleration, world frame (m/s²).
/// * `mass` - Vehicle mass (kg).
pub fn calculate_net_forces_moments(
    attitude: &UnitQuaternion<f64>,
    aerodynamic: &ForcesAndMoments,
    propulsion: &[(ForcesAndMoments, Vector3<f64>)],
    gravity: &Vector3<f64>,
    mass: f64,
) -> ForcesAndMoments {
    let propulsive: ForcesAndMoments = propulsion
        .iter()
        .map(|(load, arm)| propulsor_about_cg(attitude, load, arm))
        .sum();

    let weight = ForcesAndMoments::new(
        gravity_body_force(attitude, gravity, mass),
        Vector3::zeros(),
    );

    *aerodynamic + propulsive + weight
}
