use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{MassModel, SpatialComponent};
use crate::utils::{remove_numerical_errors, ForcesAndMoments};

/// Velocity increments over one step, both in the body frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityIncrements {
    /// dV = dt·F/m (m/s)
    pub linear: Vector3<f64>,
    /// dΩ = J⁻¹(M − Ω×JΩ)·dt (rad/s)
    pub angular: Vector3<f64>,
}

/// Solves Newton's and Euler's equations for one explicit step.
///
/// # Arguments
/// * `mass` - Mass and inertia tensor.
/// * `total` - Net force and moment in the body frame.
/// * `angular_velocity` - Body rates (rad/s).
/// * `dt` - Step length (s).
pub fn calculate_velocity_increments(
    mass: &MassModel,
    total: &ForcesAndMoments,
    angular_velocity: &Vector3<f64>,
    dt: f64,
) -> VelocityIncrements {
    let linear = dt * total.force / mass.mass;

    let gyroscopic = angular_velocity.cross(&(mass.inertia * angular_velocity));
    let angular = mass.inertia_inv * (total.moment - gyroscopic) * dt;

    VelocityIncrements {
        linear: remove_numerical_errors(&linear),
        angular: remove_numerical_errors(&angular),
    }
}

/// Advances the kinematic state with body-frame force and moment.
///
/// Velocities take the explicit increments; position and attitude then move
/// with the updated rates (semi-implicit Euler).
pub fn integrate_rigid_body(
    spatial: &SpatialComponent,
    mass: &MassModel,
    total: &ForcesAndMoments,
    dt: f64,
) -> SpatialComponent {
    let increments = calculate_velocity_increments(mass, total, &spatial.angular_velocity, dt);

    let velocity = spatial.velocity + spatial.attitude * increments.linear;
    let angular_velocity = spatial.angular_velocity + increments.angular;

    let position = spatial.position + velocity * dt;
    // Body rates compose on the right
    let attitude = spatial.attitude * UnitQuaternion::from_scaled_axis(angular_velocity * dt);

    SpatialComponent {
        position,
        velocity,
        attitude: UnitQuaternion::new_normalize(attitude.into_inner()),
        angular_velocity,
    }
}
