use nalgebra::{UnitQuaternion, Vector3};

use crate::components::AirData;
use crate::utils::{is_nearly_zero, remove_numerical_errors};

/// Calculates airspeed, angle of attack, sideslip and dynamic pressure.
///
/// # Arguments
/// * `attitude` - Body to world rotation.
/// * `velocity` - Vehicle velocity in the world frame (m/s).
/// * `wind` - Wind velocity in the world frame (m/s).
/// * `density` - Air density (kg/m³).
pub fn calculate_air_data(
    attitude: &UnitQuaternion<f64>,
    velocity: &Vector3<f64>,
    wind: &Vector3<f64>,
    density: f64,
) -> AirData {
    let relative_velocity =
        remove_numerical_errors(&attitude.inverse_transform_vector(&(velocity - wind)));
    let airspeed = relative_velocity.norm();

    // Undefined at zero airspeed
    let (alpha, beta) = if is_nearly_zero(airspeed) || airspeed.is_nan() {
        (0.0, 0.0)
    } else {
        (
            relative_velocity.z.atan2(relative_velocity.x),
            (relative_velocity.y / airspeed).clamp(-1.0, 1.0).asin(),
        )
    };

    AirData {
        relative_velocity,
        true_airspeed: airspeed,
        alpha,
        beta,
        dynamic_pressure: 0.5 * density * airspeed * airspeed,
    }
}
