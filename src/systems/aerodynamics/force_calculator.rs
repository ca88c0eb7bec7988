use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{
    AeroCoefficients, AirData, AircraftGeometry, CoefficientSet, StallModel,
};
use crate::utils::{is_nearly_zero, remove_numerical_errors, sign, ForcesAndMoments};

/// Sigmoid blending factor σ(α) of the stall model, in [0, 1].
///
/// Close to 0 well below the stall angle `alpha_0` and close to 1 beyond it,
/// with `transition_rate` setting the sharpness.
pub fn stall_sigma(alpha: f64, alpha_0: f64, transition_rate: f64) -> f64 {
    let m = transition_rate;
    let below = (-m * (alpha - alpha_0)).exp();
    let above = (m * (alpha + alpha_0)).exp();

    let numerator = (1.0 + below + above).clamp(1.0, f64::MAX);
    let denominator = ((1.0 + below) * (1.0 + above)).clamp(1.0, f64::MAX);
    let sigma = numerator / denominator;

    // Fully stalled if the exponentials blew up
    if sigma.is_nan() {
        1.0
    } else {
        sigma
    }
}

/// Angle of attack terms of drag, lift and pitching moment after stall blending.
fn blend_alpha_terms(
    stall: &StallModel,
    alpha: f64,
    c_d_alpha: f64,
    c_l_alpha: f64,
    c_m_alpha: f64,
) -> (f64, f64, f64) {
    if !stall.enabled {
        return (c_d_alpha, c_l_alpha, c_m_alpha);
    }

    let sigma = stall_sigma(alpha, stall.alpha_0, stall.transition_rate);
    let (sin_a, cos_a) = alpha.sin_cos();
    let s = sign(alpha);

    let flat_plate_drag = 2.0 * s * sin_a.powi(3);
    let flat_plate_lift = 2.0 * s * sin_a.powi(2) * cos_a;
    let flat_plate_pitch = stall.c_m_fp * s * sin_a.powi(2);

    (
        (1.0 - sigma) * c_d_alpha + sigma * flat_plate_drag,
        (1.0 - sigma) * c_l_alpha + sigma * flat_plate_lift,
        (1.0 - sigma) * c_m_alpha + sigma * flat_plate_pitch,
    )
}

/// Builds the six aerodynamic coefficients from the stability derivatives.
///
/// # Arguments
/// * `geometry` - Span and chord for the rate terms.
/// * `coeffs` - Stability derivatives and stall model.
/// * `air_data` - Airspeed, α and β for this step.
/// * `angular_velocity` - Body rates (p, q, r) in rad/s.
/// * `additional` - Summed control effector increments.
pub fn calculate_coefficients(
    geometry: &AircraftGeometry,
    coeffs: &AeroCoefficients,
    air_data: &AirData,
    angular_velocity: &Vector3<f64>,
    additional: &CoefficientSet,
) -> CoefficientSet {
    let alpha = air_data.alpha;
    let beta = air_data.beta;
    let (p, q, r) = (angular_velocity.x, angular_velocity.y, angular_velocity.z);

    let (b_over_2va, c_over_2va) = if is_nearly_zero(air_data.true_airspeed) {
        (0.0, 0.0)
    } else {
        (
            geometry.wing_span / (2.0 * air_data.true_airspeed),
            geometry.mac / (2.0 * air_data.true_airspeed),
        )
    };

    let drag = &coeffs.drag;
    let lift = &coeffs.lift;
    let side = &coeffs.side_force;
    let roll = &coeffs.roll;
    let pitch = &coeffs.pitch;
    let yaw = &coeffs.yaw;

    // The zero-order and alpha terms are what the stall model replaces
    let (c_d_alpha, c_l_alpha, c_m_alpha) = blend_alpha_terms(
        &coeffs.stall,
        alpha,
        drag.c_d_0 + drag.c_d_alpha * alpha + drag.c_d_alpha2 * alpha.powi(2),
        lift.c_l_0 + lift.c_l_alpha * alpha,
        pitch.c_m_0 + pitch.c_m_alpha * alpha,
    );

    CoefficientSet {
        c_d: c_d_alpha
            + drag.c_d_q * c_over_2va * q
            + drag.c_d_beta * beta
            + drag.c_d_beta2 * beta.powi(2)
            + additional.c_d,
        c_y: side.c_y_0
            + side.c_y_beta * beta
            + side.c_y_p * b_over_2va * p
            + side.c_y_r * b_over_2va * r
            + additional.c_y,
        c_l: c_l_alpha + lift.c_l_q * c_over_2va * q + additional.c_l,
        c_roll: roll.c_l_0
            + roll.c_l_beta * beta
            + roll.c_l_p * b_over_2va * p
            + roll.c_l_r * b_over_2va * r
            + additional.c_roll,
        c_m: c_m_alpha + pitch.c_m_q * c_over_2va * q + additional.c_m,
        c_n: yaw.c_n_0
            + yaw.c_n_beta * beta
            + yaw.c_n_p * b_over_2va * p
            + yaw.c_n_r * b_over_2va * r
            + additional.c_n,
    }
}

/// Aerodynamic force and moment on the airframe, body frame.
///
/// Forces are built in the wind frame as (-CD, CY, -CL) and rotated to the
/// body frame through α and β.
pub fn calculate_aerodynamic_forces_moments(
    geometry: &AircraftGeometry,
    coefficients: &CoefficientSet,
    air_data: &AirData,
) -> ForcesAndMoments {
    let q_area = air_data.dynamic_pressure * geometry.reference_area;

    let wind_to_body = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -air_data.alpha)
        * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), air_data.beta);

    let force_wind = Vector3::new(-coefficients.c_d, coefficients.c_y, -coefficients.c_l);
    let force = (wind_to_body * force_wind).component_mul(&q_area);

    let moment = Vector3::new(
        coefficients.c_roll * geometry.wing_span,
        coefficients.c_m * geometry.mac,
        coefficients.c_n * geometry.wing_span,
    )
    .component_mul(&q_area);

    ForcesAndMoments::new(
        remove_numerical_errors(&force),
        remove_numerical_errors(&moment),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn air_data(alpha: f64, beta: f64, airspeed: f64) -> AirData {
        AirData {
            relative_velocity: Vector3::new(
                airspeed * alpha.cos() * beta.cos(),
                airspeed * beta.sin(),
                airspeed * alpha.sin() * beta.cos(),
            ),
            true_airspeed: airspeed,
            alpha,
            beta,
            dynamic_pressure: 0.5 * 1.225 * airspeed * airspeed,
        }
    }

    #[test]
    fn test_stall_sigma_bounds() {
        let stall = StallModel::aerosonde();
        let mut alpha = -std::f64::consts::PI;
        while alpha <= std::f64::consts::PI {
            let sigma = stall_sigma(alpha, stall.alpha_0, stall.transition_rate);
            assert!((0.0..=1.0).contains(&sigma), "sigma({}) = {}", alpha, sigma);
            alpha += 0.01;
        }
    }

    #[test]
    fn test_stall_sigma_regions() {
        assert!(stall_sigma(0.0, 0.47, 50.0) < 1e-6);
        assert!(stall_sigma(1.0, 0.47, 50.0) > 0.999);
        assert!(stall_sigma(-1.0, 0.47, 50.0) > 0.999);
        assert_relative_eq!(stall_sigma(0.47, 0.47, 50.0), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_stall_sigma_extreme_inputs() {
        // Both exponentials overflow, the clamps keep the ratio defined
        let sigma = stall_sigma(1.0e6, 0.47, 50.0);
        assert!((0.0..=1.0).contains(&sigma));
        assert_eq!(stall_sigma(f64::NAN, 0.47, 50.0), 1.0);
    }

    #[test]
    fn test_rate_terms_vanish_at_zero_airspeed() {
        let geometry = AircraftGeometry::aerosonde();
        let coeffs = AeroCoefficients::aerosonde();
        let at_rest = air_data(0.0, 0.0, 0.0);

        let coefficients = calculate_coefficients(
            &geometry,
            &coeffs,
            &at_rest,
            &Vector3::new(1.0, 1.0, 1.0),
            &CoefficientSet::default(),
        );
        assert!(coefficients.c_m.is_finite());

        let fm = calculate_aerodynamic_forces_moments(&geometry, &coefficients, &at_rest);
        assert_eq!(fm, ForcesAndMoments::zero());
    }

    #[test]
    fn test_level_flight_forces() {
        let geometry = AircraftGeometry::aerosonde();
        let coeffs = AeroCoefficients::aerosonde();
        let level = air_data(0.0, 0.0, 25.0);

        let coefficients = calculate_coefficients(
            &geometry,
            &coeffs,
            &level,
            &Vector3::zeros(),
            &CoefficientSet::default(),
        );
        let fm = calculate_aerodynamic_forces_moments(&geometry, &coefficients, &level);

        let q_s = level.dynamic_pressure * 0.55;
        // Drag opposes x, lift points up (-z)
        assert!(fm.force.x < 0.0);
        assert!(fm.force.z < 0.0);
        assert_relative_eq!(fm.force.z, -coefficients.c_l * q_s, epsilon = 1e-9);
        assert_relative_eq!(fm.force.x, -coefficients.c_d * q_s, epsilon = 1e-9);
        assert_relative_eq!(fm.force.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(fm.moment.y, coefficients.c_m * q_s * geometry.mac, epsilon = 1e-9);
    }

    #[test]
    fn test_wind_to_body_rotation() {
        let geometry = AircraftGeometry::new(1.0, 1.0, 1.0);
        let alpha = 0.2;
        let level = air_data(alpha, 0.0, 10.0);
        let coefficients = CoefficientSet {
            c_l: 1.0,
            c_d: 0.1,
            ..Default::default()
        };
        let fm = calculate_aerodynamic_forces_moments(&geometry, &coefficients, &level);
        let q = level.dynamic_pressure;

        // Lift tilts forward with alpha
        assert_relative_eq!(
            fm.force.x,
            q * (-0.1 * alpha.cos() + 1.0 * alpha.sin()),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            fm.force.z,
            q * (-0.1 * alpha.sin() - 1.0 * alpha.cos()),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_stall_reduces_lift_past_stall_angle() {
        let geometry = AircraftGeometry::aerosonde();
        let mut coeffs = AeroCoefficients::aerosonde();
        let deep = air_data(0.8, 0.0, 25.0);

        let stalled = calculate_coefficients(
            &geometry,
            &coeffs,
            &deep,
            &Vector3::zeros(),
            &CoefficientSet::default(),
        );
        coeffs.stall.enabled = false;
        let linear = calculate_coefficients(
            &geometry,
            &coeffs,
            &deep,
            &Vector3::zeros(),
            &CoefficientSet::default(),
        );

        assert!(stalled.c_l < linear.c_l);
        let flat_plate = 2.0 * 0.8f64.sin().powi(2) * 0.8f64.cos();
        assert_relative_eq!(stalled.c_l, flat_plate, epsilon = 1e-3);
    }

    #[test]
    fn test_additional_terms_are_summed() {
        let geometry = AircraftGeometry::aerosonde();
        let coeffs = AeroCoefficients::default();
        let level = air_data(0.0, 0.0, 25.0);
        let additional = CoefficientSet {
            c_d: 0.1,
            c_y: 0.2,
            c_l: 0.3,
            c_roll: 0.4,
            c_m: 0.5,
            c_n: 0.6,
        };
        let coefficients =
            calculate_coefficients(&geometry, &coeffs, &level, &Vector3::zeros(), &additional);
        assert_eq!(coefficients, additional);
    }
}
