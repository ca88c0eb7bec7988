use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::utils::constants::{M_TO_FT, SMALL_NUMBER, VECTOR_NEARLY_ZERO};

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

#[inline]
pub fn rpm_to_rad_per_s(rpm: f64) -> f64 {
    rpm * 2.0 * PI / 60.0
}

#[inline]
pub fn rad_per_s_to_rpm(omega: f64) -> f64 {
    omega * 60.0 / (2.0 * PI)
}

#[inline]
pub fn m_to_ft(m: f64) -> f64 {
    m * M_TO_FT
}

#[inline]
pub fn ft_to_m(ft: f64) -> f64 {
    ft / M_TO_FT
}

/// Linear interpolation between two values.
///
/// Written as a weighted sum so that `factor == 0` returns `start` and
/// `factor == 1` returns `end` bit for bit.
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    let t = factor.clamp(0.0, 1.0);
    start * (1.0 - t) + end * t
}

#[inline]
pub fn is_nearly_zero(value: f64) -> bool {
    value.abs() <= SMALL_NUMBER
}

/// Sign of a value, returning zero for zero.
#[inline]
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Replaces NaN and infinite scalars with zero.
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Zeroes a vector holding any non-finite component, otherwise flushes
/// components smaller than `VECTOR_NEARLY_ZERO` to zero.
pub fn remove_numerical_errors(vector: &Vector3<f64>) -> Vector3<f64> {
    if vector.iter().any(|v| !v.is_finite()) {
        return Vector3::zeros();
    }
    vector.map(|v| if v.abs() < VECTOR_NEARLY_ZERO { 0.0 } else { v })
}

/// Moves `current` toward `target` by at most `rate * dt`.
pub fn interp_constant_to(current: f64, target: f64, dt: f64, rate: f64) -> f64 {
    let dist = target - current;
    if dist * dist < SMALL_NUMBER {
        return target;
    }
    let step = (rate * dt).abs();
    current + dist.clamp(-step, step)
}
