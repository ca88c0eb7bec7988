use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Air-relative motion of the vehicle for the current step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AirData {
    /// Airspeed vector in the body frame (m/s)
    pub relative_velocity: Vector3<f64>,
    /// Magnitude of the airspeed vector (m/s)
    pub true_airspeed: f64,
    /// Angle of attack (rad), zero at zero airspeed
    pub alpha: f64,
    /// Sideslip angle (rad), zero at zero airspeed
    pub beta: f64,
    /// 0.5 * rho * Va^2 (Pa)
    pub dynamic_pressure: f64,
}

/// Equivalent elevator, aileron and rudder deflections (rad).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlSurfaces {
    pub elevator: f64,
    pub aileron: f64,
    pub rudder: f64,
}

/// The six non-dimensional force and moment coefficients, or increments to them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoefficientSet {
    /// Drag
    pub c_d: f64,
    /// Side force
    pub c_y: f64,
    /// Lift
    pub c_l: f64,
    /// Rolling moment
    pub c_roll: f64,
    /// Pitching moment
    pub c_m: f64,
    /// Yawing moment
    pub c_n: f64,
}

impl Add for CoefficientSet {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            c_d: self.c_d + rhs.c_d,
            c_y: self.c_y + rhs.c_y,
            c_l: self.c_l + rhs.c_l,
            c_roll: self.c_roll + rhs.c_roll,
            c_m: self.c_m + rhs.c_m,
            c_n: self.c_n + rhs.c_n,
        }
    }
}

impl AddAssign for CoefficientSet {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for CoefficientSet {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, c| acc + c)
    }
}
