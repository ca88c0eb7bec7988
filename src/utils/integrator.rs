use serde::{Deserialize, Serialize};

/// Scalar continuous-time integrator discretised with the trapezoidal rule.
///
/// Holds the current output `x` and the previous input. When a minimum step is
/// configured, a call with a larger `dt` is split into sub-steps no larger than
/// that minimum, the last one taking the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Integrator {
    x: f64,
    u_prev: f64,
    dt_min: Option<f64>,
}

impl Integrator {
    /// Integrator without sub-stepping whose output starts at `initial`.
    ///
    /// The previous input starts at zero, not at `initial`, so the first call
    /// adds only `u * dt / 2`: a signal held from the start ramps in over one
    /// step. There is no default minimum step; use [`Integrator::with_dt_min`]
    /// to sub-step.
    pub fn new(initial: f64) -> Self {
        Self {
            x: initial,
            u_prev: 0.0,
            dt_min: None,
        }
    }

    /// Integrator that sub-steps any `dt` greater than `dt_min`.
    /// A non-positive `dt_min` disables sub-stepping.
    pub fn with_dt_min(initial: f64, dt_min: f64) -> Self {
        Self {
            x: initial,
            u_prev: 0.0,
            dt_min: (dt_min > 0.0).then_some(dt_min),
        }
    }

    /// Current output.
    pub fn state(&self) -> f64 {
        self.x
    }

    pub fn dt_min(&self) -> Option<f64> {
        self.dt_min
    }

    /// Advances the integrator by `dt` with input `u` and returns the new output.
    pub fn integrate(&mut self, dt: f64, u: f64) -> f64 {
        match self.dt_min {
            Some(dt_min) if dt > dt_min => {
                let mut remaining = dt;
                // Guard against a trailing sliver from floating point subtraction
                let tolerance = dt * 1.0e-9;
                while remaining > tolerance {
                    let step = remaining.min(dt_min);
                    self.run(step, u);
                    remaining -= step;
                }
                self.x
            }
            _ => self.run(dt, u),
        }
    }

    fn run(&mut self, dt: f64, u: f64) -> f64 {
        let y = self.x + 0.5 * dt * (u + self.u_prev);
        self.x = y;
        self.u_prev = u;
        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_step_keeps_state() {
        let mut integrator = Integrator::new(0.0);
        assert_eq!(integrator.integrate(0.0, 0.0), 0.0);
        assert_eq!(integrator.state(), 0.0);
    }

    #[test]
    fn test_trapezoidal_rule_carries_previous_input() {
        let mut integrator = Integrator::new(0.0);
        assert_relative_eq!(integrator.integrate(1.0, 2.0), 1.0);
        assert_relative_eq!(integrator.integrate(1.0, 2.0), 3.0);
    }

    #[test]
    fn test_first_step_starts_from_zero_input() {
        let mut integrator = Integrator::new(5.0);
        assert_relative_eq!(integrator.integrate(0.5, 4.0), 6.0);
        assert_relative_eq!(integrator.integrate(0.5, 4.0), 8.0);
    }

    #[test]
    fn test_sub_stepping_matches_sequential_steps() {
        let mut split = Integrator::with_dt_min(0.0, 0.5);
        let mut sequential = Integrator::with_dt_min(0.0, 0.5);

        let one = split.integrate(1.0, 2.0);
        sequential.integrate(0.5, 2.0);
        let two = sequential.integrate(0.5, 2.0);

        assert_relative_eq!(one, two);
        assert_relative_eq!(one, 1.5);
    }

    #[test]
    fn test_sub_stepping_uneven_remainder() {
        // 0.25 + 0.25 + 0.1
        let mut split = Integrator::with_dt_min(1.0, 0.25);
        let mut sequential = Integrator::with_dt_min(1.0, 0.25);

        let one = split.integrate(0.6, -1.0);
        sequential.integrate(0.25, -1.0);
        sequential.integrate(0.25, -1.0);
        let two = sequential.integrate(0.1, -1.0);

        assert_relative_eq!(one, two, epsilon = 1e-12);
    }

    #[test]
    fn test_non_positive_dt_min_disables_sub_stepping() {
        let integrator = Integrator::with_dt_min(0.0, 0.0);
        assert_eq!(integrator.dt_min(), None);
    }

    #[test]
    fn test_converges_to_ramp_for_constant_input() {
        let mut integrator = Integrator::with_dt_min(0.0, 0.01);
        // First sub-step only sees half of the input (u_prev = 0)
        let y = integrator.integrate(1.0, 1.0);
        assert_relative_eq!(y, 1.0 - 0.005, epsilon = 1e-9);
    }
}
