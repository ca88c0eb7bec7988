use serde::{Deserialize, Serialize};

use crate::utils::Integrator;

/// Gains and integrator settings for a PI controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PIControllerConfig {
    pub kp: f64,
    pub ki: f64,
    #[serde(default)]
    pub initial_state: f64,
    #[serde(default)]
    pub dt_min: f64,
}

/// Proportional-integral controller: `kp * e + integral(ki * e)`.
#[derive(Debug, Clone)]
pub struct PIController {
    kp: f64,
    ki: f64,
    integrator: Integrator,
}

impl PIController {
    pub fn new(config: PIControllerConfig) -> Self {
        Self {
            kp: config.kp,
            ki: config.ki,
            integrator: Integrator::with_dt_min(config.initial_state, config.dt_min),
        }
    }

    pub fn update(&mut self, error: f64, dt: f64) -> f64 {
        self.kp * error + self.integrator.integrate(dt, self.ki * error)
    }

    /// Current value of the integral term.
    pub fn integral(&self) -> f64 {
        self.integrator.state()
    }

    pub fn reset(&mut self, initial_state: f64) {
        let dt_min = self.integrator.dt_min().unwrap_or(0.0);
        self.integrator = Integrator::with_dt_min(initial_state, dt_min);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn controller(kp: f64, ki: f64) -> PIController {
        PIController::new(PIControllerConfig {
            kp,
            ki,
            initial_state: 0.0,
            dt_min: 0.0,
        })
    }

    #[test]
    fn test_proportional_only() {
        let mut pi = controller(2.0, 0.0);
        assert_relative_eq!(pi.update(0.5, 0.1), 1.0);
        assert_relative_eq!(pi.update(-0.5, 0.1), -1.0);
    }

    #[test]
    fn test_integral_accumulates_constant_error() {
        let mut pi = controller(0.0, 1.0);
        // Trapezoidal: 0.5 * 1 * (1 + 0), then + 1 * (1 + 1) / 2
        assert_relative_eq!(pi.update(1.0, 1.0), 0.5);
        assert_relative_eq!(pi.update(1.0, 1.0), 1.5);
        assert_relative_eq!(pi.integral(), 1.5);
    }

    #[test]
    fn test_closed_loop_removes_steady_error() {
        // First order plant x' = u - x tracking a setpoint of 1
        let mut pi = controller(2.0, 1.0);
        let mut plant = Integrator::new(0.0);
        let dt = 0.01;
        let mut x = 0.0;
        for _ in 0..3000 {
            let u = pi.update(1.0 - x, dt);
            x = plant.integrate(dt, u - x);
        }
        assert_relative_eq!(x, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_reset() {
        let mut pi = controller(0.0, 1.0);
        pi.update(1.0, 1.0);
        pi.reset(0.25);
        assert_relative_eq!(pi.integral(), 0.25);
    }
}
