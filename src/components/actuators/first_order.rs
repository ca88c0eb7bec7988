use serde::{Deserialize, Serialize};

use super::{default_dc_gain, default_dt_min, ActuatorLimits, ActuatorModel};
use crate::utils::Integrator;

/// Parameters of a first order lag `dc_gain * wn / (s + wn)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstOrderConfig {
    /// Natural frequency, the inverse of the time constant (rad/s)
    pub natural_frequency: f64,
    /// Steady state gain
    #[serde(default = "default_dc_gain")]
    pub dc_gain: f64,
    #[serde(default)]
    pub limits: ActuatorLimits,
    /// State the actuator starts from on its first command
    #[serde(default)]
    pub initial_state: f64,
    /// Largest integration sub-step (s)
    #[serde(default = "default_dt_min")]
    pub dt_min: f64,
}

impl FirstOrderConfig {
    pub fn new(natural_frequency: f64) -> Self {
        Self {
            natural_frequency,
            dc_gain: default_dc_gain(),
            limits: ActuatorLimits::default(),
            initial_state: 0.0,
            dt_min: default_dt_min(),
        }
    }

    pub fn with_dc_gain(mut self, dc_gain: f64) -> Self {
        self.dc_gain = dc_gain;
        self
    }

    pub fn with_limits(mut self, limits: ActuatorLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_initial_state(mut self, initial_state: f64) -> Self {
        self.initial_state = initial_state;
        self
    }
}

#[derive(Debug, Clone)]
pub struct FirstOrderActuator {
    config: FirstOrderConfig,
    integrator: Option<Integrator>,
    state: f64,
}

impl FirstOrderActuator {
    pub fn new(config: FirstOrderConfig) -> Self {
        let state = config.initial_state;
        Self {
            config,
            integrator: None,
            state,
        }
    }

    pub fn config(&self) -> &FirstOrderConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.integrator.is_some()
    }
}

impl ActuatorModel for FirstOrderActuator {
    fn apply_command(&mut self, command: f64, dt: f64) -> f64 {
        let config = &self.config;
        let integrator = self
            .integrator
            .get_or_insert_with(|| Integrator::with_dt_min(config.initial_state, config.dt_min));

        let input = command * config.dc_gain;
        let feedback = integrator.state();
        let output = integrator.integrate(dt, config.natural_frequency * (input - feedback));

        // The constrained value is reported, the filter keeps its own state
        self.state = config.limits.apply(feedback, output, dt);
        self.state
    }

    fn state(&self) -> f64 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_steady_state_gain() {
        let mut actuator = FirstOrderActuator::new(FirstOrderConfig::new(1.0));
        for _ in 0..2000 {
            actuator.apply_command(1.0, 0.01);
        }
        assert_relative_eq!(actuator.state(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_dc_gain_scales_output() {
        let config = FirstOrderConfig::new(10.0).with_dc_gain(6000.0);
        let mut actuator = FirstOrderActuator::new(config);
        for _ in 0..1000 {
            actuator.apply_command(0.5, 0.01);
        }
        assert_relative_eq!(actuator.state(), 3000.0, epsilon = 1e-3);
    }

    #[test]
    fn test_monotonic_step_response() {
        let mut actuator = FirstOrderActuator::new(FirstOrderConfig::new(5.0));
        let mut previous = actuator.state();
        for _ in 0..500 {
            let state = actuator.apply_command(1.0, 0.005);
            assert!(state >= previous);
            assert!(state <= 1.0 + 1e-12);
            previous = state;
        }
    }

    #[test]
    fn test_lazy_initialization_from_initial_state() {
        let config = FirstOrderConfig::new(1.0).with_initial_state(0.5);
        let mut actuator = FirstOrderActuator::new(config);

        assert!(!actuator.is_initialized());
        assert_eq!(actuator.state(), 0.5);

        // Commanding the initial state holds it
        let state = actuator.apply_command(0.5, 0.01);
        assert!(actuator.is_initialized());
        assert_relative_eq!(state, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_rate_limit_bounds_change_per_step() {
        let config = FirstOrderConfig::new(100.0).with_limits(ActuatorLimits {
            rate_limit: 1.0,
            ..Default::default()
        });
        let mut actuator = FirstOrderActuator::new(config);

        let state = actuator.apply_command(1.0, 0.01);
        assert!(state <= 0.01 + 1e-12, "state = {}", state);
    }

    #[test]
    fn test_saturation() {
        let config = FirstOrderConfig::new(20.0).with_limits(ActuatorLimits {
            upper_saturation: 0.3,
            lower_saturation: -0.2,
            ..Default::default()
        });
        let mut actuator = FirstOrderActuator::new(config);

        for _ in 0..500 {
            actuator.apply_command(1.0, 0.01);
        }
        assert_relative_eq!(actuator.state(), 0.3);

        for _ in 0..500 {
            actuator.apply_command(-1.0, 0.01);
        }
        assert_relative_eq!(actuator.state(), -0.2);
    }
}
