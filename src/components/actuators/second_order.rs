use serde::{Deserialize, Serialize};

use super::{default_dc_gain, default_dt_min, ActuatorLimits, ActuatorModel};
use crate::utils::Integrator;

/// Parameters of `dc_gain * wn^2 / (s^2 + 2 zeta wn s + wn^2)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondOrderConfig {
    /// Natural frequency (rad/s)
    pub natural_frequency: f64,
    /// Damping ratio (zeta)
    pub damping_ratio: f64,
    #[serde(default = "default_dc_gain")]
    pub dc_gain: f64,
    #[serde(default)]
    pub limits: ActuatorLimits,
    #[serde(default)]
    pub initial_state: f64,
    #[serde(default = "default_dt_min")]
    pub dt_min: f64,
}

impl SecondOrderConfig {
    pub fn new(natural_frequency: f64, damping_ratio: f64) -> Self {
        Self {
            natural_frequency,
            damping_ratio,
            dc_gain: default_dc_gain(),
            limits: ActuatorLimits::default(),
            initial_state: 0.0,
            dt_min: default_dt_min(),
        }
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

/// Two cascaded integrators: the first carries the output rate, the second the
/// output itself.
#[derive(Debug, Clone)]
struct Stages {
    rate: Integrator,
    position: Integrator,
}

#[derive(Debug, Clone)]
pub struct SecondOrderActuator {
    config: SecondOrderConfig,
    stages: Option<Stages>,
    state: f64,
}

impl SecondOrderActuator {
    pub fn new(config: SecondOrderConfig) -> Self {
        let state = config.initial_state;
        Self {
            config,
            stages: None,
            state,
        }
    }

    pub fn config(&self) -> &SecondOrderConfig {
        &self.config
    }

    /// Output rate of the filter, zero until the first command.
    pub fn rate(&self) -> f64 {
        self.stages.as_ref().map_or(0.0, |s| s.rate.state())
    }
}

impl ActuatorModel for SecondOrderActuator {
    fn apply_command(&mut self, command: f64, dt: f64) -> f64 {
        let config = &self.config;
        let stages = self.stages.get_or_insert_with(|| Stages {
            rate: Integrator::with_dt_min(0.0, config.dt_min),
            position: Integrator::with_dt_min(config.initial_state, config.dt_min),
        });

        let wn = config.natural_frequency;
        let wn2 = wn * wn;

        let input = command * config.dc_gain * wn2;
        let position_feedback = stages.position.state() * wn2;
        let rate_feedback = stages.rate.state() * 2.0 * config.damping_ratio * wn;
        let rate = stages
            .rate
            .integrate(dt, input - position_feedback - rate_feedback);

        let previous = stages.position.state();
        let output = stages.position.integrate(dt, rate);

        self.state = config.limits.apply(previous, output, dt);
        self.state
    }

    fn state(&self) -> f64 {
        self.state
    }
}
