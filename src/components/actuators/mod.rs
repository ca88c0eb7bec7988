//! Servo and motor dynamics.
//!
//! Both filters share the same output stage: optional rate limiting toward the
//! filter output, then optional lower and upper saturation. A zero value
//! disables the corresponding constraint.

mod first_order;
mod second_order;

pub use first_order::{FirstOrderActuator, FirstOrderConfig};
pub use second_order::{SecondOrderActuator, SecondOrderConfig};

use serde::{Deserialize, Serialize};

use crate::utils::{interp_constant_to, DEFAULT_ACTUATOR_DT_MIN};

/// Capability shared by every actuator model.
pub trait ActuatorModel {
    /// Feeds a command through the actuator dynamics for `dt` seconds and
    /// returns the new actuator state.
    fn apply_command(&mut self, command: f64, dt: f64) -> f64;

    /// Current actuator state.
    fn state(&self) -> f64;
}

/// Output constraints. Zero means "not set".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActuatorLimits {
    /// Maximum rate of change of the output (units/s)
    pub rate_limit: f64,
    /// Lower bound of the output
    pub lower_saturation: f64,
    /// Upper bound of the output
    pub upper_saturation: f64,
}

impl ActuatorLimits {
    /// Rate limits `output` relative to `previous`, then saturates it.
    pub fn apply(&self, previous: f64, output: f64, dt: f64) -> f64 {
        let mut out = output;
        if self.rate_limit != 0.0 {
            out = interp_constant_to(previous, out, dt, self.rate_limit);
        }
        if self.lower_saturation != 0.0 {
            out = out.max(self.lower_saturation);
        }
        if self.upper_saturation != 0.0 {
            out = out.min(self.upper_saturation);
        }
        out
    }
}

pub(crate) fn default_dc_gain() -> f64 {
    1.0
}

pub(crate) fn default_dt_min() -> f64 {
    DEFAULT_ACTUATOR_DT_MIN
}

/// Serializable description of an actuator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActuatorConfig {
    FirstOrder(FirstOrderConfig),
    SecondOrder(SecondOrderConfig),
}

impl ActuatorConfig {
    pub fn build(&self) -> Actuator {
        match self {
            ActuatorConfig::FirstOrder(config) => {
                Actuator::FirstOrder(FirstOrderActuator::new(config.clone()))
            }
            ActuatorConfig::SecondOrder(config) => {
                Actuator::SecondOrder(SecondOrderActuator::new(config.clone()))
            }
        }
    }
}

/// The closed set of actuator models.
#[derive(Debug, Clone)]
pub enum Actuator {
    FirstOrder(FirstOrderActuator),
    SecondOrder(SecondOrderActuator),
}

impl ActuatorModel for Actuator {
    fn apply_command(&mut self, command: f64, dt: f64) -> f64 {
        match self {
            Actuator::FirstOrder(actuator) => actuator.apply_command(command, dt),
            Actuator::SecondOrder(actuator) => actuator.apply_command(command, dt),
        }
    }

    fn state(&self) -> f64 {
        match self {
            Actuator::FirstOrder(actuator) => actuator.state(),
            Actuator::SecondOrder(actuator) => actuator.state(),
        }
    }
}
