use serde::{Deserialize, Serialize};

use crate::components::actuators::{Actuator, ActuatorConfig, ActuatorModel};

/// A single moving surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSurfaceConfig {
    pub name: String,
    /// Deflection at full command (rad)
    pub max_deflection: f64,
    /// Servo dynamics, fed with `command * max_deflection`
    #[serde(default)]
    pub actuator: Option<ActuatorConfig>,
}

impl ControlSurfaceConfig {
    pub fn new(name: &str, max_deflection: f64) -> Self {
        Self {
            name: name.to_string(),
            max_deflection,
            actuator: None,
        }
    }

    pub fn with_actuator(mut self, actuator: ActuatorConfig) -> Self {
        self.actuator = Some(actuator);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ControlSurface {
    config: ControlSurfaceConfig,
    actuator: Option<Actuator>,
    deflection: f64,
}

impl ControlSurface {
    pub fn new(config: ControlSurfaceConfig) -> Self {
        let actuator = config.actuator.as_ref().map(ActuatorConfig::build);
        Self {
            config,
            actuator,
            deflection: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Current deflection (rad).
    pub fn deflection(&self) -> f64 {
        self.deflection
    }

    /// Applies a unitless command and returns the new deflection in radians,
    /// never beyond `±max_deflection` even when the servo overshoots.
    pub fn apply_command(&mut self, command: f64, dt: f64) -> f64 {
        let max = self.config.max_deflection.abs();
        let target = command * max;
        let deflection = match self.actuator.as_mut() {
            Some(actuator) => actuator.apply_command(target, dt),
            None => target,
        };
        self.deflection = deflection.clamp(-max, max);
        self.deflection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::actuators::{FirstOrderConfig, SecondOrderConfig};
    use approx::assert_relative_eq;

    #[test]
    fn test_direct_surface_clamps() {
        let mut surface = ControlSurface::new(ControlSurfaceConfig::new("elevator", 0.4));
        assert_relative_eq!(surface.apply_command(0.5, 0.01), 0.2);
        assert_relative_eq!(surface.apply_command(3.0, 0.01), 0.4);
        assert_relative_eq!(surface.apply_command(-3.0, 0.01), -0.4);
    }

    #[test]
    fn test_servo_surface_lags() {
        let config = ControlSurfaceConfig::new("rudder", 0.5)
            .with_actuator(ActuatorConfig::FirstOrder(FirstOrderConfig::new(20.0)));
        let mut surface = ControlSurface::new(config);

        let first = surface.apply_command(1.0, 0.01);
        assert!(first > 0.0 && first < 0.5);

        for _ in 0..500 {
            surface.apply_command(1.0, 0.01);
        }
        assert_relative_eq!(surface.deflection(), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_underdamped_servo_stops_at_limit() {
        let config = ControlSurfaceConfig::new("aileron", 0.3)
            .with_actuator(ActuatorConfig::SecondOrder(SecondOrderConfig::new(10.0, 0.2)));
        let mut surface = ControlSurface::new(config);

        // The servo alone peaks near 1.5 times its target
        let peak = (0..1000)
            .map(|_| surface.apply_command(1.0, 0.001))
            .fold(f64::MIN, f64::max);
        assert_relative_eq!(peak, 0.3);

        for _ in 0..15_000 {
            surface.apply_command(1.0, 0.001);
        }
        assert_relative_eq!(surface.deflection(), 0.3, epsilon = 1e-6);
    }
}
