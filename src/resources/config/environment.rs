use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::DrydenConfig;
use crate::utils::{deg_to_rad, remove_numerical_errors, GRAVITY, SEA_LEVEL_DENSITY};

/// Ambient conditions read by every vehicle each step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    /// Air density (kg/m³)
    pub density: f64,
    /// Ambient wind, world frame (m/s)
    pub wind: Vector3<f64>,
    /// Gravitational acceleration, world frame (m/s²). Zero when the host
    /// applies gravity itself.
    pub gravity: Vector3<f64>,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            density: SEA_LEVEL_DENSITY,
            wind: Vector3::zeros(),
            gravity: Vector3::new(0.0, 0.0, GRAVITY),
        }
    }
}

impl Environment {
    pub fn calm() -> Self {
        Self::default()
    }

    pub fn with_wind(mut self, wind: Vector3<f64>) -> Self {
        self.wind = wind;
        self
    }

    pub fn without_gravity(mut self) -> Self {
        self.gravity = Vector3::zeros();
        self
    }
}

/// Weather source: a wind intensity and heading plus optional turbulence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Wind intensity in the weather source's units
    pub wind_intensity: f64,
    /// Converts the intensity to m/s
    pub wind_intensity_scalar: f64,
    /// Direction the wind blows toward, degrees clockwise from north
    pub wind_direction_deg: f64,
    /// Air density (kg/m³)
    pub density: f64,
    /// Gravitational acceleration, world frame (m/s²)
    pub gravity: Vector3<f64>,
    /// Dryden turbulence; None disables it
    pub turbulence: Option<DrydenConfig>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            wind_intensity: 0.0,
            wind_intensity_scalar: 1.0,
            wind_direction_deg: 0.0,
            density: SEA_LEVEL_DENSITY,
            gravity: Vector3::new(0.0, 0.0, GRAVITY),
            turbulence: None,
        }
    }
}

impl WeatherConfig {
    /// Ambient wind in the world frame (m/s).
    pub fn wind(&self) -> Vector3<f64> {
        let speed = self.wind_intensity * self.wind_intensity_scalar;
        let direction = deg_to_rad(self.wind_direction_deg);
        remove_numerical_errors(&Vector3::new(
            speed * direction.cos(),
            speed * direction.sin(),
            0.0,
        ))
    }

    pub fn environment(&self) -> Environment {
        Environment {
            density: self.density,
            wind: self.wind(),
            gravity: self.gravity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wind_direction() {
        let weather = WeatherConfig {
            wind_intensity: 2.0,
            wind_intensity_scalar: 5.0,
            wind_direction_deg: 90.0,
            ..Default::default()
        };
        // Blowing east
        assert_relative_eq!(weather.wind(), Vector3::new(0.0, 10.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_default_environment() {
        let environment = WeatherConfig::default().environment();
        assert_eq!(environment, Environment::default());
        assert_eq!(environment.gravity.z, GRAVITY);
    }

    #[test]
    fn test_yaml_defaults() {
        let weather: WeatherConfig =
            serde_yaml::from_str("wind_intensity: 3.0\nturbulence:\n  seed: 4\n").unwrap();
        assert_eq!(weather.wind_intensity_scalar, 1.0);
        assert_eq!(weather.density, SEA_LEVEL_DENSITY);
        assert_eq!(weather.turbulence.map(|t| t.seed), Some(4));
    }
}
