use bevy::prelude::*;
use nalgebra::Vector3;

use super::config::environment::{Environment, WeatherConfig};
use crate::components::DrydenConfig;

/// Weather shared by all vehicles in a bevy app.
#[derive(Resource, Debug, Clone, Default)]
pub struct EnvironmentResource {
    weather: WeatherConfig,
    environment: Environment,
}

impl EnvironmentResource {
    pub fn new(weather: WeatherConfig) -> Self {
        Self {
            environment: weather.environment(),
            weather,
        }
    }

    pub fn weather(&self) -> &WeatherConfig {
        &self.weather
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn turbulence(&self) -> Option<DrydenConfig> {
        self.weather.turbulence
    }

    /// Ambient wind; uniform in space.
    pub fn get_wind(&self, _position: &Vector3<f64>) -> Vector3<f64> {
        self.environment.wind
    }

    pub fn get_density(&self, _position: &Vector3<f64>) -> f64 {
        self.environment.density
    }

    pub fn set_weather(&mut self, weather: WeatherConfig) {
        *self = Self::new(weather);
    }
}
