pub mod config;
mod environment;

pub use config::{Environment, PhysicsConfig, SimulationConfig, VehicleSelection, WeatherConfig};
pub use environment::EnvironmentResource;
