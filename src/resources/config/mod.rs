pub mod environment;
pub mod physics;
pub mod simulation;

pub use environment::{Environment, WeatherConfig};
pub use physics::PhysicsConfig;
pub use simulation::{SimulationConfig, VehicleSelection};
