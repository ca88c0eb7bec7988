pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;
pub mod vehicles;

pub use components::{ControlCommands, SpatialComponent, VehicleConfig, VehicleSource, VehicleType};
pub use plugins::FlightDynamicsPlugin;
pub use resources::{Environment, SimulationConfig};
pub use utils::SimError;
pub use vehicles::{FlightVehicle, Fleet, StepOutput};
