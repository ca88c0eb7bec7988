mod flight;

pub use flight::{flight_dynamics_system, FlightDynamicsPlugin, FlightDynamicsSet, LastStep};
