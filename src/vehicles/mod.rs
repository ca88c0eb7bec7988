mod airframe;
mod fleet;
mod vehicle;

pub use airframe::Airframe;
pub use fleet::{Fleet, FleetMember};
pub use vehicle::{AnimationState, FlightVehicle, StepOutput};
