pub mod constants;
pub mod errors;
pub mod integrator;
pub mod math;
pub mod rng;
pub mod types;

pub use constants::*;
pub use errors::*;
pub use integrator::Integrator;
pub use math::*;
pub use rng::RngManager;
pub use types::*;
