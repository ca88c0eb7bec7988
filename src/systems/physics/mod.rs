mod force_calculator;
mod integrator;

pub use force_calculator::{calculate_net_forces_moments, gravity_body_force, propulsor_about_cg};
pub use integrator::{calculate_velocity_increments, integrate_rigid_body, VelocityIncrements};
