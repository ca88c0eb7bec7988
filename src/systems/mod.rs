pub mod aerodynamics;
pub mod control;
pub mod environment;
pub mod physics;
pub mod propulsion;

pub use aerodynamics::{
    calculate_aerodynamic_forces_moments, calculate_air_data, calculate_coefficients, stall_sigma,
};
pub use control::{
    additional_coefficients, build_effectors, equivalent_deflections, mix_quad,
    mix_surface_commands, surface_animation_angles, ControlEffector,
};
pub use environment::calculate_atmosphere;
pub use physics::{calculate_net_forces_moments, integrate_rigid_body};
pub use propulsion::{calculate_propeller_forces_moments, PropellerInputs};
