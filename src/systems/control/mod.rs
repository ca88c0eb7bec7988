mod effectors;
mod multirotor;
mod surfaces;

pub use effectors::{additional_coefficients, build_effectors, ControlEffector};
pub use multirotor::{mix_quad, mixing_matrix};
pub use surfaces::{equivalent_deflections, mix_surface_commands, surface_animation_angles};
