pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 120.0; // Physics rate used by the plugin
pub const DEFAULT_ACTUATOR_DT_MIN: f64 = 0.01; // s
pub const DEFAULT_DRYDEN_SAMPLE_TIME: f64 = 0.01; // s
pub const DEFAULT_HUB_DRAG_COEFFICIENT: f64 = 0.01;

// Tolerances
pub const SMALL_NUMBER: f64 = 1.0e-8;
pub const VECTOR_NEARLY_ZERO: f64 = 1.0e-4;

pub const M_TO_FT: f64 = 3.28084;
