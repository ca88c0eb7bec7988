mod aero_coef;
mod airframe;
mod control;
mod geometry;
mod loader;
mod mass;
mod vehicle;

pub use aero_coef::{
    AeroCoefficients, DragCoefficients, LiftCoefficients, PitchCoefficients, RollCoefficients,
    SideForceCoefficients, StallModel, YawCoefficients,
};
pub use airframe::{
    AirframeConfig, FixedWingConfig, MultiRotorConfig, MultiRotorLayout, SurfaceLayout,
};
pub use control::{AileronDerivatives, ControlDerivatives, ElevatorDerivatives, RudderDerivatives};
pub use geometry::AircraftGeometry;
pub use loader::{load_yaml, ConfigError};
pub use mass::{MassModel, MassProperties};
pub use vehicle::{AnimationConfig, VehicleConfig, VehicleSource, VehicleType};
