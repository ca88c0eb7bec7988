pub mod config;

pub use config::{
    AeroCoefficients, AircraftGeometry, AirframeConfig, AnimationConfig, ConfigError,
    ControlDerivatives, FixedWingConfig, MassModel, MultiRotorConfig, MultiRotorLayout,
    StallModel, SurfaceLayout, VehicleConfig, VehicleSource, VehicleType,
};
