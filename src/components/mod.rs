pub mod actuators;
pub mod aerodynamics;
pub mod aircraft;
pub mod atmosphere;
pub mod control_surface;
pub mod controller;
pub mod controls;
pub mod propulsion;
pub mod spatial;
pub mod turbulence;

pub use actuators::{
    Actuator, ActuatorConfig, ActuatorLimits, ActuatorModel, FirstOrderActuator,
    FirstOrderConfig, SecondOrderActuator, SecondOrderConfig,
};
pub use aerodynamics::{AirData, CoefficientSet, ControlSurfaces};
pub use aircraft::{
    AeroCoefficients, AircraftGeometry, AirframeConfig, AnimationConfig, ConfigError,
    ControlDerivatives, FixedWingConfig, MassModel, MultiRotorConfig, MultiRotorLayout,
    StallModel, SurfaceLayout, VehicleConfig, VehicleSource, VehicleType,
};
pub use atmosphere::AtmosphereState;
pub use control_surface::{ControlSurface, ControlSurfaceConfig};
pub use controller::{PIController, PIControllerConfig};
pub use controls::ControlCommands;
pub use propulsion::{
    Propeller, PropellerConfig, PropellerState, PropellerTable, PropellerTableRow,
    RotationDirection,
};
pub use spatial::SpatialComponent;
pub use turbulence::{DrydenConfig, DrydenTurbulence};
