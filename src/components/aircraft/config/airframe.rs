use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::ControlDerivatives;
use crate::components::control_surface::ControlSurfaceConfig;
use crate::components::ConfigError;

/// How pilot commands map onto the physical surfaces of a fixed wing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceLayout {
    /// Elevator, left aileron, right aileron, rudder
    Standard,
    /// Left elevon, right elevon
    FlyingWing,
    /// Left aileron, right aileron, left ruddervator, right ruddervator
    VTail,
}

impl SurfaceLayout {
    pub fn surface_count(&self) -> usize {
        match self {
            SurfaceLayout::Standard => 4,
            SurfaceLayout::FlyingWing => 2,
            SurfaceLayout::VTail => 4,
        }
    }
}

/// Quad-rotor arrangement, with PX4 propeller numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MultiRotorLayout {
    /// No arm aligned with a body axis
    Cross,
    /// Arms along the body x and y axes
    Plus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedWingConfig {
    pub layout: SurfaceLayout,
    /// Physical surfaces in the order given by the layout
    pub surfaces: Vec<ControlSurfaceConfig>,
    #[serde(default)]
    pub control: ControlDerivatives,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiRotorConfig {
    pub layout: MultiRotorLayout,
    /// Baseline propeller command applied at zero thrust command, in [0, 1]
    #[serde(default)]
    pub thrust_offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AirframeConfig {
    FixedWing(FixedWingConfig),
    MultiRotor(MultiRotorConfig),
}

impl AirframeConfig {
    /// Checks the airframe against the number of propellers fitted.
    pub fn validate(&self, propeller_count: usize) -> Result<(), ConfigError> {
        match self {
            AirframeConfig::FixedWing(config) => {
                let expected = config.layout.surface_count();
                if config.surfaces.len() != expected {
                    return Err(ConfigError::ValidationError(format!(
                        "{:?} layout needs {} control surfaces, got {}",
                        config.layout,
                        expected,
                        config.surfaces.len()
                    )));
                }
            }
            AirframeConfig::MultiRotor(config) => {
                if propeller_count != 4 {
                    return Err(ConfigError::ValidationError(format!(
                        "quad-rotor needs 4 propellers, got {}",
                        propeller_count
                    )));
                }
                if !(0.0..=1.0).contains(&config.thrust_offset) {
                    return Err(ConfigError::ValidationError(format!(
                        "thrust offset must be within [0, 1], got {}",
                        config.thrust_offset
                    )));
                }
            }
        }
        Ok(())
    }
}
