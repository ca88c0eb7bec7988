use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Raw pilot or autopilot commands, unitless.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlCommands {
    /// Pitch command in [-1, 1], drives the equivalent elevator
    pub pitch: f64,
    /// Roll command in [-1, 1], drives the equivalent aileron
    pub roll: f64,
    /// Yaw command in [-1, 1], drives the equivalent rudder
    pub yaw: f64,
    /// Throttle in [0, 1]
    pub thrust: f64,
}

impl ControlCommands {
    pub fn new(pitch: f64, roll: f64, yaw: f64, thrust: f64) -> Self {
        Self {
            pitch,
            roll,
            yaw,
            thrust,
        }
    }

    /// Commands clamped to their valid ranges. NaN maps to zero.
    pub fn clamped(&self) -> Self {
        let unit = |x: f64| if x.is_nan() { 0.0 } else { x.clamp(-1.0, 1.0) };
        Self {
            pitch: unit(self.pitch),
            roll: unit(self.roll),
            yaw: unit(self.yaw),
            thrust: if self.thrust.is_nan() {
                0.0
            } else {
                self.thrust.clamp(0.0, 1.0)
            },
        }
    }
}
