use serde::{Deserialize, Serialize};

/// Coefficient increments per radian of equivalent elevator deflection.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElevatorDerivatives {
    /// Lift
    pub c_l_deltae: f64,
    /// Drag
    pub c_d_deltae: f64,
    /// Pitching moment
    pub c_m_deltae: f64,
}

/// Coefficient increments per radian of equivalent aileron deflection.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AileronDerivatives {
    /// Side force
    pub c_y_deltaa: f64,
    /// Rolling moment
    pub c_l_deltaa: f64,
    /// Yawing moment
    pub c_n_deltaa: f64,
}

/// Coefficient increments per radian of equivalent rudder deflection.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RudderDerivatives {
    /// Side force
    pub c_y_deltar: f64,
    /// Rolling moment
    pub c_l_deltar: f64,
    /// Yawing moment
    pub c_n_deltar: f64,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlDerivatives {
    pub elevator: ElevatorDerivatives,
    pub aileron: AileronDerivatives,
    pub rudder: RudderDerivatives,
}

impl ControlDerivatives {
    pub fn aerosonde() -> Self {
        Self {
            elevator: ElevatorDerivatives {
                c_l_deltae: 0.13,
                c_d_deltae: 0.0135,
                c_m_deltae: -0.99,
            },
            aileron: AileronDerivatives {
                c_y_deltaa: 0.075,
                c_l_deltaa: 0.17,
                c_n_deltaa: -0.011,
            },
            rudder: RudderDerivatives {
                c_y_deltar: 0.19,
                c_l_deltar: 0.0024,
                c_n_deltar: -0.069,
            },
        }
    }
}
