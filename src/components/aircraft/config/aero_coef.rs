use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Stability derivatives and stall model of an airframe.
#[derive(Component, Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AeroCoefficients {
    pub drag: DragCoefficients,
    pub lift: LiftCoefficients,
    pub side_force: SideForceCoefficients,
    pub roll: RollCoefficients,
    pub pitch: PitchCoefficients,
    pub yaw: YawCoefficients,
    pub stall: StallModel,
}

/// Drag coefficients
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragCoefficients {
    /// Base drag coefficient (zero angle of attack).
    pub c_d_0: f64,
    /// Linear drag coefficient with respect to angle of attack (α).
    pub c_d_alpha: f64,
    /// Quadratic drag coefficient with respect to α².
    pub c_d_alpha2: f64,
    /// Drag coefficient due to pitch rate (q).
    pub c_d_q: f64,
    /// Linear drag coefficient with respect to sideslip (β).
    pub c_d_beta: f64,
    /// Quadratic drag coefficient with respect to β².
    pub c_d_beta2: f64,
}

/// Lift coefficients
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftCoefficients {
    /// Base lift coefficient (zero angle of attack).
    pub c_l_0: f64,
    /// Linear lift coefficient with respect to angle of attack (α).
    pub c_l_alpha: f64,
    /// Lift coefficient due to pitch rate (q).
    pub c_l_q: f64,
}

/// Side force coefficients
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SideForceCoefficients {
    pub c_y_0: f64,
    /// Side force due to sideslip (β).
    pub c_y_beta: f64,
    /// Side force due to roll rate (p).
    pub c_y_p: f64,
    /// Side force due to yaw rate (r).
    pub c_y_r: f64,
}

/// Rolling moment coefficients
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollCoefficients {
    pub c_l_0: f64,
    /// Rolling moment due to sideslip (dihedral effect).
    pub c_l_beta: f64,
    /// Roll damping.
    pub c_l_p: f64,
    /// Rolling moment due to yaw rate.
    pub c_l_r: f64,
}

/// Pitching moment coefficients
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchCoefficients {
    pub c_m_0: f64,
    /// Static pitch stability.
    pub c_m_alpha: f64,
    /// Pitch damping.
    pub c_m_q: f64,
}

/// Yawing moment coefficients
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YawCoefficients {
    pub c_n_0: f64,
    /// Weathercock stability.
    pub c_n_beta: f64,
    /// Yawing moment due to roll rate (adverse yaw).
    pub c_n_p: f64,
    /// Yaw damping.
    pub c_n_r: f64,
}

/// Sigmoid blend between the linear model and a flat plate past the stall.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StallModel {
    pub enabled: bool,
    /// Stall angle of attack (rad)
    pub alpha_0: f64,
    /// Transition rate of the blend
    pub transition_rate: f64,
    /// Flat plate pitching moment coefficient
    pub c_m_fp: f64,
}

impl AeroCoefficients {
    pub fn new(
        drag: DragCoefficients,
        lift: LiftCoefficients,
        side_force: SideForceCoefficients,
        roll: RollCoefficients,
        pitch: PitchCoefficients,
        yaw: YawCoefficients,
        stall: StallModel,
    ) -> Self {
        Self {
            drag,
            lift,
            side_force,
            roll,
            pitch,
            yaw,
            stall,
        }
    }

    pub fn aerosonde() -> Self {
        Self::new(
            DragCoefficients::aerosonde(),
            LiftCoefficients::aerosonde(),
            SideForceCoefficients::aerosonde(),
            RollCoefficients::aerosonde(),
            PitchCoefficients::aerosonde(),
            YawCoefficients::aerosonde(),
            StallModel::aerosonde(),
        )
    }

    /// Bluff body drag only, no lifting surfaces.
    pub fn generic_quadrotor() -> Self {
        Self {
            drag: DragCoefficients {
                c_d_0: 1.0,
                ..Default::default()
            },
            side_force: SideForceCoefficients {
                c_y_beta: -1.0,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

impl DragCoefficients {
    pub fn aerosonde() -> Self {
        Self {
            c_d_0: 0.043,
            c_d_alpha: 0.03,
            c_d_alpha2: 0.0,
            c_d_q: 0.0,
            c_d_beta: 0.0,
            c_d_beta2: 0.0,
        }
    }
}

impl LiftCoefficients {
    pub fn aerosonde() -> Self {
        Self {
            c_l_0: 0.23,
            c_l_alpha: 5.61,
            c_l_q: 7.95,
        }
    }
}

impl SideForceCoefficients {
    pub fn aerosonde() -> Self {
        Self {
            c_y_0: 0.0,
            c_y_beta: -0.98,
            c_y_p: 0.0,
            c_y_r: 0.0,
        }
    }
}

impl RollCoefficients {
    pub fn aerosonde() -> Self {
        Self {
            c_l_0: 0.0,
            c_l_beta: -0.13,
            c_l_p: -0.51,
            c_l_r: 0.25,
        }
    }
}

impl PitchCoefficients {
    pub fn aerosonde() -> Self {
        Self {
            c_m_0: 0.0135,
            c_m_alpha: -2.74,
            c_m_q: -38.21,
        }
    }
}

impl YawCoefficients {
    pub fn aerosonde() -> Self {
        Self {
            c_n_0: 0.0,
            c_n_beta: 0.073,
            c_n_p: -0.069,
            c_n_r: -0.095,
        }
    }
}

impl StallModel {
    pub fn aerosonde() -> Self {
        Self {
            enabled: true,
            alpha_0: 0.47,
            transition_rate: 50.0,
            c_m_fp: -0.5,
        }
    }
}
