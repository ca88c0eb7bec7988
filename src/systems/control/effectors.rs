//! Control surface contributions to the aerodynamic coefficients.

use std::fmt::Debug;

use crate::components::aircraft::config::{
    AileronDerivatives, ControlDerivatives, ElevatorDerivatives, RudderDerivatives,
};
use crate::components::{CoefficientSet, ControlSurfaces};

/// Something that adds coefficient increments for the current deflections.
pub trait ControlEffector: Send + Sync + Debug {
    fn contribute(&self, surfaces: &ControlSurfaces) -> CoefficientSet;
}

impl ControlEffector for ElevatorDerivatives {
    fn contribute(&self, surfaces: &ControlSurfaces) -> CoefficientSet {
        let de = surfaces.elevator;
        CoefficientSet {
            c_d: self.c_d_deltae * de,
            c_l: self.c_l_deltae * de,
            c_m: self.c_m_deltae * de,
            ..Default::default()
        }
    }
}

impl ControlEffector for AileronDerivatives {
    fn contribute(&self, surfaces: &ControlSurfaces) -> CoefficientSet {
        let da = surfaces.aileron;
        CoefficientSet {
            c_y: self.c_y_deltaa * da,
            c_roll: self.c_l_deltaa * da,
            c_n: self.c_n_deltaa * da,
            ..Default::default()
        }
    }
}

impl ControlEffector for RudderDerivatives {
    fn contribute(&self, surfaces: &ControlSurfaces) -> CoefficientSet {
        let dr = surfaces.rudder;
        CoefficientSet {
            c_y: self.c_y_deltar * dr,
            c_roll: self.c_l_deltar * dr,
            c_n: self.c_n_deltar * dr,
            ..Default::default()
        }
    }
}

/// Elevator, aileron and rudder effectors, in that order.
pub fn build_effectors(derivatives: &ControlDerivatives) -> Vec<Box<dyn ControlEffector>> {
    vec![
        Box::new(derivatives.elevator),
        Box::new(derivatives.aileron),
        Box::new(derivatives.rudder),
    ]
}

/// Sum of every effector's contribution.
pub fn additional_coefficients(
    effectors: &[Box<dyn ControlEffector>],
    surfaces: &ControlSurfaces,
) -> CoefficientSet {
    effectors.iter().map(|e| e.contribute(surfaces)).sum()
}
