use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A force and a moment acting on a body, expressed in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForcesAndMoments {
    /// Force vector [N]
    pub force: Vector3<f64>,
    /// Moment vector [N·m]
    pub moment: Vector3<f64>,
}

impl Default for ForcesAndMoments {
    fn default() -> Self {
        Self::zero()
    }
}

impl ForcesAndMoments {
    pub fn new(force: Vector3<f64>, moment: Vector3<f64>) -> Self {
        Self { force, moment }
    }

    pub fn zero() -> Self {
        Self {
            force: Vector3::zeros(),
            moment: Vector3::zeros(),
        }
    }

    /// Expresses both vectors in another frame.
    pub fn rotated(&self, rotation: &UnitQuaternion<f64>) -> Self {
        Self {
            force: rotation * self.force,
            moment: rotation * self.moment,
        }
    }

    /// Moves the point of application from `arm` (relative to the reference
    /// point) to the reference point, adding the transfer moment `arm × force`.
    pub fn about_reference(&self, arm: &Vector3<f64>) -> Self {
        Self {
            force: self.force,
            moment: self.moment + arm.cross(&self.force),
        }
    }
}

impl Add for ForcesAndMoments {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            force: self.force + rhs.force,
            moment: self.moment + rhs.moment,
        }
    }
}

impl AddAssign for ForcesAndMoments {
    fn add_assign(&mut self, rhs: Self) {
        self.force += rhs.force;
        self.moment += rhs.moment;
    }
}

impl Sum for ForcesAndMoments {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, fm| acc + fm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_addition_is_component_wise() {
        let a = ForcesAndMoments::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(0.0, 1.0, 0.0));
        let b = ForcesAndMoments::new(Vector3::new(-1.0, 0.5, 0.0), Vector3::new(2.0, 0.0, 1.0));

        assert_eq!(a + b, b + a);
        assert_eq!((a + b).force, Vector3::new(0.0, 2.5, 3.0));

        let total: ForcesAndMoments = vec![a, b, ForcesAndMoments::zero()].into_iter().sum();
        assert_eq!(total, a + b);
    }

    #[test]
    fn test_about_reference_adds_transfer_moment() {
        // Upward (NED -z) force ahead of the reference point pitches nose up
        let fm = ForcesAndMoments::new(Vector3::new(0.0, 0.0, -10.0), Vector3::zeros());
        let moved = fm.about_reference(&Vector3::new(0.5, 0.0, 0.0));

        assert_relative_eq!(moved.moment, Vector3::new(0.0, 5.0, 0.0));
        assert_eq!(moved.force, fm.force);
    }
}
