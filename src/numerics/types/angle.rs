// src/numerics/types/angle.rs
// Unit selector for angle results.

use serde::{Deserialize, Serialize};

/// Unit in which [`Vector::angle_with`] reports its result.
///
/// [`Vector::angle_with`]: crate::Vector::angle_with
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Convert a radian measurement into this unit.
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radians_pass_through() {
        assert_eq!(AngleUnit::Radians.from_radians(1.25), 1.25);
    }

    #[test]
    fn test_degrees_conversion() {
        let degrees = AngleUnit::Degrees.from_radians(std::f64::consts::PI);
        assert!((degrees - 180.0).abs() < 1e-12);
    }
}
