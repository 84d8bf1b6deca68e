//! The `Wheel` entity.
//!
//! A wheel is a rim plus a tire of some thickness. Both measurements share a
//! unit and nothing here converts between units.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{collaborator::Diameter, error::DomainError};

/// A wheel built from a rim and a tire.
///
/// Construction never fails; [`Wheel::validate`] is available for callers
/// that want to reject non-physical measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wheel {
    rim: f64,
    tire: f64,
}

impl Wheel {
    pub const fn new(rim: f64, tire: f64) -> Self {
        Self { rim, tire }
    }

    pub const fn rim(&self) -> f64 {
        self.rim
    }
    pub const fn tire(&self) -> f64 {
        self.tire
    }

    /// Overall diameter: the rim plus the tire on both sides.
    pub fn diameter(&self) -> f64 {
        self.rim + self.tire * 2.0
    }

    pub fn circumference(&self) -> f64 {
        self.diameter() * PI
    }

    /// Check that the measurements describe a physical wheel.
    ///
    /// `rim` must be positive and `tire` non-negative, both finite.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.rim.is_finite() || self.rim <= 0.0 {
            return Err(DomainError::InvalidMeasurement {
                field: "rim",
                value: self.rim,
                reason: "must be a positive number",
            });
        }
        if !self.tire.is_finite() || self.tire < 0.0 {
            return Err(DomainError::InvalidMeasurement {
                field: "tire",
                value: self.tire,
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}

impl Diameter for Wheel {
    fn diameter(&self) -> f64 {
        Wheel::diameter(self)
    }
}

impl fmt::Display for Wheel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rim x {} tire", self.rim, self.tire)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn diameter_adds_tire_twice() {
        let wheel = Wheel::new(26.0, 1.5);
        assert_eq!(wheel.diameter(), 29.0);
    }

    #[test]
    fn diameter_holds_across_sizes() {
        for (rim, tire) in [(622.0, 25.0), (20.0, 2.125), (0.5, 0.0), (700.0, 32.5)] {
            let wheel = Wheel::new(rim, tire);
            assert_eq!(wheel.diameter(), rim + 2.0 * tire);
        }
    }

    #[test]
    fn circumference_is_diameter_times_pi() {
        let wheel = Wheel::new(26.0, 1.5);
        assert!((wheel.circumference() - 29.0 * PI).abs() < EPSILON);
    }

    #[test]
    fn trait_diameter_matches_inherent() {
        let wheel = Wheel::new(622.0, 28.0);
        let dyn_wheel: &dyn Diameter = &wheel;
        assert_eq!(dyn_wheel.diameter(), wheel.diameter());
    }

    #[test]
    fn validate_accepts_real_wheel() {
        assert!(Wheel::new(26.0, 1.5).validate().is_ok());
        assert!(Wheel::new(26.0, 0.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_rim() {
        let err = Wheel::new(0.0, 1.5).validate().unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidMeasurement { field: "rim", .. }
        ));
    }

    #[test]
    fn validate_rejects_negative_tire() {
        let err = Wheel::new(26.0, -1.0).validate().unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidMeasurement { field: "tire", .. }
        ));
    }

    #[test]
    fn validate_rejects_nan() {
        assert!(Wheel::new(f64::NAN, 1.0).validate().is_err());
        assert!(Wheel::new(26.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn construction_does_not_validate() {
        // Non-physical values still compute.
        let wheel = Wheel::new(-10.0, 2.0);
        assert_eq!(wheel.diameter(), -6.0);
    }

    #[test]
    fn display_lists_measurements() {
        assert_eq!(Wheel::new(26.0, 1.5).to_string(), "26 rim x 1.5 tire");
    }
}
