use crate::domain::{
    entities::{Gear, Wheel},
    error::DomainError,
};

/// Centralized domain validation.
///
/// Entities never validate themselves on construction; callers that want
/// stricter checks go through here.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_wheel(wheel: &Wheel) -> Result<(), DomainError> {
        wheel.validate()
    }

    pub fn validate_gear(gear: &Gear<'_>) -> Result<(), DomainError> {
        gear.validate()
    }
}
