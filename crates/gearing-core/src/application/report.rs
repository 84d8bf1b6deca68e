//! Report use cases - turn domain entities into display-ready DTOs.
//!
//! The CLI never formats domain entities directly; it asks for a report and
//! renders that as text or JSON.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    domain::{Diameter as _, Gear, Wheel},
    error::{GearingError, GearingResult},
};

/// Everything derivable from a wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WheelReport {
    pub rim: f64,
    pub tire: f64,
    pub diameter: f64,
    pub circumference: f64,
}

/// Everything derivable from a gear and, when present, its wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GearReport {
    pub chainring: u32,
    pub cog: u32,
    pub ratio: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gear_inches: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wheel: Option<WheelReport>,
}

/// Describe a wheel.
#[instrument(skip_all, fields(wheel = %wheel))]
pub fn report_wheel(wheel: &Wheel) -> WheelReport {
    let report = WheelReport {
        rim: wheel.rim(),
        tire: wheel.tire(),
        diameter: wheel.diameter(),
        circumference: wheel.circumference(),
    };
    debug!(diameter = report.diameter, "Wheel measured");
    report
}

/// Describe a gear.
///
/// `wheel` is the concrete wheel behind the gear's collaborator, passed
/// separately so its measurements can be reported. It must measure the same
/// diameter as that collaborator, so `ratio * wheel.diameter == gear_inches`
/// holds for every report. Gear inches are only computed when the gear has a
/// collaborator; callers that require them should call [`Gear::gear_inches`]
/// and propagate its error.
///
/// # Errors
///
/// - [`GearingError::Domain`] when the ratio cannot be computed.
/// - [`GearingError::Internal`] when the passed wheel is not the gear's own:
///   a wheel for a gear built without one, or a wheel whose diameter differs
///   from the collaborator's.
#[instrument(skip_all, fields(gear = %gear))]
pub fn report_gear(gear: &Gear<'_>, wheel: Option<&Wheel>) -> GearingResult<GearReport> {
    if let Some(wheel) = wheel {
        match gear.wheel().map(|collaborator| collaborator.diameter()) {
            None => {
                return Err(GearingError::Internal {
                    message: "wheel reported for a gear built without one".into(),
                });
            }
            Some(diameter) if diameter != wheel.diameter() => {
                return Err(GearingError::Internal {
                    message: format!(
                        "reported wheel {wheel} measures {}, gear's wheel measures {diameter}",
                        wheel.diameter()
                    ),
                });
            }
            Some(_) => {}
        }
    }

    let ratio = gear.ratio()?;
    let gear_inches = match gear.wheel() {
        Some(_) => Some(gear.gear_inches()?),
        None => None,
    };
    debug!(ratio, ?gear_inches, "Gear computed");

    Ok(GearReport {
        chainring: gear.chainring(),
        cog: gear.cog(),
        ratio,
        gear_inches,
        wheel: wheel.map(report_wheel),
    })
}
