//! `gearing inches` — gear inches for one gear.

use gearing_core::{
    application::report_gear,
    domain::{Diameter, Gear, GearConfig, Wheel},
};
use tracing::info;

use crate::{cli::InchesArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Compute gear inches, taking the wheel from the flags or the config file.
///
/// Fails with a missing-collaborator error when neither supplies a wheel.
pub fn execute(args: InchesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (chainring, cog) = super::tooth_counts(&args.gear, &config);

    let wheel = match (args.rim, args.tire) {
        (Some(rim), Some(tire)) => Some(Wheel::new(rim, tire)),
        _ => config.wheel,
    };
    if let Some(wheel) = &wheel {
        super::warn_if_non_physical(wheel);
    }

    let gear = Gear::new(GearConfig {
        chainring,
        cog,
        wheel: wheel.as_ref().map(|w| w as &dyn Diameter),
    });

    let inches = gear.gear_inches()?;
    info!(gear = %gear, inches, "Gear inches computed");

    if output.is_json() {
        output.emit_json(&report_gear(&gear, wheel.as_ref())?)?;
    } else {
        output.emit(inches)?;
    }
    Ok(())
}
