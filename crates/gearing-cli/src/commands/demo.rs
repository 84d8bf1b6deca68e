//! `gearing demo` — the two reference gears on a 26 x 1.5 wheel.

use gearing_core::{
    application::report_gear,
    domain::{Gear, GearConfig, Wheel},
};
use tracing::info;

use crate::{error::CliResult, output::OutputManager};

/// Print gear inches for a fully specified gear, then for a default gear.
pub fn execute(output: OutputManager) -> CliResult<()> {
    let wheel = Wheel::new(26.0, 1.5);

    let gears = [
        Gear::new(GearConfig {
            chainring: Some(52),
            cog: Some(11),
            wheel: Some(&wheel),
        }),
        // Chainring and cog fall back to 40 and 18.
        Gear::new(GearConfig {
            wheel: Some(&wheel),
            ..Default::default()
        }),
    ];

    for gear in &gears {
        if output.is_json() {
            output.emit_json(&report_gear(gear, Some(&wheel))?)?;
        } else {
            let inches = gear.gear_inches()?;
            info!(gear = %gear, inches, "Gear inches computed");
            output.emit(inches)?;
        }
    }

    Ok(())
}
