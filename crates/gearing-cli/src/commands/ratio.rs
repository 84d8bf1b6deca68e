//! `gearing ratio` — chainring over cog.

use gearing_core::{
    application::report_gear,
    domain::{Gear, GearConfig},
};
use tracing::info;

use crate::{cli::RatioArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: RatioArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (chainring, cog) = super::tooth_counts(&args.gear, &config);
    let gear = Gear::new(GearConfig {
        chainring,
        cog,
        wheel: None,
    });

    let ratio = gear.ratio()?;
    info!(gear = %gear, ratio, "Ratio computed");

    if output.is_json() {
        output.emit_json(&report_gear(&gear, None)?)?;
    } else {
        output.emit(ratio)?;
    }
    Ok(())
}
