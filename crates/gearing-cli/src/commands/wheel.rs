//! `gearing wheel` — diameter and circumference of a wheel.

use gearing_core::{application::report_wheel, domain::Wheel};

use crate::{cli::WheelArgs, error::CliResult, output::OutputManager};

pub fn execute(args: WheelArgs, output: OutputManager) -> CliResult<()> {
    let wheel = Wheel::new(args.rim, args.tire);
    super::warn_if_non_physical(&wheel);

    let report = report_wheel(&wheel);
    if output.is_json() {
        output.emit_json(&report)?;
    } else {
        output.emit_field("diameter", report.diameter)?;
        output.emit_field("circumference", report.circumference)?;
    }
    Ok(())
}
