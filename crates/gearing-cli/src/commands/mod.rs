//! One module per subcommand, plus the option resolution they share.

pub mod completions;
pub mod config;
pub mod demo;
pub mod inches;
pub mod init;
pub mod ratio;
pub mod wheel;

use gearing_core::domain::{DomainValidator, Wheel};

use crate::{cli::GearArgs, config::AppConfig};

/// Tooth counts from the command line, falling back to the config file.
///
/// Anything still unset is left to the domain defaults.
fn tooth_counts(args: &GearArgs, config: &AppConfig) -> (Option<u32>, Option<u32>) {
    (
        args.chainring.or(config.gear.chainring),
        args.cog.or(config.gear.cog),
    )
}

/// Log non-physical wheel measurements without refusing to compute.
fn warn_if_non_physical(wheel: &Wheel) {
    if let Err(e) = DomainValidator::validate_wheel(wheel) {
        tracing::warn!(wheel = %wheel, "{e}; computing anyway");
    }
}
