//! Tracing subscriber for the `gearing` binary.
//!
//! Two crates emit events: `gearing` (this binary, one span per
//! subcommand) and `gearing_core` (report spans with the computed ratio,
//! gear inches and wheel diameter). The domain layer emits nothing.
//!
//! | Flag(s)   | Level | What shows up                               |
//! |-----------|-------|---------------------------------------------|
//! | `--quiet` | ERROR | nothing beyond the error report             |
//! | (none)    | WARN  | non-physical wheels, unknown config formats |
//! | `-v`      | INFO  | each computed result                        |
//! | `-vv`     | DEBUG | config sources, diameters, report contents  |
//! | `-vvv`    | TRACE | all of the above, tagged with its crate     |
//!
//! `GEARING_LOG`, then `RUST_LOG`, replace the derived filter when set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Environment variable checked before `RUST_LOG`.
const LOG_ENV: &str = "GEARING_LOG";

/// Crates whose events pass the derived filter.
const LOG_TARGETS: [&str; 2] = ["gearing", "gearing_core"];

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire. Logs go to
/// stderr so that stdout carries nothing but results.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(directives(level)));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(level == "trace")
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// `gearing=<level>,gearing_core=<level>`; dependencies stay silent.
fn directives(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Translate the verbosity counter and quiet flag to a level.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn results_are_info_level() {
        assert_eq!(derive_level(&args_with(0, false)), "warn");
        assert_eq!(derive_level(&args_with(1, false)), "info");
    }

    #[test]
    fn deeper_verbosity_saturates_at_trace() {
        assert_eq!(derive_level(&args_with(2, false)), "debug");
        assert_eq!(derive_level(&args_with(3, false)), "trace");
        assert_eq!(derive_level(&args_with(10, false)), "trace");
    }

    #[test]
    fn quiet_keeps_errors_only() {
        assert_eq!(derive_level(&args_with(0, true)), "error");
        assert_eq!(derive_level(&args_with(3, true)), "error");
    }

    #[test]
    fn directives_cover_binary_and_core() {
        assert_eq!(directives("debug"), "gearing=debug,gearing_core=debug");
    }

    #[test]
    fn directives_parse_as_filter() {
        assert!(EnvFilter::try_new(directives("info")).is_ok());
    }
}
