//! Flags shared by every subcommand.
//!
//! Flattened into [`super::Cli`], so `gearing -v inches ...` and
//! `gearing inches -v ...` mean the same thing.

use clap::{Args, builder::FalseyValueParser};
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// How much of the calculation to log on stderr.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log the calculation on stderr (-v, -vv, -vvv)",
        long_help = "Log the calculation on stderr:
    (none)  - Warnings only, e.g. a wheel with a negative tire
    -v      - Each ratio and gear-inch result with its gear
    -vv     - Wheel diameters, config sources and report contents
    -vvv    - Everything, tagged with the emitting crate"
    )]
    pub verbose: u8,

    /// Only results on stdout and errors on stderr.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print results only"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// `NO_COLOR` set to any value other than an empty string, `0`, `false`,
    /// `no` or `off` turns colour off (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file with default tooth counts and wheel.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file with default gear and wheel"
    )]
    pub config: Option<PathBuf>,

    /// How results are written to stdout.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// How results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The config file's choice, else human on a terminal and plain otherwise.
    #[default]
    Auto,
    /// Numbers with highlighted labels.
    Human,
    /// Bare numbers, one per line.
    Plain,
    /// One report object per line.
    Json,
}
