//! Output management and formatting.
//!
//! Results go through [`OutputManager::emit`] and are never suppressed;
//! everything else respects `--quiet`.

use std::io::{self, IsTerminal};

use clap::ValueEnum as _;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliResult, IntoCli as _};

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = resolve_format(args.output_format, &config.output.format);

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// A computed result; written even in quiet mode.
    pub fn emit(&self, value: impl std::fmt::Display) -> io::Result<()> {
        self.term.write_line(&value.to_string())
    }

    /// A computed result as a single line of JSON.
    pub fn emit_json<T: Serialize>(&self, value: &T) -> CliResult<()> {
        let line = serde_json::to_string(value).with_cli_context(|| "rendering JSON result")?;
        self.emit(line)?;
        Ok(())
    }

    /// `label: value`, with the label highlighted in human mode.
    pub fn emit_field(&self, label: &str, value: impl std::fmt::Display) -> io::Result<()> {
        let line = if self.no_color {
            format!("{label}: {value}")
        } else {
            format!("{}: {value}", label.cyan().bold())
        };
        self.emit(line)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` when results should be written as JSON.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

/// Resolve `Auto`: the config file's format first, then the terminal.
fn resolve_format(flag: OutputFormat, configured: &str) -> OutputFormat {
    if flag != OutputFormat::Auto {
        return flag;
    }
    match OutputFormat::from_str(configured, true) {
        Ok(format) if format != OutputFormat::Auto => format,
        Ok(_) => detect_format(),
        Err(_) => {
            tracing::warn!(format = configured, "Unknown output format in config, ignoring");
            detect_format()
        }
    }
}

fn detect_format() -> OutputFormat {
    if io::stdout().is_terminal() {
        OutputFormat::Human
    } else {
        OutputFormat::Plain
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
