//! Application layer for Gearing.
//!
//! This layer turns domain entities into reports for the CLI. It contains no
//! arithmetic of its own; all rules live in `crate::domain`. Unlike the
//! domain, it emits tracing events.

pub mod report;

pub use report::{GearReport, WheelReport, report_gear, report_wheel};
