//! Gearing Core - gear and wheel domain.
//!
//! This crate provides the domain and application layers for the Gearing
//! calculator, following the same ports-and-adapters split as the CLI.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           gearing-cli (CLI)             │
//! │   (Driver, config, logging, output)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Layer               │
//! │   (report_gear, report_wheel + DTOs)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (Gear ──► dyn Diameter ◄── Wheel)     │
//! │         No I/O, no tracing              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use gearing_core::domain::{Gear, GearConfig, Wheel};
//!
//! let wheel = Wheel::new(26.0, 1.5);
//!
//! // Every field supplied.
//! let gear = Gear::new(GearConfig {
//!     chainring: Some(52),
//!     cog: Some(11),
//!     wheel: Some(&wheel),
//! });
//! assert!((gear.gear_inches().unwrap() - 137.0909090909091).abs() < 1e-9);
//!
//! // Chainring and cog fall back to 40 and 18.
//! let gear = Gear::builder().wheel(&wheel).build();
//! assert!((gear.gear_inches().unwrap() - 64.44444444444444).abs() < 1e-9);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{GearReport, WheelReport, report_gear, report_wheel};
    pub use crate::domain::{
        DEFAULT_CHAINRING, DEFAULT_COG, Diameter, DomainError, Gear, GearBuilder, GearConfig,
        Wheel,
    };
    pub use crate::error::{GearingError, GearingResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
