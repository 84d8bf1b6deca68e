//! Core domain layer for Gearing.
//!
//! This module contains pure arithmetic with no I/O. A [`Gear`] depends on
//! a [`Diameter`] collaborator, which a [`Wheel`] provides.
//!
//! ## Rules
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or logging
//! - **No external crates**: Only std library, thiserror and serde derives
//! - **Immutable entities**: Nothing mutates after construction
//!
// Public API - what the world sees
pub mod collaborator;
pub mod entities;
pub mod error;

mod validation;

// Re-exports for convenience
pub use collaborator::Diameter;
pub use entities::{
    gear::{DEFAULT_CHAINRING, DEFAULT_COG, Gear, GearBuilder, GearConfig},
    wheel::Wheel,
};
pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
