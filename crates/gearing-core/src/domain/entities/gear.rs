//! The `Gear` entity, its configuration record, and its builder.
//!
//! A `Gear` pairs a chainring with a cog and, optionally, borrows something
//! it can take a diameter from. Defaults are resolved once, when the gear is
//! constructed; nothing is looked up later.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;

use crate::domain::{collaborator::Diameter, error::DomainError};

/// Chainring tooth count used when none is configured.
pub const DEFAULT_CHAINRING: u32 = 40;
/// Cog tooth count used when none is configured.
pub const DEFAULT_COG: u32 = 18;

// ── Configuration record ──────────────────────────────────────────────────────

/// Named options for constructing a [`Gear`].
///
/// | Field       | Default              |
/// |-------------|----------------------|
/// | `chainring` | [`DEFAULT_CHAINRING`] |
/// | `cog`       | [`DEFAULT_COG`]       |
/// | `wheel`     | none                 |
///
/// A missing `wheel` is accepted here; it only matters once
/// [`Gear::gear_inches`] is asked for.
#[derive(Clone, Copy, Default)]
pub struct GearConfig<'w> {
    pub chainring: Option<u32>,
    pub cog: Option<u32>,
    pub wheel: Option<&'w dyn Diameter>,
}

impl fmt::Debug for GearConfig<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GearConfig")
            .field("chainring", &self.chainring)
            .field("cog", &self.cog)
            .field("wheel", &self.wheel.map(|w| w.diameter()))
            .finish()
    }
}

// ── Entity ────────────────────────────────────────────────────────────────────

/// A chainring and cog pair, optionally attached to a wheel.
///
/// The wheel is borrowed, never owned: it must outlive the gear, and the
/// gear never hands anything back to it.
#[derive(Clone, Copy)]
pub struct Gear<'w> {
    chainring: u32,
    cog: u32,
    wheel: Option<&'w dyn Diameter>,
}

impl<'w> Gear<'w> {
    /// Build a gear from a configuration record, filling in defaults.
    pub fn new(config: GearConfig<'w>) -> Self {
        Self {
            chainring: config.chainring.unwrap_or(DEFAULT_CHAINRING),
            cog: config.cog.unwrap_or(DEFAULT_COG),
            wheel: config.wheel,
        }
    }

    /// Start building a gear fluently.
    pub fn builder() -> GearBuilder<'w> {
        GearBuilder::new()
    }

    pub const fn chainring(&self) -> u32 {
        self.chainring
    }
    pub const fn cog(&self) -> u32 {
        self.cog
    }
    pub fn wheel(&self) -> Option<&'w dyn Diameter> {
        self.wheel
    }

    /// Chainring teeth over cog teeth, as a real number.
    ///
    /// # Errors
    ///
    /// [`DomainError::DivisionByZero`] when the cog has no teeth.
    pub fn ratio(&self) -> Result<f64, DomainError> {
        if self.cog == 0 {
            return Err(DomainError::DivisionByZero {
                chainring: self.chainring,
            });
        }
        Ok(f64::from(self.chainring) / f64::from(self.cog))
    }

    /// The ratio scaled by the wheel's diameter.
    ///
    /// The ratio is computed first, so a zero cog is reported even when the
    /// wheel is also missing.
    ///
    /// # Errors
    ///
    /// - [`DomainError::DivisionByZero`] when the cog has no teeth.
    /// - [`DomainError::MissingCollaborator`] when no wheel was supplied.
    pub fn gear_inches(&self) -> Result<f64, DomainError> {
        let ratio = self.ratio()?;
        let wheel = self.wheel.ok_or(DomainError::MissingCollaborator {
            collaborator: "wheel",
        })?;
        Ok(ratio * wheel.diameter())
    }

    /// Check that the ratio is computable.
    ///
    /// Available for callers that want to fail before asking for a ratio.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.ratio().map(|_| ())
    }
}

impl fmt::Debug for Gear<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gear")
            .field("chainring", &self.chainring)
            .field("cog", &self.cog)
            .field("wheel", &self.wheel.map(|w| w.diameter()))
            .finish()
    }
}

impl fmt::Display for Gear<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.chainring, self.cog)
    }
}

impl<'w> From<GearConfig<'w>> for Gear<'w> {
    fn from(config: GearConfig<'w>) -> Self {
        Self::new(config)
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Fluent builder for [`Gear`].
///
/// Every setter is optional; `build()` applies the same defaults as
/// [`Gear::new`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GearBuilder<'w> {
    config: GearConfig<'w>,
}

impl<'w> GearBuilder<'w> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chainring(mut self, chainring: u32) -> Self {
        self.config.chainring = Some(chainring);
        self
    }

    pub fn cog(mut self, cog: u32) -> Self {
        self.config.cog = Some(cog);
        self
    }

    pub fn wheel(mut self, wheel: &'w dyn Diameter) -> Self {
        self.config.wheel = Some(wheel);
        self
    }

    pub fn build(self) -> Gear<'w> {
        Gear::new(self.config)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
