//! The seam between a [`Gear`](crate::domain::Gear) and whatever it rolls on.
//!
//! A gear only ever asks its collaborator for one number. Keeping that behind
//! a trait lets callers inject a [`Wheel`](crate::domain::Wheel), a test
//! double, or any other type that knows its own diameter.

/// Anything that can report an overall diameter.
///
/// The unit is whatever the implementor measures in; a gear multiplies it by
/// its ratio without conversion.
#[cfg_attr(test, mockall::automock)]
pub trait Diameter {
    fn diameter(&self) -> f64;
}
