pub mod gear;
pub mod wheel;

pub use crate::domain::DomainError;
pub use gear::{DEFAULT_CHAINRING, DEFAULT_COG, Gear, GearBuilder, GearConfig};
pub use wheel::Wheel;
