//! Heredity math utilities.

pub mod math;

pub use math::normalize::*;
pub use math::partition::*;
pub use math::subsets::*;
pub use math::EnumerationError;
