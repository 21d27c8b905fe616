//! Supporting utilities used by models.
//!
//! - [`bundle`]: Tube arrangements and tube layout coordinates.
//! - [`constraint`]: Type-level numeric constraints.
//! - [`units`]: Quantity aliases that extend [`uom`].

pub mod bundle;
pub mod constraint;
pub mod units;
