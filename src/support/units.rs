//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., length, density, frequency).
//! This module provides quantity aliases that are useful for structural modeling
//! but aren't included in [`uom`].
//!
//! Both aliases fall out of ordinary [`uom`] arithmetic, so no conversion is
//! needed to produce them:
//!
//! ```
//! use uom::si::{f64::{Length, MassDensity}, length::meter, mass_density::kilogram_per_cubic_meter};
//! use tube_vibration_models::support::units::{MassPerLength, SecondMomentOfArea};
//!
//! let d = Length::new::<meter>(0.02);
//! let i: SecondMomentOfArea = d * d * d * d;
//! let m: MassPerLength = MassDensity::new::<kilogram_per_cubic_meter>(1000.0) * (d * d);
//! assert!(i.value > 0.0 && m.value > 0.0);
//! ```

mod quantities;

pub use quantities::{MassPerLength, SecondMomentOfArea};
