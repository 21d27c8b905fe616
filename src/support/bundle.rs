//! Tube bundle geometry toolkit.
//!
//! This module describes how tubes are arranged inside a shell:
//!
//! - [`TubeArrangement`]: the six pitch-pattern and pitch-ratio bands used to
//!   pick an empirical fluid-elastic instability constant
//! - [`TubeLayout`]: tube centre coordinates for square and triangular pitch grids
//!
//! # Example
//!
//! ```
//! use tube_vibration_models::support::bundle::{PitchPattern, TubeArrangement};
//! use uom::si::{f64::Length, length::millimeter};
//!
//! let arrangement = TubeArrangement::from_pitch(
//!     PitchPattern::Square,
//!     Length::new::<millimeter>(35.0),
//!     Length::new::<millimeter>(25.0),
//! )
//! .unwrap();
//!
//! assert_eq!(arrangement, TubeArrangement::SquareTight);
//! assert_eq!(arrangement.empirical_constant(), 3.5);
//! ```

mod arrangement;
mod layout;

pub use arrangement::{PitchPattern, PitchRatioError, TubeArrangement, UnknownArrangement};
pub use layout::{LayoutKind, TubeCenter, TubeLayout};
