use std::fmt;

use thiserror::Error;
use uom::si::f64::Length;

use crate::support::bundle::UnknownArrangement;

/// Input field named by a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    OuterDiameter,
    WallThickness,
    Length,
    Density,
    YoungsModulus,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OuterDiameter => "outer diameter",
            Self::WallThickness => "wall thickness",
            Self::Length => "tube length",
            Self::Density => "material density",
            Self::YoungsModulus => "Young's modulus",
        })
    }
}

/// Errors raised while validating inputs or evaluating the vibration model.
///
/// Every failure is deterministic, so none of them are worth retrying.
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// A dimension or material property is zero, negative, or not a number.
    #[error("{field} must be strictly positive")]
    NonPositiveDimension { field: Field },

    /// The wall is too thick to leave a bore (`D ≤ 2t`).
    #[error(
        "outer diameter ({outer_diameter:?}) must exceed twice the wall thickness ({wall_thickness:?})"
    )]
    WallTooThick {
        outer_diameter: Length,
        wall_thickness: Length,
    },

    /// A computed quantity is non-finite or outside its physical domain.
    ///
    /// This is raised instead of returning `NaN`, infinity, or zero.
    #[error("invalid physical state: {context}")]
    InvalidPhysicalState { context: &'static str },

    /// Text did not name a known tube arrangement.
    #[error(transparent)]
    UnknownArrangement(#[from] UnknownArrangement),

    /// The actual flow velocity is negative or not a number.
    #[error("actual flow velocity must not be negative")]
    NegativeVelocity,
}
