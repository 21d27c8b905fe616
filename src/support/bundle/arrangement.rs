//! Tube arrangements and their fluid-elastic instability constants.

use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::{f64::Length, ratio::ratio};

use crate::support::constraint::StrictlyPositive;

/// Lower bound of the tight pitch-ratio band.
const TIGHT_MIN_PITCH_RATIO: f64 = 1.25;

/// Boundary between the tight and wide pitch-ratio bands.
///
/// A ratio exactly on the boundary belongs to the tight band.
const TIGHT_MAX_PITCH_RATIO: f64 = 1.5;

/// Upper bound of the wide pitch-ratio band.
const WIDE_MAX_PITCH_RATIO: f64 = 2.5;

/// Geometric pattern formed by adjacent tube centres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchPattern {
    /// 30° layout, tubes at the corners of equilateral triangles.
    Triangular,
    /// 90° layout, tubes in line with the flow.
    Square,
    /// 45° layout, a square grid turned into the flow.
    RotatedSquare,
}

/// Tube-bundle arrangement used to select the empirical constant `K`.
///
/// Each variant pairs a [`PitchPattern`] with a pitch-to-diameter band:
/// "tight" covers `1.25 ≤ P/D ≤ 1.5` and "wide" covers `1.5 < P/D ≤ 2.5`.
///
/// | Arrangement            | `K_min` | `K_max` |
/// |------------------------|---------|---------|
/// | `TriangularTight`      | 3.0     | 5.0     |
/// | `TriangularWide`       | 4.0     | 7.0     |
/// | `SquareTight`          | 2.5     | 4.5     |
/// | `SquareWide`           | 3.5     | 6.5     |
/// | `RotatedSquareTight`   | 2.0     | 4.0     |
/// | `RotatedSquareWide`    | 3.0     | 5.5     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TubeArrangement {
    TriangularTight,
    TriangularWide,
    SquareTight,
    SquareWide,
    RotatedSquareTight,
    RotatedSquareWide,
}

impl TubeArrangement {
    /// Every arrangement, in table order.
    pub const ALL: [Self; 6] = [
        Self::TriangularTight,
        Self::TriangularWide,
        Self::SquareTight,
        Self::SquareWide,
        Self::RotatedSquareTight,
        Self::RotatedSquareWide,
    ];

    /// Returns the published `(K_min, K_max)` range for this arrangement.
    #[must_use]
    pub const fn k_range(self) -> (f64, f64) {
        match self {
            Self::TriangularTight => (3.0, 5.0),
            Self::TriangularWide => (4.0, 7.0),
            Self::SquareTight => (2.5, 4.5),
            Self::SquareWide => (3.5, 6.5),
            Self::RotatedSquareTight => (2.0, 4.0),
            Self::RotatedSquareWide => (3.0, 5.5),
        }
    }

    /// Returns the effective constant `K`, the midpoint of [`k_range`](Self::k_range).
    #[must_use]
    pub fn empirical_constant(self) -> f64 {
        let (k_min, k_max) = self.k_range();
        (k_min + k_max) / 2.0
    }

    /// Returns the pitch pattern of this arrangement.
    #[must_use]
    pub const fn pattern(self) -> PitchPattern {
        match self {
            Self::TriangularTight | Self::TriangularWide => PitchPattern::Triangular,
            Self::SquareTight | Self::SquareWide => PitchPattern::Square,
            Self::RotatedSquareTight | Self::RotatedSquareWide => PitchPattern::RotatedSquare,
        }
    }

    /// Returns `true` for the `1.25 ≤ P/D ≤ 1.5` band.
    #[must_use]
    pub const fn is_tight(self) -> bool {
        matches!(
            self,
            Self::TriangularTight | Self::SquareTight | Self::RotatedSquareTight
        )
    }

    /// Returns the human-readable label, e.g. `"Square (P/D = 1.25 - 1.5)"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TriangularTight => "Triangular (P/D = 1.25 - 1.5)",
            Self::TriangularWide => "Triangular (P/D = 1.5 - 2.5)",
            Self::SquareTight => "Square (P/D = 1.25 - 1.5)",
            Self::SquareWide => "Square (P/D = 1.5 - 2.5)",
            Self::RotatedSquareTight => "Rotated Square (P/D = 1.25 - 1.5)",
            Self::RotatedSquareWide => "Rotated Square (P/D = 1.5 - 2.5)",
        }
    }

    const fn identifier(self) -> &'static str {
        match self {
            Self::TriangularTight => "triangular-tight",
            Self::TriangularWide => "triangular-wide",
            Self::SquareTight => "square-tight",
            Self::SquareWide => "square-wide",
            Self::RotatedSquareTight => "rotated-square-tight",
            Self::RotatedSquareWide => "rotated-square-wide",
        }
    }

    /// Classifies a bundle by pattern and pitch-to-diameter ratio.
    ///
    /// # Errors
    ///
    /// Returns [`PitchRatioError::NonPositive`] if the pitch or diameter is not
    /// strictly positive, or [`PitchRatioError::OutOfRange`] if `P/D` falls
    /// outside `[1.25, 2.5]`.
    pub fn from_pitch(
        pattern: PitchPattern,
        pitch: Length,
        outer_diameter: Length,
    ) -> Result<Self, PitchRatioError> {
        let pitch = StrictlyPositive::new(pitch).map_err(|_| PitchRatioError::NonPositive)?;
        let outer_diameter =
            StrictlyPositive::new(outer_diameter).map_err(|_| PitchRatioError::NonPositive)?;

        let pitch_ratio = (pitch.into_inner() / outer_diameter.into_inner()).get::<ratio>();
        let tight = if (TIGHT_MIN_PITCH_RATIO..=TIGHT_MAX_PITCH_RATIO).contains(&pitch_ratio) {
            true
        } else if pitch_ratio > TIGHT_MAX_PITCH_RATIO && pitch_ratio <= WIDE_MAX_PITCH_RATIO {
            false
        } else {
            return Err(PitchRatioError::OutOfRange { pitch_ratio });
        };

        Ok(match (pattern, tight) {
            (PitchPattern::Triangular, true) => Self::TriangularTight,
            (PitchPattern::Triangular, false) => Self::TriangularWide,
            (PitchPattern::Square, true) => Self::SquareTight,
            (PitchPattern::Square, false) => Self::SquareWide,
            (PitchPattern::RotatedSquare, true) => Self::RotatedSquareTight,
            (PitchPattern::RotatedSquare, false) => Self::RotatedSquareWide,
        })
    }
}

impl fmt::Display for TubeArrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses either an identifier (`"square-tight"`, `"rotated_square_wide"`,
/// case-insensitive) or the exact label returned by [`TubeArrangement::label`].
impl FromStr for TubeArrangement {
    type Err = UnknownArrangement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.to_ascii_lowercase().replace(['_', ' '], "-");

        Self::ALL
            .into_iter()
            .find(|arrangement| {
                arrangement.label() == trimmed || arrangement.identifier() == normalized
            })
            .ok_or_else(|| UnknownArrangement {
                name: trimmed.to_owned(),
            })
    }
}

/// Error returned when text does not name a known [`TubeArrangement`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tube arrangement: {name:?}")]
pub struct UnknownArrangement {
    /// The unrecognized input, trimmed.
    pub name: String,
}

/// Errors returned by [`TubeArrangement::from_pitch`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PitchRatioError {
    /// Pitch or outer diameter is zero, negative, or not a number.
    #[error("pitch and outer diameter must be strictly positive")]
    NonPositive,

    /// The pitch-to-diameter ratio is outside every tabulated band.
    #[error("pitch ratio {pitch_ratio} is outside the tabulated range 1.25 - 2.5")]
    OutOfRange { pitch_ratio: f64 },
}
