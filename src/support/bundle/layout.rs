//! Tube centre coordinates for regular pitch grids.

use uom::{ConstZero, si::f64::Length};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// Grid pattern used by [`TubeLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Tubes on a rectangular grid with spacing equal to the pitch.
    Square,
    /// Tubes on a rectangular grid with every odd row shifted by half a pitch.
    Triangular,
}

impl LayoutKind {
    /// Returns the default `(rows, columns)` grid for this kind.
    #[must_use]
    pub const fn default_grid(self) -> (usize, usize) {
        match self {
            Self::Square => (10, 10),
            Self::Triangular => (12, 9),
        }
    }
}

/// A single tube centre within a [`TubeLayout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeCenter {
    /// Row index, which advances along `x`.
    pub row: usize,
    /// Column index, which advances along `y`.
    pub column: usize,
    pub x: Length,
    pub y: Length,
}

/// Regular tube bundle layout.
///
/// The layout holds only the grid description; coordinates are generated on
/// demand by [`positions`](Self::positions).
///
/// # Example
///
/// ```
/// use tube_vibration_models::support::bundle::{LayoutKind, TubeLayout};
/// use uom::si::{f64::Length, length::meter};
///
/// let layout = TubeLayout::new(LayoutKind::Triangular, Length::new::<meter>(0.03)).unwrap();
/// assert_eq!(layout.tube_count(), 108);
/// assert_eq!(layout.positions().len(), 108);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeLayout {
    kind: LayoutKind,
    pitch: Length,
    rows: usize,
    columns: usize,
}

impl TubeLayout {
    /// Creates a layout with the default grid size for `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if `pitch` is not strictly positive.
    pub fn new(kind: LayoutKind, pitch: Length) -> ConstraintResult<Self> {
        let pitch = Constrained::<Length, StrictlyPositive>::new(pitch)?;
        let (rows, columns) = kind.default_grid();
        Ok(Self {
            kind,
            pitch: pitch.into_inner(),
            rows,
            columns,
        })
    }

    /// Returns a copy of this layout with a different grid size.
    ///
    /// Returns `None` if `rows * columns` overflows `usize`.
    #[must_use]
    pub fn with_grid(self, rows: usize, columns: usize) -> Option<Self> {
        rows.checked_mul(columns)?;
        Some(Self {
            rows,
            columns,
            ..self
        })
    }

    #[must_use]
    pub fn kind(&self) -> LayoutKind {
        self.kind
    }

    #[must_use]
    pub fn pitch(&self) -> Length {
        self.pitch
    }

    /// Returns the number of tubes in the layout.
    ///
    /// The count always fits in `usize`; see [`with_grid`](Self::with_grid).
    #[must_use]
    pub fn tube_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Returns every tube centre, row-major.
    ///
    /// The first tube sits at the origin. Rows advance along `x` and columns
    /// along `y`; a [`LayoutKind::Triangular`] layout offsets odd rows by half
    /// a pitch in `y`.
    #[must_use]
    pub fn positions(&self) -> Vec<TubeCenter> {
        let mut centers = Vec::with_capacity(self.tube_count());

        for row in 0..self.rows {
            let x = self.pitch * row as f64;
            let offset = match self.kind {
                LayoutKind::Triangular if row % 2 == 1 => self.pitch / 2.0,
                _ => Length::ZERO,
            };

            for column in 0..self.columns {
                centers.push(TubeCenter {
                    row,
                    column,
                    x,
                    y: self.pitch * column as f64 + offset,
                });
            }
        }

        centers
    }
}
