use uom::si::f64::Length;

use crate::models::structural::tube_vibration::core::{Field, ValidationError};
use crate::support::constraint::StrictlyPositive;

/// Tube cross-section and unsupported span.
///
/// A geometry built with [`TubeGeometry::new`] always satisfies [`validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeGeometry {
    outer_diameter: Length,
    wall_thickness: Length,
    length: Length,
}

impl TubeGeometry {
    /// Constructs a validated geometry.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`validate`].
    pub fn new(
        outer_diameter: Length,
        wall_thickness: Length,
        length: Length,
    ) -> Result<Self, ValidationError> {
        let geometry = Self::new_unchecked(outer_diameter, wall_thickness, length);
        validate(&geometry)?;
        Ok(geometry)
    }

    /// Constructs a geometry without validation.
    ///
    /// # Warning
    ///
    /// The caller must run [`validate`] before computing anything from the
    /// result. The model entry points validate on their own.
    #[must_use]
    pub fn new_unchecked(outer_diameter: Length, wall_thickness: Length, length: Length) -> Self {
        Self {
            outer_diameter,
            wall_thickness,
            length,
        }
    }

    #[must_use]
    pub fn outer_diameter(&self) -> Length {
        self.outer_diameter
    }

    #[must_use]
    pub fn wall_thickness(&self) -> Length {
        self.wall_thickness
    }

    /// Returns the unsupported span between supports.
    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    /// Returns the bore diameter, `D - 2t`.
    #[must_use]
    pub fn inner_diameter(&self) -> Length {
        self.outer_diameter - self.wall_thickness * 2.0
    }
}

/// Checks that a geometry describes a real hollow tube.
///
/// # Errors
///
/// Returns [`ValidationError::NonPositiveDimension`] naming the first of outer
/// diameter, wall thickness, or length that is not strictly positive, then
/// [`ValidationError::WallTooThick`] if `D ≤ 2t`.
pub fn validate(geometry: &TubeGeometry) -> Result<(), ValidationError> {
    for (value, field) in [
        (geometry.outer_diameter, Field::OuterDiameter),
        (geometry.wall_thickness, Field::WallThickness),
        (geometry.length, Field::Length),
    ] {
        StrictlyPositive::new(value)
            .map_err(|_| ValidationError::NonPositiveDimension { field })?;
    }

    if geometry.outer_diameter <= geometry.wall_thickness * 2.0 {
        return Err(ValidationError::WallTooThick {
            outer_diameter: geometry.outer_diameter,
            wall_thickness: geometry.wall_thickness,
        });
    }

    Ok(())
}
