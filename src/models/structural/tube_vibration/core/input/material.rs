use uom::si::{
    f64::{MassDensity, Pressure},
    mass_density::kilogram_per_cubic_meter,
    pressure::gigapascal,
};

use crate::models::structural::tube_vibration::core::{Field, ValidationError};
use crate::support::constraint::StrictlyPositive;

/// Tube wall material properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeMaterial {
    density: MassDensity,
    youngs_modulus: Pressure,
}

impl TubeMaterial {
    /// Constructs validated material properties.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveDimension`] if either property is
    /// not strictly positive.
    pub fn new(density: MassDensity, youngs_modulus: Pressure) -> Result<Self, ValidationError> {
        let density = StrictlyPositive::new(density).map_err(|_| {
            ValidationError::NonPositiveDimension {
                field: Field::Density,
            }
        })?;
        let youngs_modulus = StrictlyPositive::new(youngs_modulus).map_err(|_| {
            ValidationError::NonPositiveDimension {
                field: Field::YoungsModulus,
            }
        })?;

        Ok(Self {
            density: density.into_inner(),
            youngs_modulus: youngs_modulus.into_inner(),
        })
    }

    /// Constructs material properties without validation.
    ///
    /// # Warning
    ///
    /// Non-positive values surface later as
    /// [`ValidationError::InvalidPhysicalState`].
    #[must_use]
    pub fn new_unchecked(density: MassDensity, youngs_modulus: Pressure) -> Self {
        Self {
            density,
            youngs_modulus,
        }
    }

    /// Plain carbon steel: 7850 kg/m³, 200 GPa.
    #[must_use]
    pub fn carbon_steel() -> Self {
        Self::new_unchecked(
            MassDensity::new::<kilogram_per_cubic_meter>(7850.0),
            Pressure::new::<gigapascal>(200.0),
        )
    }

    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }

    #[must_use]
    pub fn youngs_modulus(&self) -> Pressure {
        self.youngs_modulus
    }
}
