//! Fundamental natural frequency of a tube span.

use std::f64::consts::TAU;

use uom::si::{
    f64::{Frequency, Length, Pressure},
    frequency::hertz,
    length::meter,
    pressure::pascal,
};

use crate::support::{
    constraint::StrictlyPositive,
    units::{MassPerLength, SecondMomentOfArea},
};

use super::{
    TubeGeometry, TubeMaterial, ValidationError, compute_mass_per_length,
    compute_section_properties, validate,
};

/// Power `p` applied to the span length in `f_n = (1/2π) √(E I / (m Lᵖ))`.
///
/// The two conventions give identical results for a 1 m span and diverge
/// everywhere else, so the choice must be made explicitly.
/// Only [`LengthExponent::Fourth`] is dimensionally consistent (yielding Hz for
/// any span); [`LengthExponent::Squared`] is the default to stay compatible
/// with existing screening calculations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LengthExponent {
    /// `p = 2`.
    #[default]
    Squared,
    /// `p = 4`.
    Fourth,
}

impl LengthExponent {
    /// The convention used when none is specified.
    pub const DEFAULT: Self = Self::Squared;

    /// Returns `p`.
    #[must_use]
    pub const fn power(self) -> i32 {
        match self {
            Self::Squared => 2,
            Self::Fourth => 4,
        }
    }
}

/// Computes the fundamental natural frequency of a tube span.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the geometry fails [`validate`], or
/// [`ValidationError::InvalidPhysicalState`] if the material properties are
/// not finite and strictly positive.
pub fn compute_natural_frequency(
    geometry: &TubeGeometry,
    material: &TubeMaterial,
    exponent: LengthExponent,
) -> Result<Frequency, ValidationError> {
    validate(geometry)?;

    let section = compute_section_properties(geometry);
    let mass_per_length = compute_mass_per_length(geometry, material);

    natural_frequency_from_properties(
        material.youngs_modulus(),
        section.second_moment_of_area,
        mass_per_length,
        geometry.length(),
        exponent,
    )
}

/// Computes the natural frequency directly from `E`, `I`, `m`, and `L`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPhysicalState`] if any of `E`, `I`, `m`,
/// or `L` is not finite and strictly positive, or if the result is not finite.
pub fn natural_frequency_from_properties(
    youngs_modulus: Pressure,
    second_moment_of_area: SecondMomentOfArea,
    mass_per_length: MassPerLength,
    length: Length,
    exponent: LengthExponent,
) -> Result<Frequency, ValidationError> {
    let e = physical_factor(youngs_modulus.get::<pascal>(), "Young's modulus")?;
    let i = physical_factor(second_moment_of_area.value, "second moment of area")?;
    let m = physical_factor(mass_per_length.value, "mass per unit length")?;
    let l = physical_factor(length.get::<meter>(), "span length")?;

    // Evaluated in SI base units because Lᵖ has no fixed dimension.
    let radicand = e * i / (m * l.powi(exponent.power()));
    let f_n = radicand.sqrt() / TAU;

    if !f_n.is_finite() || f_n <= 0.0 {
        return Err(ValidationError::InvalidPhysicalState {
            context: "natural frequency is not finite and positive",
        });
    }

    Ok(Frequency::new::<hertz>(f_n))
}

/// Returns `value` if it is finite and strictly positive.
///
/// Each factor is checked on its own so that sign errors cannot cancel.
pub(super) fn physical_factor(value: f64, context: &'static str) -> Result<f64, ValidationError> {
    StrictlyPositive::new(value)
        .ok()
        .map(|value| value.into_inner())
        .filter(|value| value.is_finite())
        .ok_or(ValidationError::InvalidPhysicalState { context })
}
