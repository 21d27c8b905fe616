//! Results of a vibration evaluation.

use std::fmt;

use uom::si::{
    f64::{Frequency, Length, Velocity},
    frequency::hertz,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    velocity::meter_per_second,
};

use crate::support::units::{MassPerLength, SecondMomentOfArea};

use super::{StabilityCheck, VibrationInput};

/// Width of the label column in [`Summary`].
const LABEL_WIDTH: usize = 28;

/// Section properties, natural frequency, and optional stability outcome.
///
/// A fresh value is produced for every evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VibrationResult {
    pub second_moment_of_area: SecondMomentOfArea,
    pub inner_diameter: Length,
    pub mass_per_length: MassPerLength,
    pub natural_frequency: Frequency,

    /// Present only when flow conditions were supplied.
    pub stability: Option<StabilityCheck>,
}

impl VibrationResult {
    #[must_use]
    pub fn critical_velocity(&self) -> Option<Velocity> {
        self.stability.map(|check| check.critical_velocity)
    }

    #[must_use]
    pub fn is_stable(&self) -> Option<bool> {
        self.stability.map(|check| check.is_stable)
    }

    /// Returns a printable report of this result and the input it came from.
    #[must_use]
    pub fn summary<'a>(&'a self, input: &'a VibrationInput) -> Summary<'a> {
        Summary {
            input,
            result: self,
        }
    }
}

/// Fixed-format text report returned by [`VibrationResult::summary`].
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    input: &'a VibrationInput,
    result: &'a VibrationResult,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let geometry = &self.input.geometry;
        let material = &self.input.material;
        let result = self.result;

        writeln!(f, "--- Tube Vibration Analysis Summary ---")?;
        line(
            f,
            "Tube Outer Diameter:",
            format_args!("{:.4} m", geometry.outer_diameter().get::<meter>()),
        )?;
        line(
            f,
            "Tube Thickness:",
            format_args!("{:.4} m", geometry.wall_thickness().get::<meter>()),
        )?;
        line(
            f,
            "Tube Length:",
            format_args!("{:.4} m", geometry.length().get::<meter>()),
        )?;
        line(
            f,
            "Material Density:",
            format_args!("{:.2} kg/m³", material.density().get::<kilogram_per_cubic_meter>()),
        )?;
        line(
            f,
            "Modulus of Elasticity:",
            format_args!("{:.2e} Pa", material.youngs_modulus().get::<pascal>()),
        )?;
        line(
            f,
            "Second Moment of Area (I):",
            format_args!("{:.4e} m⁴", result.second_moment_of_area.value),
        )?;
        line(
            f,
            "Mass per Unit Length (m):",
            format_args!("{:.4} kg/m", result.mass_per_length.value),
        )?;
        line(
            f,
            "Natural Frequency:",
            format_args!("{:.2} Hz", result.natural_frequency.get::<hertz>()),
        )?;

        if let Some(check) = &result.stability {
            line(f, "Tube Arrangement:", format_args!("{}", check.arrangement))?;
            line(
                f,
                "Empirical Constant (K):",
                format_args!("{:.2}", check.empirical_constant),
            )?;
            line(
                f,
                "Critical Velocity:",
                format_args!("{:.2} m/s", check.critical_velocity.get::<meter_per_second>()),
            )?;
            line(
                f,
                "Actual Velocity:",
                format_args!("{:.2} m/s", check.actual_velocity.get::<meter_per_second>()),
            )?;
            let status = if check.is_stable {
                "Stable (U ≤ Uc)"
            } else {
                "Unstable (U > Uc)"
            };
            line(f, "Status:", format_args!("{status}"))?;
        }

        Ok(())
    }
}

fn line(f: &mut fmt::Formatter<'_>, label: &str, value: fmt::Arguments<'_>) -> fmt::Result {
    writeln!(f, "{label:<width$}{value}", width = LABEL_WIDTH)
}
