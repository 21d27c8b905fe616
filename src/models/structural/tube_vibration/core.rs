//! Tube vibration screening core.
//!
//! A tube span is treated as a beam with a hollow circular cross-section.
//! Its fundamental natural frequency is compared against the fluid-elastic
//! critical velocity for the bundle arrangement.
//!
//! Every function here is pure: inputs are borrowed immutably and each call
//! returns a fresh value.

mod config;
mod error;
mod frequency;
mod input;
mod results;
mod section;
mod stability;

#[cfg(test)]
mod test_support;

pub use config::VibrationConfig;
pub use error::{Field, ValidationError};
pub use frequency::{
    LengthExponent, compute_natural_frequency, natural_frequency_from_properties,
};
pub use input::{FlowContext, TubeGeometry, TubeMaterial, VibrationInput, validate};
pub use results::{Summary, VibrationResult};
pub use section::{SectionProperties, compute_mass_per_length, compute_section_properties};
pub use stability::{
    StabilityCheck, assess_stability, compute_critical_velocity, max_stable_span,
    select_empirical_constant,
};

use log::{debug, warn};
use uom::si::{frequency::hertz, velocity::meter_per_second};

/// Evaluates the vibration model for a complete input.
///
/// Validates the geometry, computes section properties and the natural
/// frequency, and runs the stability check when flow conditions are present.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the geometry is invalid or if any
/// computed quantity is non-physical.
pub fn evaluate(
    input: &VibrationInput,
    config: &VibrationConfig,
) -> Result<VibrationResult, ValidationError> {
    if let Err(err) = validate(&input.geometry) {
        debug!("rejected tube geometry: {err}");
        return Err(err);
    }

    let section = compute_section_properties(&input.geometry);
    let mass_per_length = compute_mass_per_length(&input.geometry, &input.material);

    let natural_frequency = natural_frequency_from_properties(
        input.material.youngs_modulus(),
        section.second_moment_of_area,
        mass_per_length,
        input.geometry.length(),
        config.length_exponent,
    )
    .inspect_err(|err| debug!("natural frequency failed: {err}"))?;

    let stability = input.flow.as_ref().map(|flow| {
        StabilityCheck::new(flow, natural_frequency, input.geometry.outer_diameter())
    });

    debug!(
        "tube vibration: I={:.4e} m^4, m={:.4} kg/m, f_n={:.4} Hz ({:?})",
        section.second_moment_of_area.value,
        mass_per_length.value,
        natural_frequency.get::<hertz>(),
        config.length_exponent,
    );

    if let Some(check) = stability.filter(|check| !check.is_stable) {
        warn!(
            "fluid-elastic instability: U={:.3} m/s exceeds Uc={:.3} m/s for {}",
            check.actual_velocity.get::<meter_per_second>(),
            check.critical_velocity.get::<meter_per_second>(),
            check.arrangement,
        );
    }

    Ok(VibrationResult {
        second_moment_of_area: section.second_moment_of_area,
        inner_diameter: section.inner_diameter,
        mass_per_length,
        natural_frequency,
        stability,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, MassDensity, Pressure, Velocity},
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        pressure::pascal,
    };

    use crate::support::bundle::TubeArrangement;

    use super::test_support::{REFERENCE_FREQUENCY_HZ, reference_geometry, reference_material};

    fn flow(arrangement: TubeArrangement, velocity: f64) -> FlowContext {
        FlowContext::new(
            arrangement,
            Velocity::new::<meter_per_second>(velocity),
        )
        .unwrap()
    }

    #[test]
    fn frequency_only_without_flow() {
        let input = VibrationInput::new(reference_geometry(), reference_material());
        let result = evaluate(&input, &VibrationConfig::default()).unwrap();

        assert_relative_eq!(
            result.natural_frequency.get::<hertz>(),
            REFERENCE_FREQUENCY_HZ,
            max_relative = 1e-9
        );
        assert_relative_eq!(result.inner_diameter.get::<meter>(), 0.02, epsilon = 1e-15);
        assert!(result.stability.is_none());
        assert_eq!(result.critical_velocity(), None);
        assert_eq!(result.is_stable(), None);
    }

    #[test]
    fn unstable_at_design_velocity() {
        let input = VibrationInput::new(reference_geometry(), reference_material())
            .with_flow(flow(TubeArrangement::SquareTight, 3.0));
        let result = evaluate(&input, &VibrationConfig::default()).unwrap();

        let check = result.stability.unwrap();
        assert_relative_eq!(check.empirical_constant, 3.5);
        assert_relative_eq!(
            check.critical_velocity.get::<meter_per_second>(),
            3.5 * REFERENCE_FREQUENCY_HZ * 0.025,
            max_relative = 1e-9
        );
        assert!(!check.is_stable);
        assert_eq!(result.is_stable(), Some(false));
    }

    #[test]
    fn stable_below_critical_velocity() {
        let input = VibrationInput::new(reference_geometry(), reference_material())
            .with_flow(flow(TubeArrangement::TriangularWide, 0.5));
        let result = evaluate(&input, &VibrationConfig::default()).unwrap();

        assert_eq!(result.is_stable(), Some(true));
    }

    #[test]
    fn repeated_evaluation_is_identical() {
        let input = VibrationInput::new(reference_geometry(), reference_material())
            .with_flow(flow(TubeArrangement::RotatedSquareWide, 1.0));
        let config = VibrationConfig::with_length_exponent(LengthExponent::Fourth);

        let first = evaluate(&input, &config).unwrap();
        let second = evaluate(&input, &config).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first.natural_frequency.value.to_bits(),
            second.natural_frequency.value.to_bits()
        );
    }

    #[test]
    fn invalid_geometry_is_rejected_before_computing() {
        let geometry = TubeGeometry::new_unchecked(
            Length::new::<meter>(0.01),
            Length::new::<meter>(0.01),
            Length::new::<meter>(1.0),
        );
        let input = VibrationInput::new(geometry, reference_material());

        let err = evaluate(&input, &VibrationConfig::default()).unwrap_err();
        assert!(matches!(err, ValidationError::WallTooThick { .. }));
    }

    #[test]
    fn summary_report() {
        let input = VibrationInput::new(reference_geometry(), reference_material())
            .with_flow(flow(TubeArrangement::SquareTight, 3.0));
        let result = evaluate(&input, &VibrationConfig::default()).unwrap();

        let report = result.summary(&input).to_string();

        assert!(report.starts_with("--- Tube Vibration Analysis Summary ---\n"));
        assert!(report.contains("Tube Outer Diameter:        0.0250 m\n"));
        assert!(report.contains("Material Density:           7850.00 kg/m³\n"));
        assert!(report.contains("Modulus of Elasticity:      2.00e11 Pa\n"));
        assert!(report.contains("Second Moment of Area (I):  1.1321e-8 m⁴\n"));
        assert!(report.contains("Mass per Unit Length (m):   1.3872 kg/m\n"));
        assert!(report.contains("Natural Frequency:          6.43 Hz\n"));
        assert!(report.contains("Tube Arrangement:           Square (P/D = 1.25 - 1.5)\n"));
        assert!(report.contains("Critical Velocity:          0.56 m/s\n"));
        assert!(report.ends_with("Status:                     Unstable (U > Uc)\n"));
    }

    #[test]
    fn summary_without_flow_omits_stability() {
        let input = VibrationInput::new(reference_geometry(), reference_material());
        let result = evaluate(&input, &VibrationConfig::default()).unwrap();

        let report = result.summary(&input).to_string();
        assert_eq!(report.lines().count(), 9);
        assert!(!report.contains("Critical Velocity"));
    }

    #[test]
    fn paired_negative_inputs_are_rejected() {
        let inverted = TubeMaterial::new_unchecked(
            MassDensity::new::<kilogram_per_cubic_meter>(-7850.0),
            Pressure::new::<pascal>(-2.0e11),
        );
        let input = VibrationInput::new(reference_geometry(), inverted)
            .with_flow(flow(TubeArrangement::SquareTight, 3.0));

        let err = evaluate(&input, &VibrationConfig::default()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPhysicalState { .. }));

        let geometry = TubeGeometry::new_unchecked(
            Length::new::<meter>(0.025),
            Length::new::<meter>(-0.001),
            Length::new::<meter>(1.0),
        );
        let input = VibrationInput::new(geometry, reference_material());

        let err = evaluate(&input, &VibrationConfig::default()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonPositiveDimension {
                field: Field::WallThickness
            }
        );
    }
}
