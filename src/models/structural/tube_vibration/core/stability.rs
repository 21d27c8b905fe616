//! Fluid-elastic instability screening.
//!
//! The critical cross-flow velocity follows the simplified Connors form
//! `U_c = K f_n D`, with `K` taken from the bundle arrangement. A bundle is
//! considered stable while the actual velocity does not exceed `U_c`.

use std::f64::consts::TAU;

use uom::si::{
    f64::{Frequency, Length, Velocity},
    length::meter,
    pressure::pascal,
    ratio::ratio,
    velocity::meter_per_second,
};

use crate::support::bundle::TubeArrangement;

use super::{
    FlowContext, LengthExponent, TubeGeometry, TubeMaterial, ValidationError,
    compute_mass_per_length, compute_section_properties, frequency::physical_factor, validate,
};

/// Outcome of the fluid-elastic stability check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityCheck {
    pub arrangement: TubeArrangement,

    /// Effective constant `K` used for the critical velocity.
    pub empirical_constant: f64,

    pub critical_velocity: Velocity,
    pub actual_velocity: Velocity,

    /// `true` when `actual_velocity ≤ critical_velocity`.
    pub is_stable: bool,
}

impl StabilityCheck {
    /// Builds the check for a computed natural frequency.
    #[must_use]
    pub fn new(flow: &FlowContext, natural_frequency: Frequency, outer_diameter: Length) -> Self {
        let empirical_constant = select_empirical_constant(flow.arrangement());
        let critical_velocity =
            compute_critical_velocity(empirical_constant, natural_frequency, outer_diameter);

        Self {
            arrangement: flow.arrangement(),
            empirical_constant,
            critical_velocity,
            actual_velocity: flow.actual_velocity(),
            is_stable: assess_stability(critical_velocity, flow.actual_velocity()),
        }
    }

    /// Returns `U / U_c`; values above one are unstable.
    #[must_use]
    pub fn velocity_ratio(&self) -> f64 {
        (self.actual_velocity / self.critical_velocity).get::<ratio>()
    }
}

/// Returns the effective constant `K` for an arrangement.
///
/// `K` is the midpoint of the arrangement's tabulated range.
#[must_use]
pub fn select_empirical_constant(arrangement: TubeArrangement) -> f64 {
    arrangement.empirical_constant()
}

/// Computes the critical velocity `U_c = K f_n D`.
#[must_use]
pub fn compute_critical_velocity(
    empirical_constant: f64,
    natural_frequency: Frequency,
    outer_diameter: Length,
) -> Velocity {
    natural_frequency * outer_diameter * empirical_constant
}

/// Returns `true` if the flow is stable.
///
/// A velocity exactly equal to the critical velocity counts as stable;
/// instability requires `actual_velocity > critical_velocity`.
#[must_use]
pub fn assess_stability(critical_velocity: Velocity, actual_velocity: Velocity) -> bool {
    actual_velocity <= critical_velocity
}

/// Computes the longest unsupported span that stays stable for `flow`.
///
/// Solves `U = K f_n(L) D` for `L`, which gives
/// `L = (K D √(E I / m) / (2π U))^(2/p)`. The span stored in `geometry` is
/// ignored. Returns `None` when the flow velocity is zero, since no span
/// can then become unstable.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the geometry is invalid, or
/// [`ValidationError::InvalidPhysicalState`] if `E`, `I`, or `m` is not
/// finite and strictly positive or the span is not finite.
pub fn max_stable_span(
    geometry: &TubeGeometry,
    material: &TubeMaterial,
    flow: &FlowContext,
    exponent: LengthExponent,
) -> Result<Option<Length>, ValidationError> {
    validate(geometry)?;

    let velocity = flow.actual_velocity().get::<meter_per_second>();
    if velocity == 0.0 {
        return Ok(None);
    }

    let section = compute_section_properties(geometry);
    let mass_per_length = compute_mass_per_length(geometry, material);

    let e = physical_factor(material.youngs_modulus().get::<pascal>(), "Young's modulus")?;
    let i = physical_factor(section.second_moment_of_area.value, "second moment of area")?;
    let m = physical_factor(mass_per_length.value, "mass per unit length")?;
    let stiffness_ratio = e * i / m;

    let k = select_empirical_constant(flow.arrangement());
    let d = geometry.outer_diameter().get::<meter>();
    let base = k * d * stiffness_ratio.sqrt() / (TAU * velocity);
    let span = base.powf(2.0 / f64::from(exponent.power()));

    if !span.is_finite() || span <= 0.0 {
        return Err(ValidationError::InvalidPhysicalState {
            context: "maximum stable span is not finite",
        });
    }

    Ok(Some(Length::new::<meter>(span)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{MassDensity, Pressure},
        frequency::hertz,
        mass_density::kilogram_per_cubic_meter,
    };

    use crate::models::structural::tube_vibration::core::{
        compute_natural_frequency,
        test_support::{REFERENCE_FREQUENCY_HZ, reference_geometry, reference_material},
    };

    fn velocity(value: f64) -> Velocity {
        Velocity::new::<meter_per_second>(value)
    }

    #[test]
    fn square_tight_constant() {
        assert_relative_eq!(select_empirical_constant(TubeArrangement::SquareTight), 3.5);
    }

    #[test]
    fn critical_velocity_is_k_f_d() {
        let u_c = compute_critical_velocity(
            3.5,
            Frequency::new::<hertz>(REFERENCE_FREQUENCY_HZ),
            Length::new::<meter>(0.025),
        );
        assert_relative_eq!(
            u_c.get::<meter_per_second>(),
            3.5 * REFERENCE_FREQUENCY_HZ * 0.025,
            max_relative = 1e-12
        );
    }

    #[test]
    fn equal_velocity_is_stable() {
        let u_c = velocity(0.5626);
        assert!(assess_stability(u_c, u_c));
        assert!(assess_stability(u_c, velocity(0.0)));
        assert!(!assess_stability(u_c, velocity(0.5627)));
    }

    #[test]
    fn check_at_critical_velocity_is_stable() {
        let f_n = Frequency::new::<hertz>(REFERENCE_FREQUENCY_HZ);
        let d = Length::new::<meter>(0.025);
        let u_c = compute_critical_velocity(3.5, f_n, d);

        let flow = FlowContext::new(TubeArrangement::SquareTight, u_c).unwrap();
        let check = StabilityCheck::new(&flow, f_n, d);

        assert_eq!(check.critical_velocity, u_c);
        assert!(check.is_stable);
        assert_relative_eq!(check.velocity_ratio(), 1.0);
    }

    #[test]
    fn max_span_reaches_critical_velocity() {
        let material = reference_material();
        let flow = FlowContext::new(TubeArrangement::TriangularTight, velocity(0.2)).unwrap();

        for exponent in [LengthExponent::Squared, LengthExponent::Fourth] {
            let span = max_stable_span(&reference_geometry(), &material, &flow, exponent)
                .unwrap()
                .expect("flowing fluid should limit the span");

            let reference = reference_geometry();
            let geometry = TubeGeometry::new(
                reference.outer_diameter(),
                reference.wall_thickness(),
                span,
            )
            .unwrap();
            let f_n = compute_natural_frequency(&geometry, &material, exponent).unwrap();
            let check = StabilityCheck::new(&flow, f_n, geometry.outer_diameter());

            assert_relative_eq!(check.velocity_ratio(), 1.0, max_relative = 1e-9);
        }
    }

    #[test]
    fn stagnant_flow_has_no_span_limit() {
        let flow = FlowContext::new(TubeArrangement::SquareWide, velocity(0.0)).unwrap();
        let span = max_stable_span(
            &reference_geometry(),
            &reference_material(),
            &flow,
            LengthExponent::DEFAULT,
        );
        assert_eq!(span, Ok(None));
    }

    #[test]
    fn max_span_validates_geometry() {
        let flow = FlowContext::new(TubeArrangement::SquareWide, velocity(1.0)).unwrap();
        let geometry = TubeGeometry::new_unchecked(
            Length::new::<meter>(0.01),
            Length::new::<meter>(0.01),
            Length::new::<meter>(1.0),
        );
        let span = max_stable_span(
            &geometry,
            &reference_material(),
            &flow,
            LengthExponent::DEFAULT,
        );
        assert!(matches!(span, Err(ValidationError::WallTooThick { .. })));
    }

    #[test]
    fn max_span_rejects_negative_material_pair() {
        let flow = FlowContext::new(TubeArrangement::SquareWide, velocity(1.0)).unwrap();
        let inverted = TubeMaterial::new_unchecked(
            MassDensity::new::<kilogram_per_cubic_meter>(-7850.0),
            Pressure::new::<pascal>(-2.0e11),
        );
        let span = max_stable_span(
            &reference_geometry(),
            &inverted,
            &flow,
            LengthExponent::DEFAULT,
        );
        assert!(matches!(
            span,
            Err(ValidationError::InvalidPhysicalState { .. })
        ));
    }
}
