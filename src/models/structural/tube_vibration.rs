//! Flow-induced vibration screening for heat exchanger tubes.
//!
//! [`TubeVibration`] is the [`twine_core::Model`] adapter; the free functions
//! re-exported here expose each step of the calculation on its own.
//!
//! # Example
//!
//! ```
//! use tube_vibration_models::models::structural::tube_vibration::{
//!     FlowContext, TubeGeometry, TubeMaterial, TubeVibration, VibrationInput,
//! };
//! use tube_vibration_models::support::bundle::TubeArrangement;
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{Length, Velocity},
//!     frequency::hertz,
//!     length::millimeter,
//!     velocity::meter_per_second,
//! };
//!
//! let geometry = TubeGeometry::new(
//!     Length::new::<millimeter>(25.0),
//!     Length::new::<millimeter>(2.5),
//!     Length::new::<millimeter>(1000.0),
//! )?;
//! let flow = FlowContext::new(
//!     TubeArrangement::SquareTight,
//!     Velocity::new::<meter_per_second>(0.3),
//! )?;
//! let input = VibrationInput::new(geometry, TubeMaterial::carbon_steel()).with_flow(flow);
//!
//! let result = TubeVibration::default().call(&input)?;
//!
//! assert!((result.natural_frequency.get::<hertz>() - 6.43).abs() < 0.01);
//! assert_eq!(result.is_stable(), Some(true));
//! # Ok::<(), tube_vibration_models::models::structural::tube_vibration::ValidationError>(())
//! ```

mod core;

pub use self::core::{
    Field, FlowContext, LengthExponent, SectionProperties, StabilityCheck, Summary,
    TubeGeometry, TubeMaterial, ValidationError, VibrationConfig, VibrationInput,
    VibrationResult, assess_stability, compute_critical_velocity, compute_mass_per_length,
    compute_natural_frequency, compute_section_properties, evaluate, max_stable_span,
    natural_frequency_from_properties, select_empirical_constant, validate,
};

use twine_core::Model;

/// Tube vibration model.
///
/// Evaluates a [`VibrationInput`] using the contained [`VibrationConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TubeVibration {
    pub config: VibrationConfig,
}

impl TubeVibration {
    #[must_use]
    pub fn new(config: VibrationConfig) -> Self {
        Self { config }
    }
}

impl Model for TubeVibration {
    type Input = VibrationInput;
    type Output = VibrationResult;
    type Error = ValidationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        evaluate(input, &self.config)
    }
}
