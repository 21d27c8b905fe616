use super::LengthExponent;

/// Model configuration for a vibration evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VibrationConfig {
    /// Span-length convention for the natural frequency formula.
    pub length_exponent: LengthExponent,
}

impl VibrationConfig {
    /// Returns a configuration using the given span-length convention.
    #[must_use]
    pub fn with_length_exponent(length_exponent: LengthExponent) -> Self {
        Self { length_exponent }
    }
}
