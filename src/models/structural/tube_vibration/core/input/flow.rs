use uom::si::f64::Velocity;

use crate::models::structural::tube_vibration::core::ValidationError;
use crate::support::{bundle::TubeArrangement, constraint::NonNegative};

/// Shell-side flow conditions for the fluid-elastic stability check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowContext {
    arrangement: TubeArrangement,
    actual_velocity: Velocity,
}

impl FlowContext {
    /// Constructs validated flow conditions.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativeVelocity`] if `actual_velocity` is
    /// negative or not a number.
    pub fn new(
        arrangement: TubeArrangement,
        actual_velocity: Velocity,
    ) -> Result<Self, ValidationError> {
        let actual_velocity =
            NonNegative::new(actual_velocity).map_err(|_| ValidationError::NegativeVelocity)?;

        Ok(Self {
            arrangement,
            actual_velocity: actual_velocity.into_inner(),
        })
    }

    /// Constructs flow conditions from an arrangement name.
    ///
    /// Accepts anything [`TubeArrangement`]'s `FromStr` accepts.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownArrangement`] for an unrecognized
    /// name, or [`ValidationError::NegativeVelocity`] as in [`FlowContext::new`].
    pub fn from_name(arrangement: &str, actual_velocity: Velocity) -> Result<Self, ValidationError> {
        Self::new(arrangement.parse()?, actual_velocity)
    }

    #[must_use]
    pub fn arrangement(&self) -> TubeArrangement {
        self.arrangement
    }

    /// Returns the shell-side cross-flow velocity.
    #[must_use]
    pub fn actual_velocity(&self) -> Velocity {
        self.actual_velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::velocity::meter_per_second;

    #[test]
    fn accepts_zero_velocity() {
        let flow = FlowContext::new(
            TubeArrangement::SquareTight,
            Velocity::new::<meter_per_second>(0.0),
        )
        .unwrap();
        assert_eq!(flow.arrangement(), TubeArrangement::SquareTight);
    }

    #[test]
    fn rejects_negative_velocity() {
        assert_eq!(
            FlowContext::new(
                TubeArrangement::SquareTight,
                Velocity::new::<meter_per_second>(-0.1)
            ),
            Err(ValidationError::NegativeVelocity)
        );
        assert_eq!(
            FlowContext::new(
                TubeArrangement::SquareTight,
                Velocity::new::<meter_per_second>(f64::NAN)
            ),
            Err(ValidationError::NegativeVelocity)
        );
    }

    #[test]
    fn parses_arrangement_name() {
        let u = Velocity::new::<meter_per_second>(3.0);

        let flow = FlowContext::from_name("Square (P/D = 1.25 - 1.5)", u).unwrap();
        assert_eq!(flow.arrangement(), TubeArrangement::SquareTight);

        let err = FlowContext::from_name("staggered", u).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownArrangement(_)));
    }
}
