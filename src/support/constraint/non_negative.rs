use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Flow velocities use this constraint, since stagnant flow is a valid input.
///
/// # Examples
///
/// ```
/// use tube_vibration_models::support::constraint::{Constrained, NonNegative};
///
/// let x = Constrained::<_, NonNegative>::new(5).unwrap();
/// assert_eq!(x.into_inner(), 5);
///
/// let y = NonNegative::new(0.0).unwrap();
/// assert_eq!(y.into_inner(), 0.0);
///
/// assert!(NonNegative::new(-7).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Velocity, velocity::meter_per_second};

    #[test]
    fn integers() {
        assert_eq!(NonNegative::new(0).unwrap().into_inner(), 0);
        assert_eq!(NonNegative::new(2).unwrap().as_ref(), &2);
        assert_eq!(NonNegative::new(-1), Err(ConstraintError::Negative));
    }

    #[test]
    fn velocities() {
        let stagnant = Velocity::new::<meter_per_second>(0.0);
        assert!(NonNegative::new(stagnant).is_ok());

        let cross_flow = Velocity::new::<meter_per_second>(2.4);
        assert!(NonNegative::new(cross_flow).is_ok());

        let reversed = Velocity::new::<meter_per_second>(-0.5);
        assert!(NonNegative::new(reversed).is_err());

        let undefined = Velocity::new::<meter_per_second>(f64::NAN);
        assert_eq!(
            NonNegative::new(undefined),
            Err(ConstraintError::NotANumber)
        );
    }
}
