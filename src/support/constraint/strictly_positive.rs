use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Dimensions such as tube diameter, wall thickness, and span use this
/// constraint.
///
/// # Examples
///
/// ```
/// use tube_vibration_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let x = Constrained::<_, StrictlyPositive>::new(1).unwrap();
/// assert_eq!(x.into_inner(), 1);
///
/// let y = StrictlyPositive::new(0.025).unwrap();
/// assert_eq!(y.into_inner(), 0.025);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, Pressure},
        length::millimeter,
        pressure::gigapascal,
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn lengths() {
        let wall = StrictlyPositive::new(Length::new::<millimeter>(1.65)).unwrap();
        assert_eq!(wall.as_ref(), &Length::new::<millimeter>(1.65));

        assert!(StrictlyPositive::new(Length::new::<millimeter>(0.0)).is_err());
        assert!(StrictlyPositive::new(Length::new::<millimeter>(-2.0)).is_err());
    }

    #[test]
    fn moduli() {
        assert!(StrictlyPositive::new(Pressure::new::<gigapascal>(193.0)).is_ok());
        assert!(StrictlyPositive::new(Pressure::new::<gigapascal>(f64::NAN)).is_err());
    }
}
