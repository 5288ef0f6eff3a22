use std::cmp::Ordering;

use num_traits::Zero;

use super::{CheckFinite, Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater) and finite.
///
/// Used for depths and clearances where zero is meaningful, such as a
/// minimum excavation depth for a pipe laid directly at grade.
///
/// # Examples
///
/// ```
/// use sewer_models::support::constraint::{Constrained, NonNegative};
/// use uom::si::{f64::Length, length::meter};
///
/// let cover = NonNegative::new(Length::new::<meter>(1.2)).unwrap();
/// assert_eq!(cover.as_ref().get::<meter>(), 1.2);
///
/// let at_grade = NonNegative::new(Length::new::<meter>(0.0)).unwrap();
/// assert_eq!(at_grade.into_inner().get::<meter>(), 0.0);
///
/// assert!(Constrained::<f64, NonNegative>::new(-0.5).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// assert!(NonNegative::new(f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative, infinite, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero + CheckFinite>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero + CheckFinite> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) if !CheckFinite::is_finite(value) => {
                Err(ConstraintError::Infinite)
            }
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::centimeter};

    #[test]
    fn floats() {
        assert!(Constrained::<f64, NonNegative>::new(2.0).is_ok());
        assert!(NonNegative::new(0.0).is_ok());
        assert!(matches!(
            NonNegative::new(-2.0),
            Err(ConstraintError::Negative)
        ));
        assert!(matches!(
            NonNegative::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
        assert!(matches!(
            NonNegative::new(f64::INFINITY),
            Err(ConstraintError::Infinite)
        ));
        assert!(matches!(
            NonNegative::new(f64::NEG_INFINITY),
            Err(ConstraintError::Negative)
        ));
    }

    #[test]
    fn depths() {
        assert!(NonNegative::new(Length::new::<centimeter>(80.0)).is_ok());
        assert!(NonNegative::new(Length::new::<centimeter>(0.0)).is_ok());
        assert!(NonNegative::new(Length::new::<centimeter>(-1.0)).is_err());
        assert_eq!(
            NonNegative::new(Length::new::<centimeter>(f64::INFINITY)),
            Err(ConstraintError::Infinite)
        );
    }
}
