use std::cmp::Ordering;

use num_traits::Zero;

use super::{CheckFinite, Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero) and finite.
///
/// Discharges, roughness coefficients, shear stresses and specific weights
/// all carry this constraint.
///
/// # Examples
///
/// ```
/// use sewer_models::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Pressure, pressure::pascal};
///
/// let tau = StrictlyPositive::new(Pressure::new::<pascal>(2.0)).unwrap();
/// assert_eq!(tau.as_ref().get::<pascal>(), 2.0);
///
/// assert!(Constrained::<f64, StrictlyPositive>::new(70.0).is_ok());
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// assert!(StrictlyPositive::new(f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, infinite, or not a
    /// number (`NaN`).
    pub fn new<T: PartialOrd + Zero + CheckFinite>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero + CheckFinite> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) if !CheckFinite::is_finite(value) => {
                Err(ConstraintError::Infinite)
            }
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
