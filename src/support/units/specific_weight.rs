use uom::si::{
    f64::{Length, Pressure},
    length::meter,
    pressure::pascal,
};

use super::SpecificWeight;

/// Extension trait for building and reading [`SpecificWeight`] values.
///
/// [`uom`] has no unit module for weight per volume, so values are built
/// from a pressure per unit length (`Pa/m` is dimensionally `N/m³`).
pub trait SpecificWeightUnits {
    /// Creates a specific weight from a value in N/m³.
    fn from_newtons_per_cubic_meter(value: f64) -> Self;

    /// Returns the specific weight in N/m³.
    fn newtons_per_cubic_meter(&self) -> f64;
}

impl SpecificWeightUnits for SpecificWeight {
    fn from_newtons_per_cubic_meter(value: f64) -> Self {
        Pressure::new::<pascal>(value) / Length::new::<meter>(1.0)
    }

    fn newtons_per_cubic_meter(&self) -> f64 {
        (*self * Length::new::<meter>(1.0)).get::<pascal>()
    }
}
