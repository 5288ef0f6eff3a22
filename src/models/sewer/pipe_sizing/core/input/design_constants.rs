use crate::support::{
    constraint::{NonNegative, StrictlyPositive},
    hydraulics::SelfCleaning,
    units::SpecificWeight,
};
use uom::si::{
    f64::{Length, Pressure},
    length::meter,
};

use crate::models::sewer::pipe_sizing::core::{InvalidInput, SizingError};

/// Site and regulation constants shared by every pipe in a design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignConstants {
    self_cleaning: SelfCleaning,
    minimum_excavation: Length,
}

impl DesignConstants {
    /// Constructs validated design constants.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] naming the first value that is out
    /// of range: the shear stress and specific weight must be strictly
    /// positive and the minimum excavation must not be negative.
    pub fn new(
        shear_stress: Pressure,
        specific_weight: SpecificWeight,
        minimum_excavation: Length,
    ) -> Result<Self, SizingError> {
        let shear_stress =
            StrictlyPositive::new(shear_stress).map_err(InvalidInput::ShearStress)?;
        let specific_weight =
            StrictlyPositive::new(specific_weight).map_err(InvalidInput::SpecificWeight)?;
        let minimum_excavation =
            NonNegative::new(minimum_excavation).map_err(InvalidInput::MinimumExcavation)?;

        Ok(Self {
            self_cleaning: SelfCleaning::from_constrained(shear_stress, specific_weight),
            minimum_excavation: minimum_excavation.into_inner(),
        })
    }

    /// Returns a copy with a different minimum excavation depth.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::MinimumExcavation`] if the depth is negative.
    pub fn with_minimum_excavation(self, minimum_excavation: Length) -> Result<Self, SizingError> {
        let minimum_excavation =
            NonNegative::new(minimum_excavation).map_err(InvalidInput::MinimumExcavation)?;
        Ok(Self {
            minimum_excavation: minimum_excavation.into_inner(),
            ..self
        })
    }

    /// Returns the self-cleaning criterion.
    #[must_use]
    pub fn self_cleaning(&self) -> SelfCleaning {
        self.self_cleaning
    }

    /// Returns the minimum depth of the pipe invert below the terrain at the
    /// downstream end.
    #[must_use]
    pub fn minimum_excavation(&self) -> Length {
        self.minimum_excavation
    }
}

impl Default for DesignConstants {
    /// Default self-cleaning criterion with a 1 m minimum excavation.
    fn default() -> Self {
        Self {
            self_cleaning: SelfCleaning::default(),
            minimum_excavation: Length::new::<meter>(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::pressure::pascal;

    use crate::support::{constraint::ConstraintError, units::SpecificWeightUnits};

    fn gamma() -> SpecificWeight {
        SpecificWeight::from_newtons_per_cubic_meter(9810.0)
    }

    #[test]
    fn defaults() {
        let constants = DesignConstants::default();
        assert_relative_eq!(constants.minimum_excavation().get::<meter>(), 1.0);
        assert_relative_eq!(
            constants.self_cleaning().shear_stress().get::<pascal>(),
            2.0
        );
        assert_relative_eq!(
            constants
                .self_cleaning()
                .specific_weight()
                .newtons_per_cubic_meter(),
            9800.0
        );
    }

    #[test]
    fn custom_values() {
        let constants = DesignConstants::new(
            Pressure::new::<pascal>(3.0),
            gamma(),
            Length::new::<meter>(0.0),
        )
        .unwrap();

        assert_relative_eq!(constants.minimum_excavation().get::<meter>(), 0.0);
        assert_relative_eq!(
            constants.self_cleaning().shear_stress().get::<pascal>(),
            3.0
        );
    }

    #[test]
    fn errors_name_the_offending_value() {
        let tau = Pressure::new::<pascal>(2.0);
        let depth = Length::new::<meter>(1.0);

        assert_eq!(
            DesignConstants::new(Pressure::new::<pascal>(0.0), gamma(), depth),
            Err(SizingError::InvalidInput(InvalidInput::ShearStress(
                ConstraintError::Zero
            )))
        );
        assert_eq!(
            DesignConstants::new(
                tau,
                SpecificWeight::from_newtons_per_cubic_meter(-9810.0),
                depth
            ),
            Err(SizingError::InvalidInput(InvalidInput::SpecificWeight(
                ConstraintError::Negative
            )))
        );
        assert_eq!(
            DesignConstants::new(tau, gamma(), Length::new::<meter>(-0.5)),
            Err(SizingError::InvalidInput(InvalidInput::MinimumExcavation(
                ConstraintError::Negative
            )))
        );
    }

    #[test]
    fn infinite_values_are_rejected() {
        let tau = Pressure::new::<pascal>(2.0);
        let depth = Length::new::<meter>(1.0);

        assert_eq!(
            DesignConstants::new(Pressure::new::<pascal>(f64::INFINITY), gamma(), depth),
            Err(SizingError::InvalidInput(InvalidInput::ShearStress(
                ConstraintError::Infinite
            )))
        );
        assert_eq!(
            DesignConstants::new(
                tau,
                SpecificWeight::from_newtons_per_cubic_meter(f64::INFINITY),
                depth
            ),
            Err(SizingError::InvalidInput(InvalidInput::SpecificWeight(
                ConstraintError::Infinite
            )))
        );
        assert_eq!(
            DesignConstants::new(tau, gamma(), Length::new::<meter>(f64::INFINITY)),
            Err(SizingError::InvalidInput(InvalidInput::MinimumExcavation(
                ConstraintError::Infinite
            )))
        );
    }

    #[test]
    fn override_minimum_excavation() {
        let constants = DesignConstants::default()
            .with_minimum_excavation(Length::new::<meter>(1.5))
            .unwrap();
        assert_relative_eq!(constants.minimum_excavation().get::<meter>(), 1.5);

        assert!(
            DesignConstants::default()
                .with_minimum_excavation(Length::new::<meter>(-1.0))
                .is_err()
        );
    }
}
