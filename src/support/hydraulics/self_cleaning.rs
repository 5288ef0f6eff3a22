use crate::support::{
    constraint::{Constrained, ConstraintResult, StrictlyPositive},
    units::{SpecificWeight, SpecificWeightUnits},
};
use uom::si::{
    angle::radian,
    f64::{Angle, Length, Pressure, Ratio},
    length::meter,
    pressure::pascal,
};

use super::{
    HydraulicsError, StricklerCoefficient, circular_section::check_diameter, hydraulic_radius,
    shape_factor,
};

/// Self-cleaning (auto-cleaning) criterion for sewer pipes.
///
/// Sediment is kept moving when the mean bed shear stress `τ = γ·Rh·i`
/// reaches a design threshold. For a given fill angle this fixes both a
/// diameter and the minimum slope at which that diameter is self-cleaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelfCleaning {
    shear_stress: Pressure,
    specific_weight: SpecificWeight,
}

/// Diameter, hydraulic radius and slope that satisfy a [`SelfCleaning`] criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelfCleaningDesign {
    /// Self-cleaning diameter.
    pub diameter: Length,

    /// Hydraulic radius of the self-cleaning diameter at the design fill angle.
    pub hydraulic_radius: Length,

    /// Minimum slope at which the bed shear stress reaches the threshold.
    pub minimum_slope: Ratio,
}

impl SelfCleaning {
    /// Constructs a validated criterion.
    ///
    /// # Errors
    ///
    /// Returns an error if the shear stress or the specific weight is not
    /// strictly positive.
    pub fn new(shear_stress: Pressure, specific_weight: SpecificWeight) -> ConstraintResult<Self> {
        let shear_stress = StrictlyPositive::new(shear_stress)?;
        let specific_weight = StrictlyPositive::new(specific_weight)?;
        Ok(Self::from_constrained(shear_stress, specific_weight))
    }

    /// Constructs a criterion from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        shear_stress: Constrained<Pressure, StrictlyPositive>,
        specific_weight: Constrained<SpecificWeight, StrictlyPositive>,
    ) -> Self {
        Self {
            shear_stress: shear_stress.into_inner(),
            specific_weight: specific_weight.into_inner(),
        }
    }

    /// Returns the threshold bed shear stress `τ`.
    #[must_use]
    pub fn shear_stress(&self) -> Pressure {
        self.shear_stress
    }

    /// Returns the specific weight of the conveyed water `γ`.
    #[must_use]
    pub fn specific_weight(&self) -> SpecificWeight {
        self.specific_weight
    }

    /// Self-cleaning diameter at fill angle `θ`.
    ///
    /// ```text
    /// D = ( 4^(13/6) / ( θ·(1 − sin θ/θ)^(7/6)·Ks·√(τ/γ) ) )^(6/13)
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`HydraulicsError::DegenerateFillAngle`] for a degenerate fill
    /// angle and [`HydraulicsError::NonPositiveDiameter`] if the result
    /// overflows or underflows.
    pub fn diameter(
        &self,
        angle: Angle,
        strickler: StricklerCoefficient,
    ) -> Result<Length, HydraulicsError> {
        let factor = shape_factor(angle)?;
        let theta = angle.get::<radian>();
        let head: Length = self.shear_stress / self.specific_weight;

        let numerator = 4_f64.powf(13.0 / 6.0);
        let denominator = theta * factor.powf(7.0 / 6.0) * *strickler * head.get::<meter>().sqrt();

        check_diameter(Length::new::<meter>(
            (numerator / denominator).powf(6.0 / 13.0),
        ))
    }

    /// Minimum slope `i = τ / (γ·Rh)` for a section of hydraulic radius `Rh`.
    ///
    /// # Errors
    ///
    /// Returns [`HydraulicsError::NonPositiveHydraulicRadius`] if the radius is
    /// not strictly positive and finite.
    pub fn minimum_slope(&self, hydraulic_radius: Length) -> Result<Ratio, HydraulicsError> {
        let rh = hydraulic_radius.get::<meter>();
        if !(rh > 0.0 && rh.is_finite()) {
            return Err(HydraulicsError::NonPositiveHydraulicRadius { hydraulic_radius });
        }
        Ok(self.shear_stress / (self.specific_weight * hydraulic_radius))
    }

    /// Self-cleaning diameter, its hydraulic radius and the minimum slope.
    ///
    /// # Errors
    ///
    /// Returns `Err` for a degenerate fill angle.
    pub fn design(
        &self,
        angle: Angle,
        strickler: StricklerCoefficient,
    ) -> Result<SelfCleaningDesign, HydraulicsError> {
        let diameter = self.diameter(angle, strickler)?;
        let hydraulic_radius = hydraulic_radius(diameter, angle)?;
        let minimum_slope = self.minimum_slope(hydraulic_radius)?;

        Ok(SelfCleaningDesign {
            diameter,
            hydraulic_radius,
            minimum_slope,
        })
    }
}

impl Default for SelfCleaning {
    /// A 2 Pa shear stress threshold in water weighing 9800 N/m³.
    fn default() -> Self {
        Self {
            shear_stress: Pressure::new::<pascal>(2.0),
            specific_weight: SpecificWeight::from_newtons_per_cubic_meter(9800.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use uom::si::ratio::ratio;

    use crate::support::{constraint::ConstraintError, hydraulics::fill_angle};

    fn ks(value: f64) -> StricklerCoefficient {
        StricklerCoefficient::new(value).unwrap()
    }

    #[test]
    fn half_full_diameter_matches_closed_form() {
        let criterion = SelfCleaning::default();
        let d = criterion
            .diameter(Angle::new::<radian>(PI), ks(70.0))
            .unwrap();

        let expected = (4_f64.powf(13.0 / 6.0) / (PI * 70.0 * (2.0_f64 / 9800.0).sqrt()))
            .powf(6.0 / 13.0);
        assert_relative_eq!(d.get::<meter>(), expected, max_relative = 1e-12);
    }

    #[test]
    fn minimum_slope_balances_shear_stress() {
        let criterion = SelfCleaning::default();
        let rh = Length::new::<meter>(0.1);

        let i = criterion.minimum_slope(rh).unwrap();
        assert_relative_eq!(i.get::<ratio>(), 2.0 / (9800.0 * 0.1), max_relative = 1e-12);

        // Bed shear stress at that slope equals the threshold.
        let tau: Pressure = criterion.specific_weight() * rh * i;
        assert_relative_eq!(tau.get::<pascal>(), 2.0, max_relative = 1e-12);
    }

    #[test]
    fn minimum_slope_is_positive_across_fills() {
        let criterion = SelfCleaning::new(
            Pressure::new::<pascal>(1.5),
            SpecificWeight::from_newtons_per_cubic_meter(9810.0),
        )
        .unwrap();

        for i in 1..20 {
            let theta = fill_angle(Ratio::new::<ratio>(f64::from(i) / 20.0)).unwrap();
            for strickler in [0.03, 60.0, 90.0] {
                let design = criterion.design(theta, ks(strickler)).unwrap();
                assert!(design.minimum_slope.get::<ratio>() > 0.0);
                assert!(design.minimum_slope.get::<ratio>().is_finite());
                assert!(design.diameter.get::<meter>() > 0.0);
            }
        }
    }

    #[test]
    fn design_is_consistent() {
        let criterion = SelfCleaning::default();
        let theta = fill_angle(Ratio::new::<ratio>(0.7)).unwrap();
        let design = criterion.design(theta, ks(75.0)).unwrap();

        assert_relative_eq!(
            design.hydraulic_radius.get::<meter>(),
            hydraulic_radius(design.diameter, theta).unwrap().get::<meter>()
        );
        assert_relative_eq!(
            design.minimum_slope.get::<ratio>(),
            criterion
                .minimum_slope(design.hydraulic_radius)
                .unwrap()
                .get::<ratio>()
        );
    }

    #[test]
    fn invalid_criterion_is_rejected() {
        let gamma = SpecificWeight::from_newtons_per_cubic_meter(9800.0);
        assert!(SelfCleaning::new(Pressure::new::<pascal>(0.0), gamma).is_err());
        assert!(
            SelfCleaning::new(
                Pressure::new::<pascal>(2.0),
                SpecificWeight::from_newtons_per_cubic_meter(-1.0)
            )
            .is_err()
        );
        assert_eq!(
            SelfCleaning::new(Pressure::new::<pascal>(f64::INFINITY), gamma),
            Err(ConstraintError::Infinite)
        );
    }

    #[test]
    fn underflowing_diameter_is_rejected() {
        let criterion = SelfCleaning::default();
        let d = criterion.diameter(Angle::new::<radian>(PI), ks(f64::MAX));
        assert!(matches!(
            d,
            Err(HydraulicsError::NonPositiveDiameter { .. })
        ));
    }

    #[test]
    fn non_positive_hydraulic_radius_is_rejected() {
        let criterion = SelfCleaning::default();
        assert!(matches!(
            criterion.minimum_slope(Length::new::<meter>(0.0)),
            Err(HydraulicsError::NonPositiveHydraulicRadius { .. })
        ));
    }
}
