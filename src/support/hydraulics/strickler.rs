use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::{
    angle::radian,
    f64::{Angle, Length, Ratio, VolumeRate},
    length::meter,
    ratio::ratio,
    volume_rate::liter_per_second,
};

use super::{HydraulicsError, circular_section::check_diameter, shape_factor};

/// Power of ten that turns the liters-per-second form of [`diameter_for_slope`] into meters.
const LITERS_TO_METERS_EXPONENT: f64 = -9.0 / 8.0;

/// Gauckler–Strickler roughness coefficient `Ks`, in m^(1/3)/s.
///
/// Higher values describe smoother pipes. The value must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct StricklerCoefficient(Constrained<f64, StrictlyPositive>);

impl StricklerCoefficient {
    /// Create a [`StricklerCoefficient`] from a value in m^(1/3)/s.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(value)?))
    }
}

impl Deref for StricklerCoefficient {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Design discharge carried by a pipe.
///
/// The value must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Discharge(Constrained<VolumeRate, StrictlyPositive>);

impl Discharge {
    /// Create a [`Discharge`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::volume_rate::Unit + uom::Conversion<f64, T = f64>,
    {
        Self::from_quantity(VolumeRate::new::<U>(value))
    }

    /// Create a [`Discharge`] from a value in liters per second.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn from_liters_per_second(value: f64) -> ConstraintResult<Self> {
        Self::new::<liter_per_second>(value)
    }

    /// Create a [`Discharge`] from a volume-rate quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: VolumeRate) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }
}

impl Deref for Discharge {
    type Target = VolumeRate;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Diameter that carries `discharge` at fill angle `θ` on slope `i`.
///
/// ```text
/// D(i) = [ (Q·θ / (Ks·√i))^(3/8) / (1 − sin θ/θ)^(5/8) ] · 10^(−9/8)
/// ```
///
/// The discharge enters the relation in liters per second; the trailing
/// `10^(−9/8)` factor returns the diameter in meters.
///
/// # Errors
///
/// Returns [`HydraulicsError::NonPositiveSlope`] if the slope is not strictly
/// positive and finite, [`HydraulicsError::DegenerateFillAngle`] for a
/// degenerate fill angle, and [`HydraulicsError::NonPositiveDiameter`] if the
/// result overflows or underflows.
pub fn diameter_for_slope(
    discharge: Discharge,
    angle: Angle,
    strickler: StricklerCoefficient,
    slope: Ratio,
) -> Result<Length, HydraulicsError> {
    let i = slope.get::<ratio>();
    if !(i > 0.0 && i.is_finite()) {
        return Err(HydraulicsError::NonPositiveSlope { slope });
    }

    let factor = shape_factor(angle)?;
    let theta = angle.get::<radian>();
    let q = discharge.get::<liter_per_second>();

    let numerator = (q * theta / (*strickler * i.sqrt())).powf(3.0 / 8.0);
    let denominator = factor.powf(5.0 / 8.0);

    check_diameter(Length::new::<meter>(
        numerator / denominator * 10_f64.powf(LITERS_TO_METERS_EXPONENT),
    ))
}
