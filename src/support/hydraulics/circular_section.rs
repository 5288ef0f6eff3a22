use std::{f64::consts::TAU, ops::Deref};

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval, UnitIntervalOpen};
use uom::si::{
    angle::radian,
    f64::{Angle, Area, Length, Ratio, Velocity},
    length::meter,
    ratio::ratio,
};

use super::{Discharge, HydraulicsError};

/// Design fill coefficient of a partly full circular pipe.
///
/// The fill coefficient is the fraction of the pipe cross-section occupied
/// by flow. Design values lie strictly between an empty pipe and a pipe
/// flowing full.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FillCoefficient(Constrained<Ratio, UnitIntervalOpen>);

impl FillCoefficient {
    /// Create a [`FillCoefficient`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the open interval (0, 1).
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`FillCoefficient`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the open interval (0, 1).
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitIntervalOpen::new(quantity)?))
    }

    /// Returns the fill angle corresponding to this fill coefficient.
    #[must_use]
    pub fn fill_angle(&self) -> Angle {
        angle_from_fill(self.get::<ratio>())
    }
}

impl Deref for FillCoefficient {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Fill angle `θ = 2·acos(1 − 2G)` for a fill coefficient `G ∈ [0, 1]`.
///
/// # Errors
///
/// Returns `Err` if the fill coefficient lies outside `[0, 1]`.
pub fn fill_angle(fill: Ratio) -> ConstraintResult<Angle> {
    let fill = UnitInterval::new(fill)?;
    Ok(angle_from_fill(fill.into_inner().get::<ratio>()))
}

/// Fill coefficient `G = (1 − cos(θ/2))/2` for a fill angle `θ ∈ [0, 2π]`.
///
/// This is the inverse of [`fill_angle`].
///
/// # Errors
///
/// Returns `Err` if the angle lies outside `[0, 2π]`.
pub fn fill_coefficient(angle: Angle) -> ConstraintResult<Ratio> {
    let theta = angle.get::<radian>();
    UnitInterval::new(theta / TAU)?;
    Ok(Ratio::new::<ratio>(0.5 * (1.0 - (theta / 2.0).cos())))
}

/// Shape factor `1 − sin θ/θ` of a partly filled circular section.
///
/// This is the ratio between the section's hydraulic radius and that of the
/// full pipe (`D/4`).
///
/// # Errors
///
/// Returns [`HydraulicsError::DegenerateFillAngle`] if `θ ∉ (0, 2π)` or the
/// factor is not strictly positive.
pub fn shape_factor(angle: Angle) -> Result<f64, HydraulicsError> {
    let theta = angle.get::<radian>();
    if !(theta > 0.0 && theta < TAU) {
        return Err(HydraulicsError::DegenerateFillAngle { angle });
    }

    let factor = 1.0 - theta.sin() / theta;
    if factor > 0.0 {
        Ok(factor)
    } else {
        Err(HydraulicsError::DegenerateFillAngle { angle })
    }
}

/// Hydraulic radius `Rh = D/4·(1 − sin θ/θ)`.
///
/// # Errors
///
/// Returns `Err` for a non-positive diameter or a degenerate fill angle.
pub fn hydraulic_radius(diameter: Length, angle: Angle) -> Result<Length, HydraulicsError> {
    let diameter = check_diameter(diameter)?;
    let factor = shape_factor(angle)?;
    Ok(diameter * (factor / 4.0))
}

/// Flow area `A = D²·(θ − sin θ)/8`.
///
/// # Errors
///
/// Returns `Err` for a non-positive diameter or a degenerate fill angle.
pub fn flow_area(diameter: Length, angle: Angle) -> Result<Area, HydraulicsError> {
    let diameter = check_diameter(diameter)?;
    shape_factor(angle)?;

    let theta = angle.get::<radian>();
    Ok(diameter * diameter * ((theta - theta.sin()) / 8.0))
}

/// Mean flow velocity `v = 8·Q / (D²·(θ − sin θ))`, i.e. `Q / A`.
///
/// # Errors
///
/// Returns `Err` for a non-positive diameter or a degenerate fill angle.
pub fn mean_velocity(
    discharge: Discharge,
    diameter: Length,
    angle: Angle,
) -> Result<Velocity, HydraulicsError> {
    let area = flow_area(diameter, angle)?;
    Ok(*discharge / area)
}

fn angle_from_fill(fill: f64) -> Angle {
    Angle::new::<radian>(2.0 * (1.0 - 2.0 * fill).acos())
}

pub(super) fn check_diameter(diameter: Length) -> Result<Length, HydraulicsError> {
    let d = diameter.get::<meter>();
    if d > 0.0 && d.is_finite() {
        Ok(diameter)
    } else {
        Err(HydraulicsError::NonPositiveDiameter { diameter })
    }
}
