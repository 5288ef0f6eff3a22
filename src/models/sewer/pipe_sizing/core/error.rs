use thiserror::Error;
use uom::si::f64::Ratio;

use crate::support::{
    constraint::ConstraintError, geometry::GeometryError, hydraulics::HydraulicsError,
};

/// Errors that can occur while sizing a sewer pipe.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SizingError {
    /// An input value is outside its valid range.
    #[error("invalid input")]
    InvalidInput(#[from] InvalidInput),

    /// The design fill angle does not describe a partly filled section.
    ///
    /// This happens for fill coefficients so close to zero that the section's
    /// shape factor, and with it the hydraulic radius, vanishes.
    #[error("invalid section geometry")]
    InvalidGeometry(#[source] HydraulicsError),
}

/// The input that made a sizing run fail.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidInput {
    /// The design fill coefficient is not strictly between empty and full.
    #[error("fill coefficient must lie in (0, 1)")]
    FillCoefficient(#[source] ConstraintError),

    /// The design discharge is not strictly positive and finite.
    #[error("discharge must be strictly positive and finite")]
    Discharge(#[source] ConstraintError),

    /// The roughness coefficient is not strictly positive and finite.
    #[error("Gauckler-Strickler coefficient must be strictly positive and finite")]
    StricklerCoefficient(#[source] ConstraintError),

    /// The self-cleaning shear stress is not strictly positive and finite.
    #[error("shear stress must be strictly positive and finite")]
    ShearStress(#[source] ConstraintError),

    /// The specific weight of water is not strictly positive and finite.
    #[error("specific weight must be strictly positive and finite")]
    SpecificWeight(#[source] ConstraintError),

    /// The minimum excavation depth is negative or infinite.
    #[error("minimum excavation must be finite and not negative")]
    MinimumExcavation(#[source] ConstraintError),

    /// Start and end points share the same horizontal position.
    #[error("pipe endpoints are horizontally coincident")]
    CoincidentEndpoints,

    /// An endpoint coordinate or elevation is NaN or infinite.
    #[error("pipe endpoint has a non-finite coordinate")]
    NonFiniteEndpoint,

    /// A diameter was requested for a flat or adverse slope.
    #[error("slope must be strictly positive: {slope:?}")]
    NonPositiveSlope {
        /// The offending slope.
        slope: Ratio,
    },
}

impl From<GeometryError> for SizingError {
    fn from(err: GeometryError) -> Self {
        match err {
            GeometryError::CoincidentPoints => InvalidInput::CoincidentEndpoints.into(),
            GeometryError::NonFinite => InvalidInput::NonFiniteEndpoint.into(),
        }
    }
}

impl From<HydraulicsError> for SizingError {
    fn from(err: HydraulicsError) -> Self {
        match err {
            HydraulicsError::NonPositiveSlope { slope } => {
                InvalidInput::NonPositiveSlope { slope }.into()
            }
            HydraulicsError::DegenerateFillAngle { .. }
            | HydraulicsError::NonPositiveDiameter { .. }
            | HydraulicsError::NonPositiveHydraulicRadius { .. } => Self::InvalidGeometry(err),
        }
    }
}
