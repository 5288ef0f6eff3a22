use crate::support::{
    geometry::Point,
    hydraulics::{Discharge, FillCoefficient, StricklerCoefficient},
};
use uom::si::f64::VolumeRate;

use crate::models::sewer::pipe_sizing::core::{DesignConstants, InvalidInput, SizingError};

/// Inputs for sizing one sewer pipe segment.
///
/// Every field is validated by its type, so a `PipeSpec` built from
/// pre-validated values can be written as a struct literal. Use
/// [`PipeSpec::new`] to validate raw values.
///
/// The start point carries the upstream invert elevation and the end point
/// the downstream terrain elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSpec {
    /// Gauckler–Strickler roughness coefficient of the pipe wall.
    pub strickler: StricklerCoefficient,

    /// Design fill coefficient.
    pub fill_coefficient: FillCoefficient,

    /// Design discharge.
    pub discharge: Discharge,

    /// Upstream end, at the pipe invert.
    pub start: Point,

    /// Downstream end, at the terrain surface.
    pub end: Point,

    /// Self-cleaning criterion and minimum excavation.
    pub constants: DesignConstants,
}

impl PipeSpec {
    /// Constructs a validated pipe spec from raw values.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] naming the first value that is out
    /// of range: the Strickler coefficient and discharge must be strictly
    /// positive and the fill coefficient must lie in (0, 1).
    pub fn new(
        strickler: f64,
        fill_coefficient: f64,
        discharge: VolumeRate,
        start: Point,
        end: Point,
        constants: DesignConstants,
    ) -> Result<Self, SizingError> {
        Ok(Self {
            strickler: StricklerCoefficient::new(strickler)
                .map_err(InvalidInput::StricklerCoefficient)?,
            fill_coefficient: FillCoefficient::new(fill_coefficient)
                .map_err(InvalidInput::FillCoefficient)?,
            discharge: Discharge::from_quantity(discharge).map_err(InvalidInput::Discharge)?,
            start,
            end,
            constants,
        })
    }
}
