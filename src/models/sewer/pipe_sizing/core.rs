//! Sizing of a single gravity sewer pipe segment.
//!
//! The design compares two slopes for a fixed fill angle:
//!
//! - the natural slope, from the upstream invert to the downstream terrain
//!   lowered by the minimum excavation depth, and
//! - the minimum slope at which the self-cleaning diameter reaches the
//!   threshold bed shear stress.
//!
//! When the terrain is at least as steep as the minimum slope, the pipe
//! follows it and its diameter is back-solved from the natural slope.
//! Otherwise the pipe is laid at the minimum slope with the self-cleaning
//! diameter and the downstream invert is lowered to match.

mod error;
mod input;
mod pipe;
mod results;

#[cfg(test)]
mod test_support;

pub use error::{InvalidInput, SizingError};
pub use input::{DesignConstants, PipeSpec};
pub use pipe::{Pipe, SizedPipe};
pub use results::{DesignCase, SizingResult};

use log::{debug, trace};
use uom::si::{
    f64::{Length, Ratio},
    length::meter,
    ratio::ratio,
    velocity::meter_per_second,
};

use crate::support::{
    geometry::{Point, horizontal_distance, slope_between},
    hydraulics::{diameter_for_slope, mean_velocity},
};

/// Sizes one pipe segment.
///
/// # Errors
///
/// Returns [`SizingError::InvalidInput`] for horizontally coincident or
/// non-finite endpoints and [`SizingError::InvalidGeometry`] when the design
/// fill coefficient is too small to describe a flowing section.
pub fn size(spec: &PipeSpec) -> Result<SizingResult, SizingError> {
    let fill_angle = spec.fill_coefficient.fill_angle();

    let excavated_end = spec
        .end
        .with_elevation(spec.end.elevation - spec.constants.minimum_excavation());
    let natural_slope = slope_between(&spec.start, &excavated_end)?;

    let self_cleaning = spec
        .constants
        .self_cleaning()
        .design(fill_angle, spec.strickler)?;
    let minimum_slope = self_cleaning.minimum_slope;

    trace!(
        "natural slope {:.6}, minimum slope {:.6}, self-cleaning diameter {:.4} m",
        natural_slope.get::<ratio>(),
        minimum_slope.get::<ratio>(),
        self_cleaning.diameter.get::<meter>(),
    );

    let case = DesignCase::select(natural_slope, minimum_slope);
    let (governing_slope, diameter, downstream_elevation) = match case {
        DesignCase::NaturalSlope => (
            natural_slope,
            diameter_for_slope(spec.discharge, fill_angle, spec.strickler, natural_slope)?,
            excavated_end.elevation,
        ),
        DesignCase::MinimumSlope => (
            minimum_slope,
            self_cleaning.diameter,
            elevation_on_slope(&spec.start, &spec.end, minimum_slope),
        ),
    };

    // TODO: Round `diameter` up to a catalog size once commercial pipe series are modeled.
    let velocity = mean_velocity(spec.discharge, diameter, fill_angle)?;

    debug!(
        "{case:?} governs: diameter {:.4} m, downstream invert {:.3} m, velocity {:.3} m/s",
        diameter.get::<meter>(),
        downstream_elevation.get::<meter>(),
        velocity.get::<meter_per_second>(),
    );

    Ok(SizingResult {
        fill_angle,
        fill_coefficient: spec.fill_coefficient,
        self_cleaning_diameter: self_cleaning.diameter,
        hydraulic_radius: self_cleaning.hydraulic_radius,
        minimum_slope,
        natural_slope,
        governing_slope,
        case,
        diameter,
        downstream_elevation,
        velocity,
    })
}

/// Sizes a pipe and finalizes it with the design values.
///
/// # Errors
///
/// See [`size`].
pub fn run(pipe: Pipe) -> Result<SizedPipe, SizingError> {
    let result = size(pipe.spec())?;
    Ok(pipe.build_pipe(
        result.downstream_elevation,
        result.diameter,
        result.fill_coefficient,
        result.velocity,
    ))
}

/// Invert elevation at `end` for a pipe leaving `start` on a given slope.
#[must_use]
pub fn elevation_on_slope(start: &Point, end: &Point, slope: Ratio) -> Length {
    start.elevation - slope * horizontal_distance(start, end)
}
