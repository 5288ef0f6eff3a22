//! Results types for sewer pipe sizing.

use crate::support::hydraulics::FillCoefficient;
use uom::si::f64::{Angle, Length, Ratio, Velocity};

/// Which slope governs the design of a pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignCase {
    /// The terrain is steep enough for self-cleaning flow.
    ///
    /// The pipe follows the terrain at the minimum excavation depth and its
    /// diameter is back-solved from the natural slope.
    NaturalSlope,

    /// The terrain is too flat for self-cleaning flow.
    ///
    /// The pipe is laid at the minimum self-cleaning slope with the
    /// self-cleaning diameter, deepening the downstream invert.
    MinimumSlope,
}

impl DesignCase {
    /// Selects the governing case for the given slopes.
    ///
    /// Equal slopes select [`DesignCase::NaturalSlope`], keeping the terrain
    /// elevation rather than recomputing it.
    #[must_use]
    pub fn select(natural_slope: Ratio, minimum_slope: Ratio) -> Self {
        if natural_slope >= minimum_slope {
            Self::NaturalSlope
        } else {
            Self::MinimumSlope
        }
    }
}

/// Outcome of sizing one pipe segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingResult {
    /// Fill angle derived from the design fill coefficient.
    ///
    /// Both design cases share this angle.
    pub fill_angle: Angle,

    /// Design fill coefficient, unchanged from the input.
    pub fill_coefficient: FillCoefficient,

    /// Self-cleaning diameter at the design fill angle.
    pub self_cleaning_diameter: Length,

    /// Hydraulic radius of the self-cleaning diameter.
    pub hydraulic_radius: Length,

    /// Minimum slope for self-cleaning flow.
    pub minimum_slope: Ratio,

    /// Slope from the upstream invert to the excavated downstream invert.
    pub natural_slope: Ratio,

    /// The larger of the natural and minimum slopes.
    pub governing_slope: Ratio,

    /// Which slope governs the design.
    pub case: DesignCase,

    /// Selected pipe diameter.
    pub diameter: Length,

    /// Invert elevation at the downstream end.
    pub downstream_elevation: Length,

    /// Mean flow velocity at the design fill.
    pub velocity: Velocity,
}
