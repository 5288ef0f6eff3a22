use thiserror::Error;
use uom::si::f64::{Angle, Length, Ratio};

/// Errors raised by the partial-flow relations.
///
/// Each relation checks its preconditions before evaluating transcendental
/// functions. Computed diameters are also checked to be finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum HydraulicsError {
    /// The fill angle does not describe a partly filled section.
    ///
    /// Raised for angles outside `(0, 2π)` and for angles so close to zero
    /// that the shape factor `1 − sin θ/θ` vanishes in floating point.
    #[error("degenerate fill angle: {angle:?}")]
    DegenerateFillAngle {
        /// The offending fill angle.
        angle: Angle,
    },

    /// A diameter was zero, negative, or not finite.
    #[error("diameter must be strictly positive: {diameter:?}")]
    NonPositiveDiameter {
        /// The offending diameter.
        diameter: Length,
    },

    /// A hydraulic radius was zero, negative, or not finite.
    #[error("hydraulic radius must be strictly positive: {hydraulic_radius:?}")]
    NonPositiveHydraulicRadius {
        /// The offending hydraulic radius.
        hydraulic_radius: Length,
    },

    /// A pipe cannot be sized on a flat or adverse slope.
    #[error("slope must be strictly positive: {slope:?}")]
    NonPositiveSlope {
        /// The offending slope.
        slope: Ratio,
    },
}
