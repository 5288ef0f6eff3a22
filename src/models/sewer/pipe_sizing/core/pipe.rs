//! Pipe entity before and after sizing.

use crate::support::{geometry::Point, hydraulics::FillCoefficient};
use uom::si::f64::{Length, Velocity};

use super::PipeSpec;

/// A pipe segment awaiting sizing.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    spec: PipeSpec,
}

impl Pipe {
    /// Creates a pipe from its design inputs.
    #[must_use]
    pub fn new(spec: PipeSpec) -> Self {
        Self { spec }
    }

    /// Returns the design inputs.
    #[must_use]
    pub fn spec(&self) -> &PipeSpec {
        &self.spec
    }

    /// Consumes the pipe and attaches its design values.
    #[must_use]
    pub fn build_pipe(
        self,
        downstream_elevation: Length,
        diameter: Length,
        fill_coefficient: FillCoefficient,
        velocity: Velocity,
    ) -> SizedPipe {
        SizedPipe {
            spec: self.spec,
            downstream_elevation,
            diameter,
            fill_coefficient,
            velocity,
        }
    }
}

impl From<PipeSpec> for Pipe {
    fn from(spec: PipeSpec) -> Self {
        Self::new(spec)
    }
}

/// A pipe segment with its final design values.
#[derive(Debug, Clone, PartialEq)]
pub struct SizedPipe {
    spec: PipeSpec,
    downstream_elevation: Length,
    diameter: Length,
    fill_coefficient: FillCoefficient,
    velocity: Velocity,
}

impl SizedPipe {
    /// Returns the design inputs.
    #[must_use]
    pub fn spec(&self) -> &PipeSpec {
        &self.spec
    }

    /// Returns the invert elevation at the downstream end.
    #[must_use]
    pub fn downstream_elevation(&self) -> Length {
        self.downstream_elevation
    }

    /// Returns the pipe diameter.
    #[must_use]
    pub fn diameter(&self) -> Length {
        self.diameter
    }

    /// Returns the design fill coefficient.
    #[must_use]
    pub fn fill_coefficient(&self) -> FillCoefficient {
        self.fill_coefficient
    }

    /// Returns the mean flow velocity.
    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Returns the downstream end at the designed invert elevation.
    #[must_use]
    pub fn downstream_invert(&self) -> Point {
        self.spec.end.with_elevation(self.downstream_elevation)
    }
}
