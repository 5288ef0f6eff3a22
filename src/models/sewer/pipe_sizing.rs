//! Gravity sewer pipe sizing.
//!
//! This module provides a [`twine_core::Model`] implementation that sizes a
//! single circular pipe segment against the self-cleaning criterion.
//! The computational core is in the internal `core` module.
//!
//! ```
//! use sewer_models::models::sewer::pipe_sizing::{
//!     DesignCase, DesignConstants, Pipe, PipeSpec, SewerPipeSizing,
//! };
//! use sewer_models::support::geometry::Point;
//! use twine_core::Model;
//! use uom::si::{f64::VolumeRate, length::meter, volume_rate::liter_per_second};
//!
//! let spec = PipeSpec::new(
//!     70.0,
//!     0.6,
//!     VolumeRate::new::<liter_per_second>(20.0),
//!     Point::from_meters(0.0, 0.0, 100.0),
//!     Point::from_meters(50.0, 0.0, 101.0),
//!     DesignConstants::default(),
//! )?;
//!
//! let sized = SewerPipeSizing.call(&Pipe::new(spec))?;
//! assert!(sized.downstream_elevation().get::<meter>() < 100.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod core;

pub use self::core::{
    DesignCase, DesignConstants, InvalidInput, Pipe, PipeSpec, SizedPipe, SizingError,
    SizingResult, elevation_on_slope, run, size,
};

use twine_core::Model;

/// Sizes one sewer pipe segment.
///
/// The adapter delegates to [`run`], which sizes the input with [`size`] and
/// finalizes a copy of the pipe with the governing design values.
#[derive(Debug, Clone, Copy, Default)]
pub struct SewerPipeSizing;

impl Model for SewerPipeSizing {
    type Input = Pipe;
    type Output = SizedPipe;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        run(input.clone())
    }
}
