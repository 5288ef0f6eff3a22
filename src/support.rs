//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints for validated inputs.
//! - [`geometry`]: Planar distance and slope between surveyed points.
//! - [`hydraulics`]: Partial-flow relations for circular sections.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod geometry;
pub mod hydraulics;
pub mod units;
