//! Planar geometry between surveyed points.
//!
//! Sewer endpoints are located by horizontal coordinates plus an elevation.
//! Pipe lengths and slopes are measured on the horizontal projection, so
//! elevation never contributes to a distance.
//!
//! ```
//! use sewer_models::support::geometry::{Point, horizontal_distance, slope_between};
//! use uom::si::{length::meter, ratio::ratio};
//!
//! let manhole_a = Point::from_meters(0.0, 0.0, 102.0);
//! let manhole_b = Point::from_meters(30.0, 40.0, 101.0);
//!
//! assert_eq!(horizontal_distance(&manhole_a, &manhole_b).get::<meter>(), 50.0);
//! assert_eq!(slope_between(&manhole_a, &manhole_b).unwrap().get::<ratio>(), 0.02);
//! ```

use std::cmp::Ordering;

use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        f64::{Length, Ratio},
        length::meter,
    },
};

/// A surveyed position: horizontal coordinates and an elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Easting.
    pub x: Length,

    /// Northing.
    pub y: Length,

    /// Elevation above the project datum.
    pub elevation: Length,
}

impl Point {
    /// Creates a point from its coordinates and elevation.
    #[must_use]
    pub fn new(x: Length, y: Length, elevation: Length) -> Self {
        Self { x, y, elevation }
    }

    /// Creates a point from coordinates and elevation given in meters.
    #[must_use]
    pub fn from_meters(x: f64, y: f64, elevation: f64) -> Self {
        Self::new(
            Length::new::<meter>(x),
            Length::new::<meter>(y),
            Length::new::<meter>(elevation),
        )
    }

    /// Returns the same horizontal position at a different elevation.
    #[must_use]
    pub fn with_elevation(self, elevation: Length) -> Self {
        Self { elevation, ..self }
    }
}

/// Errors from geometric relations between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The two points share the same horizontal position, so no slope exists.
    #[error("points are horizontally coincident")]
    CoincidentPoints,

    /// A coordinate or elevation is NaN or infinite.
    #[error("point has a non-finite coordinate")]
    NonFinite,
}

/// Returns the length of the horizontal projection between two points.
///
/// Elevations are ignored.
#[must_use]
pub fn horizontal_distance(from: &Point, to: &Point) -> Length {
    let dx = (to.x - from.x).get::<meter>();
    let dy = (to.y - from.y).get::<meter>();
    Length::new::<meter>(dx.hypot(dy))
}

/// Returns the slope from `from` down to `to`.
///
/// The slope is the elevation drop divided by the horizontal distance, so
/// it is positive when `to` lies below `from`.
///
/// # Errors
///
/// Returns [`GeometryError::CoincidentPoints`] when the horizontal distance is
/// zero and [`GeometryError::NonFinite`] when any coordinate is not finite.
pub fn slope_between(from: &Point, to: &Point) -> Result<Ratio, GeometryError> {
    let distance = checked_distance(from, to)?;
    Ok((from.elevation - to.elevation) / distance)
}

/// Returns the horizontal distance, rejecting degenerate point pairs.
///
/// # Errors
///
/// See [`slope_between`].
pub fn checked_distance(from: &Point, to: &Point) -> Result<Length, GeometryError> {
    let finite = [from, to]
        .iter()
        .all(|p| p.x.is_finite() && p.y.is_finite() && p.elevation.is_finite());
    if !finite {
        return Err(GeometryError::NonFinite);
    }

    let distance = horizontal_distance(from, to);
    match distance.partial_cmp(&Length::ZERO) {
        Some(Ordering::Greater) => Ok(distance),
        _ => Err(GeometryError::CoincidentPoints),
    }
}
