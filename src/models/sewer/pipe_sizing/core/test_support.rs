use uom::si::{f64::VolumeRate, length::meter, volume_rate::liter_per_second};

use crate::support::geometry::Point;

use super::{DesignConstants, PipeSpec};

/// Short, steep segment with a very rough wall.
pub(super) fn reference_spec() -> PipeSpec {
    let constants = DesignConstants::default();
    let depth = constants.minimum_excavation().get::<meter>();

    PipeSpec::new(
        0.03,
        0.8,
        VolumeRate::new::<liter_per_second>(2.0),
        Point::from_meters(0.0, 0.0, 7.76),
        Point::from_meters(10.0, 0.0, 4.65 - depth),
        constants,
    )
    .unwrap()
}

/// Concrete pipe at 60% fill carrying 20 L/s between two points.
pub(super) fn segment(start: Point, end: Point) -> PipeSpec {
    PipeSpec::new(
        70.0,
        0.6,
        VolumeRate::new::<liter_per_second>(20.0),
        start,
        end,
        DesignConstants::default(),
    )
    .unwrap()
}

/// 50 m run falling 5 m to the excavated downstream invert.
pub(super) fn steep_spec() -> PipeSpec {
    segment(
        Point::from_meters(0.0, 0.0, 105.0),
        Point::from_meters(40.0, 30.0, 101.0),
    )
}

/// 50 m run with no fall once the downstream end is excavated.
pub(super) fn flat_spec() -> PipeSpec {
    segment(
        Point::from_meters(0.0, 0.0, 100.0),
        Point::from_meters(50.0, 0.0, 101.0),
    )
}
