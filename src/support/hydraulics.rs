//! Partial-flow hydraulics for circular gravity pipes.
//!
//! A circular pipe running partly full is described by its fill coefficient
//! `G` (fraction of the section occupied by flow) or, equivalently, by the
//! fill angle `θ` subtended by the free surface at the pipe axis. Every
//! section property follows from `θ` and the diameter `D`:
//!
//! - Flow area: `A = D²·(θ − sin θ)/8`
//! - Hydraulic radius: `Rh = D/4·(1 − sin θ/θ)`
//!
//! Combined with the Gauckler–Strickler uniform-flow law these give the sizing
//! relations used for sewer design:
//!
//! - [`diameter_for_slope`]: diameter that carries a discharge at a given slope
//! - [`SelfCleaning`]: diameter and minimum slope at which bed shear stress
//!   reaches a self-cleaning threshold
//!
//! # Example
//!
//! ```
//! use sewer_models::support::hydraulics::{
//!     Discharge, FillCoefficient, StricklerCoefficient, diameter_for_slope, mean_velocity,
//! };
//! use uom::si::{f64::Ratio, length::meter, ratio::ratio, velocity::meter_per_second};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fill = FillCoefficient::new(0.7)?;
//! let ks = StricklerCoefficient::new(70.0)?;
//! let q = Discharge::from_liters_per_second(25.0)?;
//!
//! let theta = fill.fill_angle();
//! let d = diameter_for_slope(q, theta, ks, Ratio::new::<ratio>(0.005))?;
//! let v = mean_velocity(q, d, theta)?;
//!
//! assert!(d.get::<meter>() > 0.0);
//! assert!(v.get::<meter_per_second>() > 0.0);
//! # Ok(())
//! # }
//! ```

mod circular_section;
mod error;
mod self_cleaning;
mod strickler;

pub use circular_section::{
    FillCoefficient, fill_angle, fill_coefficient, flow_area, hydraulic_radius, mean_velocity,
    shape_factor,
};
pub use error::HydraulicsError;
pub use self_cleaning::{SelfCleaning, SelfCleaningDesign};
pub use strickler::{Discharge, StricklerCoefficient, diameter_for_slope};
