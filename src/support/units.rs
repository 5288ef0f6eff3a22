//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., length, discharge,
//! shear stress). This module provides the extensions sewer hydraulics needs
//! that aren't included in [`uom`].
//!
//! ## Specific weight
//!
//! The weight of water per unit volume (γ, N/m³) has no quantity in
//! [`uom::si`]. [`SpecificWeight`] fills that gap and the
//! [`SpecificWeightUnits`] extension trait converts it to and from N/m³:
//!
//! ```
//! use sewer_models::support::units::{SpecificWeight, SpecificWeightUnits};
//! use uom::si::{f64::{Length, Pressure}, length::meter, pressure::pascal};
//!
//! let gamma = SpecificWeight::from_newtons_per_cubic_meter(9800.0);
//!
//! // Hydrostatic pressure at 2 m depth.
//! let p: Pressure = gamma * Length::new::<meter>(2.0);
//! assert_eq!(p.get::<pascal>(), 19_600.0);
//! ```

mod quantities;
mod specific_weight;

pub use quantities::SpecificWeight;
pub use specific_weight::SpecificWeightUnits;
