//! # Sewer Models
//!
//! Domain-specific models and hydraulic tools for designing gravity sewers
//! with [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful
//! on their own (e.g., partial-flow relations for circular sections), but
//! their APIs are not stable. Breaking changes may occur as needed.
//!
//! Model-specific code lives in a model's internal `core` module and only
//! moves to [`support`] once more than one model needs it.

pub mod models;
pub mod support;
