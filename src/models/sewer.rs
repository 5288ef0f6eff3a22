//! Gravity sewer models.
//!
//! This module contains models for sizing the components of gravity sewer
//! systems, starting with single circular pipe segments.

pub mod pipe_sizing;
