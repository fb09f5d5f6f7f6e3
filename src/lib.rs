//! Procedural Tanks - editor-time tank content switching
//!
//! A container (tank) with an externally controlled volume holds a set of
//! resources derived from a selected content type: a named bundle of
//! per-volume and per-mass resource ratios loaded from configuration. This
//! crate recomputes capacities and fill levels whenever the volume or the
//! selected type changes, preserving user-set fill fractions where the
//! resource set itself is unchanged.

pub mod catalog;
pub mod core;
pub mod display;
pub mod engine;
pub mod part;
