//! Classroom scenarios for the Solow growth model.
//!
//! Built on [`solow_core`], this crate packages the standard teaching
//! material: canned shock experiments, the golden-rule savings rate, and
//! phase-diagram sampling in a shape ready for plotting.

pub mod diagram;
pub mod experiments;
pub mod golden_rule;
