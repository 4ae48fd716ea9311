//! Core library components.
//!
//! Validation, payload loading, the two update targets and the apply flow.
//! Nothing in here prints; reporting is left to the CLI layer.

pub mod cloud;
pub mod config;
pub mod constants;
pub mod payload;
pub mod plan;
pub mod report;
pub mod types;
pub mod update;
pub mod validation;
pub mod vault;
