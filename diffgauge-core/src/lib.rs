//! Core types, errors, config, events, and collaborator traits for the
//! diffgauge evaluation engine.
//!
//! This crate carries no pipeline logic. It exists so that the analysis
//! crate and any downstream reporting collaborators share one vocabulary:
//! line ranges, row identity, error enums, the event system, and the
//! configuration surface.

pub mod config;
pub mod errors;
pub mod events;
pub mod telemetry;
pub mod traits;
pub mod types;
