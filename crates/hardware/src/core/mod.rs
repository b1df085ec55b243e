//! Core pipeline model.
//!
//! This module contains the five-stage in-order pipeline model: hazard
//! detection, the stage scheduler, and its diagnostic sinks.

/// Pipeline scheduling (hazards, scheduler, sinks).
pub mod pipeline;

pub use self::pipeline::Scheduler;
