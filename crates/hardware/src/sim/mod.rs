//! Simulation harness and program loading.
//!
//! Provides the input reader, the simulator that ties decoding to
//! scheduling, and the diagnostic timeline formatter.

/// Count-prefixed program text reader.
pub mod loader;

/// Simulator owning configuration, program and scheduler.
pub mod simulator;

/// Per-stage timeline table formatter.
pub mod timeline;

pub use simulator::{Simulator, SkippedLine};
pub use timeline::Timeline;
