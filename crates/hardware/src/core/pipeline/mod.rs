//! Instruction pipeline scheduling.
//!
//! This module computes when each instruction occupies each of the five
//! pipeline stages. It includes the following components:
//! 1. **Hazards:** Forwarding model, data hazard checks and fixed penalties.
//! 2. **Scheduler:** The single forward pass that assigns stage cycles.
//! 3. **Sinks:** Injectable receivers for hazard and schedule diagnostics.

/// Hazard detection and the producer forwarding model.
pub mod hazards;

/// Single-pass in-order stage scheduler.
pub mod scheduler;

/// Diagnostic sinks receiving scheduler events.
pub mod sink;

pub use hazards::{Hazard, HazardKind};
pub use scheduler::{Scheduler, schedule};
pub use sink::{NullSink, ScheduleEvent, ScheduleSink, TraceSink};
