//! Five-stage pipeline hazard scheduler library.
//!
//! This crate models a simplified in-order pipeline (IF, ID, EX, MEM, WB) running
//! `LOAD`/`STORE`/`ADD`/`SUB` programs and computes when each instruction occupies
//! each stage. It provides the following:
//! 1. **ISA:** Opcodes, decoded instruction records, and the assembly line decoder.
//! 2. **Core:** Hazard detection (RAW, WAW, WAR, memory ordering, structural) and the
//!    single-pass stage scheduler with injectable diagnostic sinks.
//! 3. **Simulation:** Program loading, the simulator driver, and the timeline formatter.
//! 4. **Configuration and statistics:** JSON-configurable penalties and a stats sink.

/// Common types and constants (errors, timing constants).
pub mod common;
/// Scheduler configuration (defaults, JSON loading).
pub mod config;
/// Pipeline model (hazards, scheduler, sinks).
pub mod core;
/// Instruction set (opcodes, instructions, decoder).
pub mod isa;
/// Program loader, simulator and timeline output.
pub mod sim;
/// Schedule statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Stage scheduler; see [`Scheduler::schedule`].
pub use crate::core::Scheduler;
/// Top-level driver tying decoding to scheduling.
pub use crate::sim::Simulator;
