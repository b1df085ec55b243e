//! Configuration system for the pipeline scheduler.
//!
//! This module defines the configuration structures used to parameterize
//! a run. It provides:
//! 1. **Defaults:** Baseline timing penalties for the hazard model.
//! 2. **Structures:** General (diagnostics) and timing sections.
//! 3. **Loading:** JSON parsing from strings or files.
//!
//! Every field has a default, so `{}` is a complete configuration and the CLI
//! runs with `Config::default()` when no file is given.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the scheduler.
///
/// The two fixed penalties are approximate timing choices rather than
/// physically derived latencies, which is why they are configurable.
mod defaults {
    /// Extra cycles added when two adjacent instructions both use the memory stage.
    ///
    /// The memory unit is single-ported and stays busy for one cycle after an
    /// access, so back-to-back accesses are at least two cycles apart.
    pub const MEMORY_BUSY_CYCLES: u64 = 1;

    /// Extra cycles added when an `ADD`/`SUB` reads the result of the
    /// immediately preceding `ADD`/`SUB`.
    pub const DEPENDENT_ALU_PENALTY: u64 = 2;

    /// Whether memory operations on the same location are kept in order.
    pub const MEMORY_ORDER_CHECK: bool = true;
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Diagnostics settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Hazard penalty settings.
    #[serde(default)]
    pub timing: TimingConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid configuration.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Narrate hazards and per-instruction stage cycles through `tracing`.
    #[serde(default)]
    pub trace_schedule: bool,
}

/// Timing penalties applied by the hazard engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimingConfig {
    /// Structural penalty for adjacent memory operations, in cycles.
    #[serde(default = "TimingConfig::default_memory_busy")]
    pub memory_busy_cycles: u64,

    /// Penalty for back-to-back dependent arithmetic, in cycles.
    #[serde(default = "TimingConfig::default_dependent_alu")]
    pub dependent_alu_penalty: u64,

    /// Order memory operations that touch the same location.
    #[serde(default = "TimingConfig::default_memory_order")]
    pub memory_order_check: bool,
}

impl TimingConfig {
    /// Returns the default memory busy period.
    const fn default_memory_busy() -> u64 {
        defaults::MEMORY_BUSY_CYCLES
    }

    /// Returns the default dependent-ALU penalty.
    const fn default_dependent_alu() -> u64 {
        defaults::DEPENDENT_ALU_PENALTY
    }

    /// Returns the default memory ordering switch.
    const fn default_memory_order() -> bool {
        defaults::MEMORY_ORDER_CHECK
    }
}

impl Default for TimingConfig {
    /// Creates the default timing model: one busy cycle for the memory unit,
    /// two cycles for dependent arithmetic, same-location ordering on.
    fn default() -> Self {
        Self {
            memory_busy_cycles: defaults::MEMORY_BUSY_CYCLES,
            dependent_alu_penalty: defaults::DEPENDENT_ALU_PENALTY,
            memory_order_check: defaults::MEMORY_ORDER_CHECK,
        }
    }
}
