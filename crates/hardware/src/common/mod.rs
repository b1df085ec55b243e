//! Common types shared across the simulator.
//!
//! This module provides the pieces every other module depends on. It includes:
//! 1. **Error Handling:** Decode, input and configuration error types.
//! 2. **Constants:** Fixed pipeline timing constants.

/// Fixed pipeline timing constants.
pub mod constants;

/// Error types for decoding, input reading and configuration loading.
pub mod error;

pub use error::{ConfigError, InputError, MalformedInstruction};
