//! Error definitions.
//!
//! This module defines the failure conditions of the simulator. It provides:
//! 1. **Decode errors:** `MalformedInstruction`, recoverable per line; the line is skipped.
//! 2. **Input errors:** `InputError`, fatal; the run produces no cycle count.
//! 3. **Configuration errors:** `ConfigError`, raised while loading a JSON config file.
//!
//! The scheduler itself has no failure mode: any list of decoded instructions schedules.

use std::io;

use thiserror::Error;

use crate::isa::Opcode;

/// A single instruction line could not be decoded.
///
/// Raised by [`decode`](crate::isa::decode::decode). The offending line is
/// dropped and decoding continues with the next one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedInstruction {
    /// The line was empty or contained only whitespace and separators.
    #[error("empty instruction line")]
    Empty,

    /// The leading token is not one of `LOAD`, `STORE`, `ADD` or `SUB`.
    #[error("unrecognized mnemonic `{0}`")]
    UnknownMnemonic(String),

    /// The opcode was followed by the wrong number of operands.
    #[error("{opcode} expects {expected} operands, found {found}")]
    OperandCount {
        /// Opcode whose operand shape was violated.
        opcode: Opcode,
        /// Number of operands the opcode takes.
        expected: usize,
        /// Number of operands present on the line.
        found: usize,
    },

    /// An operand position that must name a register held something else.
    #[error("{opcode} operand `{token}` is not a register")]
    ExpectedRegister {
        /// Opcode whose operand shape was violated.
        opcode: Opcode,
        /// The offending token.
        token: String,
    },
}

/// The program input could not be read.
///
/// Every variant is fatal: no cycle count is produced.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input ended before an instruction count was found.
    #[error("missing instruction count")]
    MissingCount,

    /// The first token is not a non-negative integer.
    #[error("failed to read number of instructions from `{0}`")]
    InvalidCount(String),

    /// Fewer instruction lines are available than the declared count.
    #[error("expected {expected} instructions, input ended after {found}")]
    InputTruncated {
        /// Declared instruction count.
        expected: usize,
        /// Lines actually read.
        found: usize,
    },

    /// Underlying reader failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A configuration file could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    /// The file is not valid configuration JSON.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
