//! Instruction Set Definitions.
//!
//! Contains the modelled instruction set and its textual decoder.
//!
//! # Contents
//!
//! * `opcode`: The closed set of operations (`LOAD`, `STORE`, `ADD`, `SUB`).
//! * `instruction`: Decoded instruction records, operands and stage cycles.
//! * `decode`: Line decoder producing instruction records.

/// Assembly line decoder.
pub mod decode;

/// Instruction records, operand tagging and stage cycle numbers.
pub mod instruction;

/// Opcode enumeration and per-opcode timing facts.
pub mod opcode;

pub use decode::decode;
pub use instruction::{Instruction, MemLocation, Operand, Register, Stage, StageCycles};
pub use opcode::Opcode;
