//! Opcode definitions.
//!
//! The modelled instruction set is closed: two memory operations and two
//! arithmetic operations.

use std::fmt;
use std::str::FromStr;

use crate::common::constants::{LOAD_WB_OFFSET, WB_OFFSET};
use crate::common::error::MalformedInstruction;

/// Operation performed by an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `LOAD Rd, MEM`: read a memory location into a register.
    Load,
    /// `STORE Rs, MEM`: write a register to a memory location.
    Store,
    /// `ADD Rd, Rs1, Rs2|imm`.
    Add,
    /// `SUB Rd, Rs1, Rs2|imm`.
    Sub,
}

impl Opcode {
    /// All opcodes, in mnemonic table order.
    pub const ALL: [Self; 4] = [Self::Load, Self::Store, Self::Add, Self::Sub];

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Load => "LOAD",
            Self::Store => "STORE",
            Self::Add => "ADD",
            Self::Sub => "SUB",
        }
    }

    /// Returns `true` for `LOAD` and `STORE`, the users of the memory stage.
    pub const fn is_memory(self) -> bool {
        matches!(self, Self::Load | Self::Store)
    }

    /// Returns `true` for `ADD` and `SUB`.
    pub const fn is_alu(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Number of operands following the mnemonic.
    pub const fn operand_count(self) -> usize {
        match self {
            Self::Load | Self::Store => 2,
            Self::Add | Self::Sub => 3,
        }
    }

    /// Cycles between the MEM and WB stages.
    ///
    /// `LOAD` takes one extra cycle: a loaded value is not usable until one
    /// cycle after the memory access completes.
    pub const fn writeback_offset(self) -> u64 {
        match self {
            Self::Load => LOAD_WB_OFFSET,
            Self::Store | Self::Add | Self::Sub => WB_OFFSET,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for Opcode {
    type Err = MalformedInstruction;

    /// Parses a mnemonic, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(s))
            .ok_or_else(|| MalformedInstruction::UnknownMnemonic(s.to_string()))
    }
}
