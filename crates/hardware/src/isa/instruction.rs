//! Decoded instruction records.
//!
//! Provides the structured form of one program statement:
//! 1. **Operands:** Registers, immediates and opaque memory locations.
//! 2. **Instruction:** Opcode plus operands, immutable once decoded.
//! 3. **Stage cycles:** The five cycle numbers written by the scheduler.

use std::fmt;

use crate::common::constants::{REGISTER_PREFIX, STAGE_SPACING};
use crate::isa::Opcode;

/// A named architectural register such as `R3`.
///
/// Names are normalized to upper case so `r3` and `R3` compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Register(String);

impl Register {
    /// Classifies `token` as a register if its first character is the
    /// register prefix.
    ///
    /// # Returns
    ///
    /// `None` when the token does not name a register.
    pub fn parse(token: &str) -> Option<Self> {
        let first = token.chars().next()?;
        if first.eq_ignore_ascii_case(&REGISTER_PREFIX) {
            Some(Self(token.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Register name as written in assembly.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque memory location token (label or address).
///
/// Only compared for equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemLocation(String);

impl MemLocation {
    /// Wraps a location token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Location as written in assembly.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A source operand.
///
/// Immediates never carry a producer dependency; their text is kept only
/// for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    /// A register read.
    Register(Register),
    /// A literal value.
    Immediate(String),
}

impl Operand {
    /// Tags `token` as a register or an immediate.
    pub fn classify(token: &str) -> Self {
        Register::parse(token).map_or_else(|| Self::Immediate(token.to_string()), Self::Register)
    }

    /// The register read by this operand, if any.
    pub const fn as_register(&self) -> Option<&Register> {
        match self {
            Self::Register(reg) => Some(reg),
            Self::Immediate(_) => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register(reg) => fmt::Display::fmt(reg, f),
            Self::Immediate(text) => f.write_str(text),
        }
    }
}

/// The five pipeline stages, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Instruction fetch.
    If,
    /// Instruction decode and register read.
    Id,
    /// Execute.
    Ex,
    /// Memory access.
    Mem,
    /// Register write-back.
    Wb,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Self; 5] = [Self::If, Self::Id, Self::Ex, Self::Mem, Self::Wb];

    /// Short stage name (`IF`, `ID`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::If => "IF",
            Self::Id => "ID",
            Self::Ex => "EX",
            Self::Mem => "MEM",
            Self::Wb => "WB",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cycle numbers at which one instruction occupies each stage.
///
/// Always satisfies `fetch < decode < execute < memory < writeback`, with
/// `writeback - memory` equal to the opcode's write-back offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageCycles {
    /// IF cycle.
    pub fetch: u64,
    /// ID cycle.
    pub decode: u64,
    /// EX cycle.
    pub execute: u64,
    /// MEM cycle.
    pub memory: u64,
    /// WB cycle.
    pub writeback: u64,
}

impl StageCycles {
    /// Derives every stage from the ID cycle with unit spacing.
    ///
    /// `decode` must be at least 2 so that IF lands on cycle 1 or later.
    /// Later stages saturate at `u64::MAX`.
    pub const fn from_decode(decode: u64, opcode: Opcode) -> Self {
        let memory = decode.saturating_add(2 * STAGE_SPACING);
        Self {
            fetch: decode.saturating_sub(STAGE_SPACING),
            decode,
            execute: decode.saturating_add(STAGE_SPACING),
            memory,
            writeback: memory.saturating_add(opcode.writeback_offset()),
        }
    }

    /// Cycle of a single stage.
    pub const fn cycle(&self, stage: Stage) -> u64 {
        match stage {
            Stage::If => self.fetch,
            Stage::Id => self.decode,
            Stage::Ex => self.execute,
            Stage::Mem => self.memory,
            Stage::Wb => self.writeback,
        }
    }
}

/// One decoded program statement.
///
/// Operand fields are fixed at construction. Only the schedule (stage
/// cycles and stall count) is written afterwards, by the scheduler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    opcode: Opcode,
    destination: Option<Register>,
    source1: Option<Operand>,
    source2: Option<Operand>,
    memory_location: Option<MemLocation>,
    timing: Option<StageCycles>,
    stall_cycles: u64,
}

impl Instruction {
    const fn new(
        opcode: Opcode,
        destination: Option<Register>,
        source1: Option<Operand>,
        source2: Option<Operand>,
        memory_location: Option<MemLocation>,
    ) -> Self {
        Self {
            opcode,
            destination,
            source1,
            source2,
            memory_location,
            timing: None,
            stall_cycles: 0,
        }
    }

    /// `LOAD rd, location`.
    pub const fn load(rd: Register, location: MemLocation) -> Self {
        Self::new(Opcode::Load, Some(rd), None, None, Some(location))
    }

    /// `STORE rs, location`.
    pub const fn store(rs: Register, location: MemLocation) -> Self {
        Self::new(
            Opcode::Store,
            None,
            Some(Operand::Register(rs)),
            None,
            Some(location),
        )
    }

    /// `ADD rd, a, b`.
    pub const fn add(rd: Register, a: Operand, b: Operand) -> Self {
        Self::new(Opcode::Add, Some(rd), Some(a), Some(b), None)
    }

    /// `SUB rd, a, b`.
    pub const fn sub(rd: Register, a: Operand, b: Operand) -> Self {
        Self::new(Opcode::Sub, Some(rd), Some(a), Some(b), None)
    }

    /// Operation performed.
    pub const fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Register written, absent for `STORE`.
    pub const fn destination(&self) -> Option<&Register> {
        self.destination.as_ref()
    }

    /// First source operand (the stored register for `STORE`).
    pub const fn source1(&self) -> Option<&Operand> {
        self.source1.as_ref()
    }

    /// Second source operand, `ADD`/`SUB` only.
    pub const fn source2(&self) -> Option<&Operand> {
        self.source2.as_ref()
    }

    /// Memory location, `LOAD`/`STORE` only.
    pub const fn memory_location(&self) -> Option<&MemLocation> {
        self.memory_location.as_ref()
    }

    /// Registers read by this instruction, in operand order.
    pub fn source_registers(&self) -> impl Iterator<Item = &Register> {
        [self.source1.as_ref(), self.source2.as_ref()]
            .into_iter()
            .flatten()
            .filter_map(Operand::as_register)
    }

    /// Returns `true` if `reg` is one of the registers this instruction reads.
    pub fn reads(&self, reg: &Register) -> bool {
        self.source_registers().any(|src| src == reg)
    }

    /// Stage cycles, or `None` before the instruction has been scheduled.
    pub const fn timing(&self) -> Option<&StageCycles> {
        self.timing.as_ref()
    }

    /// Returns `true` if the scheduler delayed ID past its baseline.
    pub const fn is_stalled(&self) -> bool {
        self.stall_cycles > 0
    }

    /// Cycles by which ID was delayed past its baseline.
    pub const fn stall_cycles(&self) -> u64 {
        self.stall_cycles
    }

    /// Records the schedule computed for this instruction.
    pub(crate) const fn set_schedule(&mut self, timing: StageCycles, stall_cycles: u64) {
        self.timing = Some(timing);
        self.stall_cycles = stall_cycles;
    }
}

impl fmt::Display for Instruction {
    /// Renders the instruction back to assembly (`ADD R3, R1, 5`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode)?;
        let mut sep = " ";
        if let Some(rd) = &self.destination {
            write!(f, "{sep}{rd}")?;
            sep = ", ";
        }
        for src in [&self.source1, &self.source2].into_iter().flatten() {
            write!(f, "{sep}{src}")?;
            sep = ", ";
        }
        if let Some(loc) = &self.memory_location {
            write!(f, "{sep}{loc}")?;
        }
        Ok(())
    }
}
