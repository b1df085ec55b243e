//! Data and Structural Hazard Detection.
//!
//! This module decides how early an instruction may enter ID given the
//! instructions issued before it. It provides:
//! 1. **Forwarding model:** The cycle at which a producer's result becomes usable.
//! 2. **Data hazards:** RAW, WAW and WAR checks against every earlier instruction.
//! 3. **Memory ordering:** Same-location ordering between memory operations.
//! 4. **Fixed penalties:** Structural memory-unit and dependent-ALU adjacency penalties.
//!
//! Each check yields a [`Hazard`] carrying the earliest ID cycle it permits;
//! the scheduler takes the maximum over all of them.

use std::fmt;

use crate::common::constants::STAGE_SPACING;
use crate::config::TimingConfig;
use crate::isa::{Instruction, Opcode};

/// Category of a detected hazard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HazardKind {
    /// Read-after-write: the consumer reads a register the producer writes.
    Raw,
    /// Write-after-write: both instructions write the same register.
    Waw,
    /// Write-after-read: the consumer overwrites a register the producer reads.
    War,
    /// Both instructions access the same memory location.
    MemoryOrder,
    /// Adjacent memory operations contend for the single memory port.
    Structural,
    /// Adjacent dependent `ADD`/`SUB` pay extra forwarding latency.
    DependentAlu,
}

impl HazardKind {
    /// All hazard kinds, in reporting order.
    pub const ALL: [Self; 6] = [
        Self::Raw,
        Self::Waw,
        Self::War,
        Self::MemoryOrder,
        Self::Structural,
        Self::DependentAlu,
    ];

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Raw => "RAW",
            Self::Waw => "WAW",
            Self::War => "WAR",
            Self::MemoryOrder => "memory-order",
            Self::Structural => "structural",
            Self::DependentAlu => "dependent-ALU",
        }
    }
}

impl fmt::Display for HazardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A constraint one earlier instruction places on the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hazard {
    /// What kind of conflict was found.
    pub kind: HazardKind,
    /// Program index of the earlier instruction involved.
    pub producer: usize,
    /// Earliest ID cycle the current instruction may use because of this hazard.
    pub earliest_decode: u64,
}

/// Cycle at which the value written by `producer` can be forwarded.
///
/// A loaded value is usable once write-back completes; an arithmetic result
/// is forwarded from the EX/MEM boundary, so it is usable at MEM.
///
/// # Returns
///
/// `None` if the producer writes no register (`STORE`) or has not been scheduled.
pub fn data_available_cycle(producer: &Instruction) -> Option<u64> {
    let timing = producer.timing()?;
    match producer.opcode() {
        Opcode::Load => Some(timing.writeback),
        Opcode::Add | Opcode::Sub => Some(timing.memory),
        Opcode::Store => None,
    }
}

/// Smallest ID cycle whose resulting WB is strictly after `after_wb`.
const fn decode_for_writeback_after(opcode: Opcode, after_wb: u64) -> u64 {
    let wb_distance = 2 * STAGE_SPACING + opcode.writeback_offset();
    after_wb.saturating_add(1).saturating_sub(wb_distance)
}

/// Checks `current` against every already-scheduled instruction in `earlier`.
///
/// Unscheduled instructions in `earlier` are ignored. Hazards are returned in
/// program order of the producer; a single producer may yield several.
pub fn detect(
    earlier: &[Instruction],
    current: &Instruction,
    config: &TimingConfig,
) -> Vec<Hazard> {
    let mut found = Vec::new();
    let op = current.opcode();

    for (producer, prev) in earlier.iter().enumerate() {
        let Some(prev_timing) = prev.timing() else {
            continue;
        };
        let mut push = |kind, earliest_decode| {
            found.push(Hazard {
                kind,
                producer,
                earliest_decode,
            });
        };

        if let Some(written) = prev.destination() {
            if current.reads(written) {
                if let Some(ready) = data_available_cycle(prev) {
                    push(HazardKind::Raw, ready.saturating_add(1));
                }
            }
            if current.destination() == Some(written) {
                push(
                    HazardKind::Waw,
                    decode_for_writeback_after(op, prev_timing.writeback),
                );
            }
        }

        if let Some(rd) = current.destination() {
            if prev.reads(rd) {
                push(HazardKind::War, prev_timing.decode.saturating_add(1));
            }
        }

        if config.memory_order_check
            && op.is_memory()
            && prev.opcode().is_memory()
            && current.memory_location() == prev.memory_location()
        {
            push(HazardKind::MemoryOrder, prev_timing.memory.saturating_add(1));
        }
    }

    found
}

/// Extra cycles for a memory operation issued right after another one.
pub const fn structural_penalty(
    prev: &Instruction,
    current: &Instruction,
    config: &TimingConfig,
) -> u64 {
    if prev.opcode().is_memory() && current.opcode().is_memory() {
        config.memory_busy_cycles
    } else {
        0
    }
}

/// Extra cycles for an `ADD`/`SUB` reading the result of the `ADD`/`SUB`
/// immediately before it.
pub fn dependent_alu_penalty(
    prev: &Instruction,
    current: &Instruction,
    config: &TimingConfig,
) -> u64 {
    let dependent = prev.opcode().is_alu()
        && current.opcode().is_alu()
        && prev.destination().is_some_and(|rd| current.reads(rd));
    if dependent {
        config.dependent_alu_penalty
    } else {
        0
    }
}
