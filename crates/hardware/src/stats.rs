//! Schedule statistics collection and reporting.
//!
//! This module tracks performance metrics for one scheduling pass. It provides:
//! 1. **Cycles and CPI:** Total cycles, instruction count, and derived CPI/IPC.
//! 2. **Instruction mix:** Counts by opcode.
//! 3. **Stalls:** Stalled instructions and total stall cycles.
//! 4. **Hazards:** Counts per hazard kind.
//!
//! `ScheduleStats` is itself a [`ScheduleSink`], so it fills in while the
//! scheduler runs.

use std::fmt;

use crate::core::pipeline::{Hazard, HazardKind, ScheduleSink};
use crate::isa::{Instruction, Opcode};

/// Statistics for one scheduling pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleStats {
    /// Total cycles to retire the program (last WB cycle).
    pub cycles: u64,
    /// Number of instructions scheduled.
    pub instructions: u64,

    /// Count of `LOAD` instructions.
    pub inst_load: u64,
    /// Count of `STORE` instructions.
    pub inst_store: u64,
    /// Count of `ADD` instructions.
    pub inst_add: u64,
    /// Count of `SUB` instructions.
    pub inst_sub: u64,

    /// Instructions whose ID was delayed past the baseline.
    pub stalled_instructions: u64,
    /// Sum of ID delays over all instructions.
    pub stall_cycles: u64,

    /// RAW hazards found.
    pub hazards_raw: u64,
    /// WAW hazards found.
    pub hazards_waw: u64,
    /// WAR hazards found.
    pub hazards_war: u64,
    /// Same-location memory ordering hazards found.
    pub hazards_memory_order: u64,
    /// Structural memory-unit penalties applied.
    pub hazards_structural: u64,
    /// Dependent-ALU penalties applied.
    pub hazards_dependent_alu: u64,
}

impl ScheduleStats {
    /// Number of hazards of `kind` seen.
    pub const fn hazards(&self, kind: HazardKind) -> u64 {
        match kind {
            HazardKind::Raw => self.hazards_raw,
            HazardKind::Waw => self.hazards_waw,
            HazardKind::War => self.hazards_war,
            HazardKind::MemoryOrder => self.hazards_memory_order,
            HazardKind::Structural => self.hazards_structural,
            HazardKind::DependentAlu => self.hazards_dependent_alu,
        }
    }

    /// Total hazards of every kind.
    pub fn total_hazards(&self) -> u64 {
        HazardKind::ALL.into_iter().map(|k| self.hazards(k)).sum()
    }

    /// Cycles per instruction, or 0.0 for an empty program.
    pub fn cpi(&self) -> f64 {
        if self.instructions == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions as f64
        }
    }

    /// Instructions per cycle, or 0.0 for an empty program.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions as f64 / self.cycles as f64
        }
    }
}

impl ScheduleSink for ScheduleStats {
    fn on_hazard(&mut self, _consumer: usize, hazard: &Hazard) {
        let counter = match hazard.kind {
            HazardKind::Raw => &mut self.hazards_raw,
            HazardKind::Waw => &mut self.hazards_waw,
            HazardKind::War => &mut self.hazards_war,
            HazardKind::MemoryOrder => &mut self.hazards_memory_order,
            HazardKind::Structural => &mut self.hazards_structural,
            HazardKind::DependentAlu => &mut self.hazards_dependent_alu,
        };
        *counter += 1;
    }

    fn on_scheduled(&mut self, _index: usize, inst: &Instruction) {
        self.instructions += 1;
        match inst.opcode() {
            Opcode::Load => self.inst_load += 1,
            Opcode::Store => self.inst_store += 1,
            Opcode::Add => self.inst_add += 1,
            Opcode::Sub => self.inst_sub += 1,
        }
        if inst.is_stalled() {
            self.stalled_instructions += 1;
            self.stall_cycles = self.stall_cycles.saturating_add(inst.stall_cycles());
        }
    }

    fn on_complete(&mut self, total_cycles: u64) {
        self.cycles = total_cycles;
    }
}

impl fmt::Display for ScheduleStats {
    /// Formats a multi-section summary in the style of a simulator stats dump.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = |n: u64, of: u64| {
            if of == 0 {
                0.0
            } else {
                n as f64 / of as f64 * 100.0
            }
        };

        writeln!(f, "==========================================================")?;
        writeln!(f, "PIPELINE SCHEDULE STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions)?;
        writeln!(f, "sim_cpi                  {:.4}", self.cpi())?;
        writeln!(f, "sim_ipc                  {:.4}", self.ipc())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for (name, count) in [
            ("op.load", self.inst_load),
            ("op.store", self.inst_store),
            ("op.add", self.inst_add),
            ("op.sub", self.inst_sub),
        ] {
            writeln!(
                f,
                "  {name:<22} {count} ({:.2}%)",
                pct(count, self.instructions)
            )?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "STALLS")?;
        writeln!(
            f,
            "  stalls.instructions    {} ({:.2}%)",
            self.stalled_instructions,
            pct(self.stalled_instructions, self.instructions)
        )?;
        writeln!(f, "  stalls.cycles          {}", self.stall_cycles)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "HAZARDS")?;
        for kind in HazardKind::ALL {
            writeln!(f, "  {:<22} {}", kind.name(), self.hazards(kind))?;
        }
        write!(f, "==========================================================")
    }
}
