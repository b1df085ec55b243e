//! In-order stage scheduler.
//!
//! Assigns IF/ID/EX/MEM/WB cycles to every instruction of a program in one
//! forward pass. For each instruction, in program order:
//! 1. **Baseline:** IF one cycle after the previous IF, ID one cycle later.
//! 2. **Hazard scan:** RAW, WAW, WAR and memory-order checks against every
//!    earlier instruction; ID moves to the latest cycle any of them requires.
//! 3. **Fixed penalties:** structural memory-unit and dependent-ALU penalties
//!    when the adjacency conditions with the previous instruction hold.
//! 4. **Finalize:** EX/MEM/WB follow ID with unit spacing, IF sits one cycle
//!    before ID, and the stall is the distance from the baseline ID.
//!
//! Earlier instructions are only read, never revisited. Cycle arithmetic
//! saturates, so an oversized penalty pins later stages at `u64::MAX`.

use crate::common::constants::{FIRST_FETCH_CYCLE, STAGE_SPACING};
use crate::config::TimingConfig;
use crate::core::pipeline::hazards::{self, Hazard, HazardKind};
use crate::core::pipeline::sink::{NullSink, ScheduleSink};
use crate::isa::{Instruction, StageCycles};

/// Single-pass hazard-aware scheduler.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    timing: TimingConfig,
}

impl Scheduler {
    /// Creates a scheduler using the given penalty settings.
    pub const fn new(timing: TimingConfig) -> Self {
        Self { timing }
    }

    /// Penalty settings in use.
    pub const fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Schedules `program` in place and returns the total cycle count.
    ///
    /// Every instruction's stage cycles and stall count are (re)written.
    /// The total is the largest WB cycle, or 0 for an empty program.
    pub fn schedule(&self, program: &mut [Instruction], sink: &mut dyn ScheduleSink) -> u64 {
        let mut total_cycles = 0;

        for index in 0..program.len() {
            let (earlier, rest) = program.split_at_mut(index);
            let current = &mut rest[0];

            let baseline = earlier.last().and_then(Instruction::timing).map_or(
                FIRST_FETCH_CYCLE + STAGE_SPACING,
                |prev| prev.fetch.saturating_add(2 * STAGE_SPACING),
            );

            let mut decode = baseline;
            for hazard in hazards::detect(earlier, current, &self.timing) {
                sink.on_hazard(index, &hazard);
                decode = decode.max(hazard.earliest_decode);
            }

            if let Some(prev) = earlier.last() {
                let penalties = [
                    (
                        HazardKind::Structural,
                        hazards::structural_penalty(prev, current, &self.timing),
                    ),
                    (
                        HazardKind::DependentAlu,
                        hazards::dependent_alu_penalty(prev, current, &self.timing),
                    ),
                ];
                for (kind, cycles) in penalties {
                    if cycles == 0 {
                        continue;
                    }
                    decode = decode.saturating_add(cycles);
                    let hazard = Hazard {
                        kind,
                        producer: index - 1,
                        earliest_decode: decode,
                    };
                    sink.on_hazard(index, &hazard);
                }
            }

            let timing = StageCycles::from_decode(decode, current.opcode());
            current.set_schedule(timing, decode - baseline);
            total_cycles = total_cycles.max(timing.writeback);
            sink.on_scheduled(index, current);
        }

        sink.on_complete(total_cycles);
        total_cycles
    }
}

/// Schedules `program` with the default timing model, discarding diagnostics.
///
/// # Returns
///
/// The total number of cycles needed to retire the program.
pub fn schedule(program: &mut [Instruction]) -> u64 {
    Scheduler::default().schedule(program, &mut NullSink)
}
