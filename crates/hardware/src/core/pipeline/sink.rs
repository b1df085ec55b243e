//! Diagnostic sinks for the scheduler.
//!
//! The scheduler never prints. It reports what it finds to a caller-supplied
//! [`ScheduleSink`], which may log it, record it, count it, or drop it.

use tracing::debug;

use crate::core::pipeline::hazards::Hazard;
use crate::isa::{Instruction, StageCycles};

/// Receiver for scheduler events.
///
/// All methods default to doing nothing, so implementors override only
/// the events they care about.
pub trait ScheduleSink {
    /// A hazard was found while scheduling instruction `consumer`.
    fn on_hazard(&mut self, _consumer: usize, _hazard: &Hazard) {}

    /// Instruction `index` received its final stage cycles.
    fn on_scheduled(&mut self, _index: usize, _inst: &Instruction) {}

    /// The pass finished; `total_cycles` is the last write-back cycle.
    fn on_complete(&mut self, _total_cycles: u64) {}
}

/// Sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl ScheduleSink for NullSink {}

/// Sink that narrates events as `tracing` debug records.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceSink;

impl ScheduleSink for TraceSink {
    fn on_hazard(&mut self, consumer: usize, hazard: &Hazard) {
        debug!(
            consumer,
            producer = hazard.producer,
            earliest_id = hazard.earliest_decode,
            "{} hazard",
            hazard.kind
        );
    }

    fn on_scheduled(&mut self, index: usize, inst: &Instruction) {
        if let Some(t) = inst.timing() {
            debug!(
                index,
                stalled = inst.is_stalled(),
                "{inst}: IF={} ID={} EX={} MEM={} WB={}",
                t.fetch,
                t.decode,
                t.execute,
                t.memory,
                t.writeback
            );
        }
    }

    fn on_complete(&mut self, total_cycles: u64) {
        debug!(total_cycles, "schedule complete");
    }
}

/// A recorded scheduler event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScheduleEvent {
    /// See [`ScheduleSink::on_hazard`].
    Hazard {
        /// Instruction being scheduled.
        consumer: usize,
        /// The hazard found.
        hazard: Hazard,
    },
    /// See [`ScheduleSink::on_scheduled`].
    Scheduled {
        /// Instruction index.
        index: usize,
        /// Final stage cycles.
        timing: StageCycles,
        /// Cycles ID was delayed past its baseline.
        stall_cycles: u64,
    },
    /// See [`ScheduleSink::on_complete`].
    Complete {
        /// Last write-back cycle.
        total_cycles: u64,
    },
}

impl ScheduleSink for Vec<ScheduleEvent> {
    fn on_hazard(&mut self, consumer: usize, hazard: &Hazard) {
        self.push(ScheduleEvent::Hazard {
            consumer,
            hazard: *hazard,
        });
    }

    fn on_scheduled(&mut self, index: usize, inst: &Instruction) {
        if let Some(timing) = inst.timing() {
            self.push(ScheduleEvent::Scheduled {
                index,
                timing: *timing,
                stall_cycles: inst.stall_cycles(),
            });
        }
    }

    fn on_complete(&mut self, total_cycles: u64) {
        self.push(ScheduleEvent::Complete { total_cycles });
    }
}

impl<S: ScheduleSink + ?Sized> ScheduleSink for &mut S {
    fn on_hazard(&mut self, consumer: usize, hazard: &Hazard) {
        (**self).on_hazard(consumer, hazard);
    }

    fn on_scheduled(&mut self, index: usize, inst: &Instruction) {
        (**self).on_scheduled(index, inst);
    }

    fn on_complete(&mut self, total_cycles: u64) {
        (**self).on_complete(total_cycles);
    }
}

/// Fans every event out to both sinks, first `A` then `B`.
impl<A: ScheduleSink, B: ScheduleSink> ScheduleSink for (A, B) {
    fn on_hazard(&mut self, consumer: usize, hazard: &Hazard) {
        self.0.on_hazard(consumer, hazard);
        self.1.on_hazard(consumer, hazard);
    }

    fn on_scheduled(&mut self, index: usize, inst: &Instruction) {
        self.0.on_scheduled(index, inst);
        self.1.on_scheduled(index, inst);
    }

    fn on_complete(&mut self, total_cycles: u64) {
        self.0.on_complete(total_cycles);
        self.1.on_complete(total_cycles);
    }
}
