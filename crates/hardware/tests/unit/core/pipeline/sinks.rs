//! Schedule Sink Tests.
//!
//! Checks event order, fan-out and the tracing sink.

use pipesim_core::core::pipeline::{
    HazardKind, ScheduleEvent, ScheduleSink, Scheduler, TraceSink,
};
use pipesim_core::stats::ScheduleStats;

use crate::common::harness::{decode_all, init_tracing, run};

#[test]
fn events_arrive_per_instruction_then_complete() {
    let s = run(&["LOAD R1, A", "ADD R2, R1, R3"]);
    let shape: Vec<&str> = s
        .events
        .iter()
        .map(|e| match e {
            ScheduleEvent::Hazard { .. } => "hazard",
            ScheduleEvent::Scheduled { .. } => "scheduled",
            ScheduleEvent::Complete { .. } => "complete",
        })
        .collect();
    assert_eq!(shape, ["scheduled", "hazard", "scheduled", "complete"]);
    assert_eq!(
        s.events.last(),
        Some(&ScheduleEvent::Complete { total_cycles: 10 })
    );
}

#[test]
fn scheduled_event_carries_stall() {
    let s = run(&["LOAD R1, A", "ADD R2, R1, R3"]);
    let stalls: Vec<(usize, u64)> = s
        .events
        .iter()
        .filter_map(|e| match e {
            ScheduleEvent::Scheduled {
                index,
                stall_cycles,
                ..
            } => Some((*index, *stall_cycles)),
            _ => None,
        })
        .collect();
    assert_eq!(stalls, [(0, 0), (1, 4)]);
}

#[test]
fn penalty_hazard_names_previous_instruction() {
    let s = run(&["LOAD R1, A", "STORE R2, B"]);
    let penalty = s.events.iter().find_map(|e| match e {
        ScheduleEvent::Hazard { consumer, hazard } if hazard.kind == HazardKind::Structural => {
            Some((*consumer, hazard.producer, hazard.earliest_decode))
        }
        _ => None,
    });
    assert_eq!(penalty, Some((1, 0, 4)));
}

#[test]
fn fan_out_feeds_both_sinks() {
    init_tracing();
    let mut program = decode_all(&["ADD R1, R2, R3", "ADD R4, R1, R5"]);
    let mut events: Vec<ScheduleEvent> = Vec::new();
    let mut stats = ScheduleStats::default();
    let total = {
        let mut both = (&mut events, (&mut stats, TraceSink));
        Scheduler::default().schedule(&mut program, &mut both)
    };
    assert_eq!(total, 10);
    assert_eq!(stats.cycles, total);
    assert_eq!(stats.instructions, 2);
    let hazard_events = events
        .iter()
        .filter(|e| matches!(e, ScheduleEvent::Hazard { .. }))
        .count() as u64;
    assert_eq!(hazard_events, stats.total_hazards());
}

#[test]
fn default_methods_ignore_events() {
    struct CompleteOnly(Option<u64>);
    impl ScheduleSink for CompleteOnly {
        fn on_complete(&mut self, total_cycles: u64) {
            self.0 = Some(total_cycles);
        }
    }

    let mut program = decode_all(&["LOAD R1, A", "ADD R2, R1, R3"]);
    let mut sink = CompleteOnly(None);
    let total = Scheduler::default().schedule(&mut program, &mut sink);
    assert_eq!(sink.0, Some(total));
}
