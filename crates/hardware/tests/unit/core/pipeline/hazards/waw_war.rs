//! Write-After-Write and Write-After-Read Hazard Tests.

use pipesim_core::core::pipeline::HazardKind;
use pretty_assertions::assert_eq;

use crate::common::harness::run;

#[test]
fn waw_pushes_writeback_past_load() {
    let s = run(&["LOAD R1, A", "ADD R1, R2, R3"]);
    // Baseline WB would be 6, equal to the LOAD's; one cycle of delay fixes it.
    assert_eq!(s.stages(0).4, 6);
    assert_eq!(s.stages(1), (3, 4, 5, 6, 7));
    assert_eq!(s.program[1].stall_cycles(), 1);
    assert_eq!(s.hazards_for(1), [HazardKind::Waw]);
}

#[test]
fn waw_already_satisfied_does_not_stall() {
    let s = run(&["ADD R1, R2, R3", "LOAD R1, A"]);
    assert_eq!(s.hazards_for(1), [HazardKind::Waw]);
    assert_eq!(s.stages(1), (2, 3, 4, 5, 7));
    assert!(!s.program[1].is_stalled());
}

#[test]
fn waw_on_any_earlier_writer() {
    let s = run(&["LOAD R1, A", "ADD R4, R5, R6", "SUB R1, R7, 2"]);
    assert!(s.hazards_for(2).contains(&HazardKind::Waw));
    assert!(s.stages(2).4 > s.stages(0).4);
}

#[test]
fn war_detected_without_delay() {
    let s = run(&["ADD R1, R2, R3", "ADD R2, R4, R5"]);
    assert_eq!(s.hazards_for(1), [HazardKind::War]);
    assert_eq!(s.stages(1), (2, 3, 4, 5, 6));
    assert!(!s.program[1].is_stalled());
}

#[test]
fn store_source_is_war_reader() {
    let s = run(&["STORE R3, A", "ADD R3, R1, R2"]);
    assert_eq!(s.hazards_for(1), [HazardKind::War]);
    assert!(s.stages(1).1 > s.stages(0).1);
}

#[test]
fn store_never_writes() {
    let s = run(&["STORE R1, A", "STORE R1, B"]);
    let kinds = s.hazards_for(1);
    assert!(!kinds.contains(&HazardKind::Waw));
    assert!(!kinds.contains(&HazardKind::Raw));
    assert!(!kinds.contains(&HazardKind::War));
}
