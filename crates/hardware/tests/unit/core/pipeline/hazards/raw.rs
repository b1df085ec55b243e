//! Read-After-Write Hazard Tests.
//!
//! A `LOAD` result is usable after its WB; an `ADD`/`SUB` result is
//! forwarded and usable at its MEM. The consumer's ID lands one cycle later.

use pipesim_core::config::TimingConfig;
use pipesim_core::core::pipeline::HazardKind;
use pipesim_core::core::pipeline::hazards::{self, data_available_cycle};
use pipesim_core::core::pipeline::schedule;
use pretty_assertions::assert_eq;

use crate::common::builder::ProgramBuilder;
use crate::common::harness::{decode_all, run};

#[test]
fn availability_per_producer() {
    let mut program = ProgramBuilder::new()
        .load("R1", "A")
        .add("R2", "R4", "R5")
        .store("R3", "B")
        .build();
    assert_eq!(data_available_cycle(&program[0]), None, "unscheduled");

    let _total = schedule(&mut program);
    assert_eq!(data_available_cycle(&program[0]), Some(6));
    assert_eq!(data_available_cycle(&program[1]), Some(5));
    assert_eq!(data_available_cycle(&program[2]), None, "STORE writes no register");
}

#[test]
fn load_use_waits_for_writeback() {
    let s = run(&["LOAD R1, 0", "ADD R2, R1, R3"]);
    assert_eq!(s.stages(0), (1, 2, 3, 4, 6));
    assert_eq!(s.stages(1), (6, 7, 8, 9, 10));
    assert_eq!(s.program[1].stall_cycles(), 4);
    assert_eq!(s.hazards_for(1), [HazardKind::Raw]);
    assert_eq!(s.total, 10);
}

#[test]
fn store_of_loaded_register() {
    let s = run(&["LOAD R1, A", "STORE R1, B"]);
    // RAW puts ID at 7; the structural penalty adds one more.
    assert_eq!(s.stages(1), (7, 8, 9, 10, 11));
    assert_eq!(
        s.hazards_for(1),
        [HazardKind::Raw, HazardKind::Structural]
    );
    assert_eq!(s.total, 11);
}

#[test]
fn alu_result_forwarded_to_store() {
    let s = run(&["ADD R1, R2, R3", "STORE R1, X"]);
    assert_eq!(s.stages(1), (4, 5, 6, 7, 8));
    assert_eq!(s.total, 8);
}

#[test]
fn both_sources_take_the_later_producer() {
    let s = run(&["LOAD R1, A", "LOAD R2, B", "ADD R3, R1, R2"]);
    assert_eq!(s.stages(1), (3, 4, 5, 6, 8));
    // R2 is ready at 8, later than R1 at 6.
    assert_eq!(s.stages(2), (8, 9, 10, 11, 12));
    assert_eq!(s.hazards_for(2), [HazardKind::Raw, HazardKind::Raw]);
    assert_eq!(s.total, 12);
}

#[test]
fn immediates_never_depend() {
    let s = run(&["LOAD R1, A", "ADD R2, 1, 7"]);
    assert!(s.hazards_for(1).is_empty());
    assert_eq!(s.stages(1), (2, 3, 4, 5, 6));
    assert!(!s.program[1].is_stalled());
}

#[test]
fn distant_producer_still_checked() {
    let s = run(&[
        "LOAD R1, A",
        "ADD R5, R6, R7",
        "ADD R8, R9, 1",
        "SUB R2, R1, 1",
    ]);
    assert!(s.hazards_for(3).contains(&HazardKind::Raw));
    assert!(s.stages(3).1 > s.stages(0).4);
}

#[test]
fn detect_reports_producer_index() {
    let mut program = decode_all(&["LOAD R1, A", "ADD R9, R8, R7"]);
    let _total = schedule(&mut program);
    let consumer = decode_all(&["SUB R2, R1, R9"]).remove(0);

    let found = hazards::detect(&program, &consumer, &TimingConfig::default());
    let raw: Vec<(usize, u64)> = found
        .iter()
        .filter(|h| h.kind == HazardKind::Raw)
        .map(|h| (h.producer, h.earliest_decode))
        .collect();
    assert_eq!(raw, [(0, 7), (1, 6)]);
}
