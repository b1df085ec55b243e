//! Instruction Record Tests.

use pipesim_core::isa::{Instruction, MemLocation, Opcode, Operand, Register, Stage, StageCycles};
use rstest::rstest;

use crate::common::builder::program::reg;

#[rstest]
#[case("R1", Some("R1"))]
#[case("r12", Some("R12"))]
#[case("5", None)]
#[case("A", None)]
#[case("", None)]
fn register_classification(#[case] token: &str, #[case] name: Option<&str>) {
    assert_eq!(Register::parse(token).as_ref().map(Register::name), name);
}

#[test]
fn register_names_fold_case() {
    assert_eq!(reg("r3"), reg("R3"));
}

#[test]
fn operand_classification() {
    assert_eq!(Operand::classify("R2"), Operand::Register(reg("R2")));
    assert_eq!(Operand::classify("42"), Operand::Immediate("42".into()));
    assert_eq!(Operand::classify("42").as_register(), None);
}

#[test]
fn source_registers_skip_immediates() {
    let inst = Instruction::add(reg("R1"), Operand::classify("10"), Operand::classify("R9"));
    let regs: Vec<&Register> = inst.source_registers().collect();
    assert_eq!(regs, [&reg("R9")]);
    assert!(!inst.reads(&reg("R1")));
}

#[test]
fn load_reads_nothing() {
    let inst = Instruction::load(reg("R1"), MemLocation::new("A"));
    assert_eq!(inst.source_registers().count(), 0);
}

#[rstest]
#[case::load(Instruction::load(reg("R1"), MemLocation::new("0")), "LOAD R1, 0")]
#[case::store(Instruction::store(reg("R2"), MemLocation::new("buf")), "STORE R2, buf")]
#[case::sub(
    Instruction::sub(reg("R3"), Operand::classify("R1"), Operand::classify("5")),
    "SUB R3, R1, 5"
)]
fn display_renders_assembly(#[case] inst: Instruction, #[case] text: &str) {
    assert_eq!(inst.to_string(), text);
}

#[rstest]
#[case(Opcode::Load, 6)]
#[case(Opcode::Store, 5)]
#[case(Opcode::Add, 5)]
#[case(Opcode::Sub, 5)]
fn stage_cycles_follow_decode(#[case] opcode: Opcode, #[case] wb: u64) {
    let t = StageCycles::from_decode(2, opcode);
    assert_eq!((t.fetch, t.decode, t.execute, t.memory), (1, 2, 3, 4));
    assert_eq!(t.writeback, wb);
    let cycles: Vec<u64> = Stage::ALL.iter().map(|&s| t.cycle(s)).collect();
    assert_eq!(cycles, [1, 2, 3, 4, wb]);
}

#[test]
fn stage_names() {
    let names: Vec<&str> = Stage::ALL.iter().map(|s| s.name()).collect();
    assert_eq!(names, ["IF", "ID", "EX", "MEM", "WB"]);
}
