//! Assembly Line Decoder.
//!
//! This module turns one line of program text into a structured `Instruction`.
//! The leading mnemonic selects the operand shape:
//!
//! ```text
//! LOAD  Rd, MEM
//! STORE Rs, MEM
//! ADD   Rd, Rs1, Rs2|imm
//! SUB   Rd, Rs1, Rs2|imm
//! ```
//!
//! Operands are separated by commas and/or whitespace. Source operands of
//! `ADD`/`SUB` are tagged register or immediate here, once, so the hazard
//! logic never looks at token shapes again.

use crate::common::error::MalformedInstruction;
use crate::isa::Opcode;
use crate::isa::instruction::{Instruction, MemLocation, Operand, Register};

/// Operand separators: commas and whitespace.
fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Splits an operand list on separators, dropping empty pieces.
fn operands(text: &str) -> Vec<&str> {
    text.split(is_separator)
        .filter(|tok| !tok.is_empty())
        .collect()
}

/// Requires `token` to name a register.
fn register(opcode: Opcode, token: &str) -> Result<Register, MalformedInstruction> {
    Register::parse(token).ok_or_else(|| MalformedInstruction::ExpectedRegister {
        opcode,
        token: token.to_string(),
    })
}

/// Decodes one instruction line.
///
/// Surrounding whitespace and separator punctuation are ignored.
///
/// # Errors
///
/// Returns [`MalformedInstruction`] when the line is blank, the mnemonic is
/// unknown, the operand count does not match the opcode, or a destination
/// (or `STORE` source) is not a register.
pub fn decode(line: &str) -> Result<Instruction, MalformedInstruction> {
    let line = line.trim().trim_end_matches(',');
    let (mnemonic, rest) = line.split_once(is_separator).unwrap_or((line, ""));
    if mnemonic.is_empty() {
        return Err(MalformedInstruction::Empty);
    }

    let opcode: Opcode = mnemonic.parse()?;
    let ops = operands(rest);
    if ops.len() != opcode.operand_count() {
        return Err(MalformedInstruction::OperandCount {
            opcode,
            expected: opcode.operand_count(),
            found: ops.len(),
        });
    }

    let inst = match (opcode, ops.as_slice()) {
        (Opcode::Load, [rd, loc]) => {
            Instruction::load(register(opcode, rd)?, MemLocation::new(*loc))
        }
        (Opcode::Store, [rs, loc]) => {
            Instruction::store(register(opcode, rs)?, MemLocation::new(*loc))
        }
        (Opcode::Add, [rd, a, b]) => {
            Instruction::add(register(opcode, rd)?, Operand::classify(a), Operand::classify(b))
        }
        (Opcode::Sub, [rd, a, b]) => {
            Instruction::sub(register(opcode, rd)?, Operand::classify(a), Operand::classify(b))
        }
        _ => {
            return Err(MalformedInstruction::OperandCount {
                opcode,
                expected: opcode.operand_count(),
                found: ops.len(),
            });
        }
    };
    Ok(inst)
}
