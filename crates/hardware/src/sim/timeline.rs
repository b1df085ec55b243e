//! Per-stage timeline formatting.
//!
//! Renders a scheduled program as a table with one row per instruction and
//! one column per stage. Intended for diagnostic output only.

use std::fmt;

use crate::isa::{Instruction, Stage};

/// Width of the instruction text column.
const TEXT_WIDTH: usize = 22;

/// Width of each stage column.
const STAGE_WIDTH: usize = 5;

/// Display adapter printing the stage table of a program.
///
/// ```text
///   #  INSTRUCTION              IF   ID   EX  MEM   WB
///   0  LOAD R1, 0                1    2    3    4    6
///   1  ADD R2, R1, R3            6    7    8    9   10  stall 4
/// ```
///
/// Instructions that have not been scheduled show `-` in every stage column.
#[derive(Clone, Copy, Debug)]
pub struct Timeline<'a>(pub &'a [Instruction]);

impl fmt::Display for Timeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}  {:<TEXT_WIDTH$}", "#", "INSTRUCTION")?;
        for stage in Stage::ALL {
            write!(f, "{:>STAGE_WIDTH$}", stage.name())?;
        }
        writeln!(f)?;

        for (index, inst) in self.0.iter().enumerate() {
            write!(f, "{index:>3}  {:<TEXT_WIDTH$}", inst.to_string())?;
            for stage in Stage::ALL {
                match inst.timing() {
                    Some(t) => write!(f, "{:>STAGE_WIDTH$}", t.cycle(stage))?,
                    None => write!(f, "{:>STAGE_WIDTH$}", "-")?,
                }
            }
            if inst.is_stalled() {
                write!(f, "  stall {}", inst.stall_cycles())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Renders the stage table of `program` to a string.
pub fn render(program: &[Instruction]) -> String {
    Timeline(program).to_string()
}
