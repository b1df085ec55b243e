//! Pipeline Timing Constants.
//!
//! This module defines the fixed timing facts of the five-stage pipeline. It includes:
//! 1. **Start Constants:** The cycle at which the first instruction is fetched.
//! 2. **Stage Offsets:** Unit spacing between consecutive stages of one instruction.
//! 3. **Write-Back Offsets:** MEM to WB distance per producer class.
//! 4. **Register Naming:** The prefix that marks a register operand.

/// Cycle at which the first instruction enters IF.
pub const FIRST_FETCH_CYCLE: u64 = 1;

/// Distance in cycles between two consecutive stages of one instruction.
pub const STAGE_SPACING: u64 = 1;

/// Cycles between MEM and WB for instructions that do not load from memory.
pub const WB_OFFSET: u64 = 1;

/// Cycles between MEM and WB for `LOAD`; loaded data is usable one cycle later.
pub const LOAD_WB_OFFSET: u64 = 2;

/// Leading character of every register identifier (`R1`, `R12`, ...).
pub const REGISTER_PREFIX: char = 'R';
