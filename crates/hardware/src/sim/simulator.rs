//! Simulator: owns the configuration and the decoded program side-by-side.
//!
//! Lines are decoded one at a time as they arrive; malformed ones are logged
//! and skipped. The whole program is then handed to the scheduler in a
//! single pass.

use std::io::BufRead;

use tracing::{info, warn};

use crate::common::error::{InputError, MalformedInstruction};
use crate::config::Config;
use crate::core::pipeline::{ScheduleSink, Scheduler, TraceSink};
use crate::isa::{self, Instruction};
use crate::sim::loader::{self, SourceLine};

/// A line dropped during decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based input line number.
    pub number: usize,
    /// Line text as read.
    pub text: String,
    /// Why the line was rejected.
    pub error: MalformedInstruction,
}

/// Top-level simulator: configuration, decoded program and scheduler.
#[derive(Debug, Default)]
pub struct Simulator {
    config: Config,
    scheduler: Scheduler,
    program: Vec<Instruction>,
    skipped: Vec<SkippedLine>,
}

impl Simulator {
    /// Creates an empty simulator with the given configuration.
    pub fn new(config: Config) -> Self {
        let scheduler = Scheduler::new(config.timing.clone());
        Self {
            config,
            scheduler,
            program: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Decodes one line and appends it to the program.
    ///
    /// # Errors
    ///
    /// Returns the decode error; the program is left unchanged.
    pub fn add_instruction(&mut self, line: &str) -> Result<(), MalformedInstruction> {
        self.program.push(isa::decode(line)?);
        Ok(())
    }

    /// Decodes every line, skipping malformed ones with a warning.
    ///
    /// # Returns
    ///
    /// The number of lines successfully decoded.
    pub fn load_lines(&mut self, lines: impl IntoIterator<Item = SourceLine>) -> usize {
        let mut decoded = 0;
        for SourceLine { number, text } in lines {
            match self.add_instruction(&text) {
                Ok(()) => decoded += 1,
                Err(error) => {
                    warn!(line = number, "skipping `{}`: {}", text.trim(), error);
                    self.skipped.push(SkippedLine {
                        number,
                        text,
                        error,
                    });
                }
            }
        }
        decoded
    }

    /// Reads a count-prefixed program from `reader` and decodes it.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the input cannot be read or is truncated.
    /// Malformed instruction lines are not errors; see [`Self::skipped`].
    pub fn load_program<R: BufRead>(&mut self, reader: R) -> Result<usize, InputError> {
        let lines = loader::read_program(reader)?;
        Ok(self.load_lines(lines))
    }

    /// Schedules the program and returns the total cycle count.
    ///
    /// Events go to `sink`, and also to a [`TraceSink`] when
    /// `general.trace_schedule` is set.
    pub fn run(&mut self, sink: &mut dyn ScheduleSink) -> u64 {
        let total = if self.config.general.trace_schedule {
            let mut both = (TraceSink, sink);
            self.scheduler.schedule(&mut self.program, &mut both)
        } else {
            self.scheduler.schedule(&mut self.program, sink)
        };
        info!(
            instructions = self.program.len(),
            skipped = self.skipped.len(),
            total_cycles = total,
            "simulation complete"
        );
        total
    }

    /// Decoded program, scheduled once [`Self::run`] has been called.
    pub fn program(&self) -> &[Instruction] {
        &self.program
    }

    /// Lines rejected by the decoder, in input order.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// Active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }
}
