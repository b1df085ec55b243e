//! Program Text Loader.
//!
//! This module reads the program input format. It performs:
//! 1. **Count parsing:** The first non-blank line starts with the instruction count `N`.
//! 2. **Line collection:** The next `N` lines are returned verbatim, blank ones included.
//!    Bytes that are not valid UTF-8 are replaced rather than rejected.
//! 3. **Truncation detection:** Fewer than `N` lines is a fatal `InputTruncated` error.
//!
//! Decoding is left to the caller so that malformed lines can be skipped
//! one at a time.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::common::error::InputError;

/// One raw instruction line and its 1-based line number in the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLine {
    /// Line number within the whole input, counting the count line.
    pub number: usize,
    /// Line text without its terminator.
    pub text: String,
}

/// Reads an instruction count followed by that many instruction lines.
///
/// Leading blank lines before the count are skipped, as is any text after
/// the count on the same line. Lines beyond the declared count are ignored.
///
/// # Errors
///
/// * [`InputError::MissingCount`] if the input holds no count.
/// * [`InputError::InvalidCount`] if the count is not a non-negative integer.
/// * [`InputError::InputTruncated`] if fewer than `N` lines follow.
/// * [`InputError::Io`] on reader failure.
pub fn read_program<R: BufRead>(mut reader: R) -> Result<Vec<SourceLine>, InputError> {
    let mut buf = Vec::new();
    let mut number = 0;

    let expected = loop {
        let Some(line) = next_line(&mut reader, &mut buf)? else {
            return Err(InputError::MissingCount);
        };
        number += 1;
        if let Some(token) = line.split_whitespace().next() {
            break token
                .parse::<usize>()
                .map_err(|_| InputError::InvalidCount(token.to_string()))?;
        }
    };

    // The count is untrusted, so the program grows only as lines arrive.
    let mut program = Vec::new();
    while program.len() < expected {
        let Some(text) = next_line(&mut reader, &mut buf)? else {
            return Err(InputError::InputTruncated {
                expected,
                found: program.len(),
            });
        };
        number += 1;
        program.push(SourceLine { number, text });
    }
    Ok(program)
}

/// Reads one line without its terminator, replacing invalid UTF-8.
///
/// # Returns
///
/// `None` at end of input.
fn next_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    let bytes: &[u8] = buf;
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    Ok(Some(String::from_utf8_lossy(bytes).into_owned()))
}

/// Opens `path` and reads a program from it.
///
/// # Errors
///
/// Same as [`read_program`], plus [`InputError::Io`] if the file cannot be opened.
pub fn read_program_file(path: impl AsRef<Path>) -> Result<Vec<SourceLine>, InputError> {
    let file = File::open(path)?;
    read_program(BufReader::new(file))
}
