//! Line numbering policy
//!
//! Numbers are right-aligned in a six-character field followed by two spaces.
//! Wider numbers widen the field.

use super::flags::NumberMode;
use std::io::Write;

/// Width of the number field
pub const NUMBER_WIDTH: usize = 6;

/// Separator between the number and the line content
pub const NUMBER_SEPARATOR: &str = "  ";

/// Sequence counter shared by every source of one invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounter(u64);

impl LineCounter {
    /// Start at zero
    pub fn new() -> Self {
        Self(0)
    }

    /// Current value (the last number handed out)
    pub fn value(&self) -> u64 {
        self.0
    }

    fn advance(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}

/// Decides which lines get numbered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberingPolicy {
    mode: NumberMode,
}

impl NumberingPolicy {
    /// Create a policy for the given mode
    pub fn new(mode: NumberMode) -> Self {
        Self { mode }
    }

    /// Advance the counter for `line` and return the number to print, if any
    ///
    /// With numbering off the counter still advances for every line.
    pub fn number(&self, line: &[u8], counter: &mut LineCounter) -> Option<u64> {
        match self.mode {
            NumberMode::NonBlank if line.is_empty() => None,
            NumberMode::NonBlank | NumberMode::All => Some(counter.advance()),
            NumberMode::Off => {
                counter.advance();
                None
            }
        }
    }

    /// Write the prefix for `line` (if any) into `out`
    pub fn write_prefix(&self, line: &[u8], counter: &mut LineCounter, out: &mut Vec<u8>) {
        if let Some(n) = self.number(line, counter) {
            // Writing into a Vec cannot fail.
            let _ = write!(out, "{:>width$}{}", n, NUMBER_SEPARATOR, width = NUMBER_WIDTH);
        }
    }

    /// Prefix `line` with its number, if it gets one
    pub fn format(&self, line: &[u8], counter: &mut LineCounter) -> Vec<u8> {
        let mut out = Vec::with_capacity(line.len() + NUMBER_WIDTH + NUMBER_SEPARATOR.len());
        self.write_prefix(line, counter, &mut out);
        out.extend_from_slice(line);
        out
    }
}
