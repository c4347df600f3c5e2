//! Blank-line squeezer
//!
//! Collapses runs of two or more empty lines into one. The state belongs to a
//! single source and starts out as "previous line not empty".

/// Squeeze state for one source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Squeezer {
    enabled: bool,
    previous_empty: bool,
}

impl Squeezer {
    /// Create a squeezer; a disabled one never skips
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            previous_empty: false,
        }
    }

    /// Decide whether `line` is suppressed, updating the state
    pub fn skip(&mut self, line: &[u8]) -> bool {
        if !self.enabled {
            return false;
        }

        let empty = line.is_empty();
        if self.previous_empty && empty {
            return true;
        }
        self.previous_empty = empty;
        false
    }

    /// Was the previous kept line empty?
    pub fn previous_empty(&self) -> bool {
        self.previous_empty
    }
}
