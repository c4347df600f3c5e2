//! Concatenation flags and their normalization
//!
//! Raw flags mirror the command line one-to-one. Composite flags (`-A`, `-e`,
//! `-t`) expand into the primitive ones exactly once, producing the immutable
//! [`EffectiveFlags`] the pipeline reads.

/// Flags as given on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawFlags {
    /// `-A`: equivalent to `-vET`
    pub show_all: bool,
    /// `-b`: number nonempty lines, overrides `-n`
    pub number_nonblank: bool,
    /// `-e`: equivalent to `-vE`
    pub show_ends_nonprinting: bool,
    /// `-E`: display `$` at end of each line
    pub show_ends: bool,
    /// `-s`: suppress repeated empty lines
    pub squeeze_blank: bool,
    /// `-n`: number all lines
    pub number: bool,
    /// `-t`: equivalent to `-vT`
    pub show_tabs_nonprinting: bool,
    /// `-T`: display TAB as `^I`
    pub show_tabs: bool,
    /// `-u`: ignored
    pub unbuffered: bool,
    /// `-v`: ^ and M- notation, accepted without effect
    pub show_nonprinting: bool,
}

/// Which lines receive a sequence number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberMode {
    /// No numbering
    #[default]
    Off,
    /// Every line
    All,
    /// Nonempty lines only
    NonBlank,
}

/// Resolved configuration for one invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectiveFlags {
    /// Numbering mode
    pub number: NumberMode,
    /// Squeeze runs of empty lines
    pub squeeze_blank: bool,
    /// Append `$` to each line
    pub show_ends: bool,
    /// Render TAB as `^I`
    pub show_tabs: bool,
}

impl EffectiveFlags {
    /// Expand composite flags and resolve numbering precedence
    pub fn normalize(raw: &RawFlags) -> Self {
        let number = if raw.number_nonblank {
            NumberMode::NonBlank
        } else if raw.number {
            NumberMode::All
        } else {
            NumberMode::Off
        };

        Self {
            number,
            squeeze_blank: raw.squeeze_blank,
            show_ends: raw.show_ends || raw.show_all || raw.show_ends_nonprinting,
            show_tabs: raw.show_tabs || raw.show_all || raw.show_tabs_nonprinting,
        }
    }
}

impl From<RawFlags> for EffectiveFlags {
    fn from(raw: RawFlags) -> Self {
        Self::normalize(&raw)
    }
}
