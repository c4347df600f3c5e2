//! Core text filters shared by the command-line tools
//!
//! This module provides:
//! - Line reader and input sources for the concatenation tool
//! - Flag normalization into effective flags
//! - Blank-line squeezer, numbering policy and line formatter
//! - Stream driver composing the per-line pipeline
//! - Escape decoder and echo writer

pub mod driver;
pub mod echo;
pub mod escape;
pub mod flags;
pub mod format;
pub mod line_reader;
pub mod numbering;
pub mod source;
pub mod squeeze;

pub use driver::{Concatenator, RunSummary, SourceOutcome};
pub use echo::{echo, EchoError, EchoOptions};
pub use escape::{decode, EscapeError, EscapeMode};
pub use flags::{EffectiveFlags, NumberMode, RawFlags};
pub use format::render;
pub use line_reader::LineReader;
pub use numbering::{LineCounter, NumberingPolicy};
pub use source::{Source, SourceError};
pub use squeeze::Squeezer;
