//! # lineutils core library
//!
//! Line-oriented text utilities:
//! - `cat`: concatenates files through a line pipeline (blank-line squeezing,
//!   numbering, end-of-line markers, visible tabs)
//! - `echo`: joins its arguments and optionally interprets backslash escapes
//!
//! ## Example
//!
//! ```rust
//! use lineutils_core::{Concatenator, EffectiveFlags, NumberMode};
//! use std::io::Cursor;
//!
//! let flags = EffectiveFlags {
//!     number: NumberMode::All,
//!     squeeze_blank: true,
//!     ..Default::default()
//! };
//! let mut cat = Concatenator::new(flags, Vec::new());
//! cat.process_stream("-", Cursor::new(b"a\n\n\nb\n".to_vec())).unwrap();
//! let out = cat.into_inner().unwrap();
//! assert_eq!(out, b"     1  a\n     2  \n     3  b\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;

// Re-exports for convenience
pub use crate::cli::{CliResult, ExitCodes};
pub use crate::config::{AppConfig, ConfigError};
pub use crate::core::{
    decode, echo, render, Concatenator, EchoError, EchoOptions, EffectiveFlags, EscapeError,
    EscapeMode, LineCounter, NumberMode, NumberingPolicy, RawFlags, RunSummary, Source,
    SourceOutcome, Squeezer,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
