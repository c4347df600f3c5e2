//! CLI Module
//!
//! Provides the command-line plumbing shared by both tools:
//! - Exit codes
//! - Option spelling preprocessing (`-help`, `--n`)
//! - Tracing setup

pub mod args;
pub mod exit_codes;
pub mod logging;

pub use args::{normalize_flag_spellings, raw_tokens, FlagSpellings};
pub use exit_codes::{CliResult, ExitCodes};
