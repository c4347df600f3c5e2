//! Echo: join arguments, optionally decode escapes, write with a newline
//!
//! Arguments are joined as raw bytes, so text that is not UTF-8 passes through
//! untouched. Escape interpretation works on text: invalid UTF-8 sequences are
//! replaced with U+FFFD before decoding.

use super::escape::{self, EscapeError, EscapeMode};
use std::ffi::OsStr;
use std::io::{self, Write};

/// Echo errors
#[derive(Debug, thiserror::Error)]
pub enum EchoError {
    /// Escape interpretation failed; nothing was written
    #[error(transparent)]
    Escape(#[from] EscapeError),

    /// Output failed
    #[error("write error: {0}")]
    Io(#[from] io::Error),
}

/// Resolved echo options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EchoOptions {
    /// `-n`: omit the trailing newline
    pub no_newline: bool,
    /// `-e` was given
    pub enable_escapes: bool,
    /// Mode from the raw token scan
    pub mode: EscapeMode,
}

impl EchoOptions {
    /// Build options from parsed flags and the raw tokens (program name excluded)
    pub fn from_tokens<I, S>(no_newline: bool, enable_escapes: bool, raw_tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            no_newline,
            enable_escapes,
            mode: EscapeMode::resolve(raw_tokens),
        }
    }

    /// Are escapes interpreted?
    pub fn interprets_escapes(&self) -> bool {
        self.enable_escapes && self.mode.is_enabled()
    }
}

/// Join positional arguments with single spaces
pub fn join_args<S: AsRef<OsStr>>(args: &[S]) -> Vec<u8> {
    let mut joined = Vec::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            joined.push(b' ');
        }
        joined.extend_from_slice(arg.as_ref().as_encoded_bytes());
    }
    joined
}

/// Write the echo output for `args` to `out`
pub fn echo<W, S>(out: &mut W, args: &[S], options: &EchoOptions) -> Result<(), EchoError>
where
    W: Write,
    S: AsRef<OsStr>,
{
    let joined = join_args(args);
    if options.interprets_escapes() {
        let decoded = escape::decode(&String::from_utf8_lossy(&joined), true)?;
        out.write_all(&decoded)?;
    } else {
        out.write_all(&joined)?;
    }

    if !options.no_newline {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
