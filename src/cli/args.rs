//! Raw argument preprocessing
//!
//! Both tools accept either dash count on every option: `-help` and `--help`,
//! `-n` and `--n`. Before clap sees the arguments, single-dash long names are
//! rewritten to `--name` and double-dash single letters to `-x`. Only the
//! leading option region is touched: once a positional argument or `--` shows
//! up the remaining tokens are left alone.

use std::ffi::{OsStr, OsString};

/// Is `token` option-like (starts with `-`, is not `-` or `--`)?
pub fn is_option_like(token: &OsStr) -> bool {
    let bytes = token.as_encoded_bytes();
    bytes.len() > 1 && bytes[0] == b'-' && bytes != b"--"
}

/// Option spellings a tool understands
#[derive(Debug, Clone, Copy)]
pub struct FlagSpellings<'a> {
    /// Names clap registers as `--name`
    pub long: &'a [&'a str],
    /// Letters clap registers as `-x`
    pub short: &'a [char],
}

/// Rewrite `-name` to `--name` and `--x` to `-x` for the known spellings
///
/// The first item is the program name and is passed through untouched.
pub fn normalize_flag_spellings<I, T>(args: I, spellings: FlagSpellings<'_>) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = args.next().into_iter().collect();
    let mut in_options = true;

    for arg in args {
        if in_options && !is_option_like(&arg) {
            in_options = false;
        }
        if in_options {
            if let Some(rewritten) = arg.to_str().and_then(|s| respell(s, spellings)) {
                out.push(OsString::from(rewritten));
                continue;
            }
        }
        out.push(arg);
    }
    out
}

fn respell(token: &str, spellings: FlagSpellings<'_>) -> Option<String> {
    if let Some(letter) = token.strip_prefix("--") {
        let mut chars = letter.chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) if spellings.short.contains(&c) => Some(format!("-{}", c)),
            _ => None,
        };
    }
    let name = token.strip_prefix('-')?;
    spellings
        .long
        .contains(&name)
        .then(|| format!("--{}", name))
}

/// Raw tokens after the program name, lossily converted to UTF-8
pub fn raw_tokens<I, T>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .skip(1)
        .map(|arg| arg.into().to_string_lossy().into_owned())
        .collect()
}
