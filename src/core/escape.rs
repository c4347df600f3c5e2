//! Backslash escape interpretation for the echo tool
//!
//! Two pieces live here:
//! - [`EscapeMode::resolve`]: an ordered scan over the raw command-line tokens
//!   where the last `-e` or `-E` wins
//! - [`decode`]: collapses doubled backslashes, then interprets the text with
//!   double-quoted string literal rules
//!
//! Recognized escapes: `\a \b \f \n \r \t \v \\ \"`, three-digit octal `\NNN`
//! (at most 255), `\xHH` (a raw byte), `\uHHHH` and `\UHHHHHHHH` (a Unicode
//! scalar value, UTF-8 encoded). Anything else is an error, as are an unescaped
//! `"` and a literal newline.

use bytes::Bytes;

/// Escape-decoding errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EscapeError {
    /// Unknown escape character
    #[error("invalid escape sequence \\{sequence} at offset {offset}")]
    UnknownEscape {
        /// Byte offset of the backslash
        offset: usize,
        /// Text following the backslash
        sequence: char,
    },

    /// Numeric escape with missing or invalid digits
    #[error("malformed \\{kind} escape at offset {offset}: expected {expected} digits")]
    BadDigits {
        /// Byte offset of the backslash
        offset: usize,
        /// Escape letter (`x`, `u`, `U`) or `0` for octal
        kind: char,
        /// Number of digits the escape needs
        expected: usize,
    },

    /// Octal escape above 255
    #[error("octal escape out of range at offset {offset}")]
    OctalOutOfRange {
        /// Byte offset of the backslash
        offset: usize,
    },

    /// `\u`/`\U` naming a surrogate or a value above U+10FFFF
    #[error("invalid code point U+{value:X} at offset {offset}")]
    InvalidCodePoint {
        /// Byte offset of the backslash
        offset: usize,
        /// Decoded value
        value: u32,
    },

    /// Backslash at the very end of the text
    #[error("trailing backslash")]
    TrailingBackslash,

    /// Double quote without a backslash
    #[error("unescaped double quote at offset {0}")]
    BareQuote(usize),

    /// Literal newline in the text
    #[error("literal newline at offset {0}")]
    Newline(usize),
}

/// Whether escape interpretation is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeMode {
    /// Interpret escapes
    Enabled,
    /// Emit text as is
    #[default]
    Disabled,
}

impl EscapeMode {
    /// Resolve the mode from raw argument tokens (program name excluded)
    ///
    /// Only leading option-like tokens are inspected. The scan stops at the first
    /// token that does not start with `-` and at `--`. Within the scanned tokens
    /// `-e` enables and `-E` disables, the later one winning. Short-flag
    /// clusters made of `n`, `e` and `E` (such as `-ne`) apply their letters left
    /// to right.
    pub fn resolve<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mode = Self::Disabled;
        for token in tokens {
            let token = token.as_ref();
            if !token.starts_with('-') || token == "--" {
                break;
            }

            let letters = &token[1..];
            let is_cluster =
                !letters.is_empty() && letters.chars().all(|c| matches!(c, 'n' | 'e' | 'E'));
            if !is_cluster {
                continue;
            }
            for c in letters.chars() {
                match c {
                    'e' => mode = Self::Enabled,
                    'E' => mode = Self::Disabled,
                    _ => {}
                }
            }
        }
        mode
    }

    /// Is interpretation on?
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Replace every `\\` pair with a single backslash, scanning left to right
pub fn collapse_backslashes(text: &str) -> String {
    text.replace("\\\\", "\\")
}

/// Decode `text` when `enabled`, otherwise return it unchanged
pub fn decode(text: &str, enabled: bool) -> Result<Bytes, EscapeError> {
    if !enabled {
        return Ok(Bytes::copy_from_slice(text.as_bytes()));
    }
    unescape(&collapse_backslashes(text))
}

/// Interpret `text` as the body of a double-quoted string literal
pub fn unescape(text: &str) -> Result<Bytes, EscapeError> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => return Err(EscapeError::Newline(i)),
            b'"' => return Err(EscapeError::BareQuote(i)),
            b'\\' => i = unescape_one(bytes, i, &mut out)?,
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    Ok(Bytes::from(out))
}

/// Decode the escape starting at `start` (the backslash); returns the next index
fn unescape_one(bytes: &[u8], start: usize, out: &mut Vec<u8>) -> Result<usize, EscapeError> {
    let Some(&c) = bytes.get(start + 1) else {
        return Err(EscapeError::TrailingBackslash);
    };
    let next = start + 2;

    let simple = match c {
        b'a' => Some(0x07),
        b'b' => Some(0x08),
        b'f' => Some(0x0c),
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b't' => Some(b'\t'),
        b'v' => Some(0x0b),
        b'\\' => Some(b'\\'),
        b'"' => Some(b'"'),
        _ => None,
    };
    if let Some(byte) = simple {
        out.push(byte);
        return Ok(next);
    }

    match c {
        b'0'..=b'7' => {
            let value = read_digits(bytes, start + 1, 3, 8).ok_or(EscapeError::BadDigits {
                offset: start,
                kind: '0',
                expected: 3,
            })?;
            let byte =
                u8::try_from(value).map_err(|_| EscapeError::OctalOutOfRange { offset: start })?;
            out.push(byte);
            Ok(start + 4)
        }
        b'x' => {
            let value = read_digits(bytes, next, 2, 16).ok_or(EscapeError::BadDigits {
                offset: start,
                kind: 'x',
                expected: 2,
            })?;
            // Two hex digits always fit a byte.
            out.push(value as u8);
            Ok(next + 2)
        }
        b'u' | b'U' => {
            let width = if c == b'u' { 4 } else { 8 };
            let value = read_digits(bytes, next, width, 16).ok_or(EscapeError::BadDigits {
                offset: start,
                kind: c as char,
                expected: width,
            })?;
            let ch = char::from_u32(value).ok_or(EscapeError::InvalidCodePoint {
                offset: start,
                value,
            })?;
            let mut buf = [0u8; 4];
            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            Ok(next + width)
        }
        _ => {
            let sequence = std::str::from_utf8(&bytes[start + 1..])
                .ok()
                .and_then(|rest| rest.chars().next())
                .unwrap_or(c as char);
            Err(EscapeError::UnknownEscape {
                offset: start,
                sequence,
            })
        }
    }
}

/// Parse exactly `count` digits of `radix` starting at `from`
fn read_digits(bytes: &[u8], from: usize, count: usize, radix: u32) -> Option<u32> {
    let digits = bytes.get(from..from + count)?;
    digits.iter().try_fold(0u32, |acc, &b| {
        let digit = (b as char).to_digit(radix)?;
        Some(acc * radix + digit)
    })
}
