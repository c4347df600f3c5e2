//! Input sources
//!
//! A source is either standard input or a named file. The argument `-` is the
//! sentinel for standard input.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Sentinel argument meaning standard input
pub const STDIN_SENTINEL: &str = "-";

/// Source errors
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The named file could not be opened
    #[error("{}: {source}", path.display())]
    Open {
        /// Path as given on the command line
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// A named input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input
    Stdin,
    /// A file path
    File(PathBuf),
}

impl Source {
    /// Build a source from a command-line argument
    pub fn from_arg(arg: impl AsRef<Path>) -> Self {
        let arg = arg.as_ref();
        if arg == Path::new(STDIN_SENTINEL) {
            Self::Stdin
        } else {
            Self::File(arg.to_path_buf())
        }
    }

    /// Build the source list for an invocation
    ///
    /// No arguments means standard input, read once.
    pub fn from_args<I, P>(args: I) -> Vec<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let sources: Vec<Self> = args.into_iter().map(Self::from_arg).collect();
        if sources.is_empty() {
            vec![Self::Stdin]
        } else {
            sources
        }
    }

    /// Open the source for buffered reading
    ///
    /// The handle lives as long as the returned reader.
    pub fn open(&self) -> Result<Box<dyn BufRead>, SourceError> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(path).map_err(|source| SourceError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str(STDIN_SENTINEL),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
