//! Stream driver for the concatenation tool
//!
//! Threads every input line through squeezer, numbering policy and formatter,
//! then writes it with a single `\n` terminator. Sources are processed left to
//! right. The line counter is shared by all of them while the squeeze state is
//! fresh for each source.
//!
//! Input failures (open or read) are logged and only end the affected source.
//! Output failures are returned to the caller since nothing useful can follow.

use super::flags::EffectiveFlags;
use super::format::render_into;
use super::line_reader::LineReader;
use super::numbering::{LineCounter, NumberingPolicy};
use super::source::Source;
use super::squeeze::Squeezer;
use std::fmt;
use std::io::{self, BufRead, Write};

/// How processing of one source ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOutcome {
    /// Read to end of stream
    Completed {
        /// Lines written
        lines: u64,
    },
    /// Could not be opened, nothing was read
    OpenFailed,
    /// A read error stopped the source early
    ReadFailed {
        /// Lines written before the error
        lines: u64,
    },
}

impl SourceOutcome {
    /// Did the source fail?
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Completed { .. })
    }
}

/// Tally of one invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Sources attempted
    pub sources: usize,
    /// Sources that could not be opened
    pub open_failures: usize,
    /// Sources cut short by a read error
    pub read_failures: usize,
    /// Lines written across all sources
    pub lines_written: u64,
}

impl RunSummary {
    /// Did any source fail?
    pub fn has_failures(&self) -> bool {
        self.open_failures > 0 || self.read_failures > 0
    }

    fn record(&mut self, outcome: SourceOutcome) {
        self.sources += 1;
        match outcome {
            SourceOutcome::Completed { lines } => self.lines_written += lines,
            SourceOutcome::OpenFailed => self.open_failures += 1,
            SourceOutcome::ReadFailed { lines } => {
                self.lines_written += lines;
                self.read_failures += 1;
            }
        }
    }
}

/// Line pipeline writing into an output sink
pub struct Concatenator<W: Write> {
    flags: EffectiveFlags,
    numbering: NumberingPolicy,
    counter: LineCounter,
    summary: RunSummary,
    out: W,
    line_buf: Vec<u8>,
}

impl<W: Write> Concatenator<W> {
    /// Create a driver for the given flags and sink
    pub fn new(flags: EffectiveFlags, out: W) -> Self {
        Self {
            flags,
            numbering: NumberingPolicy::new(flags.number),
            counter: LineCounter::new(),
            summary: RunSummary::default(),
            out,
            line_buf: Vec::with_capacity(256),
        }
    }

    /// Flags in effect
    pub fn flags(&self) -> &EffectiveFlags {
        &self.flags
    }

    /// Shared line counter
    pub fn counter(&self) -> LineCounter {
        self.counter
    }

    /// Tally so far
    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Process every source in order, then flush the sink
    pub fn run(&mut self, sources: &[Source]) -> io::Result<RunSummary> {
        for source in sources {
            self.process(source)?;
        }
        self.out.flush()?;
        Ok(self.summary)
    }

    /// Open and process one source
    ///
    /// The handle is dropped before this returns.
    pub fn process(&mut self, source: &Source) -> io::Result<SourceOutcome> {
        let outcome = match source.open() {
            Ok(reader) => self.process_stream(source, reader)?,
            Err(e) => {
                tracing::error!("{}", e);
                SourceOutcome::OpenFailed
            }
        };
        self.summary.record(outcome);
        Ok(outcome)
    }

    /// Process an already opened stream
    ///
    /// `name` only labels diagnostics. The outcome is not added to the summary;
    /// [`Concatenator::process`] does that.
    pub fn process_stream<R, N>(&mut self, name: N, reader: R) -> io::Result<SourceOutcome>
    where
        R: BufRead,
        N: fmt::Display,
    {
        let mut lines = LineReader::new(reader);
        let mut squeezer = Squeezer::new(self.flags.squeeze_blank);
        let mut written = 0u64;

        loop {
            let line = match lines.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    tracing::error!("{}: {}", name, e);
                    return Ok(SourceOutcome::ReadFailed { lines: written });
                }
            };

            if squeezer.skip(&line) {
                continue;
            }
            self.write_line(&line)?;
            written += 1;
        }

        tracing::debug!(source = %name, lines = written, "source finished");
        Ok(SourceOutcome::Completed { lines: written })
    }

    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.line_buf.clear();
        self.numbering
            .write_prefix(line, &mut self.counter, &mut self.line_buf);
        render_into(line, &self.flags, &mut self.line_buf);
        self.line_buf.push(b'\n');
        self.out.write_all(&self.line_buf)
    }

    /// Flush and hand back the sink
    pub fn into_inner(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::flags::NumberMode;
    use std::io::{BufReader, Cursor, Read};

    fn run_one(flags: EffectiveFlags, input: &str) -> String {
        let mut cat = Concatenator::new(flags, Vec::new());
        cat.process_stream("test", Cursor::new(input.as_bytes().to_vec()))
            .unwrap();
        String::from_utf8(cat.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(run_one(EffectiveFlags::default(), "a\n\tb\n"), "a\n\tb\n");
    }

    #[test]
    fn test_adds_missing_final_newline() {
        assert_eq!(run_one(EffectiveFlags::default(), "a\nb"), "a\nb\n");
    }

    #[test]
    fn test_squeeze() {
        let flags = EffectiveFlags {
            squeeze_blank: true,
            ..Default::default()
        };
        assert_eq!(run_one(flags, "hello\n\n\nworld\n"), "hello\n\nworld\n");
    }

    #[test]
    fn test_squeezed_lines_are_not_numbered() {
        let flags = EffectiveFlags {
            squeeze_blank: true,
            number: NumberMode::All,
            ..Default::default()
        };
        assert_eq!(
            run_one(flags, "a\n\n\n\nb\n"),
            "     1  a\n     2  \n     3  b\n"
        );
    }

    #[test]
    fn test_number_then_render() {
        let flags = EffectiveFlags {
            number: NumberMode::NonBlank,
            show_ends: true,
            show_tabs: true,
            ..Default::default()
        };
        assert_eq!(run_one(flags, "x\ty\n\n"), "     1  x^Iy$\n$\n");
    }

    #[test]
    fn test_counter_shared_between_streams() {
        let flags = EffectiveFlags {
            number: NumberMode::All,
            ..Default::default()
        };
        let mut cat = Concatenator::new(flags, Vec::new());
        cat.process_stream("one", Cursor::new(b"a\nb\n".to_vec())).unwrap();
        cat.process_stream("two", Cursor::new(b"c\n".to_vec())).unwrap();
        assert_eq!(cat.counter().value(), 3);
        let out = String::from_utf8(cat.into_inner().unwrap()).unwrap();
        assert_eq!(out, "     1  a\n     2  b\n     3  c\n");
    }

    #[test]
    fn test_squeeze_resets_between_streams() {
        let flags = EffectiveFlags {
            squeeze_blank: true,
            ..Default::default()
        };
        let mut cat = Concatenator::new(flags, Vec::new());
        cat.process_stream("one", Cursor::new(b"a\n\n".to_vec())).unwrap();
        cat.process_stream("two", Cursor::new(b"\nb\n".to_vec())).unwrap();
        let out = String::from_utf8(cat.into_inner().unwrap()).unwrap();
        assert_eq!(out, "a\n\n\nb\n");
    }

    struct Broken(Cursor<Vec<u8>>);

    impl Read for Broken {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.0.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::Other, "read failed")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn test_read_error_keeps_written_lines() {
        let mut cat = Concatenator::new(EffectiveFlags::default(), Vec::new());
        let reader = BufReader::new(Broken(Cursor::new(b"kept\npartial".to_vec())));
        let outcome = cat.process_stream("broken", reader).unwrap();
        assert_eq!(outcome, SourceOutcome::ReadFailed { lines: 1 });
        assert!(outcome.is_failure());
        assert_eq!(cat.into_inner().unwrap(), b"kept\n".to_vec());
    }

    struct FullSink;

    impl Write for FullSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_is_returned() {
        let mut cat = Concatenator::new(EffectiveFlags::default(), FullSink);
        let err = cat
            .process_stream("in", Cursor::new(b"a\n".to_vec()))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_open_failure_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let mut cat = Concatenator::new(EffectiveFlags::default(), Vec::new());
        let outcome = cat
            .process(&Source::File(dir.path().join("nope")))
            .unwrap();
        assert_eq!(outcome, SourceOutcome::OpenFailed);
        let summary = cat.summary();
        assert_eq!(summary.sources, 1);
        assert_eq!(summary.open_failures, 1);
        assert!(summary.has_failures());
    }
}
