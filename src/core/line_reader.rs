//! Byte-oriented line reader
//!
//! Yields successive input lines with their terminator stripped. A line ends at
//! `\n`; a `\r` directly before it belongs to the terminator, as does a `\r`
//! ending the stream. The last line of a stream is yielded even when it has no
//! terminator.

use std::io::{self, BufRead};

/// Line iterator over any buffered reader
pub struct LineReader<R> {
    reader: R,
    buffer: Vec<u8>,
    finished: bool,
}

impl<R: BufRead> LineReader<R> {
    /// Create a new line reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::with_capacity(256),
            finished: false,
        }
    }

    /// Read the next line into an owned buffer
    ///
    /// Returns `Ok(None)` at end of stream. After an error the reader is
    /// finished and yields nothing more.
    pub fn next_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        if self.finished {
            return Ok(None);
        }

        self.buffer.clear();
        let read = loop {
            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Err(e);
                }
            }
        };

        if read == 0 {
            self.finished = true;
            return Ok(None);
        }

        let mut line = std::mem::take(&mut self.buffer);
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
