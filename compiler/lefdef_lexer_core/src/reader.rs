//! Block-buffered byte reader with single-byte pushback.
//!
//! The first refill reads a 4-byte probe so callers can sniff the input
//! format (see [`BufferedReader::probe`]); later refills read whole blocks.
//! Carriage returns are dropped on the way out and every delivered `\n`
//! advances the line counter.
//!
//! Pushback works inside the current buffer segment only: the byte just
//! returned by [`get_char`](BufferedReader::get_char) can always be pushed
//! back, but nothing before the start of the segment can.

use std::io;

use crate::ByteSource;

/// Size of the format-sniffing probe read first.
pub const PROBE_LEN: usize = 4;

/// Default refill size after the probe.
pub const DEFAULT_BLOCK_SIZE: usize = 16 * 1024;

/// Reader failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReaderError {
    #[error("read from {source_name} failed: {message}")]
    Io {
        source_name: String,
        kind: io::ErrorKind,
        message: String,
    },
    #[error("buffer access violation: no room to push a byte back")]
    PushbackViolation,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Fill {
    /// Nothing read yet; the next refill reads the probe.
    Unprobed,
    Streaming,
    /// The source returned end of input; it is not called again.
    Exhausted,
}

struct Progress {
    every: u64,
    callback: Box<dyn FnMut(u64)>,
}

/// Buffered reader over a [`ByteSource`].
pub struct BufferedReader<S> {
    source: S,
    /// Segment storage; `buf[pos..end]` is unread.
    buf: Vec<u8>,
    pos: usize,
    end: usize,
    fill: Fill,
    probe: [u8; PROBE_LEN],
    probe_len: usize,
    /// Current line, starting at 1.
    line: u64,
    /// Highest line reached, so pushback never re-fires progress.
    high_water: u64,
    progress: Option<Progress>,
}

impl<S: ByteSource> BufferedReader<S> {
    pub fn new(source: S) -> Self {
        Self::with_block_size(source, DEFAULT_BLOCK_SIZE)
    }

    /// Reader refilling `block_size` bytes at a time (at least the probe size).
    pub fn with_block_size(source: S, block_size: usize) -> Self {
        BufferedReader {
            source,
            buf: vec![0; block_size.max(PROBE_LEN)],
            pos: 0,
            end: 0,
            fill: Fill::Unprobed,
            probe: [0; PROBE_LEN],
            probe_len: 0,
            line: 1,
            high_water: 1,
            progress: None,
        }
    }

    /// Call `callback` with the line number each time a multiple of `every`
    /// is reached for the first time. `every` of zero disables reporting.
    pub fn set_progress(&mut self, every: u64, callback: impl FnMut(u64) + 'static) {
        self.progress = (every > 0).then(|| Progress {
            every,
            callback: Box::new(callback),
        });
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    #[inline]
    pub fn line(&self) -> u64 {
        self.line
    }

    /// The first bytes of the input (up to [`PROBE_LEN`]), once read.
    pub fn probe(&self) -> &[u8] {
        &self.probe[..self.probe_len]
    }

    /// Force the probe read without consuming anything.
    pub fn fill_probe(&mut self) -> Result<&[u8], ReaderError> {
        if self.fill == Fill::Unprobed && self.pos >= self.end {
            self.refill()?;
        }
        Ok(self.probe())
    }

    /// Next byte with `\r` dropped, or `None` at end of input.
    pub fn get_char(&mut self) -> Result<Option<u8>, ReaderError> {
        loop {
            if self.pos >= self.end && !self.refill()? {
                return Ok(None);
            }
            let byte = self.buf[self.pos];
            self.pos += 1;
            match byte {
                b'\r' => continue,
                b'\n' => {
                    self.line += 1;
                    self.note_line();
                }
                _ => {}
            }
            return Ok(Some(byte));
        }
    }

    /// Push `byte` back so the next [`get_char`](Self::get_char) returns it.
    pub fn unget(&mut self, byte: u8) -> Result<(), ReaderError> {
        if self.pos == 0 {
            return Err(ReaderError::PushbackViolation);
        }
        self.pos -= 1;
        self.buf[self.pos] = byte;
        if byte == b'\n' {
            self.line -= 1;
        }
        Ok(())
    }

    fn note_line(&mut self) {
        if self.line <= self.high_water {
            return;
        }
        self.high_water = self.line;
        if let Some(progress) = &mut self.progress {
            if self.line % progress.every == 0 {
                (progress.callback)(self.line);
            }
        }
    }

    /// Load the next segment. Returns `false` at end of input.
    fn refill(&mut self) -> Result<bool, ReaderError> {
        let n = match self.fill {
            Fill::Exhausted => return Ok(false),
            Fill::Unprobed => {
                let n = self.read_probe()?;
                self.probe[..n].copy_from_slice(&self.buf[..n]);
                self.probe_len = n;
                self.fill = Fill::Streaming;
                n
            }
            Fill::Streaming => self.read_block()?,
        };
        if n == 0 {
            self.fill = Fill::Exhausted;
            return Ok(false);
        }
        self.pos = 0;
        self.end = n;
        Ok(true)
    }

    /// Read until the probe is full or the source ends. Short inputs are
    /// accepted.
    fn read_probe(&mut self) -> Result<usize, ReaderError> {
        let mut filled = 0;
        while filled < PROBE_LEN {
            match self.source.read(&mut self.buf[filled..PROBE_LEN]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(self.io_error(&err)),
            }
        }
        Ok(filled)
    }

    fn read_block(&mut self) -> Result<usize, ReaderError> {
        loop {
            match self.source.read(&mut self.buf) {
                Ok(n) => return Ok(n),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(self.io_error(&err)),
            }
        }
    }

    fn io_error(&self, err: &io::Error) -> ReaderError {
        ReaderError::Io {
            source_name: self.source.name().to_owned(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl<S> std::fmt::Debug for BufferedReader<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferedReader")
            .field("pos", &self.pos)
            .field("end", &self.end)
            .field("fill", &self.fill)
            .field("line", &self.line)
            .finish_non_exhaustive()
    }
}
