//! Fallback log file.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::{Diagnostic, DiagnosticSink, LogMode};

enum LogState {
    Closed,
    Open(BufWriter<File>),
    /// Opening or writing failed; later messages are dropped.
    Failed,
}

/// Appends rendered diagnostics to a file that is opened on first use.
///
/// A header naming the input file is written when the file is opened. If the
/// file cannot be opened a single warning goes to stderr and messages are
/// dropped for the rest of the session.
pub struct LogFileSink {
    path: PathBuf,
    mode: LogMode,
    source_name: String,
    state: LogState,
}

impl LogFileSink {
    pub fn new(path: impl Into<PathBuf>, mode: LogMode, source_name: impl Into<String>) -> Self {
        LogFileSink {
            path: path.into(),
            mode,
            source_name: source_name.into(),
            state: LogState::Closed,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file has been opened successfully.
    pub fn is_open(&self) -> bool {
        matches!(self.state, LogState::Open(_))
    }

    fn open(&mut self) -> Option<&mut BufWriter<File>> {
        if let LogState::Closed = self.state {
            let mut options = OpenOptions::new();
            options.create(true);
            match self.mode {
                LogMode::Append => options.append(true),
                LogMode::Truncate => options.write(true).truncate(true),
            };
            self.state = match options.open(&self.path) {
                Ok(file) => {
                    let mut writer = BufWriter::new(file);
                    if writeln!(writer, "Messages from file: {}\n", self.source_name).is_err() {
                        LogState::Failed
                    } else {
                        LogState::Open(writer)
                    }
                }
                Err(err) => {
                    eprintln!(
                        "WARNING: cannot open log file '{}' ({err}); messages will not be saved",
                        self.path.display()
                    );
                    tracing::warn!(path = %self.path.display(), %err, "log file unavailable");
                    LogState::Failed
                }
            };
        }
        match &mut self.state {
            LogState::Open(writer) => Some(writer),
            LogState::Closed | LogState::Failed => None,
        }
    }
}

impl DiagnosticSink for LogFileSink {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let failed = match self.open() {
            Some(writer) => writer.write_all(diagnostic.render().as_bytes()).is_err(),
            None => false,
        };
        if failed {
            tracing::warn!(path = %self.path.display(), "write to log file failed");
            self.state = LogState::Failed;
        }
    }

    fn flush(&mut self) {
        if let LogState::Open(writer) = &mut self.state {
            let _ = writer.flush();
        }
    }
}

impl std::fmt::Debug for LogFileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogFileSink")
            .field("path", &self.path)
            .field("mode", &self.mode)
            .field("open", &self.is_open())
            .finish_non_exhaustive()
    }
}
