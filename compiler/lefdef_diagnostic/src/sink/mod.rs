//! Diagnostic sinks.
//!
//! A sink receives every diagnostic the reporter lets through:
//! - [`CallbackSink`]: per-severity closures, with a log file fallback
//! - [`LogFileSink`]: lazily opened `*RWarning.log` style file
//! - [`WriterSink`]: any `io::Write`, e.g. stderr for command-line tools
//! - [`CollectingSink`]: keeps records in memory

mod callback;
mod log_file;

pub use callback::{CallbackSink, MessageCallback};
pub use log_file::LogFileSink;

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::Diagnostic;

/// Receiver of delivered diagnostics.
pub trait DiagnosticSink {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self) {}
}

/// Keeps every delivered diagnostic.
///
/// The sink is usually moved into a reporter, so records are read back
/// through the shared handle returned by [`CollectingSink::new`].
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    records: Rc<RefCell<Vec<Diagnostic>>>,
}

impl CollectingSink {
    /// Create a sink and a handle onto its records.
    pub fn new() -> (Self, Rc<RefCell<Vec<Diagnostic>>>) {
        let sink = CollectingSink::default();
        let handle = Rc::clone(&sink.records);
        (sink, handle)
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.records.borrow_mut().push(diagnostic.clone());
    }
}

/// Writes rendered lines to a writer.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stderr> {
    pub fn stderr() -> Self {
        WriterSink::new(io::stderr())
    }
}

impl<W: Write> DiagnosticSink for WriterSink<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let _ = self.writer.write_all(diagnostic.render().as_bytes());
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic);
    }

    fn flush(&mut self) {
        (**self).flush();
    }
}
