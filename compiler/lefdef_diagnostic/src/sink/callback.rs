//! Per-severity callbacks.

use crate::{Diagnostic, DiagnosticSink, LogFileSink, MessageId, Severity};

/// Receives the message id and the rendered line.
pub type MessageCallback = Box<dyn FnMut(MessageId, &str)>;

/// Routes each severity to its callback; severities without one go to the
/// fallback log file.
pub struct CallbackSink {
    on_error: Option<MessageCallback>,
    on_warning: Option<MessageCallback>,
    on_info: Option<MessageCallback>,
    fallback: LogFileSink,
}

impl CallbackSink {
    pub fn new(fallback: LogFileSink) -> Self {
        CallbackSink {
            on_error: None,
            on_warning: None,
            on_info: None,
            fallback,
        }
    }

    #[must_use]
    pub fn on_error(mut self, callback: impl FnMut(MessageId, &str) + 'static) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_warning(mut self, callback: impl FnMut(MessageId, &str) + 'static) -> Self {
        self.on_warning = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_info(mut self, callback: impl FnMut(MessageId, &str) + 'static) -> Self {
        self.on_info = Some(Box::new(callback));
        self
    }

    fn callback_for(&mut self, severity: Severity) -> Option<&mut MessageCallback> {
        match severity {
            Severity::Error => self.on_error.as_mut(),
            Severity::Warning => self.on_warning.as_mut(),
            Severity::Info => self.on_info.as_mut(),
        }
    }
}

impl DiagnosticSink for CallbackSink {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        match self.callback_for(diagnostic.severity) {
            Some(callback) => callback(diagnostic.id, &diagnostic.render()),
            None => self.fallback.emit(diagnostic),
        }
    }

    fn flush(&mut self) {
        self.fallback.flush();
    }
}

impl std::fmt::Debug for CallbackSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackSink")
            .field("on_error", &self.on_error.is_some())
            .field("on_warning", &self.on_warning.is_some())
            .field("on_info", &self.on_info.is_some())
            .field("fallback", &self.fallback)
            .finish()
    }
}
