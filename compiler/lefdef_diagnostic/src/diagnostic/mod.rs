//! Diagnostic records and their rendered form.

use std::fmt;

use crate::MessageId;

/// How serious a diagnostic is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Upper-case label used in rendered lines.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Input file and line a diagnostic refers to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: String,
    pub line: u64,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u64) -> Self {
        SourceLocation {
            file: file.into(),
            line,
        }
    }
}

/// A single reported message.
///
/// Messages with a location render as
/// `"<LEVEL> (<PREFIX>-<id>): <message> See file <file> at line <n>."`;
/// messages without one (syntax errors carry their own position text)
/// stop after the message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub severity: Severity,
    pub id: MessageId,
    /// Message family, e.g. `LEFPARS` or `DEFPARS`.
    pub prefix: &'static str,
    pub message: String,
    pub location: Option<SourceLocation>,
}

impl Diagnostic {
    pub fn new(
        severity: Severity,
        id: MessageId,
        prefix: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Diagnostic {
            severity,
            id,
            prefix,
            message: message.into(),
            location: None,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// The full line written to log files and handed to callbacks,
    /// including the trailing newline.
    pub fn render(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}-{}): {}",
            self.severity, self.prefix, self.id, self.message
        )?;
        if let Some(location) = &self.location {
            write!(
                f,
                " See file {} at line {}.",
                location.file, location.line
            )?;
        }
        Ok(())
    }
}
