//! Diagnostic reporting for the LEF/DEF readers.
//!
//! Messages are identified by a numeric [`MessageId`] and rendered in the
//! classic reader format:
//!
//! ```text
//! WARNING (LEFPARS-2000): Alias redefined. See file tech.lef at line 12.
//! ```
//!
//! The [`Diagnostics`] reporter sits between the tokenizer (or grammar) and a
//! [`DiagnosticSink`]. It applies, in order:
//! - the fatal latch (nothing is reported after a fatal error)
//! - disabled message ids (one "suppressed" notice per id)
//! - the global message cap
//! - per-id display limits (one "exceeded" notice per id)
//!
//! and keeps the session error and warning counts.

mod config;
mod diagnostic;
mod message_id;
pub mod reporter;
pub mod sink;
pub mod syntax_error;

pub use config::{DiagnosticConfig, LimitError, LogFileConfig, LogMode};
pub use diagnostic::{Diagnostic, Severity, SourceLocation};
pub use message_id::MessageId;
pub use reporter::{Diagnostics, Disposition, Profile};
pub use sink::{CallbackSink, CollectingSink, DiagnosticSink, LogFileSink, WriterSink};
pub use syntax_error::{format_syntax_error, FormattedSyntaxError, SyntaxErrorContext, SyntaxErrorKind};
