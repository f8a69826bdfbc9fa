//! Rate-limited diagnostic reporter.
//!
//! Processing order for each message:
//! 1. fatal latch: nothing is delivered once a fatal error was reported
//! 2. disabled ids: dropped, with one "suppressed" notice per id
//! 3. global cap: dropped once `total_message_limit` messages went out
//! 4. per-id limit: dropped past the limit, with one "exceeded" notice per id
//!
//! Delivered messages are counted and forwarded to the sink. Notices bypass
//! the limits and do not count towards the global cap.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    Diagnostic, DiagnosticConfig, DiagnosticSink, MessageId, Severity, SourceLocation,
};

/// Message family and notice ids of one reader.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Profile {
    /// `LEFPARS` or `DEFPARS`.
    pub prefix: &'static str,
    /// Id of the notice sent the first time a disabled id is reported.
    pub suppressed_notice: MessageId,
    /// Id of the notice sent when an id first exceeds its display limit.
    pub limit_notice: MessageId,
}

/// What happened to a reported message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Disposition {
    Delivered,
    AfterFatal,
    Disabled,
    TotalCapReached,
    LimitExceeded,
}

#[derive(Copy, Clone, Debug, Default)]
struct Tally {
    delivered: u32,
    limit_noticed: bool,
}

/// Session-wide reporter.
pub struct Diagnostics {
    profile: Profile,
    config: DiagnosticConfig,
    sink: Box<dyn DiagnosticSink>,
    tallies: FxHashMap<MessageId, Tally>,
    suppression_noticed: FxHashSet<MessageId>,
    delivered: u64,
    errors: u64,
    warnings: u64,
    infos: u64,
    fatal: bool,
}

impl Diagnostics {
    pub fn new(profile: Profile, config: DiagnosticConfig, sink: Box<dyn DiagnosticSink>) -> Self {
        Diagnostics {
            profile,
            config,
            sink,
            tallies: FxHashMap::default(),
            suppression_noticed: FxHashSet::default(),
            delivered: 0,
            errors: 0,
            warnings: 0,
            infos: 0,
            fatal: false,
        }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn config(&self) -> &DiagnosticConfig {
        &self.config
    }

    /// Report a message.
    pub fn report(
        &mut self,
        severity: Severity,
        id: MessageId,
        message: impl Into<String>,
        location: Option<SourceLocation>,
    ) -> Disposition {
        if self.fatal {
            return Disposition::AfterFatal;
        }

        if self.config.is_disabled(id) {
            if self.suppression_noticed.insert(id) {
                let text = format!(
                    "Message ({}-{id}) has been suppressed from output.",
                    self.profile.prefix
                );
                self.notice(self.profile.suppressed_notice, text, location);
            }
            tracing::debug!(%id, "message disabled");
            return Disposition::Disabled;
        }

        let cap = u64::from(self.config.total_message_limit);
        if cap > 0 && self.delivered >= cap {
            return Disposition::TotalCapReached;
        }

        if let Some(limit) = self.config.limit_for(id) {
            let tally = self.tallies.entry(id).or_default();
            if tally.delivered >= limit {
                if !tally.limit_noticed {
                    tally.limit_noticed = true;
                    let text = format!(
                        "Message ({}-{id}) has exceeded the message display limit of {limit}.",
                        self.profile.prefix
                    );
                    self.notice(self.profile.limit_notice, text, location);
                }
                return Disposition::LimitExceeded;
            }
            tally.delivered += 1;
        }

        let mut diagnostic = Diagnostic::new(severity, id, self.profile.prefix, message);
        diagnostic.location = location;
        self.deliver(&diagnostic);
        Disposition::Delivered
    }

    pub fn error(
        &mut self,
        id: MessageId,
        message: impl Into<String>,
        location: Option<SourceLocation>,
    ) -> Disposition {
        self.report(Severity::Error, id, message, location)
    }

    pub fn warning(
        &mut self,
        id: MessageId,
        message: impl Into<String>,
        location: Option<SourceLocation>,
    ) -> Disposition {
        self.report(Severity::Warning, id, message, location)
    }

    pub fn info(
        &mut self,
        id: MessageId,
        message: impl Into<String>,
        location: Option<SourceLocation>,
    ) -> Disposition {
        self.report(Severity::Info, id, message, location)
    }

    /// Set the fatal latch. Later reports are suppressed.
    pub fn trip_fatal(&mut self) {
        if !self.fatal {
            tracing::debug!("diagnostics fatal latch set");
        }
        self.fatal = true;
    }

    #[inline]
    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    /// Errors counted so far (ids in the uncounted window excluded).
    pub fn error_count(&self) -> u64 {
        self.errors
    }

    pub fn warning_count(&self) -> u64 {
        self.warnings
    }

    pub fn info_count(&self) -> u64 {
        self.infos
    }

    /// Messages delivered so far, notices excluded.
    pub fn delivered_count(&self) -> u64 {
        self.delivered
    }

    pub fn flush(&mut self) {
        self.sink.flush();
    }

    fn deliver(&mut self, diagnostic: &Diagnostic) {
        self.delivered += 1;
        match diagnostic.severity {
            Severity::Error => {
                if self.config.counts_as_error(diagnostic.id) {
                    self.errors += 1;
                }
            }
            Severity::Warning => self.warnings += 1,
            Severity::Info => self.infos += 1,
        }
        tracing::debug!(
            severity = %diagnostic.severity,
            id = %diagnostic.id,
            message = %diagnostic.message,
            "diagnostic"
        );
        self.sink.emit(diagnostic);
    }

    fn notice(&mut self, id: MessageId, text: String, location: Option<SourceLocation>) {
        let mut diagnostic = Diagnostic::new(Severity::Warning, id, self.profile.prefix, text);
        diagnostic.location = location;
        self.warnings += 1;
        self.sink.emit(&diagnostic);
    }
}

impl std::fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("profile", &self.profile)
            .field("delivered", &self.delivered)
            .field("errors", &self.errors)
            .field("warnings", &self.warnings)
            .field("fatal", &self.fatal)
            .finish_non_exhaustive()
    }
}
