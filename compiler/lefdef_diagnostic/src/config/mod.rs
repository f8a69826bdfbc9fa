//! Reporter configuration: limits, disabled ids and the fallback log file.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::MessageId;

/// Rejected limit values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LimitError {
    #[error("message limit for {id} must not be negative (got {limit})")]
    NegativeMessageLimit { id: MessageId, limit: i64 },
    #[error("total message limit must not be negative (got {0})")]
    NegativeTotalLimit(i64),
    #[error("limit {0} does not fit in 32 bits")]
    TooLarge(i64),
}

/// Whether an existing fallback log file is kept or replaced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogMode {
    #[default]
    Truncate,
    Append,
}

/// Where messages without a registered callback go.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogFileConfig {
    /// Overrides the dialect's default file name (`lefRWarning.log`,
    /// `defRWarning.log`).
    pub path: Option<PathBuf>,
    pub mode: LogMode,
}

/// Configuration for message filtering and counting.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagnosticConfig {
    /// Per-id display limits. Ids without an entry are unlimited.
    pub message_limits: FxHashMap<MessageId, u32>,
    /// Maximum number of delivered messages (0 = unlimited).
    pub total_message_limit: u32,
    /// Ids that are never delivered.
    pub disabled: FxHashSet<MessageId>,
    /// Error ids that are delivered but not added to the error count.
    pub uncounted_errors: RangeInclusive<u32>,
    pub log_file: LogFileConfig,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            message_limits: FxHashMap::default(),
            total_message_limit: 0,
            disabled: FxHashSet::default(),
            uncounted_errors: 1300..=1499,
            log_file: LogFileConfig::default(),
        }
    }
}

impl DiagnosticConfig {
    /// Limit how many times `id` is displayed. Zero means unlimited.
    pub fn with_message_limit(mut self, id: MessageId, limit: i64) -> Result<Self, LimitError> {
        if limit < 0 {
            return Err(LimitError::NegativeMessageLimit { id, limit });
        }
        let limit = u32::try_from(limit).map_err(|_| LimitError::TooLarge(limit))?;
        if limit == 0 {
            self.message_limits.remove(&id);
        } else {
            self.message_limits.insert(id, limit);
        }
        Ok(self)
    }

    /// Cap the number of delivered messages. Zero means unlimited.
    pub fn with_total_message_limit(mut self, limit: i64) -> Result<Self, LimitError> {
        if limit < 0 {
            return Err(LimitError::NegativeTotalLimit(limit));
        }
        self.total_message_limit = u32::try_from(limit).map_err(|_| LimitError::TooLarge(limit))?;
        Ok(self)
    }

    #[must_use]
    pub fn disable(mut self, id: MessageId) -> Self {
        self.disabled.insert(id);
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>, mode: LogMode) -> Self {
        self.log_file = LogFileConfig {
            path: Some(path.into()),
            mode,
        };
        self
    }

    /// Display limit for `id`, if one is set.
    pub fn limit_for(&self, id: MessageId) -> Option<u32> {
        self.message_limits.get(&id).copied()
    }

    #[inline]
    pub fn is_disabled(&self, id: MessageId) -> bool {
        self.disabled.contains(&id)
    }

    #[inline]
    pub fn counts_as_error(&self, id: MessageId) -> bool {
        !self.uncounted_errors.contains(&id.get())
    }
}
