//! Session configuration.

use lefdef_diagnostic::{DiagnosticConfig, LimitError};
use lefdef_lexer_core::{DEFAULT_BLOCK_SIZE, DEFAULT_TOKEN_CAPACITY, MIN_SLOTS};

use crate::NumericRange;

/// What happens when an alias or define name is defined again.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RedefinitionPolicy {
    /// The new definition wins.
    #[default]
    Replace,
    /// The first definition is kept and a warning is reported.
    Reject,
}

/// Rejected configuration values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("string ring needs at least {min} slots (got {requested})")]
    RingTooSmall { requested: usize, min: usize },
    #[error("expansion depth limit must be at least 1")]
    ZeroExpansionDepth,
    #[error("progress interval must be at least 1 line")]
    ZeroProgressDelta,
    #[error("read block size must be at least 1 byte")]
    ZeroBlockSize,
    #[error(transparent)]
    Limit(#[from] LimitError),
}

/// Options for one tokenizer session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LexerConfig {
    /// Byte that starts a comment running to the end of the line.
    pub comment_char: u8,
    /// When false, unquoted tokens are folded to upper case.
    pub names_case_sensitive: bool,
    /// Decode `\x` escapes inside quoted strings.
    pub escape_processing: bool,
    /// Allow newlines inside quoted strings.
    pub multiline_strings: bool,
    /// Progress callback interval in lines.
    pub delta_lines_for_progress: u64,
    pub max_expansion_depth: usize,
    pub ring_size: usize,
    pub read_block_size: usize,
    pub token_capacity: usize,
    pub redefinition: RedefinitionPolicy,
    /// Comment text that fires the magic-comment callback.
    pub magic_comment: Option<String>,
    /// End of input before the grammar saw the terminator is fatal.
    pub require_terminator: bool,
    /// Overrides the dialect's numeric range.
    pub numeric_range: Option<NumericRange>,
    pub diagnostics: DiagnosticConfig,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            comment_char: b'#',
            names_case_sensitive: true,
            escape_processing: true,
            multiline_strings: false,
            delta_lines_for_progress: 1_000_000,
            max_expansion_depth: 20,
            ring_size: MIN_SLOTS,
            read_block_size: DEFAULT_BLOCK_SIZE,
            token_capacity: DEFAULT_TOKEN_CAPACITY,
            redefinition: RedefinitionPolicy::Replace,
            magic_comment: None,
            require_terminator: false,
            numeric_range: None,
            diagnostics: DiagnosticConfig::default(),
        }
    }
}

impl LexerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ring_size < MIN_SLOTS {
            return Err(ConfigError::RingTooSmall {
                requested: self.ring_size,
                min: MIN_SLOTS,
            });
        }
        if self.max_expansion_depth == 0 {
            return Err(ConfigError::ZeroExpansionDepth);
        }
        if self.delta_lines_for_progress == 0 {
            return Err(ConfigError::ZeroProgressDelta);
        }
        if self.read_block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        Ok(())
    }

    #[must_use]
    pub fn with_comment_char(mut self, comment_char: u8) -> Self {
        self.comment_char = comment_char;
        self
    }

    #[must_use]
    pub fn with_case_sensitive_names(mut self, sensitive: bool) -> Self {
        self.names_case_sensitive = sensitive;
        self
    }

    #[must_use]
    pub fn with_escape_processing(mut self, enabled: bool) -> Self {
        self.escape_processing = enabled;
        self
    }

    #[must_use]
    pub fn with_multiline_strings(mut self, enabled: bool) -> Self {
        self.multiline_strings = enabled;
        self
    }

    #[must_use]
    pub fn with_progress_interval(mut self, lines: u64) -> Self {
        self.delta_lines_for_progress = lines;
        self
    }

    #[must_use]
    pub fn with_redefinition(mut self, policy: RedefinitionPolicy) -> Self {
        self.redefinition = policy;
        self
    }

    #[must_use]
    pub fn with_magic_comment(mut self, marker: impl Into<String>) -> Self {
        self.magic_comment = Some(marker.into());
        self
    }

    #[must_use]
    pub fn with_required_terminator(mut self, required: bool) -> Self {
        self.require_terminator = required;
        self
    }

    #[must_use]
    pub fn with_numeric_range(mut self, range: NumericRange) -> Self {
        self.numeric_range = Some(range);
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticConfig) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}
