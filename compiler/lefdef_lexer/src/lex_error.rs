//! Fatal tokenizer errors.
//!
//! Every variant stops the session: the error is reported once through the
//! diagnostics reporter under the dialect's message id, the fatal latch is
//! set, and every later [`next_token`](crate::Tokenizer::next_token) call
//! returns the same error. Recoverable problems (numbers out of range,
//! malformed extension tags, rejected redefinitions) are diagnostics only.

use lefdef_diagnostic::MessageId;
use lefdef_lexer_core::{CapacityError, ReaderError};

use crate::MessageIds;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unterminated quoted string starting at line {line}")]
    UnterminatedString { line: u64 },

    #[error("End of file in &ALIAS {name}")]
    UnterminatedAlias { name: String },

    #[error("alias and define expansion nested deeper than {limit} levels")]
    ExpansionStackOverflow { limit: usize },

    #[error(
        "Invalid characters found in '{token}'. \
         These characters might be using a character set other than ASCII."
    )]
    InvalidCharacterInToken { token: String },

    #[error("Unexpected end of file inside {keyword} statement")]
    UnterminatedBlock { keyword: &'static str },

    #[error("Odd punctuation found: '{token}'")]
    OddPunctuation { token: String },

    #[error("Symbol ';' should be separated by space(s) in '{token}'")]
    SemicolonNotSeparated { token: String },

    #[error("Incomplete file: {terminator} statement is missing")]
    IncompleteInput { terminator: &'static str },

    #[error(transparent)]
    Reader(#[from] ReaderError),

    #[error(transparent)]
    Capacity(#[from] CapacityError),
}

impl LexError {
    /// Id this error is reported under.
    pub fn message_id(&self, ids: &MessageIds) -> MessageId {
        match self {
            LexError::UnterminatedString { .. } => ids.unterminated_string,
            LexError::UnterminatedAlias { .. } => ids.alias_unterminated,
            LexError::ExpansionStackOverflow { .. } => ids.expansion_overflow,
            LexError::InvalidCharacterInToken { .. } => ids.invalid_character,
            LexError::UnterminatedBlock { .. } => ids.unterminated_block,
            LexError::OddPunctuation { .. } => ids.odd_punctuation,
            LexError::SemicolonNotSeparated { .. } => ids.semicolon_not_separated,
            LexError::IncompleteInput { .. } => ids.incomplete_input,
            LexError::Reader(_) | LexError::Capacity(_) => ids.reader_failure,
        }
    }
}
