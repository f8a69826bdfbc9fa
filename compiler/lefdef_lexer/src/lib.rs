//! Context-sensitive tokenizer for the LEF and DEF physical design formats.
//!
//! One engine serves both formats; the differences (keyword table, message
//! prefix and ids, terminator statement, numeric range) live in a
//! [`Dialect`]. The grammar pulls tokens with [`Tokenizer::next_token`] and
//! steers classification through [`LexerState`]: newline significance,
//! "dumb mode" (keyword recognition suppressed for the next N tokens),
//! "no number" mode, real-number mode and per-keyword toggles.
//!
//! # Architecture
//!
//! ```text
//! ByteSource -> BufferedReader -> raw scan -> classify -> StringArena -> Token
//!                                   ^    |
//!                     ExpansionStack +    +-> AliasTable / DefineTables
//! ```
//!
//! `&ALIAS name = ... &ENDALIAS` bodies and string defines are expanded by
//! pushing their text onto a bounded [`ExpansionStack`]; raw scanning drains
//! the top frame before touching the reader again.
//!
//! Token strings live in a small ring ([`StringArena`]). A [`Token`] holds an
//! [`ArenaRef`] that stays readable until the ring wraps; callers that keep
//! values longer copy them out with [`Tokenizer::to_owned_token`].

mod config;
mod dialect;
mod lex_error;
mod macros;
mod state;
mod token;
mod tokenizer;

pub use config::{ConfigError, LexerConfig, RedefinitionPolicy};
pub use dialect::{Dialect, KeywordId, KeywordTable, MessageIds, NumericRange};
pub use lex_error::LexError;
pub use macros::{Definition, ExpansionFrame, ExpansionStack, MacroTables, NumericDefine};
pub use state::{Countdown, KeywordToggles, LexerState};
pub use token::{Comparison, OwnedToken, Token};
pub use tokenizer::Tokenizer;

pub use lefdef_lexer_core::{
    ArenaError, ArenaRef, ByteSource, CallbackSource, ReadSource, ReaderError, StringArena,
};
