//! Tokens handed to the grammar.

use std::fmt;

use lefdef_lexer_core::ArenaRef;

use crate::KeywordId;

/// Two-byte comparison operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `<>`
    Ne,
}

impl Comparison {
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes {
            b">=" => Some(Comparison::Ge),
            b"<=" => Some(Comparison::Le),
            b"<>" => Some(Comparison::Ne),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Comparison::Ge => ">=",
            Comparison::Le => "<=",
            Comparison::Ne => "<>",
        }
    }
}

/// A classified token.
///
/// String payloads are [`ArenaRef`] handles; resolve them with
/// [`Tokenizer::text`](crate::Tokenizer::text) before the arena wraps.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Token {
    /// Single punctuation byte such as `;`, `(`, `+`, `-`.
    Punct(u8),
    Comparison(Comparison),
    Number(f64),
    /// Contents of a quoted string, delimiters and escapes removed.
    QuotedString(ArenaRef),
    Identifier(ArenaRef),
    Keyword(KeywordId),
    /// Free-form text captured after the history or extension keyword.
    Block { keyword: KeywordId, text: ArenaRef },
    /// Only produced while newlines are significant.
    Newline,
    EndOfInput,
}

impl Token {
    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self, Token::EndOfInput)
    }
}

/// A token with its strings copied out of the arena.
#[derive(Clone, Debug, PartialEq)]
pub enum OwnedToken {
    Punct(char),
    Comparison(Comparison),
    Number(f64),
    QuotedString(String),
    Identifier(String),
    Keyword(&'static str),
    Block { keyword: &'static str, text: String },
    Newline,
    EndOfInput,
}

impl fmt::Display for OwnedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnedToken::Punct(c) => write!(f, "Punct({c})"),
            OwnedToken::Comparison(op) => write!(f, "Comparison({})", op.as_str()),
            OwnedToken::Number(n) => write!(f, "Number({n})"),
            OwnedToken::QuotedString(s) => write!(f, "QuotedString({s:?})"),
            OwnedToken::Identifier(s) => write!(f, "Identifier({s})"),
            OwnedToken::Keyword(k) => write!(f, "Keyword({k})"),
            OwnedToken::Block { keyword, text } => write!(f, "Block({keyword}, {text:?})"),
            OwnedToken::Newline => f.write_str("Newline"),
            OwnedToken::EndOfInput => f.write_str("EndOfInput"),
        }
    }
}
