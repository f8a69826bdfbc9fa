//! Classification of a raw word into a grammar token.

use lefdef_diagnostic::Severity;
use lefdef_lexer_core::ByteSource;

use super::Tokenizer;
use crate::{Comparison, KeywordToggles, LexError, Token};

/// Words still recognized as keywords in dumb mode, with their toggle.
const DUMB_MODE_KEYWORDS: [(KeywordToggles, &str, &str); 12] = [
    (KeywordToggles::BY, "BY", "by"),
    (KeywordToggles::DO, "DO", "do"),
    (KeywordToggles::NEW, "NEW", "new"),
    (KeywordToggles::NONDEFAULTRULE, "NONDEFAULTRULE", "nondefaultrule"),
    (KeywordToggles::MUSTJOIN, "MUSTJOIN", "mustjoin"),
    (KeywordToggles::STEP, "STEP", "step"),
    (KeywordToggles::FIXED, "FIXED", "fixed"),
    (KeywordToggles::COVER, "COVER", "cover"),
    (KeywordToggles::ROUTED, "ROUTED", "routed"),
    (KeywordToggles::VIRTUAL, "VIRTUAL", "virtual"),
    (KeywordToggles::RECT, "RECT", "rect"),
    (KeywordToggles::MASK, "MASK", "mask"),
];

const ORIENTATIONS: [&str; 8] = ["N", "S", "E", "W", "FN", "FS", "FE", "FW"];

/// Starts like a number: a digit, `.`, or `-` with something after it.
fn is_numeric_candidate(bytes: &[u8]) -> bool {
    match bytes {
        [first, ..] if first.is_ascii_digit() || *first == b'.' => true,
        [b'-', _, ..] => true,
        _ => false,
    }
}

enum Parsed {
    Integer(i64),
    Real(f64),
}

impl<S: ByteSource> Tokenizer<S> {
    /// Classify the word in the accumulator. Countdowns have already ticked.
    pub(super) fn classify_word(&mut self) -> Result<Token, LexError> {
        if is_numeric_candidate(self.token.as_bytes()) {
            return Ok(self.classify_number());
        }

        let rule_match = match self.state.rule_name() {
            Some(name) if self.token.as_bytes() != b"END" => {
                Some(self.token.as_bytes() == name.as_bytes())
            }
            _ => None,
        };
        match rule_match {
            Some(true) => return Ok(self.identifier()),
            Some(false) => self.state.cancel_dumb_mode(),
            None => {}
        }

        if self.state.dumb_mode().is_active() {
            return Ok(self.classify_dumb());
        }

        match self.token.first() {
            Some(first) if first.is_ascii_alphabetic() || first == b'&' || first == b'_' => {
                self.classify_name()
            }
            _ => self.classify_punctuation(),
        }
    }

    fn identifier(&mut self) -> Token {
        Token::Identifier(self.intern_from(0))
    }

    fn classify_number(&mut self) -> Token {
        if self.state.no_number().is_active() {
            return self.identifier();
        }
        let Ok(text) = std::str::from_utf8(self.token.as_bytes()) else {
            return self.identifier();
        };

        let integer = || text.parse::<i64>().ok().map(Parsed::Integer);
        let real = || text.parse::<f64>().ok().map(Parsed::Real);
        let real_mode = self.state.real_numbers();
        let parsed = if real_mode {
            real().or_else(integer)
        } else {
            integer().or_else(real)
        };

        #[allow(clippy::cast_precision_loss, reason = "token numbers are f64")]
        let value = match parsed {
            Some(Parsed::Integer(n)) => n as f64,
            Some(Parsed::Real(x)) => x,
            None => return self.identifier(),
        };

        let range = self
            .config
            .numeric_range
            .unwrap_or(self.dialect.numeric_range);
        if !real_mode && !range.contains(value) {
            let message = format!("Number has exceeded the limit for an integer: {text}");
            self.report(
                Severity::Error,
                self.dialect.messages.number_out_of_range,
                message,
            );
        }
        Token::Number(value)
    }

    /// Dumb mode: only single-byte punctuation and toggled keywords survive.
    fn classify_dumb(&mut self) -> Token {
        let bytes = self.token.as_bytes();
        if let [byte @ (b'(' | b')' | b'+' | b';' | b'*')] = *bytes {
            if matches!(byte, b';' | b'+') {
                self.state.finish_modes(self.dialect.separator_ends_no_number);
            }
            return Token::Punct(byte);
        }

        let toggles = self.state.toggles();
        let toggled = DUMB_MODE_KEYWORDS
            .iter()
            .find(|(flag, upper, lower)| {
                toggles.contains(*flag)
                    && (bytes == upper.as_bytes() || bytes == lower.as_bytes())
            })
            .map(|(_, upper, _)| *upper);
        let orientation = || {
            let upper = bytes.to_ascii_uppercase();
            ORIENTATIONS
                .iter()
                .find(|name| name.as_bytes() == upper.as_slice())
                .copied()
        };
        let keyword = toggled.or_else(|| {
            toggles
                .contains(KeywordToggles::ORIENTATION)
                .then(orientation)
                .flatten()
        });

        let id = keyword.and_then(|name| self.dialect.keyword(name));
        match id {
            Some(id) => Token::Keyword(id),
            None => self.identifier(),
        }
    }

    /// Words starting with a letter, `&` or `_`.
    fn classify_name(&mut self) -> Result<Token, LexError> {
        let upper = self.token.as_bytes().to_ascii_uppercase();
        let keyword = std::str::from_utf8(&upper)
            .ok()
            .and_then(|upper| self.dialect.keyword(upper));

        if let Some(id) = keyword {
            if Some(id) == self.special.history {
                return self.scan_history(id);
            }
            if Some(id) == self.special.extension {
                return self.scan_extension(id);
            }
            return Ok(Token::Keyword(id));
        }

        if self.token.first() == Some(b'&') {
            return Ok(self.resolve_define());
        }
        Ok(self.identifier())
    }

    /// An `&name` inside a define statement: a text define resolves to a
    /// keyword, a quoted string or an identifier.
    fn resolve_define(&mut self) -> Token {
        let name = self.token_string();
        let Some(value) = self.macros.text_define(&name).cloned() else {
            return self.identifier();
        };
        if let Some(id) = self.dialect.keyword(&value.to_ascii_uppercase()) {
            return Token::Keyword(id);
        }
        match value.strip_prefix('"') {
            Some(quoted) => Token::QuotedString(self.arena.intern(quoted)),
            None => Token::Identifier(self.arena.intern(&value)),
        }
    }

    fn classify_punctuation(&mut self) -> Result<Token, LexError> {
        let bytes = self.token.as_bytes();
        if let [byte] = *bytes {
            return Ok(Token::Punct(byte));
        }
        if let Some(op) = Comparison::from_bytes(bytes) {
            return Ok(Token::Comparison(op));
        }
        let token = self.token_string();
        if self.dialect.check_glued_semicolon && bytes.first() == Some(&b';') {
            return Err(LexError::SemicolonNotSeparated { token });
        }
        Err(LexError::OddPunctuation { token })
    }
}
