//! The tokenizer session.
//!
//! One [`Tokenizer`] owns everything a single LEF or DEF read needs: the
//! buffered reader, mode state, alias and define tables, the expansion stack,
//! the token arena and the diagnostics reporter. Sessions share nothing, so
//! any number can run side by side.
//!
//! # Architecture
//!
//! ```text
//! next_token
//!   -> lex            eat comments, aliases and expansions; trailing data
//!      -> raw         one raw token (word, quoted string or newline)
//!      -> classify    numbers, dumb mode, keywords, punctuation
//!         -> blocks   history / extension text, alias bodies
//! ```
//!
//! A [`LexError`] stops the session. It is reported once, the fatal latch is
//! set, and every later call returns the same error.

mod blocks;
mod classify;
mod raw;

use std::borrow::Cow;
use std::rc::Rc;

use lefdef_diagnostic::{
    format_syntax_error, DiagnosticSink, Diagnostics, Disposition, LogFileSink, MessageId,
    Severity, SourceLocation, SyntaxErrorContext, SyntaxErrorKind,
};
use lefdef_lexer_core::{
    ArenaError, ArenaRef, BufferedReader, ByteSource, StringArena, TokenAccumulator,
};

use crate::{
    ConfigError, Definition, Dialect, ExpansionStack, KeywordId, LexError, LexerConfig,
    LexerState, MacroTables, NumericDefine, OwnedToken, Token,
};

/// Shape of the raw token sitting in the accumulator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum RawKind {
    Word,
    /// Accumulator holds the opening `"` followed by the unescaped contents.
    Quoted,
    Newline,
}

/// What pre-classification did with an `&` word.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Amper {
    /// Alias definition or expansion; scan again.
    Consumed,
    /// Numeric or boolean define.
    Resolved(Token),
    /// Classify the word as usual.
    Unhandled,
}

/// Keyword ids the classifier needs on every session.
#[derive(Copy, Clone, Debug)]
struct SpecialKeywords {
    history: Option<KeywordId>,
    extension: Option<KeywordId>,
    true_: Option<KeywordId>,
    false_: Option<KeywordId>,
}

impl SpecialKeywords {
    fn of(dialect: &Dialect) -> Self {
        SpecialKeywords {
            history: dialect.keyword(dialect.history_keyword),
            extension: dialect.keyword(dialect.extension_begin),
            true_: dialect.keyword("TRUE"),
            false_: dialect.keyword("FALSE"),
        }
    }
}

/// Pull-based tokenizer over one byte source.
///
/// Tokens carry arena handles; read their text with [`Tokenizer::text`]
/// before the ring wraps.
pub struct Tokenizer<S> {
    reader: BufferedReader<S>,
    dialect: Dialect,
    config: LexerConfig,
    state: LexerState,
    macros: MacroTables,
    expansions: ExpansionStack,
    token: TokenAccumulator,
    previous: Vec<u8>,
    arena: StringArena,
    diagnostics: Diagnostics,
    special: SpecialKeywords,
    /// A byte above 127 was seen in the current token.
    invalid_char: bool,
    /// The last quoted string was closed right before a non-blank byte.
    space_missing: bool,
    exhausted: bool,
    fatal: Option<LexError>,
    tokens_read: u64,
    on_magic_comment: Option<Box<dyn FnMut()>>,
}

impl<S: ByteSource> Tokenizer<S> {
    /// Session that logs diagnostics to a file: the configured log path, or
    /// the dialect's default log file name.
    pub fn new(source: S, dialect: Dialect, config: LexerConfig) -> Result<Self, ConfigError> {
        let log = &config.diagnostics.log_file;
        let path = log
            .path
            .clone()
            .unwrap_or_else(|| dialect.log_file_name.into());
        let sink = LogFileSink::new(path, log.mode, source.name());
        Self::with_sink(source, dialect, config, Box::new(sink))
    }

    /// Session that sends diagnostics to `sink`.
    pub fn with_sink(
        source: S,
        dialect: Dialect,
        config: LexerConfig,
        sink: Box<dyn DiagnosticSink>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let arena = StringArena::new(config.ring_size).map_err(|_| ConfigError::RingTooSmall {
            requested: config.ring_size,
            min: lefdef_lexer_core::MIN_SLOTS,
        })?;
        let reader = BufferedReader::with_block_size(source, config.read_block_size);
        let diagnostics = Diagnostics::new(dialect.profile(), config.diagnostics.clone(), sink);

        tracing::debug!(
            dialect = dialect.name,
            source = reader.source_name(),
            "tokenizer session started"
        );

        Ok(Tokenizer {
            reader,
            special: SpecialKeywords::of(&dialect),
            dialect,
            state: LexerState::default(),
            macros: MacroTables::new(config.names_case_sensitive),
            expansions: ExpansionStack::new(config.max_expansion_depth),
            token: TokenAccumulator::with_capacity(config.token_capacity),
            previous: Vec::new(),
            arena,
            diagnostics,
            invalid_char: false,
            space_missing: false,
            exhausted: false,
            fatal: None,
            tokens_read: 0,
            on_magic_comment: None,
            config,
        })
    }

    /// Next classified token.
    ///
    /// After [`Token::EndOfInput`] every call returns `EndOfInput` again;
    /// after an error every call returns that error again.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if let Some(err) = &self.fatal {
            return Err(err.clone());
        }
        if self.exhausted {
            return Ok(Token::EndOfInput);
        }

        let result = self.lex().and_then(|token| {
            if token.is_end() && self.config.require_terminator && !self.state.end_seen() {
                return Err(LexError::IncompleteInput {
                    terminator: self.dialect.terminator,
                });
            }
            Ok(token)
        });

        match result {
            Ok(token) => {
                if token.is_end() {
                    self.exhausted = true;
                    self.diagnostics.flush();
                }
                self.tokens_read += 1;
                tracing::trace!(?token, line = self.reader.line(), "token");
                Ok(token)
            }
            Err(err) => Err(self.latch(err)),
        }
    }

    /// Report a fatal error once and make it sticky.
    fn latch(&mut self, err: LexError) -> LexError {
        tracing::debug!(error = %err, line = self.reader.line(), "fatal tokenizer error");
        let id = err.message_id(&self.dialect.messages);
        let location = self.location();
        self.diagnostics.error(id, err.to_string(), Some(location));
        self.diagnostics.trip_fatal();
        self.diagnostics.flush();
        self.fatal = Some(err.clone());
        err
    }

    /// Pre-classification: comments, alias definitions and expansions are
    /// consumed here and never reach the grammar.
    fn lex(&mut self) -> Result<Token, LexError> {
        self.previous.clear();
        self.previous.extend_from_slice(self.token.as_bytes());

        let mut resolved = None;
        let kind = loop {
            let Some(kind) = self.next_raw_token()? else {
                return Ok(Token::EndOfInput);
            };
            if kind != RawKind::Word {
                break kind;
            }
            match self.token.first() {
                Some(byte) if byte == self.config.comment_char => {
                    if !self.skip_comment()? {
                        return Ok(Token::EndOfInput);
                    }
                }
                Some(b'&') => match self.expand_amper()? {
                    Amper::Consumed => {}
                    Amper::Resolved(token) => {
                        resolved = Some(token);
                        break kind;
                    }
                    Amper::Unhandled => break kind,
                },
                _ => break kind,
            }
        };

        if self.invalid_char {
            return Err(LexError::InvalidCharacterInToken {
                token: self.token_string(),
            });
        }

        if self.state.end_seen() {
            let message = format!(
                "There are still data after the {} statement",
                self.dialect.terminator
            );
            self.report(Severity::Info, self.dialect.messages.trailing_data, message);
            return Ok(Token::EndOfInput);
        }

        if kind == RawKind::Quoted {
            return Ok(Token::QuotedString(self.intern_from(1)));
        }
        // newlines count toward dumb and no-number mode like any other token
        self.state.tick();
        match (kind, resolved) {
            (RawKind::Newline, _) => Ok(Token::Newline),
            (_, Some(token)) => Ok(token),
            _ => self.classify_word(),
        }
    }

    /// Handle an `&` word before classification.
    fn expand_amper(&mut self) -> Result<Amper, LexError> {
        let name = self.token_string();
        let upper = name.to_ascii_uppercase();

        if upper == "&ALIAS" {
            self.store_alias()?;
            return Ok(Amper::Consumed);
        }
        if upper.starts_with("&DEFINE") {
            self.state.in_define = true;
            return Ok(Amper::Unhandled);
        }
        if let Some(body) = self.macros.alias(&name).map(Rc::clone) {
            tracing::trace!(name = %name, depth = self.expansions.depth(), "alias expansion");
            self.expansions.push(body)?;
            return Ok(Amper::Consumed);
        }
        if !self.state.in_define() {
            if let Some(value) = self.macros.text_define(&name).map(Rc::clone) {
                tracing::trace!(name = %name, depth = self.expansions.depth(), "define expansion");
                self.expansions.push(value)?;
                return Ok(Amper::Consumed);
            }
        }
        if let Some(value) = self.macros.numeric_define(&name) {
            return Ok(Amper::Resolved(Token::Number(value.value())));
        }
        if let Some(flag) = self.macros.boolean_define(&name) {
            let id = if flag {
                self.special.true_
            } else {
                self.special.false_
            };
            let token = match id {
                Some(id) => Token::Keyword(id),
                None => Token::Identifier(self.intern_from(0)),
            };
            return Ok(Amper::Resolved(token));
        }
        Ok(Amper::Unhandled)
    }

    fn token_string(&self) -> String {
        String::from_utf8_lossy(self.token.as_bytes()).into_owned()
    }

    /// Intern the current token text starting at byte `from`.
    fn intern_from(&mut self, from: usize) -> ArenaRef {
        let bytes = self.token.as_bytes().get(from..).unwrap_or_default();
        let text = String::from_utf8_lossy(bytes);
        self.arena.intern(&text)
    }

    fn location(&self) -> SourceLocation {
        SourceLocation {
            file: self.reader.source_name().to_owned(),
            line: self.reader.line(),
        }
    }

    fn report(&mut self, severity: Severity, id: MessageId, message: String) -> Disposition {
        let location = self.location();
        self.diagnostics.report(severity, id, message, Some(location))
    }

    fn note_definition(&mut self, what: &str, name: &str, outcome: Definition) {
        match outcome {
            Definition::New => tracing::debug!(what, name, "defined"),
            Definition::Replaced => tracing::debug!(what, name, "redefined"),
            Definition::Rejected => {
                let message =
                    format!("{what} {name} is already defined; the new definition is ignored");
                self.report(Severity::Warning, self.dialect.messages.redefinition, message);
            }
        }
    }

    // Token text

    /// Text behind an arena handle.
    pub fn text(&self, handle: ArenaRef) -> Result<&str, ArenaError> {
        self.arena.get(handle)
    }

    /// Copy a token out of the arena.
    pub fn to_owned_token(&self, token: &Token) -> Result<OwnedToken, ArenaError> {
        let keyword = |id: KeywordId| self.dialect.keyword_name(id).unwrap_or("?");
        Ok(match *token {
            Token::Punct(byte) => OwnedToken::Punct(char::from(byte)),
            Token::Comparison(op) => OwnedToken::Comparison(op),
            Token::Number(n) => OwnedToken::Number(n),
            Token::QuotedString(handle) => OwnedToken::QuotedString(self.text(handle)?.to_owned()),
            Token::Identifier(handle) => OwnedToken::Identifier(self.text(handle)?.to_owned()),
            Token::Keyword(id) => OwnedToken::Keyword(keyword(id)),
            Token::Block { keyword: id, text } => OwnedToken::Block {
                keyword: keyword(id),
                text: self.text(text)?.to_owned(),
            },
            Token::Newline => OwnedToken::Newline,
            Token::EndOfInput => OwnedToken::EndOfInput,
        })
    }

    pub fn keyword_name(&self, id: KeywordId) -> Option<&'static str> {
        self.dialect.keyword_name(id)
    }

    /// Raw text of the token just returned (quoted strings keep the opening
    /// quote).
    pub fn current_token_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.token.as_bytes())
    }

    pub fn previous_token_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.previous)
    }

    #[inline]
    pub fn current_line(&self) -> u64 {
        self.reader.line()
    }

    pub fn source_name(&self) -> &str {
        self.reader.source_name()
    }

    /// First bytes of the source, read ahead without consuming them.
    pub fn probe(&mut self) -> Result<&[u8], LexError> {
        Ok(self.reader.fill_probe()?)
    }

    pub fn tokens_read(&self) -> u64 {
        self.tokens_read
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal.is_some()
    }

    pub fn expansion_depth(&self) -> usize {
        self.expansions.depth()
    }

    // Session state

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    pub fn state(&self) -> &LexerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut LexerState {
        &mut self.state
    }

    pub fn macros(&self) -> &MacroTables {
        &self.macros
    }

    /// Shorthand for [`LexerState::mark_end_seen`].
    pub fn mark_end_seen(&mut self) {
        self.state.mark_end_seen();
    }

    /// Called with the line number every `delta_lines_for_progress` lines.
    pub fn set_progress_callback(&mut self, callback: impl FnMut(u64) + 'static) {
        self.reader.set_progress(self.config.delta_lines_for_progress, callback);
    }

    /// Called when a comment starts with the configured magic marker.
    pub fn set_magic_comment_callback(&mut self, callback: impl FnMut() + 'static) {
        self.on_magic_comment = Some(Box::new(callback));
    }

    // Defines

    /// Record a `&DEFINES` value. Quoted values expand to a quoted string.
    pub fn define_string(&mut self, name: &str, value: &str, quoted: bool) -> Definition {
        let stored: Rc<str> = if quoted {
            format!("\"{value}").into()
        } else {
            value.into()
        };
        let outcome = self
            .macros
            .define_text(name, stored, self.config.redefinition);
        self.state.in_define = false;
        self.note_definition("define", name, outcome);
        outcome
    }

    pub fn define_integer(&mut self, name: &str, value: i64) -> Definition {
        self.define_number(name, NumericDefine::Integer(value))
    }

    pub fn define_real(&mut self, name: &str, value: f64) -> Definition {
        self.define_number(name, NumericDefine::Real(value))
    }

    fn define_number(&mut self, name: &str, value: NumericDefine) -> Definition {
        let outcome = self
            .macros
            .define_numeric(name, value, self.config.redefinition);
        self.state.in_define = false;
        self.note_definition("define", name, outcome);
        outcome
    }

    pub fn define_boolean(&mut self, name: &str, value: bool) -> Definition {
        let outcome = self
            .macros
            .define_boolean(name, value, self.config.redefinition);
        self.state.in_define = false;
        self.note_definition("define", name, outcome);
        outcome
    }

    pub fn alias(&self, name: &str) -> Option<&str> {
        self.macros.alias(name).map(AsRef::as_ref)
    }

    // Diagnostics

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    pub fn report_error(&mut self, id: MessageId, message: impl Into<String>) -> Disposition {
        self.report(Severity::Error, id, message.into())
    }

    pub fn report_warning(&mut self, id: MessageId, message: impl Into<String>) -> Disposition {
        self.report(Severity::Warning, id, message.into())
    }

    pub fn report_info(&mut self, id: MessageId, message: impl Into<String>) -> Disposition {
        self.report(Severity::Info, id, message.into())
    }

    /// Report a grammar error, with a hint when a `;` or quote is glued to
    /// its neighbour.
    pub fn report_syntax_error(&mut self, message: &str) -> Disposition {
        let formatted = format_syntax_error(&SyntaxErrorContext {
            dialect: self.dialect.name,
            message,
            current_token: self.token.as_bytes(),
            previous_token: &self.previous,
            file: self.reader.source_name(),
            line: self.reader.line(),
            space_missing_after_quote: self.space_missing,
        });
        let id = match formatted.kind {
            SyntaxErrorKind::MissingSpaceAfterQuote => self.dialect.messages.space_after_quote,
            _ => self.dialect.messages.syntax_error,
        };
        self.diagnostics.report(Severity::Error, id, formatted.text, None)
    }
}

impl<S> std::fmt::Debug for Tokenizer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("dialect", &self.dialect.name)
            .field("reader", &self.reader)
            .field("state", &self.state)
            .field("expansion_depth", &self.expansions.depth())
            .field("fatal", &self.fatal)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
