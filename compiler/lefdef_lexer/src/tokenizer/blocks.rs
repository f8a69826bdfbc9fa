//! Sub-scanners that read past the token grammar: comments, `&ALIAS`
//! bodies, and the free-form history and extension blocks.

use lefdef_diagnostic::Severity;
use lefdef_lexer_core::ByteSource;
use memchr::memmem;

use super::Tokenizer;
use crate::{KeywordId, LexError, Token};

const END_ALIAS: &[u8] = b"&ENDALIAS";

impl<S: ByteSource> Tokenizer<S> {
    /// Discard the rest of the line after a comment word. The newline stays
    /// unread so significant-newline mode still sees it.
    ///
    /// Returns `false` if input ended inside the comment.
    pub(super) fn skip_comment(&mut self) -> Result<bool, LexError> {
        let mut body = self.token.as_bytes().get(1..).unwrap_or_default().to_vec();
        let more = loop {
            match self.peek_char()? {
                None => break false,
                Some(b'\n') => break true,
                Some(_) => {
                    if let Some(byte) = self.next_char()? {
                        body.push(byte);
                    }
                }
            }
        };
        self.check_magic_comment(&body);
        Ok(more)
    }

    fn check_magic_comment(&mut self, body: &[u8]) {
        let Some(marker) = self.config.magic_comment.as_deref() else {
            return;
        };
        let start = body
            .iter()
            .position(|byte| !matches!(byte, b' ' | b'\t'))
            .unwrap_or(body.len());
        if !body[start..].starts_with(marker.as_bytes()) {
            return;
        }
        tracing::debug!(line = self.reader.line(), "magic comment");
        if let Some(callback) = self.on_magic_comment.as_mut() {
            callback();
        }
    }

    /// `&ALIAS name = body &ENDALIAS`. The body runs line by line up to the
    /// first line containing `&ENDALIAS` (any case), cut just before it.
    #[tracing::instrument(level = "trace", skip_all, fields(line = self.reader.line()))]
    pub(super) fn store_alias(&mut self) -> Result<(), LexError> {
        if self.next_raw_token()?.is_none() {
            return Err(LexError::UnterminatedAlias {
                name: String::new(),
            });
        }
        let name = self.token_string();

        if self.next_raw_token()?.is_none() {
            return Err(LexError::UnterminatedAlias { name });
        }
        if self.token.as_bytes() != b"=" {
            let message = format!("Expecting '=' in &ALIAS {name}");
            self.report(
                Severity::Error,
                self.dialect.messages.alias_missing_equals,
                message,
            );
            return Ok(());
        }

        let mut body = Vec::new();
        let mut line = Vec::new();
        loop {
            line.clear();
            let mut at_end = false;
            loop {
                let Some(byte) = self.next_char()? else {
                    at_end = true;
                    break;
                };
                line.push(byte);
                if byte == b'\n' {
                    break;
                }
            }
            // the last line may lack its newline
            if let Some(end) = memmem::find(&line.to_ascii_uppercase(), END_ALIAS) {
                body.extend_from_slice(&line[..end]);
                break;
            }
            if at_end {
                return Err(LexError::UnterminatedAlias { name });
            }
            body.extend_from_slice(&line);
        }

        let body = String::from_utf8_lossy(&body).into_owned();
        let outcome = self
            .macros
            .define_alias(&name, body, self.config.redefinition);
        self.note_definition("alias", &name, outcome);
        Ok(())
    }

    /// Text up to a `;` that follows a blank or newline. The `;` is consumed
    /// and not part of the text.
    #[tracing::instrument(level = "trace", skip(self))]
    pub(super) fn scan_history(&mut self, keyword: KeywordId) -> Result<Token, LexError> {
        let mut text = Vec::new();
        let mut prev = b' ';
        loop {
            let Some(byte) = self.next_char()? else {
                return Err(LexError::UnterminatedBlock {
                    keyword: self.dialect.history_keyword,
                });
            };
            if byte == b';' && matches!(prev, b' ' | b'\t' | b'\n') {
                break;
            }
            text.push(byte);
            prev = byte;
        }
        Ok(self.block(keyword, &text))
    }

    /// `BEGINEXT "tag" ... ENDEXT`. The text covers everything after the
    /// keyword up to and including `ENDEXT`.
    #[tracing::instrument(level = "trace", skip(self))]
    pub(super) fn scan_extension(&mut self, keyword: KeywordId) -> Result<Token, LexError> {
        let mut text = Vec::new();
        if !self.scan_extension_tag(&mut text)? {
            return Ok(self.block(keyword, &text));
        }

        let end = self.dialect.extension_end.as_bytes();
        let terminator = self.dialect.terminator.as_bytes();
        let mut in_quote = false;
        loop {
            let Some(byte) = self.next_char()? else {
                return Err(LexError::UnterminatedBlock {
                    keyword: self.dialect.extension_begin,
                });
            };
            if byte == b'"' {
                in_quote = !in_quote;
            }
            text.push(byte);

            if text.ends_with(end) {
                if in_quote {
                    self.report(
                        Severity::Error,
                        self.dialect.messages.extension_unclosed_quote,
                        "The ending '\"' is missing in the tag".to_owned(),
                    );
                }
                break;
            }
            if text.ends_with(terminator) {
                let message = format!("The {} statement is missing", self.dialect.extension_end);
                self.report(
                    Severity::Error,
                    self.dialect.messages.extension_end_missing,
                    message,
                );
                text.truncate(text.len() - terminator.len());
                self.expansions.push(self.dialect.terminator.into())?;
                break;
            }
        }
        Ok(self.block(keyword, &text))
    }

    /// Blanks then a quoted, non-empty tag on the keyword's line. Problems
    /// are reported and end the block; returns whether a tag was found.
    fn scan_extension_tag(&mut self, text: &mut Vec<u8>) -> Result<bool, LexError> {
        let ids = self.dialect.messages;
        let mut open = false;
        let mut empty = true;
        loop {
            let Some(byte) = self.next_char()? else {
                return Err(LexError::UnterminatedBlock {
                    keyword: self.dialect.extension_begin,
                });
            };
            if byte == b'\n' {
                let message = format!("tag is missing for {}", self.dialect.extension_begin);
                self.report(Severity::Error, ids.extension_tag_missing, message);
                return Ok(false);
            }
            text.push(byte);
            match byte {
                b' ' | b'\t' => {}
                b'"' if !open => open = true,
                b'"' if !empty => return Ok(true),
                b'"' => {
                    let message = format!("The {} tag is empty", self.dialect.extension_begin);
                    self.report(Severity::Error, ids.extension_tag_empty, message);
                    return Ok(false);
                }
                _ if !open => {
                    let message = "The '\"' is missing within the tag".to_owned();
                    self.report(Severity::Error, ids.extension_quote_missing, message);
                    return Ok(false);
                }
                _ => empty = false,
            }
        }
    }

    fn block(&mut self, keyword: KeywordId, text: &[u8]) -> Token {
        let text = self.arena.intern(&String::from_utf8_lossy(text));
        Token::Block { keyword, text }
    }
}
