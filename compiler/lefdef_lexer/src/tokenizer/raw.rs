//! Raw token scanning.
//!
//! A raw token is a run of non-blank bytes, a quoted string, or (while
//! newlines are significant) a single `\n`. Pending expansion text is always
//! drained before the reader is touched again.

use lefdef_lexer_core::{BufferedReader, ByteSource, TokenAccumulator};

use super::{RawKind, Tokenizer};
use crate::{ExpansionFrame, LexError};

#[inline]
fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t')
}

#[inline]
fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n')
}

/// Where quoted-string bytes come from.
trait ByteFeed {
    fn next_byte(&mut self) -> Result<Option<u8>, LexError>;
    fn peek_byte(&mut self) -> Result<Option<u8>, LexError>;
    /// Whether running out of bytes closes an open string.
    const END_CLOSES_STRING: bool;
}

impl<S: ByteSource> ByteFeed for BufferedReader<S> {
    const END_CLOSES_STRING: bool = false;

    fn next_byte(&mut self) -> Result<Option<u8>, LexError> {
        Ok(self.get_char()?)
    }

    fn peek_byte(&mut self) -> Result<Option<u8>, LexError> {
        let next = self.get_char()?;
        if let Some(byte) = next {
            self.unget(byte)?;
        }
        Ok(next)
    }
}

// Quoted defines are stored with only the opening quote, so the end of an
// expansion closes the string.
impl ByteFeed for ExpansionFrame {
    const END_CLOSES_STRING: bool = true;

    fn next_byte(&mut self) -> Result<Option<u8>, LexError> {
        Ok(self.bump())
    }

    fn peek_byte(&mut self) -> Result<Option<u8>, LexError> {
        Ok(self.peek())
    }
}

#[derive(Copy, Clone, Debug)]
struct QuoteRules {
    escapes: bool,
    multiline: bool,
    /// Line of the opening quote, for the error.
    line: u64,
}

#[derive(Copy, Clone, Debug, Default)]
struct QuoteScan {
    invalid: bool,
    space_missing: bool,
}

/// Scan a quoted string body after its opening `"` into `token`.
///
/// With escapes on, `\x` stores `x`. With escapes off the backslash is kept
/// and still protects the next byte from closing the string.
fn scan_quoted<F: ByteFeed>(
    feed: &mut F,
    token: &mut TokenAccumulator,
    rules: QuoteRules,
) -> Result<QuoteScan, LexError> {
    let unterminated = LexError::UnterminatedString { line: rules.line };
    let mut scan = QuoteScan::default();

    loop {
        let Some(mut byte) = feed.next_byte()? else {
            if F::END_CLOSES_STRING {
                return Ok(scan);
            }
            return Err(unterminated);
        };
        match byte {
            b'"' => break,
            b'\\' => {
                let Some(next) = feed.next_byte()? else {
                    return Err(unterminated);
                };
                if rules.escapes {
                    if next == b'\n' {
                        return Err(unterminated);
                    }
                } else {
                    if next == b'\n' && !rules.multiline {
                        return Err(unterminated);
                    }
                    token.push(b'\\')?;
                }
                byte = next;
            }
            b'\n' if !rules.multiline => return Err(unterminated),
            _ => {}
        }
        if byte > 127 {
            scan.invalid = true;
        }
        token.push(byte)?;
    }

    scan.space_missing = matches!(feed.peek_byte()?, Some(next) if !is_delimiter(next));
    Ok(scan)
}

impl<S: ByteSource> Tokenizer<S> {
    fn quote_rules(&self) -> QuoteRules {
        QuoteRules {
            escapes: self.config.escape_processing,
            multiline: self.config.multiline_strings,
            line: self.reader.line(),
        }
    }

    /// Read the next raw token into the accumulator.
    ///
    /// Returns `None` once both the expansion stack and the reader are empty.
    pub(super) fn next_raw_token(&mut self) -> Result<Option<RawKind>, LexError> {
        self.invalid_char = false;
        self.token.begin();

        if let Some(kind) = self.raw_from_expansion()? {
            return Ok(Some(kind));
        }

        let newline_significant = self.state.newline_significant();
        let first = loop {
            match self.reader.get_char()? {
                None => return Ok(None),
                Some(byte) if is_blank(byte) => {}
                Some(b'\n') if !newline_significant => {}
                Some(byte) => break byte,
            }
        };

        match first {
            b'\n' => {
                self.token.push(b'\n')?;
                Ok(Some(RawKind::Newline))
            }
            b'"' => {
                self.token.push(b'"')?;
                let rules = self.quote_rules();
                let scan = scan_quoted(&mut self.reader, &mut self.token, rules)?;
                self.invalid_char = scan.invalid;
                self.space_missing = scan.space_missing;
                Ok(Some(RawKind::Quoted))
            }
            _ => {
                self.scan_word_from_reader(first)?;
                Ok(Some(RawKind::Word))
            }
        }
    }

    fn scan_word_from_reader(&mut self, first: u8) -> Result<(), LexError> {
        let fold = !self.config.names_case_sensitive;
        let mut byte = first;
        loop {
            if byte > 127 {
                self.invalid_char = true;
            }
            self.token
                .push(if fold { byte.to_ascii_uppercase() } else { byte })?;
            match self.reader.get_char()? {
                None => return Ok(()),
                Some(next) if is_delimiter(next) => {
                    self.reader.unget(next)?;
                    return Ok(());
                }
                Some(next) => byte = next,
            }
        }
    }

    /// Raw token from the top expansion frame, popping frames that have
    /// nothing left but blanks.
    fn raw_from_expansion(&mut self) -> Result<Option<RawKind>, LexError> {
        let newline_significant = self.state.newline_significant();
        let fold = !self.config.names_case_sensitive;
        let rules = self.quote_rules();

        while let Some(frame) = self.expansions.top_mut() {
            while let Some(byte) = frame.peek() {
                if is_blank(byte) || (byte == b'\n' && !newline_significant) {
                    frame.bump();
                } else {
                    break;
                }
            }
            let Some(first) = frame.bump() else {
                self.expansions.pop();
                continue;
            };

            match first {
                b'\n' => self.token.push(b'\n')?,
                b'"' => {
                    self.token.push(b'"')?;
                    let scan = scan_quoted(frame, &mut self.token, rules)?;
                    self.invalid_char = scan.invalid;
                    self.space_missing = scan.space_missing;
                    return Ok(Some(RawKind::Quoted));
                }
                _ => {
                    let mut byte = first;
                    loop {
                        if byte > 127 {
                            self.invalid_char = true;
                        }
                        self.token
                            .push(if fold { byte.to_ascii_uppercase() } else { byte })?;
                        match frame.peek() {
                            Some(next) if !is_delimiter(next) => {
                                frame.bump();
                                byte = next;
                            }
                            _ => break,
                        }
                    }
                    return Ok(Some(RawKind::Word));
                }
            }
            return Ok(Some(RawKind::Newline));
        }
        Ok(None)
    }

    /// Next byte for the block scanners: expansion text first, then the
    /// reader.
    pub(super) fn next_char(&mut self) -> Result<Option<u8>, LexError> {
        while let Some(frame) = self.expansions.top_mut() {
            if let Some(byte) = frame.bump() {
                return Ok(Some(byte));
            }
            self.expansions.pop();
        }
        Ok(self.reader.get_char()?)
    }

    pub(super) fn peek_char(&mut self) -> Result<Option<u8>, LexError> {
        while let Some(frame) = self.expansions.top_mut() {
            if let Some(byte) = frame.peek() {
                return Ok(Some(byte));
            }
            self.expansions.pop();
        }
        Ok(self.reader.peek_byte()?)
    }
}
