//! Formatting of grammar-reported syntax errors.
//!
//! The grammar reports bare `parse error` / `syntax error` messages; the most
//! common cause in LEF/DEF is a `;` glued to the preceding token, so those two
//! messages get a targeted hint based on the current and previous token text.

/// Everything the formatter looks at.
#[derive(Clone, Debug)]
pub struct SyntaxErrorContext<'a> {
    /// Format name used in the generic text (`LEF`, `DEF`).
    pub dialect: &'a str,
    pub message: &'a str,
    pub current_token: &'a [u8],
    pub previous_token: &'a [u8],
    pub file: &'a str,
    pub line: u64,
    /// The last quoted string was closed right before a non-blank byte.
    pub space_missing_after_quote: bool,
}

/// Which text was produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    /// The current or previous token ends with `;`.
    MissingSpaceBeforeSemicolon,
    /// A quoted string was closed without a following blank.
    MissingSpaceAfterQuote,
    Generic,
    /// Any message other than `parse error` / `syntax error`.
    Custom,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattedSyntaxError {
    pub kind: SyntaxErrorKind,
    pub text: String,
}

/// Build the user-facing text for a grammar error.
pub fn format_syntax_error(ctx: &SyntaxErrorContext<'_>) -> FormattedSyntaxError {
    let SyntaxErrorContext {
        dialect,
        message,
        file,
        line,
        ..
    } = *ctx;
    let token = display_token(ctx.current_token);

    if message != "parse error" && message != "syntax error" {
        return FormattedSyntaxError {
            kind: SyntaxErrorKind::Custom,
            text: format!("{message} Error in file {file} at line {line}, on token {token}."),
        };
    }

    if glued_semicolon(ctx.current_token) {
        return FormattedSyntaxError {
            kind: SyntaxErrorKind::MissingSpaceBeforeSemicolon,
            text: format!(
                "{message}, file {file} at line {line}\n\
                 Last token was <{token}>, space is missing before <;>"
            ),
        };
    }

    if glued_semicolon(ctx.previous_token) {
        let previous = display_token(ctx.previous_token);
        let line = line.saturating_sub(1).max(1);
        return FormattedSyntaxError {
            kind: SyntaxErrorKind::MissingSpaceBeforeSemicolon,
            text: format!(
                "{message}, file {file} at line {line}\n\
                 Last token was <{previous}>, space is missing before <;>"
            ),
        };
    }

    if ctx.current_token.first() == Some(&b'"') && ctx.space_missing_after_quote {
        return FormattedSyntaxError {
            kind: SyntaxErrorKind::MissingSpaceAfterQuote,
            text: format!(
                "{message}, file {file} at line {line}\n\
                 Last token was <{token}\">, space is missing after the closing quote"
            ),
        };
    }

    FormattedSyntaxError {
        kind: SyntaxErrorKind::Generic,
        text: format!(
            "{dialect} parser has encountered an error in file {file} at line {line}, \
             on token {token}.\n\
             Problem can be syntax error in the {dialect} file or an invalid parameter name.\n\
             Double check the syntax in the {dialect} file with the {dialect} reference manual."
        ),
    }
}

/// More than two bytes ending in `;`.
fn glued_semicolon(token: &[u8]) -> bool {
    token.len() > 2 && token.last() == Some(&b';')
}

fn display_token(token: &[u8]) -> String {
    match token.first() {
        Some(first) if first.is_ascii_graphic() => String::from_utf8_lossy(token).into_owned(),
        _ => "<unprintable>".to_owned(),
    }
}

#[cfg(test)]
mod tests;
