use super::*;
use pretty_assertions::assert_eq;

fn ctx<'a>(message: &'a str, current: &'a str, previous: &'a str) -> SyntaxErrorContext<'a> {
    SyntaxErrorContext {
        dialect: "DEF",
        message,
        current_token: current.as_bytes(),
        previous_token: previous.as_bytes(),
        file: "top.def",
        line: 10,
        space_missing_after_quote: false,
    }
}

#[test]
fn glued_semicolon_on_current_token() {
    let out = format_syntax_error(&ctx("syntax error", "FIXED;", "N"));
    assert_eq!(out.kind, SyntaxErrorKind::MissingSpaceBeforeSemicolon);
    assert_eq!(
        out.text,
        "syntax error, file top.def at line 10\nLast token was <FIXED;>, space is missing before <;>"
    );
}

#[test]
fn glued_semicolon_on_previous_token_reports_previous_line() {
    let out = format_syntax_error(&ctx("parse error", "COMPONENTS", "100;"));
    assert_eq!(out.kind, SyntaxErrorKind::MissingSpaceBeforeSemicolon);
    assert!(out.text.starts_with("parse error, file top.def at line 9\n"));
    assert!(out.text.ends_with("Last token was <100;>, space is missing before <;>"));
}

#[test]
fn two_byte_token_is_not_glued() {
    let out = format_syntax_error(&ctx("syntax error", "N;", "X"));
    assert_eq!(out.kind, SyntaxErrorKind::Generic);
}

#[test]
fn quote_hint_needs_flag() {
    let mut context = ctx("syntax error", "\"abc", "X");
    assert_eq!(format_syntax_error(&context).kind, SyntaxErrorKind::Generic);

    context.space_missing_after_quote = true;
    let out = format_syntax_error(&context);
    assert_eq!(out.kind, SyntaxErrorKind::MissingSpaceAfterQuote);
    assert!(out.text.contains("<\"abc\">"));
}

#[test]
fn generic_text_names_dialect_and_token() {
    let out = format_syntax_error(&ctx("syntax error", "PINS", "END"));
    assert!(out
        .text
        .starts_with("DEF parser has encountered an error in file top.def at line 10, on token PINS."));
}

#[test]
fn custom_message_keeps_message() {
    let out = format_syntax_error(&ctx("Unknown via rule", "VIARULE", "X"));
    assert_eq!(out.kind, SyntaxErrorKind::Custom);
    assert_eq!(
        out.text,
        "Unknown via rule Error in file top.def at line 10, on token VIARULE."
    );
}

#[test]
fn unprintable_token() {
    let out = format_syntax_error(&ctx("Bad", "\n", "X"));
    assert!(out.text.contains("on token <unprintable>."));
}
