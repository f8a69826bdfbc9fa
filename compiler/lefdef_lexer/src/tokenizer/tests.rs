use std::cell::{Cell, RefCell};
use std::rc::Rc;

use lefdef_diagnostic::{CollectingSink, Diagnostic};
use lefdef_lexer_core::ReadSource;
use pretty_assertions::assert_eq;

use super::*;
use crate::{Comparison, KeywordToggles, OwnedToken, RedefinitionPolicy};

use OwnedToken::{Keyword, Number, Punct};

type Session<'a> = Tokenizer<ReadSource<&'a [u8]>>;
type Records = Rc<RefCell<Vec<Diagnostic>>>;

fn session(dialect: Dialect, config: LexerConfig, input: &str) -> (Session<'_>, Records) {
    let (sink, records) = CollectingSink::new();
    let source = ReadSource::from_bytes(input.as_bytes(), "test.txt");
    let tokenizer = Tokenizer::with_sink(source, dialect, config, Box::new(sink)).unwrap();
    (tokenizer, records)
}

fn def(input: &str) -> (Session<'_>, Records) {
    session(Dialect::DEF, LexerConfig::default(), input)
}

fn lef(input: &str) -> (Session<'_>, Records) {
    session(Dialect::LEF, LexerConfig::default(), input)
}

fn next(t: &mut Session<'_>) -> OwnedToken {
    let token = t.next_token().unwrap();
    t.to_owned_token(&token).unwrap()
}

/// Every token up to (not including) `EndOfInput`.
fn drain(t: &mut Session<'_>) -> Vec<OwnedToken> {
    let mut out = Vec::new();
    loop {
        match next(t) {
            OwnedToken::EndOfInput => return out,
            token => out.push(token),
        }
    }
}

fn ids(records: &Records) -> Vec<u32> {
    records.borrow().iter().map(|d| d.id.get()).collect()
}

fn ident(s: &str) -> OwnedToken {
    OwnedToken::Identifier(s.to_owned())
}

// Basic classification

#[test]
fn keywords_identifiers_numbers() {
    let (mut t, records) = def("DESIGN top ;\nUNITS DISTANCE MICRONS 1000 ;");
    assert_eq!(
        drain(&mut t),
        vec![
            Keyword("DESIGN"),
            ident("top"),
            Punct(';'),
            Keyword("UNITS"),
            Keyword("DISTANCE"),
            Keyword("MICRONS"),
            Number(1000.0),
            Punct(';'),
        ]
    );
    assert!(records.borrow().is_empty());
}

#[test]
fn lowercase_keywords_match_in_smart_mode() {
    let (mut t, _) = def("design");
    assert_eq!(next(&mut t), Keyword("DESIGN"));
}

#[test]
fn end_of_input_is_sticky() {
    let (mut t, _) = def("top");
    assert_eq!(next(&mut t), ident("top"));
    assert_eq!(t.next_token().unwrap(), Token::EndOfInput);
    assert_eq!(t.next_token().unwrap(), Token::EndOfInput);
}

#[test]
fn current_and_previous_token_text() {
    let (mut t, _) = def("alpha \"beta\"");
    next(&mut t);
    assert_eq!(t.current_token_text(), "alpha");
    next(&mut t);
    assert_eq!(t.current_token_text(), "\"beta");
    assert_eq!(t.previous_token_text(), "alpha");
}

#[test]
fn numbers_and_near_numbers() {
    let (mut t, _) = def("-5 .5 1e3 - -x 12abc 0.25");
    assert_eq!(
        drain(&mut t),
        vec![
            Number(-5.0),
            Number(0.5),
            Number(1000.0),
            Punct('-'),
            ident("-x"),
            ident("12abc"),
            Number(0.25),
        ]
    );
}

#[test]
fn comparisons_and_punctuation() {
    let (mut t, _) = def(">= <= <> ( ) * +");
    assert_eq!(
        drain(&mut t),
        vec![
            OwnedToken::Comparison(Comparison::Ge),
            OwnedToken::Comparison(Comparison::Le),
            OwnedToken::Comparison(Comparison::Ne),
            Punct('('),
            Punct(')'),
            Punct('*'),
            Punct('+'),
        ]
    );
}

// Numeric range

#[test]
fn def_range_exceeded_is_recoverable() {
    let (mut t, records) = def("1e400 3000000000 7");
    assert_eq!(next(&mut t), Number(f64::INFINITY));
    assert_eq!(next(&mut t), Number(3_000_000_000.0));
    assert_eq!(next(&mut t), Number(7.0));
    assert_eq!(ids(&records), vec![6019, 6019]);
    assert_eq!(records.borrow()[0].severity, Severity::Error);
}

#[test]
fn lef_numbers_are_unbounded() {
    let (mut t, records) = lef("1e400 3000000000");
    assert_eq!(drain(&mut t).len(), 2);
    assert!(records.borrow().is_empty());
}

#[test]
fn real_mode_skips_range_check() {
    let (mut t, records) = def("1e400");
    t.state_mut().set_real_numbers(true);
    assert_eq!(next(&mut t), Number(f64::INFINITY));
    assert!(records.borrow().is_empty());
}

#[test]
fn configured_range_overrides_dialect() {
    let config = LexerConfig::default().with_numeric_range(crate::NumericRange::Unbounded);
    let (mut t, records) = session(Dialect::DEF, config, "1e400");
    next(&mut t);
    assert!(records.borrow().is_empty());
}

// Modes

#[test]
fn no_number_mode_counts_down() {
    let (mut t, _) = def("12 13");
    t.state_mut().set_no_number(1);
    assert_eq!(next(&mut t), ident("12"));
    assert_eq!(next(&mut t), Number(13.0));
}

#[test]
fn dumb_mode_covers_exactly_n_words() {
    let (mut t, _) = def("LAYER LAYER LAYER");
    t.state_mut().set_dumb_mode(2);
    assert_eq!(
        drain(&mut t),
        vec![ident("LAYER"), ident("LAYER"), Keyword("LAYER")]
    );
}

#[test]
fn semicolon_ends_dumb_mode() {
    let (mut t, _) = def("LAYER ; LAYER");
    t.state_mut().set_dumb_mode(100);
    assert_eq!(
        drain(&mut t),
        vec![ident("LAYER"), Punct(';'), Keyword("LAYER")]
    );
}

#[test]
fn plus_ends_dumb_and_no_number_modes() {
    let (mut t, _) = def("+ 5 LAYER");
    t.state_mut().set_dumb_mode(100);
    t.state_mut().set_no_number(100);
    assert_eq!(drain(&mut t), vec![Punct('+'), Number(5.0), Keyword("LAYER")]);
}

#[test]
fn lef_semicolon_keeps_no_number_mode() {
    let (mut t, _) = lef("; 5 LAYER");
    t.state_mut().set_dumb_mode(100);
    t.state_mut().set_no_number(100);
    assert_eq!(drain(&mut t), vec![Punct(';'), ident("5"), Keyword("LAYER")]);
}

#[test]
fn toggled_keywords_survive_dumb_mode() {
    let (mut t, _) = def("NEW new New NEW");
    t.state_mut().enable_keywords(KeywordToggles::NEW);
    t.state_mut().set_dumb_mode(3);
    assert_eq!(next(&mut t), Keyword("NEW"));
    assert_eq!(next(&mut t), Keyword("NEW"));
    assert_eq!(next(&mut t), ident("New"));

    t.state_mut().disable_keywords(KeywordToggles::NEW);
    t.state_mut().set_dumb_mode(1);
    assert_eq!(next(&mut t), ident("NEW"));
}

#[test]
fn orientations_in_dumb_mode() {
    let (mut t, _) = def("N fs Q");
    t.state_mut().set_keywords(KeywordToggles::ORIENTATION);
    t.state_mut().set_dumb_mode(3);
    assert_eq!(drain(&mut t), vec![Keyword("N"), Keyword("FS"), ident("Q")]);
}

#[test]
fn rule_name_guard() {
    let (mut t, _) = lef("myrule LAYER");
    t.state_mut().set_rule_name(Some("myrule".to_owned()));
    t.state_mut().set_dumb_mode(5);
    assert_eq!(next(&mut t), ident("myrule"));
    // any other word cancels dumb mode
    assert_eq!(next(&mut t), Keyword("LAYER"));
    assert!(!t.state().dumb_mode().is_active());
}

#[test]
fn newline_tokens_when_significant() {
    let (mut t, _) = def("foo bar\nbaz # note\nqux");
    t.state_mut().set_newline_significant(true);
    assert_eq!(
        drain(&mut t),
        vec![
            ident("foo"),
            ident("bar"),
            OwnedToken::Newline,
            ident("baz"),
            OwnedToken::Newline,
            ident("qux"),
        ]
    );
}

#[test]
fn newlines_tick_countdowns() {
    let (mut t, _) = def("\nLAYER");
    t.state_mut().set_newline_significant(true);
    t.state_mut().set_dumb_mode(1);
    assert_eq!(next(&mut t), OwnedToken::Newline);
    assert_eq!(next(&mut t), Keyword("LAYER"));
}

#[test]
fn newline_uses_up_no_number_mode() {
    let (mut t, _) = def("\n12");
    t.state_mut().set_newline_significant(true);
    t.state_mut().set_no_number(1);
    assert_eq!(next(&mut t), OwnedToken::Newline);
    assert_eq!(next(&mut t), Number(12.0));
}

#[test]
fn case_insensitive_names_fold_words() {
    let config = LexerConfig::default().with_case_sensitive_names(false);
    let (mut t, _) = session(Dialect::DEF, config, "design Top \"Mixed Case\"");
    assert_eq!(
        drain(&mut t),
        vec![
            Keyword("DESIGN"),
            ident("TOP"),
            OwnedToken::QuotedString("Mixed Case".to_owned()),
        ]
    );
}

// Comments

#[test]
fn comments_are_skipped() {
    let (mut t, _) = def("# header\nVERSION 5.8 ; # tail\n");
    assert_eq!(
        drain(&mut t),
        vec![Keyword("VERSION"), Number(5.8), Punct(';')]
    );
    assert_eq!(t.current_line(), 3);
}

#[test]
fn comment_at_end_of_input() {
    let (mut t, _) = def("DESIGN # no newline");
    assert_eq!(drain(&mut t), vec![Keyword("DESIGN")]);
}

#[test]
fn custom_comment_char() {
    let config = LexerConfig::default().with_comment_char(b'!');
    let (mut t, _) = session(Dialect::DEF, config, "! skipped\n# kept");
    assert_eq!(drain(&mut t), vec![Punct('#'), ident("kept")]);
}

#[test]
fn magic_comment_fires_callback() {
    let config = LexerConfig::default().with_magic_comment("!lefdef");
    let (mut t, _) = session(Dialect::DEF, config, "# !lefdef on\n# other\nDESIGN");
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    t.set_magic_comment_callback(move || counter.set(counter.get() + 1));
    assert_eq!(drain(&mut t), vec![Keyword("DESIGN")]);
    assert_eq!(hits.get(), 1);
}

// Quoted strings

#[test]
fn quoted_strings() {
    let (mut t, _) = def(r#""hello world" x2 "a\"b" """#);
    assert_eq!(
        drain(&mut t),
        vec![
            OwnedToken::QuotedString("hello world".to_owned()),
            ident("x2"),
            OwnedToken::QuotedString("a\"b".to_owned()),
            OwnedToken::QuotedString(String::new()),
        ]
    );
}

#[test]
fn escapes_off_keeps_backslash() {
    let config = LexerConfig::default().with_escape_processing(false);
    let (mut t, _) = session(Dialect::DEF, config, r#""a\"b""#);
    assert_eq!(next(&mut t), OwnedToken::QuotedString(r#"a\"b"#.to_owned()));
}

#[test]
fn multiline_strings() {
    let config = LexerConfig::default().with_multiline_strings(true);
    let (mut t, _) = session(Dialect::LEF, config, "\"a\nb\" c");
    assert_eq!(next(&mut t), OwnedToken::QuotedString("a\nb".to_owned()));
    assert_eq!(t.current_line(), 2);
}

#[test]
fn unterminated_string_is_fatal_and_sticky() {
    let (mut t, records) = def("x \"abc\ndef\"");
    next(&mut t);
    let err = t.next_token().unwrap_err();
    assert_eq!(err, LexError::UnterminatedString { line: 1 });
    assert_eq!(t.next_token().unwrap_err(), err);
    assert!(t.is_fatal());
    assert_eq!(ids(&records), vec![6021]);
    assert!(t.diagnostics().is_fatal());
}

#[test]
fn invalid_character_is_fatal() {
    let (mut t, records) = lef("caf\u{e9}");
    let err = t.next_token().unwrap_err();
    assert!(matches!(err, LexError::InvalidCharacterInToken { .. }));
    assert_eq!(ids(&records), vec![1008]);
}

#[test]
fn odd_punctuation_is_fatal() {
    let (mut t, _) = def("%%");
    assert_eq!(
        t.next_token().unwrap_err(),
        LexError::OddPunctuation {
            token: "%%".to_owned()
        }
    );
}

#[test]
fn glued_semicolon_depends_on_dialect() {
    let (mut t, _) = lef(";LAYER");
    assert!(matches!(
        t.next_token(),
        Err(LexError::SemicolonNotSeparated { .. })
    ));
    let (mut t, _) = def(";LAYER");
    assert!(matches!(t.next_token(), Err(LexError::OddPunctuation { .. })));
}

// Aliases and defines

#[test]
fn alias_expands_in_place() {
    let (mut t, records) = def("&ALIAS QQ = foo bar &ENDALIAS\n&QQ ;");
    assert_eq!(drain(&mut t), vec![ident("foo"), ident("bar"), Punct(';')]);
    assert_eq!(t.alias("&QQ"), Some(" foo bar "));
    assert!(records.borrow().is_empty());
}

#[test]
fn alias_body_spans_lines() {
    let (mut t, _) = def("&alias QQ = LAYER\nmetal1 &endalias\n&QQ");
    assert_eq!(drain(&mut t), vec![Keyword("LAYER"), ident("metal1")]);
}

#[test]
fn alias_without_equals_is_recoverable() {
    let (mut t, records) = def("&ALIAS QQ foo\nbar");
    assert_eq!(drain(&mut t), vec![ident("bar")]);
    assert_eq!(ids(&records), vec![6000]);
}

#[test]
fn unterminated_alias_is_fatal() {
    let (mut t, records) = lef("&ALIAS QQ = foo\n");
    assert_eq!(
        t.next_token().unwrap_err(),
        LexError::UnterminatedAlias {
            name: "QQ".to_owned()
        }
    );
    assert_eq!(ids(&records), vec![1001]);
}

#[test]
fn alias_end_on_last_line_without_newline() {
    let (mut t, records) = def("&ALIAS QQ = foo bar &ENDALIAS");
    assert!(drain(&mut t).is_empty());
    assert_eq!(t.alias("&QQ"), Some(" foo bar "));
    assert!(records.borrow().is_empty());
}

#[test]
fn alias_cut_off_without_newline_is_fatal() {
    let (mut t, records) = def("&ALIAS QQ = foo bar");
    assert_eq!(
        t.next_token().unwrap_err(),
        LexError::UnterminatedAlias {
            name: "QQ".to_owned()
        }
    );
    assert_eq!(ids(&records), vec![6001]);
}

#[test]
fn recursive_alias_overflows() {
    let mut config = LexerConfig::default();
    config.max_expansion_depth = 5;
    let (mut t, records) = session(Dialect::DEF, config, "&ALIAS QQ = &QQ &ENDALIAS\n&QQ");
    let overflow = LexError::ExpansionStackOverflow { limit: 5 };
    assert_eq!(t.next_token().unwrap_err(), overflow);
    assert_eq!(t.next_token().unwrap_err(), overflow);
    assert!(t.is_fatal());
    assert_eq!(ids(&records), vec![6020]);
}

#[test]
fn undefined_amper_word_is_identifier() {
    let (mut t, _) = def("&nothing");
    assert_eq!(next(&mut t), ident("&nothing"));
}

#[test]
fn string_defines_expand() {
    let (mut t, _) = lef("&LAYERNAME &LABEL");
    t.define_string("&LAYERNAME", "metal1", false);
    t.define_string("&LABEL", "metal 1", true);
    assert_eq!(
        drain(&mut t),
        vec![
            ident("metal1"),
            OwnedToken::QuotedString("metal 1".to_owned()),
        ]
    );
}

#[test]
fn numeric_and_boolean_defines_resolve_in_dumb_mode() {
    let (mut t, _) = lef("&WIDTH &RATIO &FLAG");
    t.define_integer("&WIDTH", 5);
    t.define_real("&RATIO", 0.5);
    t.define_boolean("&FLAG", false);
    t.state_mut().set_dumb_mode(3);
    assert_eq!(
        drain(&mut t),
        vec![Number(5.0), Number(0.5), Keyword("FALSE")]
    );
}

#[test]
fn define_statement_does_not_expand_string_defines() {
    let (mut t, _) = lef("&DEFINES &NEWNAME = &OLD");
    t.define_string("&OLD", "foo", false);
    assert_eq!(next(&mut t), Keyword("&DEFINES"));
    assert!(t.state().in_define());
    assert_eq!(next(&mut t), ident("&NEWNAME"));
    assert_eq!(next(&mut t), Punct('='));
    assert_eq!(next(&mut t), ident("foo"));
    t.define_string("&NEWNAME", "foo", false);
    assert!(!t.state().in_define());
}

#[test]
fn rejected_redefinition_warns() {
    let config = LexerConfig::default().with_redefinition(RedefinitionPolicy::Reject);
    let (mut t, records) = session(Dialect::DEF, config, "&W");
    assert_eq!(t.define_integer("&W", 1), Definition::New);
    assert_eq!(t.define_integer("&W", 2), Definition::Rejected);
    assert_eq!(next(&mut t), Number(1.0));
    assert_eq!(ids(&records), vec![7000]);
    assert_eq!(records.borrow()[0].severity, Severity::Warning);
}

#[test]
fn replacing_redefinition_is_silent() {
    let (mut t, records) = def("&W");
    t.define_integer("&W", 1);
    assert_eq!(t.define_integer("&W", 2), Definition::Replaced);
    assert_eq!(next(&mut t), Number(2.0));
    assert!(records.borrow().is_empty());
}

// Blocks

#[test]
fn history_block() {
    let (mut t, _) = def("HISTORY some;text ;\nEND");
    assert_eq!(
        next(&mut t),
        OwnedToken::Block {
            keyword: "HISTORY",
            text: " some;text ".to_owned(),
        }
    );
    assert_eq!(next(&mut t), Keyword("END"));
}

#[test]
fn unterminated_history_is_fatal() {
    let (mut t, records) = def("HISTORY never ends");
    assert_eq!(
        t.next_token().unwrap_err(),
        LexError::UnterminatedBlock { keyword: "HISTORY" }
    );
    assert_eq!(ids(&records), vec![6015]);
}

#[test]
fn extension_block() {
    let (mut t, records) = def("BEGINEXT \"tag\"\n  anything ; at all\nENDEXT\nEND DESIGN");
    assert_eq!(
        next(&mut t),
        OwnedToken::Block {
            keyword: "BEGINEXT",
            text: " \"tag\"\n  anything ; at all\nENDEXT".to_owned(),
        }
    );
    assert_eq!(drain(&mut t), vec![Keyword("END"), Keyword("DESIGN")]);
    assert!(records.borrow().is_empty());
}

#[test]
fn extension_tag_problems_are_recoverable() {
    let (mut t, records) = def("BEGINEXT\nfoo");
    assert!(matches!(next(&mut t), OwnedToken::Block { .. }));
    assert_eq!(next(&mut t), ident("foo"));

    let (mut t2, records2) = def("BEGINEXT tag\nfoo");
    next(&mut t2);

    let (mut t3, records3) = def("BEGINEXT \"\" foo");
    next(&mut t3);

    assert_eq!(ids(&records), vec![6003]);
    assert_eq!(ids(&records2), vec![6005]);
    assert_eq!(ids(&records3), vec![6004]);
}

#[test]
fn extension_without_endext_requeues_terminator() {
    let (mut t, records) = def("BEGINEXT \"t\" stuff END DESIGN");
    assert_eq!(
        next(&mut t),
        OwnedToken::Block {
            keyword: "BEGINEXT",
            text: " \"t\" stuff ".to_owned(),
        }
    );
    assert_eq!(drain(&mut t), vec![Keyword("END"), Keyword("DESIGN")]);
    assert_eq!(ids(&records), vec![6007]);
}

#[test]
fn extension_with_open_quote_reports() {
    let (mut t, records) = lef("BEGINEXT \"t\" \"open ENDEXT");
    assert!(matches!(next(&mut t), OwnedToken::Block { .. }));
    assert_eq!(ids(&records), vec![1006]);
}

// Session end

#[test]
fn trailing_data_after_terminator() {
    let (mut t, records) = def("END DESIGN extra more");
    assert_eq!(next(&mut t), Keyword("END"));
    assert_eq!(next(&mut t), Keyword("DESIGN"));
    t.mark_end_seen();
    assert_eq!(next(&mut t), OwnedToken::EndOfInput);
    assert_eq!(next(&mut t), OwnedToken::EndOfInput);
    assert_eq!(ids(&records), vec![8000]);
    assert_eq!(records.borrow()[0].severity, Severity::Info);
}

#[test]
fn required_terminator() {
    let config = LexerConfig::default().with_required_terminator(true);
    let (mut t, records) = session(Dialect::LEF, config, "VERSION 5.8 ;");
    assert_eq!(drain_until_error(&mut t).len(), 3);
    assert_eq!(
        t.next_token().unwrap_err(),
        LexError::IncompleteInput {
            terminator: "END LIBRARY"
        }
    );
    assert_eq!(ids(&records), vec![1002]);
}

fn drain_until_error(t: &mut Session<'_>) -> Vec<OwnedToken> {
    let mut out = Vec::new();
    while let Ok(token) = t.next_token() {
        out.push(t.to_owned_token(&token).unwrap());
    }
    out
}

#[test]
fn required_terminator_satisfied() {
    let config = LexerConfig::default().with_required_terminator(true);
    let (mut t, records) = session(Dialect::LEF, config, "END LIBRARY");
    next(&mut t);
    next(&mut t);
    t.mark_end_seen();
    assert_eq!(t.next_token().unwrap(), Token::EndOfInput);
    assert!(records.borrow().is_empty());
}

// Reporting

#[test]
fn syntax_error_hint_for_glued_semicolon() {
    let (mut t, records) = def("DESIGN top;");
    next(&mut t);
    next(&mut t);
    t.report_syntax_error("syntax error");
    let records = records.borrow();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id.get(), 5500);
    assert!(records[0].message.contains("space is missing before <;>"));
    assert!(records[0].location.is_none());
}

#[test]
fn syntax_error_hint_for_glued_quote() {
    let (mut t, records) = lef("\"name\";");
    next(&mut t);
    t.report_syntax_error("parse error");
    assert_eq!(ids(&records), vec![1010]);
}

#[test]
fn grammar_reports_carry_location() {
    let (mut t, records) = def("a\nb");
    next(&mut t);
    next(&mut t);
    t.report_warning(MessageId::new(7010), "odd value");
    let records = records.borrow();
    let location = records[0].location.as_ref().unwrap();
    assert_eq!(location.file, "test.txt");
    assert_eq!(location.line, 2);
}

#[test]
fn progress_callback_fires_every_n_lines() {
    let config = LexerConfig::default().with_progress_interval(2);
    let (mut t, _) = session(Dialect::DEF, config, "a\nb\nc\nd\ne\n");
    let lines = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&lines);
    t.set_progress_callback(move |line| seen.borrow_mut().push(line));
    drain(&mut t);
    assert_eq!(*lines.borrow(), vec![2, 4, 6]);
}

#[test]
fn probe_does_not_consume() {
    let (mut t, _) = def("VERSION 5.8 ;");
    assert_eq!(t.probe().unwrap(), b"VERS");
    assert_eq!(next(&mut t), Keyword("VERSION"));
}

#[test]
fn arena_handles_go_stale_after_wrap() {
    let input: String = (0..11).map(|i| format!("n{i} ")).collect();
    let (mut t, _) = def(&input);
    let first = t.next_token().unwrap();
    for _ in 0..10 {
        t.next_token().unwrap();
    }
    assert!(matches!(t.to_owned_token(&first), Err(ArenaError::Stale { .. })));
}

#[test]
fn ring_size_is_validated() {
    let mut config = LexerConfig::default();
    config.ring_size = 3;
    let (sink, _) = CollectingSink::new();
    let source = ReadSource::from_bytes(b"", "empty");
    let err = Tokenizer::with_sink(source, Dialect::DEF, config, Box::new(sink)).unwrap_err();
    assert!(matches!(err, ConfigError::RingTooSmall { requested: 3, .. }));
}
