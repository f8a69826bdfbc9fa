//! Property-based tests for the tokenizer.
//!
//! Generated word streams check that:
//! 1. Lexing the same bytes twice gives the same token stream
//! 2. Integers inside the DEF range come back exact and unreported
//! 3. Integers outside it are still numbers, reported once
//! 4. Dumb mode covers exactly the requested number of words
//! 5. Non-keyword names survive unchanged

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::cast_precision_loss,
    reason = "Proptest macros generate code with these patterns"
)]

use lefdef_diagnostic::CollectingSink;
use lefdef_lexer::{Dialect, LexerConfig, OwnedToken, ReadSource, Tokenizer};
use proptest::prelude::*;

// -- Strategies --

/// A name that neither dialect reads as a keyword.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_][a-z0-9_]{0,11}")
        .expect("valid regex")
        .prop_filter("not a keyword", |s| !is_keyword(s))
}

fn is_keyword(s: &str) -> bool {
    let upper = s.to_ascii_uppercase();
    Dialect::DEF.keyword(&upper).is_some() || Dialect::LEF.keyword(&upper).is_some()
}

/// One word of a mixed stream: a name, a number, punctuation or a string.
fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        name_strategy(),
        (-100_000i32..100_000).prop_map(|n| n.to_string()),
        (0u32..10_000, 0u32..1000).prop_map(|(a, b)| format!("{a}.{b}")),
        prop::sample::select(vec!["(", ")", ";", "+", "-", "*", ">=", "<="])
            .prop_map(str::to_owned),
        name_strategy().prop_map(|s| format!("\"{s}\"")),
        prop::sample::select(vec!["DESIGN", "COMPONENTS", "PLACED", "END", "NET"])
            .prop_map(str::to_owned),
    ]
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![" ", "  ", "\t", "\n", " \n  "])
}

fn stream_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((word_strategy(), separator_strategy()), 0..40).prop_map(|words| {
        words
            .into_iter()
            .map(|(word, sep)| format!("{word}{sep}"))
            .collect()
    })
}

// -- Helpers --

type Session<'a> = Tokenizer<ReadSource<&'a [u8]>>;

fn lex_all(
    dialect: Dialect,
    input: &str,
    setup: impl FnOnce(&mut Session<'_>),
) -> (Vec<OwnedToken>, usize) {
    let (sink, records) = CollectingSink::new();
    let source = ReadSource::from_bytes(input.as_bytes(), "generated");
    let mut t = Tokenizer::with_sink(source, dialect, LexerConfig::default(), Box::new(sink))
        .expect("default config is valid");
    setup(&mut t);
    let mut tokens = Vec::new();
    loop {
        let token = t.next_token().expect("generated input is well formed");
        if token.is_end() {
            break;
        }
        tokens.push(t.to_owned_token(&token).expect("token is fresh"));
    }
    let reported = records.borrow().len();
    (tokens, reported)
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn lexing_is_deterministic(input in stream_strategy()) {
        let first = lex_all(Dialect::DEF, &input, |_| {});
        let second = lex_all(Dialect::DEF, &input, |_| {});
        prop_assert_eq!(first, second);
    }

    #[test]
    fn in_range_integers_are_exact(n in any::<i32>()) {
        let (tokens, reported) = lex_all(Dialect::DEF, &n.to_string(), |_| {});
        prop_assert_eq!(tokens, vec![OwnedToken::Number(f64::from(n))]);
        prop_assert_eq!(reported, 0);
    }

    #[test]
    fn out_of_range_integers_report_once(n in (i64::from(i32::MAX) + 1)..i64::MAX) {
        let (tokens, reported) = lex_all(Dialect::DEF, &n.to_string(), |_| {});
        prop_assert_eq!(tokens, vec![OwnedToken::Number(n as f64)]);
        prop_assert_eq!(reported, 1);
    }

    #[test]
    fn dumb_mode_covers_exactly_n_words(n in 1u32..8, extra in 1usize..4) {
        let words = n as usize + extra;
        let input = vec!["DESIGN"; words].join(" ");
        let (tokens, _) = lex_all(Dialect::DEF, &input, |t| t.state_mut().set_dumb_mode(n));

        let identifiers = tokens
            .iter()
            .take_while(|tok| **tok == OwnedToken::Identifier("DESIGN".to_owned()))
            .count();
        prop_assert_eq!(identifiers, n as usize);
        prop_assert!(tokens[n as usize..]
            .iter()
            .all(|tok| *tok == OwnedToken::Keyword("DESIGN")));
    }

    #[test]
    fn names_are_preserved(names in prop::collection::vec(name_strategy(), 1..20)) {
        let input = names.join(" ");
        for dialect in [Dialect::DEF, Dialect::LEF] {
            let (tokens, reported) = lex_all(dialect, &input, |_| {});
            let expected: Vec<OwnedToken> = names
                .iter()
                .map(|name| OwnedToken::Identifier(name.clone()))
                .collect();
            prop_assert_eq!(tokens, expected);
            prop_assert_eq!(reported, 0);
        }
    }
}
