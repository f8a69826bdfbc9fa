use super::*;
use pretty_assertions::assert_eq;

fn assert_sorted_unique(table: &KeywordTable) {
    let names: Vec<&str> = table.iter().collect();
    for pair in names.windows(2) {
        assert!(pair[0] < pair[1], "{:?} must sort before {:?}", pair[0], pair[1]);
    }
}

#[test]
fn tables_are_sorted() {
    assert_sorted_unique(&Dialect::LEF.keywords);
    assert_sorted_unique(&Dialect::DEF.keywords);
}

#[test]
fn tables_are_upper_case() {
    for dialect in [Dialect::LEF, Dialect::DEF] {
        for name in dialect.keywords.iter() {
            assert_eq!(name, name.to_ascii_uppercase(), "{} keyword {name}", dialect.name);
        }
    }
}

#[test]
fn lookup_round_trips() {
    for dialect in [Dialect::LEF, Dialect::DEF] {
        for name in dialect.keywords.iter() {
            let id = dialect.keyword(name).unwrap_or_else(|| panic!("{name} missing"));
            assert_eq!(dialect.keyword_name(id), Some(name));
        }
    }
}

#[test]
fn special_keywords_present() {
    for dialect in [Dialect::LEF, Dialect::DEF] {
        for name in [
            dialect.history_keyword,
            dialect.extension_begin,
            dialect.extension_end,
            "TRUE",
            "FALSE",
            "END",
        ] {
            assert!(dialect.keyword(name).is_some(), "{} lacks {name}", dialect.name);
        }
    }
}

#[test]
fn lowercase_is_not_a_keyword() {
    assert_eq!(Dialect::LEF.keyword("layer"), None);
    assert!(Dialect::LEF.keyword("LAYER").is_some());
    assert!(Dialect::LEF.keyword("&DEFINE").is_some());
    assert!(Dialect::DEF.keyword("COMPONENTS").is_some());
    assert_eq!(Dialect::DEF.keyword("&DEFINE"), None);
}

#[test]
fn numeric_ranges() {
    assert!(NumericRange::Unbounded.contains(1e300));
    assert!(NumericRange::I32.contains(2_147_483_647.0));
    assert!(!NumericRange::I32.contains(2_147_483_648.0));
    assert!(!NumericRange::I32.contains(f64::INFINITY));
    assert!(!NumericRange::I32.contains(f64::NAN));
}

#[test]
fn profiles_carry_prefix() {
    assert_eq!(Dialect::LEF.profile().prefix, "LEFPARS");
    assert_eq!(Dialect::DEF.profile().prefix, "DEFPARS");
}
