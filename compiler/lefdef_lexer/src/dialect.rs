//! Per-format parameters: keywords, message ids, terminator, numeric range.

mod def_keywords;
mod lef_keywords;

use lefdef_diagnostic::{MessageId, Profile};

use def_keywords::DEF_KEYWORDS;
use lef_keywords::LEF_KEYWORDS;

/// Index into a dialect's keyword table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeywordId(u16);

impl KeywordId {
    #[inline]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

/// Sorted list of upper-case keywords.
#[derive(Copy, Clone, Debug)]
pub struct KeywordTable {
    names: &'static [&'static str],
}

impl KeywordTable {
    /// `names` must be sorted by byte value and free of duplicates.
    pub const fn new(names: &'static [&'static str]) -> Self {
        KeywordTable { names }
    }

    /// Look up an already upper-cased word.
    #[inline]
    pub fn lookup(&self, upper: &str) -> Option<KeywordId> {
        let index = self.names.binary_search(&upper).ok()?;
        u16::try_from(index).ok().map(KeywordId)
    }

    pub fn name(&self, id: KeywordId) -> Option<&'static str> {
        self.names.get(id.index()).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.names.iter().copied()
    }
}

/// Range a numeric token must fall in to be reported without complaint.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericRange {
    Unbounded,
    Bounded { min: f64, max: f64 },
}

impl NumericRange {
    /// Signed 32-bit integer range.
    pub const I32: NumericRange = NumericRange::Bounded {
        min: -2_147_483_648.0,
        max: 2_147_483_647.0,
    };

    pub fn contains(self, value: f64) -> bool {
        match self {
            NumericRange::Unbounded => true,
            NumericRange::Bounded { min, max } => (min..=max).contains(&value),
        }
    }
}

/// Message ids a dialect reports under.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MessageIds {
    pub alias_missing_equals: MessageId,
    pub alias_unterminated: MessageId,
    pub incomplete_input: MessageId,
    pub extension_tag_missing: MessageId,
    pub extension_tag_empty: MessageId,
    pub extension_quote_missing: MessageId,
    pub extension_unclosed_quote: MessageId,
    pub extension_end_missing: MessageId,
    pub invalid_character: MessageId,
    pub semicolon_not_separated: MessageId,
    pub space_after_quote: MessageId,
    pub number_out_of_range: MessageId,
    pub expansion_overflow: MessageId,
    pub unterminated_string: MessageId,
    pub unterminated_block: MessageId,
    pub odd_punctuation: MessageId,
    pub reader_failure: MessageId,
    pub trailing_data: MessageId,
    pub redefinition: MessageId,
    pub syntax_error: MessageId,
    pub suppressed_notice: MessageId,
    pub limit_notice: MessageId,
}

/// Everything that differs between LEF and DEF at the lexical level.
#[derive(Copy, Clone, Debug)]
pub struct Dialect {
    /// `LEF` or `DEF`.
    pub name: &'static str,
    pub message_prefix: &'static str,
    pub keywords: KeywordTable,
    /// Keyword followed by free text up to a blank-preceded `;`.
    pub history_keyword: &'static str,
    pub extension_begin: &'static str,
    pub extension_end: &'static str,
    /// Statement that ends the file; an extension block running into it is
    /// missing its end marker.
    pub terminator: &'static str,
    pub numeric_range: NumericRange,
    /// A multi-byte token starting with `;` gets its own message instead of
    /// the generic odd-punctuation one.
    pub check_glued_semicolon: bool,
    /// A `;` or `+` in dumb mode also ends no-number mode.
    pub separator_ends_no_number: bool,
    /// Default fallback log file.
    pub log_file_name: &'static str,
    pub messages: MessageIds,
}

const fn id(n: u32) -> MessageId {
    MessageId::new(n)
}

impl Dialect {
    pub const LEF: Dialect = Dialect {
        name: "LEF",
        message_prefix: "LEFPARS",
        keywords: KeywordTable::new(LEF_KEYWORDS),
        history_keyword: "HISTORY",
        extension_begin: "BEGINEXT",
        extension_end: "ENDEXT",
        terminator: "END LIBRARY",
        numeric_range: NumericRange::Unbounded,
        check_glued_semicolon: true,
        separator_ends_no_number: false,
        log_file_name: "lefRWarning.log",
        messages: MessageIds {
            alias_missing_equals: id(1000),
            alias_unterminated: id(1001),
            incomplete_input: id(1002),
            extension_tag_missing: id(1003),
            extension_tag_empty: id(1004),
            extension_quote_missing: id(1005),
            extension_unclosed_quote: id(1006),
            extension_end_missing: id(1007),
            invalid_character: id(1008),
            semicolon_not_separated: id(1009),
            space_after_quote: id(1010),
            number_out_of_range: id(1012),
            expansion_overflow: id(1013),
            unterminated_string: id(1014),
            unterminated_block: id(6015),
            odd_punctuation: id(6016),
            reader_failure: id(1111),
            trailing_data: id(3000),
            redefinition: id(2000),
            syntax_error: id(1016),
            suppressed_notice: id(2502),
            limit_notice: id(2503),
        },
    };

    pub const DEF: Dialect = Dialect {
        name: "DEF",
        message_prefix: "DEFPARS",
        keywords: KeywordTable::new(DEF_KEYWORDS),
        history_keyword: "HISTORY",
        extension_begin: "BEGINEXT",
        extension_end: "ENDEXT",
        terminator: "END DESIGN",
        numeric_range: NumericRange::I32,
        check_glued_semicolon: false,
        separator_ends_no_number: true,
        log_file_name: "defRWarning.log",
        messages: MessageIds {
            alias_missing_equals: id(6000),
            alias_unterminated: id(6001),
            incomplete_input: id(6002),
            extension_tag_missing: id(6003),
            extension_tag_empty: id(6004),
            extension_quote_missing: id(6005),
            extension_unclosed_quote: id(6006),
            extension_end_missing: id(6007),
            invalid_character: id(6008),
            semicolon_not_separated: id(6017),
            space_after_quote: id(6018),
            number_out_of_range: id(6019),
            expansion_overflow: id(6020),
            unterminated_string: id(6021),
            unterminated_block: id(6015),
            odd_punctuation: id(6017),
            reader_failure: id(6111),
            trailing_data: id(8000),
            redefinition: id(7000),
            syntax_error: id(5500),
            suppressed_notice: id(7502),
            limit_notice: id(7503),
        },
    };

    #[inline]
    pub fn keyword(&self, upper: &str) -> Option<KeywordId> {
        self.keywords.lookup(upper)
    }

    pub fn keyword_name(&self, id: KeywordId) -> Option<&'static str> {
        self.keywords.name(id)
    }

    /// Reporter identity for this dialect.
    pub fn profile(&self) -> Profile {
        Profile {
            prefix: self.message_prefix,
            suppressed_notice: self.messages.suppressed_notice,
            limit_notice: self.messages.limit_notice,
        }
    }
}

#[cfg(test)]
mod tests;
