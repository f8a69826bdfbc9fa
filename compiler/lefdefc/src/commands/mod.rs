//! Command handlers for the `lefdef` CLI.
//!
//! Each submodule implements one command. Option parsing and dialect
//! selection are shared and live here.

use std::path::Path;

use lefdef_diagnostic::DiagnosticConfig;
use lefdef_lexer::{Dialect, LexerConfig};

mod keywords;
mod lex;

pub use keywords::{list_keywords, write_keywords};
pub use lex::{lex_file, lex_source, LexSummary};

/// Options accepted by `lefdef lex`.
#[derive(Clone, Debug, Default)]
pub struct LexOptions {
    /// Forced dialect; `None` picks one from the file extension.
    pub dialect: Option<Dialect>,
    pub config: LexerConfig,
    /// Print `Newline` tokens.
    pub newlines: bool,
}

impl LexOptions {
    /// The dialect to lex `path` with.
    pub fn dialect_for(&self, path: &Path) -> Dialect {
        self.dialect.unwrap_or_else(|| dialect_from_extension(path))
    }
}

/// `.def` files are DEF; everything else is read as LEF.
pub fn dialect_from_extension(path: &Path) -> Dialect {
    let is_def = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("def"));
    if is_def {
        Dialect::DEF
    } else {
        Dialect::LEF
    }
}

/// Parse a `--lef` / `--def` flag.
pub fn parse_dialect_flag(arg: &str) -> Option<Dialect> {
    match arg {
        "--lef" => Some(Dialect::LEF),
        "--def" => Some(Dialect::DEF),
        _ => None,
    }
}

/// Parse the option flags that follow `lefdef lex <file>`.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, String> {
    let mut options = LexOptions::default();
    let mut diagnostics = DiagnosticConfig::default();

    for arg in args {
        if let Some(dialect) = parse_dialect_flag(arg) {
            options.dialect = Some(dialect);
        } else if arg == "--case-insensitive" {
            options.config.names_case_sensitive = false;
        } else if arg == "--no-escapes" {
            options.config.escape_processing = false;
        } else if arg == "--multiline-strings" {
            options.config.multiline_strings = true;
        } else if arg == "--newlines" {
            options.newlines = true;
        } else if let Some(limit) = arg.strip_prefix("--limit=") {
            let limit: i64 = limit
                .parse()
                .map_err(|_| format!("invalid message limit '{limit}'"))?;
            diagnostics = diagnostics
                .with_total_message_limit(limit)
                .map_err(|e| e.to_string())?;
        } else {
            return Err(format!("unknown option '{arg}'"));
        }
    }

    options.config.diagnostics = diagnostics;
    Ok(options)
}
