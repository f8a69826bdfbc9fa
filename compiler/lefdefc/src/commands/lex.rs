//! `lefdef lex`: print the token stream of a LEF or DEF file.

use std::io::{self, Write};
use std::path::Path;

use lefdef_diagnostic::{DiagnosticSink, WriterSink};
use lefdef_lexer::{ByteSource, Dialect, LexError, ReadSource, Tokenizer};

use super::LexOptions;

/// Counts printed after the token listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexSummary {
    pub tokens: u64,
    pub lines: u64,
    pub errors: u64,
    pub warnings: u64,
    /// The fatal error that stopped the stream, if any.
    pub fatal: Option<LexError>,
}

impl LexSummary {
    pub fn is_clean(&self) -> bool {
        self.fatal.is_none() && self.errors == 0
    }
}

/// Lex `path` and print one `line: token` entry per token to stdout.
/// Diagnostics go to stderr. Returns the process exit code.
pub fn lex_file(path: &str, options: &LexOptions) -> i32 {
    let dialect = options.dialect_for(Path::new(path));
    let source = match ReadSource::open(path) {
        Ok(source) => source,
        Err(e) => {
            let msg = match e.kind() {
                io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            return 1;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = match lex_source(
        source,
        dialect,
        options,
        Box::new(WriterSink::stderr()),
        &mut out,
    ) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };

    if let Some(fatal) = &summary.fatal {
        eprintln!("error: {fatal}");
    }
    i32::from(!summary.is_clean())
}

/// Lex `source`, writing the listing and summary to `out`.
///
/// A fatal lexer error ends the listing and is returned in the summary;
/// configuration problems and write failures are returned as `Err`.
pub fn lex_source<S: ByteSource>(
    source: S,
    dialect: Dialect,
    options: &LexOptions,
    sink: Box<dyn DiagnosticSink>,
    out: &mut impl Write,
) -> io::Result<LexSummary> {
    let mut tokenizer = Tokenizer::with_sink(source, dialect, options.config.clone(), sink)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    tokenizer.state_mut().set_newline_significant(options.newlines);

    tracing::debug!(
        source = tokenizer.source_name(),
        dialect = dialect.name,
        "lexing"
    );

    let mut summary = LexSummary::default();
    loop {
        let token = match tokenizer.next_token() {
            Ok(token) => token,
            Err(err) => {
                summary.fatal = Some(err);
                break;
            }
        };
        if token.is_end() {
            break;
        }
        let owned = tokenizer
            .to_owned_token(&token)
            .map_err(io::Error::other)?;
        writeln!(out, "{}: {owned}", tokenizer.current_line())?;
    }

    let diagnostics = tokenizer.diagnostics();
    summary.tokens = tokenizer.tokens_read();
    summary.lines = tokenizer.current_line();
    summary.errors = diagnostics.error_count();
    summary.warnings = diagnostics.warning_count();

    writeln!(
        out,
        "{} tokens, {} lines, {} errors, {} warnings",
        summary.tokens, summary.lines, summary.errors, summary.warnings
    )?;
    Ok(summary)
}
