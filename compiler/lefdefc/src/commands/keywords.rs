//! `lefdef keywords`: list a dialect's keyword table.

use std::io::{self, Write};

use lefdef_lexer::Dialect;

/// Print the keyword table of `dialect` to stdout, one per line.
pub fn list_keywords(dialect: Dialect) {
    let stdout = io::stdout();
    if let Err(e) = write_keywords(dialect, &mut stdout.lock()) {
        eprintln!("error: {e}");
    }
}

pub fn write_keywords(dialect: Dialect, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{} keywords ({}):", dialect.name, dialect.keywords.len())?;
    for name in dialect.keywords.iter() {
        writeln!(out, "  {name}")?;
    }
    Ok(())
}
