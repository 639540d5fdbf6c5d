// src/csv.rs
use std::io::{self, Write};

use crate::data::Row;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer. Rows end with `\n`.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

pub fn write_rows<'a, W, I>(mut w: W, rows: I, sep: char) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Row>,
{
    for r in rows {
        write_row(&mut w, r, sep)?;
    }
    Ok(())
}
