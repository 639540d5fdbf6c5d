// src/output.rs
// Output sink: console lines, a boxed table, or a results file.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{OutputKind, RunOptions};
use crate::data::DataSet;
use crate::error::Result;
use crate::file::write_results;

/// Send `data` where `opts.output` says. Returns the file path for `File`.
pub fn control_output(data: &DataSet, opts: &RunOptions) -> Result<Option<PathBuf>> {
    match opts.output {
        OutputKind::Console => {
            write_console(io::stdout().lock(), data)?;
            Ok(None)
        }
        OutputKind::Pretty => {
            write_pretty(io::stdout().lock(), data)?;
            Ok(None)
        }
        OutputKind::File => {
            let path = write_results(opts, data)?;
            tracing::info!("Results saved to file: {}", path.display());
            Ok(Some(path))
        }
    }
}

/// One line per row, cells separated by a single space.
pub fn write_console<W: Write>(mut w: W, data: &DataSet) -> io::Result<()> {
    for row in data.table() {
        writeln!(w, "{}", row.join(" "))?;
    }
    Ok(())
}

/// Left-aligned box table, header row on top.
pub fn write_pretty<W: Write>(mut w: W, data: &DataSet) -> io::Result<()> {
    let cols = data.table().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; cols];
    for row in data.table() {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let rule: String = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .fold(s!("+"), |acc, seg| join!(acc, &seg, "+"));

    let line = |row: &[String]| -> String {
        let mut out = s!("|");
        for (i, width) in widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let pad = width - cell.chars().count();
            out.push(' ');
            out.push_str(cell);
            out.push_str(&" ".repeat(pad + 1));
            out.push('|');
        }
        out
    };

    writeln!(w, "{rule}")?;
    writeln!(w, "{}", line(&data.headers))?;
    writeln!(w, "{rule}")?;
    for row in &data.rows {
        writeln!(w, "{}", line(row))?;
    }
    writeln!(w, "{rule}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataSet {
        let mut ds = DataSet::new(&["Status", "Count"]);
        ds.push(["Active", "31"]);
        ds.push(["Final", "254"]);
        ds
    }

    #[test]
    fn console_prints_space_separated_rows() {
        let mut buf = Vec::new();
        write_console(&mut buf, &sample()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Status Count\nActive 31\nFinal 254\n");
    }

    #[test]
    fn pretty_pads_to_widest_cell() {
        let mut buf = Vec::new();
        write_pretty(&mut buf, &sample()).unwrap();
        let expected = "\
+--------+-------+
| Status | Count |
+--------+-------+
| Active | 31    |
| Final  | 254   |
+--------+-------+
";
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn pretty_handles_ragged_rows() {
        let mut ds = DataSet::new(&["A"]);
        ds.push(["x", "extra"]);
        let mut buf = Vec::new();
        write_pretty(&mut buf, &ds).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("| A |       |"));
        assert!(text.contains("| x | extra |"));
    }
}
