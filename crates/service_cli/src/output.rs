//! Result formatting: box-drawn tables, CSV and JSON

use std::io::{self, Write};

use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// A row type that can be printed in every output format.
pub trait Tabular: Serialize {
    /// Column headings for table output.
    fn headers() -> &'static [&'static str];

    /// Cell text for table output, one per heading.
    fn cells(&self) -> Vec<String>;
}

/// Format a value with six decimals, or `n/a` when absent.
pub fn fixed(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.6}", v))
}

/// Print rows to stdout.
pub fn print_rows<T: Tabular>(format: OutputFormat, rows: &[T]) -> Result<()> {
    let stdout = io::stdout();
    write_rows(stdout.lock(), format, rows)
}

/// Write rows to `out` in the given format.
pub fn write_rows<T: Tabular, W: Write>(mut out: W, format: OutputFormat, rows: &[T]) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(&mut out, rows)?,
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, rows)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_table<T: Tabular, W: Write>(out: &mut W, rows: &[T]) -> io::Result<()> {
    let headers = T::headers();
    let cells: Vec<Vec<String>> = rows.iter().map(Tabular::cells).collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|c| c.chars().count())
                .fold(h.chars().count(), usize::max)
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };
    let line = |values: &[String]| {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| format!(" {:<w$} ", values.get(i).map_or("", String::as_str), w = w))
            .collect();
        format!("│{}│", padded.join("│"))
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    writeln!(out, "{}", rule("┌", "┬", "┐"))?;
    writeln!(out, "{}", line(&header_cells))?;
    writeln!(out, "{}", rule("├", "┼", "┤"))?;
    for row in &cells {
        writeln!(out, "{}", line(row))?;
    }
    writeln!(out, "{}", rule("└", "┴", "┘"))
}
