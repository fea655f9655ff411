// src/presentation.rs
use std::io::Write;

use serde::Serialize;
use typed_read_shared_kernel::{ScanRow, ScanValue};

use crate::engine::Outcome;
use crate::error::Result;
use crate::options::OutputFormat;

#[derive(Serialize)]
struct JsonEnvelope<'a> {
    command: &'a str,
    value: &'a Outcome,
}

/// Write `outcome` to `out` in the requested format.
///
/// # Errors
///
/// Returns an error if writing to `out` or JSON serialization fails.
pub fn write_outcome<W: Write>(
    out: &mut W,
    command: &str,
    outcome: &Outcome,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &JsonEnvelope { command, value: outcome })?;
            writeln!(out)?;
        }
        OutputFormat::Text => write_text(out, outcome)?,
    }
    Ok(())
}

fn write_text<W: Write>(out: &mut W, outcome: &Outcome) -> std::io::Result<()> {
    match outcome {
        Outcome::Bool(v) => writeln!(out, "{v}"),
        Outcome::Int(v) => writeln!(out, "{v}"),
        Outcome::Float(v) => writeln!(out, "{v}"),
        // 内容はそのまま (改行を足さない)
        Outcome::Text(s) => write!(out, "{s}"),
        Outcome::Char(Some(c)) => writeln!(out, "{c}"),
        Outcome::Line(Some(line)) => write!(out, "{line}"),
        Outcome::Lines(lines) => lines.iter().try_for_each(|l| write!(out, "{l}")),
        Outcome::Row(Some(row)) => writeln!(out, "{}", format_row(row)),
        Outcome::Rows(rows) => rows
            .iter()
            .try_for_each(|row| writeln!(out, "{}", format_row(row))),
        Outcome::Char(None) | Outcome::Line(None) | Outcome::Row(None) => Ok(()),
    }
}

/// Tab separated values; unmatched slots are empty.
fn format_row(row: &ScanRow) -> String {
    row.iter()
        .map(|v| v.as_ref().map(ScanValue::to_string).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(outcome: &Outcome, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_outcome(&mut buf, "test", outcome, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_rows_are_tab_separated() {
        let row = vec![Some(ScanValue::Int(1)), None, Some(ScanValue::from("x"))];
        assert_eq!(render(&Outcome::Row(Some(row)), OutputFormat::Text), "1\t\tx\n");
    }

    #[test]
    fn text_passes_content_through() {
        assert_eq!(render(&Outcome::Text("a\nb".into()), OutputFormat::Text), "a\nb");
        assert_eq!(render(&Outcome::Line(None), OutputFormat::Text), "");
    }

    #[test]
    fn json_envelope() {
        assert_eq!(
            render(&Outcome::Int(42), OutputFormat::Json),
            "{\"command\":\"test\",\"value\":42}\n"
        );
        assert_eq!(
            render(&Outcome::Char(None), OutputFormat::Json),
            "{\"command\":\"test\",\"value\":null}\n"
        );
    }
}
