// src/engine.rs
use serde::Serialize;
use typed_read_infra::FileReader;
use typed_read_ports::{InStream, Stream};
use typed_read_shared_kernel::{ErrorContext, Result, ScanRow};

use crate::config::{Action, Invocation};

/// Value produced by one action, ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Char(Option<char>),
    Line(Option<String>),
    Lines(Vec<String>),
    Row(Option<ScanRow>),
    Rows(Vec<ScanRow>),
}

/// Open the stream described by `invocation` and run its action.
///
/// # Errors
///
/// Propagates open failures (mode, scheme, missing file, lock) and read
/// failures, each wrapped with the stream name.
pub fn run(invocation: &Invocation) -> Result<Outcome> {
    let name = invocation.name.clone();
    let mut reader = FileReader::with_config(name.clone(), invocation.reader.clone())
        .with_context(|| format!("opening {name}"))?;
    if !reader.is_opened() {
        reader.open().with_context(|| format!("opening {name}"))?;
    }

    let outcome = perform(&mut reader, &invocation.action)
        .with_context(|| format!("{} on {name}", invocation.command))?;
    reader.close()?;
    Ok(outcome)
}

/// Run `action` against any readable stream.
pub fn perform<S: InStream>(stream: &mut S, action: &Action) -> Result<Outcome> {
    let outcome = match action {
        Action::Eof => Outcome::Bool(stream.eof()?),
        Action::Read(length) => Outcome::Text(lossy(stream.read(length.value())?)),
        Action::String(length) => Outcome::Text(stream.read_string(length.value())?),
        Action::Char => Outcome::Char(stream.read_character()?),
        Action::Bool => Outcome::Bool(stream.read_boolean()?),
        Action::Int(length) => Outcome::Int(stream.read_integer(length.value())?),
        Action::Float(length) => Outcome::Float(stream.read_float(length.value())?),
        Action::Line => Outcome::Line(stream.read_line()?),
        Action::Lines => {
            let mut lines = Vec::new();
            while let Some(line) = stream.read_line()? {
                lines.push(line);
            }
            Outcome::Lines(lines)
        }
        Action::All { offset } => Outcome::Text(lossy(stream.read_all(*offset)?)),
        Action::Scan { format, all: false } => Outcome::Row(stream.scanf(format)?),
        Action::Scan { format, all: true } => {
            let mut rows = Vec::new();
            while let Some(row) = stream.scanf(format)? {
                rows.push(row);
            }
            Outcome::Rows(rows)
        }
        Action::Array { format } => Outcome::Row(stream.read_array(format)?),
    };
    Ok(outcome)
}

fn lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use typed_read_infra::FileRead;
    use typed_read_shared_kernel::{Length, ScanValue};

    use super::*;

    fn perform_on(text: &str, action: Action) -> Outcome {
        let mut stream = FileRead::from_reader("memory", Cursor::new(text.as_bytes().to_vec()));
        perform(&mut stream, &action).unwrap()
    }

    #[test]
    fn lines_collects_everything() {
        let outcome = perform_on("a\nb\n", Action::Lines);
        assert_eq!(outcome, Outcome::Lines(vec!["a\n".into(), "b\n".into()]));
    }

    #[test]
    fn scan_all_stops_at_eof() {
        let outcome = perform_on(
            "1 2\n3 4\n",
            Action::Scan {
                format: "%d %d".into(),
                all: true,
            },
        );
        assert_eq!(
            outcome,
            Outcome::Rows(vec![
                vec![Some(ScanValue::Int(1)), Some(ScanValue::Int(2))],
                vec![Some(ScanValue::Int(3)), Some(ScanValue::Int(4))],
            ])
        );
    }

    #[test]
    fn read_is_lossy_for_display() {
        let mut stream = FileRead::from_reader("memory", Cursor::new(vec![b'a', 0xFF]));
        let outcome = perform(&mut stream, &Action::Read(Length::from(2usize))).unwrap();
        assert_eq!(outcome, Outcome::Text("a\u{FFFD}".into()));
    }

    #[test]
    fn float_default_width() {
        let outcome = perform_on("7.5", Action::Float(Length::ONE));
        assert_eq!(outcome, Outcome::Float(7.0));
    }
}
