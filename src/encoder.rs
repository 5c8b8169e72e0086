//! Table encoder: records in, comma-separated text out.
//!
//! The header is taken from the first record and every row is laid out
//! against it. Each cell is the value's JSON literal, so a cell is always
//! a valid standalone JSON scalar and never a minimally quoted CSV field.
//! Header names are written as-is, without escaping.
//!
//! This module is pure: no I/O, no logging.

use serde_json::{Number, Value};

use crate::record::Record;
use crate::{Error, Result};

/// Rendering of an absent or `null` value.
const EMPTY_CELL: &str = "\"\"";

/// Ordered column names, fixed by the first record of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
}

impl Header {
    /// Derive the header from a record's field names, in field order.
    pub fn from_record(record: &Record) -> Self {
        Self {
            names: record.names().map(str::to_owned).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Header line: names joined by commas, unescaped.
    pub fn to_line(&self) -> String {
        self.names.join(",")
    }

    /// One row line for `record`, cells in header order.
    fn row_line(&self, record: &Record) -> String {
        self.names
            .iter()
            .map(|name| render_cell(record.get(name)))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Render one cell as a JSON literal. Absent and `null` become `""`.
pub fn render_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => EMPTY_CELL.to_string(),
        Some(Value::Number(n)) => render_number(n),
        // Display on Value is compact JSON
        Some(v) => v.to_string(),
    }
}

/// Whole floats below 1e21 print without a fraction, and `-0` prints as `0`.
fn render_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{f:.0}")
            }
        }
        _ => n.to_string(),
    }
}

/// Encode records as a header line plus one line per record, joined by
/// `\n` with no trailing newline.
///
/// Fails with [`Error::InvalidInput`] when `records` is empty or the first
/// record has no fields. Later records never cause a failure.
pub fn encode(records: &[Record]) -> Result<String> {
    let first = records.first().ok_or(Error::InvalidInput)?;
    let header = Header::from_record(first);
    if header.is_empty() {
        return Err(Error::InvalidInput);
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(header.to_line());
    lines.extend(records.iter().map(|record| header.row_line(record)));

    Ok(lines.join("\n"))
}
