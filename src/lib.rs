//! # json2csv
//!
//! Converts a JSON array of uniform records into comma-separated text.
//!
//! The column header comes from the first record's keys, in document order.
//! Every later record is laid out against that header: missing keys and
//! `null` values become `""`, keys the header does not name are dropped.
//!
//! Each cell is written as a standalone JSON literal (strings quoted and
//! escaped the JSON way, numbers and booleans bare), so commas, quotes and
//! newlines inside values can never split a row.
//!
//! ## Example
//!
//! ```rust
//! use json2csv::{encode, Table};
//!
//! let table = Table::from_json_str(r#"[{"a":1,"b":"x"},{"a":2,"b":"y,\"z\""}]"#).unwrap();
//! let csv = encode(table.records()).unwrap();
//! assert_eq!(csv, "a,b\n1,\"x\"\n2,\"y,\\\"z\\\"\"");
//! ```

pub mod convert;
pub mod encoder;
pub mod error;
pub mod record;

pub use convert::{convert_file, convert_str, Summary};
pub use encoder::{encode, render_cell, Header};
pub use error::Error;
pub use record::{Record, Table};

/// Result type for json2csv operations
pub type Result<T> = std::result::Result<T, Error>;
