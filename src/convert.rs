//! File-level conversion: read JSON, encode, write CSV.
//!
//! The output is written to a temporary file next to the destination and
//! renamed over it only once the whole conversion has succeeded, so a
//! failure never leaves a partial or clobbered output file.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::Builder;
use tracing::{debug, info};

use crate::encoder::encode;
use crate::record::Table;
use crate::{Error, Result};

/// What a successful file conversion produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Data rows written (header excluded)
    pub records: usize,
    /// Columns in the header
    pub columns: usize,
    /// Bytes written to the output file
    pub bytes: usize,
}

/// Parse JSON text and encode it as CSV text.
pub fn convert_str(text: &str) -> Result<String> {
    let table = Table::from_json_str(text)?;
    encode(table.records())
}

/// Convert the JSON file at `input` into a CSV file at `output`.
pub fn convert_file(input: &Path, output: &Path) -> Result<Summary> {
    let text = fs::read_to_string(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", text.len(), input.display());

    let table = Table::from_json_str(&text)?;
    debug!("parsed {} records", table.len());

    let csv = encode(table.records())?;
    // encode rejects an empty table, so the first record exists
    let columns = table.records()[0].len();

    write_atomic(output, csv.as_bytes())?;
    info!(
        records = table.len(),
        columns,
        bytes = csv.len(),
        "wrote {}",
        output.display()
    );

    Ok(Summary {
        records: table.len(),
        columns,
        bytes: csv.len(),
    })
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    // Keep an existing file's mode; new files get the usual 0666 & umask
    let existing = fs::metadata(path).ok().map(|m| m.permissions());
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder.tempfile_in(dir).map_err(write_err)?;
    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms).map_err(write_err)?;
    }
    tmp.write_all(contents).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
