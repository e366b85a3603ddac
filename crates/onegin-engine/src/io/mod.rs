use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::text::{ByteOrder, LineTable, TextError};
use crate::views::{ViewSelection, write_views};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Text(#[from] TextError),
}

/// Check that `path` names an existing regular file
pub fn validate_input_file(path: &Path) -> Result<(), IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(IoError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

/// Read a UTF-16 file into a line table
///
/// The byte count comes from the file's metadata; reading fewer bytes than
/// that is an error.
pub fn read_line_table(path: &Path, byte_order: ByteOrder) -> Result<LineTable, IoError> {
    validate_input_file(path)?;

    let declared_len = fs::metadata(path)?.len();
    let file = File::open(path)?;
    let table = LineTable::from_reader(file, declared_len, byte_order)?;

    log::debug!(
        "loaded {} lines from {} ({declared_len} bytes)",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Write the selected views of `table` to `path`, replacing any existing file
pub fn write_output(
    path: &Path,
    table: &mut LineTable,
    selection: ViewSelection,
    write_header: bool,
) -> Result<usize, IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut sink = BufWriter::new(File::create(path)?);
    let written = write_views(table, selection, &mut sink, write_header)?;
    sink.flush()?;
    Ok(written)
}
