//! Shared helpers for unit tests.

use std::path::PathBuf;

use tempfile::TempDir;

use crate::text::{BYTE_ORDER_MARK, LineTable};

/// Little-endian UTF-16 bytes of `text`, preceded by a byte-order marker.
pub fn utf16_bytes(text: &str) -> Vec<u8> {
    std::iter::once(BYTE_ORDER_MARK)
        .chain(text.encode_utf16())
        .flat_map(u16::to_le_bytes)
        .collect()
}

/// Lines of `table` in current order, as strings.
pub fn line_texts(table: &LineTable) -> Vec<String> {
    table.lines().map(|line| line.to_string_lossy()).collect()
}

pub fn create_test_dir() -> TempDir {
    TempDir::new().unwrap()
}

pub fn create_test_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}
