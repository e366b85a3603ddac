#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Byte length {len} is not a multiple of the code unit width")]
    OddByteLength { len: usize },
    #[error("Read {actual} bytes but the source declared {expected}")]
    ReadMismatch { expected: u64, actual: u64 },
    #[error("Source contains no non-empty lines")]
    NoLines,
    #[error("Reversed comparison is undefined for an empty line")]
    EmptySlice,
    #[error("Line order has {actual} lines but the table has {expected}")]
    OrderLength { expected: usize, actual: usize },
    #[error("Line order does not describe the lines of this table")]
    ForeignOrder,
}
