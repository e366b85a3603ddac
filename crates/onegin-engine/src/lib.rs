pub mod io;
pub mod text;
pub mod views;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use text::{
    ByteOrder, CodeUnit, Direction, LessFn, LineOrder, LineSlice, LineTable, SortOrder, Span,
    TextError, forward, reversed,
};
pub use views::*;
