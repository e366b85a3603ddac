//! Zero-copy line handling over a single UTF-16 buffer.
//!
//! A [`LineTable`] owns the code units of a whole file. Lines are carved out
//! of that buffer once, as [`Span`]s, and never copied again: sorting and
//! restoring only shuffle span descriptors. [`LineSlice`] is the borrowed
//! view used for comparison and output.

pub mod comparator;
pub mod error;
pub mod lines;
pub mod slice;
pub mod span;
pub mod table;
pub mod units;

pub use comparator::{LessFn, SortOrder, forward, reversed};
pub use error::TextError;
pub use lines::{split_lines, trim_trailing_empty};
pub use slice::{Direction, LineSlice};
pub use span::Span;
pub use table::{LineOrder, LineTable};
pub use units::{
    BYTE_ORDER_MARK, ByteOrder, CodeUnit, IGNORABLE, LINE_FEED, SENTINEL, UNIT_WIDTH,
    count_units, is_ignorable, ordinal_cmp, unit_len,
};
