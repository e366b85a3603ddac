//! Canonical line orderings for [`LineTable::sort_by`](super::LineTable::sort_by).

use serde::{Deserialize, Serialize};

use super::slice::LineSlice;

/// Strict "less than" predicate over two lines.
pub type LessFn = fn(&LineSlice<'_>, &LineSlice<'_>) -> bool;

/// Front-to-back, punctuation-insensitive ordering.
pub fn forward(lhs: &LineSlice<'_>, rhs: &LineSlice<'_>) -> bool {
    lhs.compare_forward(rhs)
}

/// Back-to-front, punctuation-insensitive ordering.
///
/// Empty lines have no last unit to start from; they order like lines made
/// only of ignorable units, before every line with a meaningful unit.
pub fn reversed(lhs: &LineSlice<'_>, rhs: &LineSlice<'_>) -> bool {
    match lhs.compare_reversed(rhs) {
        Ok(less) => less,
        Err(_) => !lhs.has_meaningful_units() && rhs.has_meaningful_units(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Forward,
    Reversed,
}

impl SortOrder {
    pub fn less(self) -> LessFn {
        match self {
            SortOrder::Forward => forward,
            SortOrder::Reversed => reversed,
        }
    }
}
