//! Writing sorted, reverse-sorted and original views of a table.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::text::{LineTable, SortOrder, TextError};

/// One way of ordering a table for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Sorted,
    Reversed,
    Original,
}

impl View {
    /// Rearranges `table` for this view.
    pub fn apply(self, table: &mut LineTable) {
        match self {
            View::Sorted => table.sort_by(SortOrder::Forward.less()),
            View::Reversed => table.sort_by(SortOrder::Reversed.less()),
            View::Original => table.restore_original(),
        }
    }
}

/// Which views to write. Nothing selected means everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSelection {
    pub sorted: bool,
    pub reversed: bool,
    pub original: bool,
}

impl ViewSelection {
    pub fn all() -> Self {
        Self {
            sorted: true,
            reversed: true,
            original: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.sorted || self.reversed || self.original)
    }

    /// Selected views in output order: sorted, reversed, original.
    pub fn views(self) -> Vec<View> {
        let selection = if self.is_empty() { Self::all() } else { self };
        [
            (selection.sorted, View::Sorted),
            (selection.reversed, View::Reversed),
            (selection.original, View::Original),
        ]
        .into_iter()
        .filter_map(|(selected, view)| selected.then_some(view))
        .collect()
    }
}

/// Writes each selected view of `table` to `sink`, one after another.
///
/// Returns the number of views written. The table is left in the order of
/// the last view.
pub fn write_views<W: Write>(
    table: &mut LineTable,
    selection: ViewSelection,
    sink: &mut W,
    write_header: bool,
) -> Result<usize, TextError> {
    let views = selection.views();
    for &view in &views {
        view.apply(table);
        table.write_to(sink, write_header)?;
        log::debug!("wrote {view:?} view of {} lines", table.len());
    }
    Ok(views.len())
}
