/// FlatTable Sort Engine
///
/// Per-column sort direction cycling and row reordering. Each column starts
/// at `Default` and thereafter cycles strictly between `Ascending` and
/// `Descending`; `Default` is never re-entered by clicking.
///
/// The comparison a click performs is driven by the direction *before* the
/// transition: clicking a `Default` or `Descending` column sorts ascending
/// (and the state then advances to `Ascending`); clicking an `Ascending`
/// column sorts descending. Callers that sort by the post-transition
/// direction instead get the cycle off by one — see the session tests.

use crate::flatten::FlatRow;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Per-column sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    #[default]
    Default,
    Ascending,
    Descending,
}

/// Mapping from header name to its current sort direction.
pub type SortState = IndexMap<String, SortDirection>;

/// Build the initial sort state: every header at `Default`.
pub fn initial_sort_state(headers: &[String]) -> SortState {
    headers
        .iter()
        .map(|header| (header.clone(), SortDirection::Default))
        .collect()
}

/// The direction a column advances to when clicked.
pub fn next_direction(current: SortDirection) -> SortDirection {
    match current {
        SortDirection::Default | SortDirection::Descending => SortDirection::Ascending,
        SortDirection::Ascending => SortDirection::Descending,
    }
}

/// Reorder rows by a column, driven by the column's pre-transition
/// direction: `Default` and `Descending` sort ascending, `Ascending` sorts
/// descending. The sort is stable, so equal values keep their relative
/// order. Rows missing the column compare as null and sort first.
pub fn sort_rows(rows: &mut [FlatRow], column: &str, current: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = match (a.get(column), b.get(column)) {
            (Some(va), Some(vb)) => va.compare(vb),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        };
        match current {
            SortDirection::Default | SortDirection::Descending => ordering,
            SortDirection::Ascending => ordering.reverse(),
        }
    });
}
