/// FlatTable Table Session
///
/// One explicit session-state struct holds everything the interactive table
/// needs: the discovered headers, the (sorted) rows, the per-column sort
/// state, and the current query. The two inbound presentation events —
/// a header click and a query edit — are plain methods, so the whole
/// pipeline is unit-testable without any rendering harness.
///
/// Loads are guarded by a generation token. The fetch itself has no
/// cancellation, so a reload triggered mid-fetch would otherwise race its
/// predecessor; completions carrying a stale token are discarded instead of
/// clobbering the newer dataset.

use crate::filter::filter_rows;
use crate::flatten::{flatten_locations, FlatRow, Flattened};
use crate::record::RawRecord;
use crate::sort::{initial_sort_state, next_direction, sort_rows, SortState};
use crate::source::{PeopleSource, SourceError};
use log::{debug, warn};

/// Proof that a load was begun; required to complete it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Read model handed to the presentation layer: headers and sort state as
/// stored, rows after filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot<'a> {
    pub headers: &'a [String],
    pub rows: Vec<FlatRow>,
    pub sort_state: &'a SortState,
    pub query: &'a str,
}

/// Interactive table state for one view session.
///
/// # Examples
///
/// ```
/// use flattable::{RawRecord, SourceError, PeopleSource, TableSession};
///
/// struct Empty;
/// impl PeopleSource for Empty {
///     fn fetch_people(&self) -> Result<Vec<RawRecord>, SourceError> {
///         Ok(Vec::new())
///     }
/// }
///
/// let mut session = TableSession::new();
/// session.load_from(&Empty);
/// assert!(session.snapshot().headers.is_empty());
/// assert!(session.snapshot().rows.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct TableSession {
    headers: Vec<String>,
    rows: Vec<FlatRow>,
    sort_state: SortState,
    query: String,
    generation: u64,
}

impl TableSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load cycle. Beginning a new load invalidates the tokens of
    /// any loads still in flight.
    pub fn begin_load(&mut self) -> LoadToken {
        self.generation += 1;
        LoadToken(self.generation)
    }

    /// Install the outcome of a load cycle.
    ///
    /// A stale token (a newer load has begun since this one) is discarded
    /// without touching session state. A failed fetch installs the empty
    /// dataset: no retry and nothing user-visible, just a log line.
    pub fn complete_load(&mut self, token: LoadToken, result: Result<Vec<RawRecord>, SourceError>) {
        if token.0 != self.generation {
            debug!(
                "discarding stale load completion (token {}, current {})",
                token.0, self.generation
            );
            return;
        }

        match result {
            Ok(records) => {
                let locations = records.into_iter().map(|record| record.location).collect();
                let Flattened { headers, data } = flatten_locations(locations);
                self.sort_state = initial_sort_state(&headers);
                self.headers = headers;
                self.rows = data;
            }
            Err(err) => {
                warn!("people fetch failed, leaving dataset empty: {}", err);
                self.headers = Vec::new();
                self.rows = Vec::new();
                self.sort_state = SortState::new();
            }
        }
    }

    /// Run one full load cycle against a source.
    pub fn load_from(&mut self, source: &dyn PeopleSource) {
        let token = self.begin_load();
        let result = source.fetch_people();
        self.complete_load(token, result);
    }

    /// Handle a header click: sort a clone of the rows by the column's
    /// current (pre-transition) direction, advance that column's direction,
    /// and install both. Unknown headers count as `Default`; with no rows
    /// this is a state-only change.
    pub fn on_header_click(&mut self, header: &str) {
        let current = self.sort_state.get(header).copied().unwrap_or_default();
        let mut rows = self.rows.clone();
        sort_rows(&mut rows, header, current);
        self.sort_state
            .insert(header.to_string(), next_direction(current));
        self.rows = rows;
    }

    /// Handle a query edit. The query is stored lowercased so matching is
    /// case-insensitive regardless of what the input field delivers.
    pub fn on_query_change(&mut self, query: &str) {
        self.query = query.to_lowercase();
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort_state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The rows currently visible: stored order (which carries any applied
    /// sort) with the query filter applied on read.
    pub fn visible_rows(&self) -> Vec<FlatRow> {
        filter_rows(&self.rows, &self.query)
    }

    /// Everything the presentation layer consumes, in one read.
    pub fn snapshot(&self) -> TableSnapshot<'_> {
        TableSnapshot {
            headers: &self.headers,
            rows: self.visible_rows(),
            sort_state: &self.sort_state,
            query: &self.query,
        }
    }
}
