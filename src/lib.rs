/// FlatTable - Searchable, Sortable People Table
///
/// An in-memory interactive table over people records fetched from a remote
/// API. Nested location data is flattened into flat rows with first-row
/// header discovery, columns toggle through a 3-way sort cycle, and a
/// free-text query filters rows by their serialized representation.

pub mod filter;
pub mod flatten;
pub mod headers;
pub mod record;
pub mod session;
pub mod sort;
pub mod source;
pub mod value;

pub use filter::{filter_rows, row_matches, serialize_row};
pub use flatten::{flatten_locations, FlatRow, Flattened};
pub use headers::{flat_field_names, FieldValue, Fields};
pub use record::{records_from_values, Coordinates, Location, RawRecord, Street};
pub use session::{LoadToken, TableSession, TableSnapshot};
pub use sort::{initial_sort_state, next_direction, sort_rows, SortDirection, SortState};
pub use source::{PeopleSource, SourceError};
pub use value::CellValue;

// HTTP data source - only when the http feature is enabled
#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "http")]
pub use http::RandomUserSource;
