/// FlatTable Data Source Seam
///
/// The table controller obtains records through the `PeopleSource` trait so
/// the fetch transport stays swappable: the `http` feature ships a
/// randomuser-backed implementation, and tests plug in in-memory doubles.

use crate::record::RawRecord;
use thiserror::Error;

/// Errors a data source can produce.
///
/// Failures never escalate past the load cycle: the session logs them and
/// installs an empty dataset.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// The network request failed.
    #[cfg(feature = "http")]
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response arrived but its envelope was not the expected shape.
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

/// A provider of people records.
pub trait PeopleSource {
    /// Fetch one batch of records. Individual malformed records are the
    /// implementation's concern (the HTTP source skips them); an `Err`
    /// means the batch as a whole is unusable.
    fn fetch_people(&self) -> Result<Vec<RawRecord>, SourceError>;
}
