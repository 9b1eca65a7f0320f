/// FlatTable HTTP Data Source
///
/// Blocking HTTP implementation of `PeopleSource` against a
/// randomuser-style endpoint. The response envelope is expected to carry a
/// `results` array of record objects; individual malformed records are
/// skipped rather than failing the batch.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value as JsonValue;

use crate::record::{records_from_values, RawRecord};
use crate::source::{PeopleSource, SourceError};

/// Default endpoint serving randomly generated people records.
const RANDOM_USER_URL: &str = "https://randomuser.me/api/";

/// Default number of records per fetch.
const DEFAULT_RESULTS: usize = 20;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// People source backed by the randomuser API (or any endpoint speaking
/// the same envelope).
pub struct RandomUserSource {
    client: Client,
    url: String,
    results: usize,
}

impl RandomUserSource {
    /// Create a source against the default endpoint, fetching 20 records
    /// per call.
    pub fn new() -> Result<Self, SourceError> {
        Self::with_endpoint(RANDOM_USER_URL, DEFAULT_RESULTS)
    }

    /// Create a source against a custom endpoint and batch size.
    pub fn with_endpoint(url: impl Into<String>, results: usize) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(RandomUserSource {
            client,
            url: url.into(),
            results,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn results(&self) -> usize {
        self.results
    }
}

impl PeopleSource for RandomUserSource {
    fn fetch_people(&self) -> Result<Vec<RawRecord>, SourceError> {
        let body: JsonValue = self
            .client
            .get(&self.url)
            .query(&[("results", self.results.to_string())])
            .send()?
            .error_for_status()?
            .json()?;

        let results = body
            .get("results")
            .and_then(JsonValue::as_array)
            .ok_or_else(|| SourceError::Shape("missing `results` array".to_string()))?;

        Ok(records_from_values(results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let source = RandomUserSource::new().unwrap();
        assert_eq!(source.url(), RANDOM_USER_URL);
        assert_eq!(source.results(), DEFAULT_RESULTS);
    }

    #[test]
    fn test_custom_endpoint() {
        let source = RandomUserSource::with_endpoint("http://localhost:9999/api", 5).unwrap();
        assert_eq!(source.url(), "http://localhost:9999/api");
        assert_eq!(source.results(), 5);
    }
}
