/// FlatTable People Record Model
///
/// Typed serde model of the people payload served by randomuser-style
/// endpoints. Only the `location` branch matters to the table pipeline;
/// every other top-level field of a record is ignored at parse time.
///
/// The location shape is fixed where the flattener needs it to be
/// (`street`, `coordinates`) and open everywhere else: remaining scalar
/// fields (city, state, country, postcode, ...) are captured in document
/// order so downstream header discovery sees them in their original
/// position. `timezone` is parsed but deliberately never flattened.

use crate::value::CellValue;
use indexmap::IndexMap;
use log::warn;
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Street sub-object of a location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Street {
    pub number: CellValue,
    pub name: CellValue,
}

/// Coordinates sub-object of a location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Coordinates {
    pub latitude: CellValue,
    pub longitude: CellValue,
}

/// A nested location record.
///
/// `rest` holds every field that is not one of the three named branches,
/// in document order. Values must be scalars; a location carrying an
/// unexpected sub-object fails to parse and the owning record is skipped
/// by [`records_from_values`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub street: Street,
    pub coordinates: Coordinates,
    /// Present in the payload but excluded from flattening.
    #[serde(default)]
    pub timezone: JsonValue,
    #[serde(flatten)]
    pub rest: IndexMap<String, CellValue>,
}

/// A single people record as fetched from the data source.
///
/// Top-level fields other than `location` (name, email, picture, ...) are
/// not part of the table pipeline and are dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub location: Location,
}

/// Parse raw JSON values into records, skipping malformed entries.
///
/// A record that fails typed deserialization (most commonly a missing
/// `street` or `coordinates` branch) is logged and dropped; the remaining
/// records still load. A fully malformed batch therefore yields an empty
/// vector rather than an error.
pub fn records_from_values(values: &[JsonValue]) -> Vec<RawRecord> {
    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        match serde_json::from_value::<RawRecord>(value.clone()) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!("skipping malformed record at index {}: {}", index, err);
            }
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> JsonValue {
        json!({
            "name": { "first": "Ada", "last": "Lovelace" },
            "location": {
                "street": { "number": 12, "name": "Rue de Rivoli" },
                "city": "Paris",
                "state": "Ile-de-France",
                "country": "France",
                "postcode": 75001,
                "coordinates": { "latitude": "48.8566", "longitude": "2.3522" },
                "timezone": { "offset": "+1:00", "description": "Paris" }
            },
            "email": "ada@example.com"
        })
    }

    #[test]
    fn test_parses_location_and_ignores_other_fields() {
        let record: RawRecord = serde_json::from_value(sample_record()).unwrap();
        assert_eq!(record.location.street.number, CellValue::Int(12));
        assert_eq!(record.location.street.name, CellValue::from("Rue de Rivoli"));
        assert_eq!(
            record.location.coordinates.latitude,
            CellValue::from("48.8566")
        );
    }

    #[test]
    fn test_rest_preserves_document_order() {
        let record: RawRecord = serde_json::from_value(sample_record()).unwrap();
        let keys: Vec<&str> = record.location.rest.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["city", "state", "country", "postcode"]);
        assert_eq!(record.location.rest["postcode"], CellValue::Int(75001));
    }

    #[test]
    fn test_timezone_captured_outside_rest() {
        let record: RawRecord = serde_json::from_value(sample_record()).unwrap();
        assert!(record.location.timezone.is_object());
        assert!(!record.location.rest.contains_key("timezone"));
    }

    #[test]
    fn test_missing_timezone_is_tolerated() {
        let value = json!({
            "location": {
                "street": { "number": 1, "name": "Main" },
                "coordinates": { "latitude": "0", "longitude": "0" },
                "city": "Paris"
            }
        });
        let record: RawRecord = serde_json::from_value(value).unwrap();
        assert!(record.location.timezone.is_null());
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let missing_street = json!({
            "location": {
                "coordinates": { "latitude": "0", "longitude": "0" },
                "city": "Nowhere"
            }
        });
        let values = vec![sample_record(), missing_street, sample_record()];
        let records = records_from_values(&values);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_all_malformed_yields_empty() {
        let values = vec![json!({"location": {}}), json!(42)];
        assert!(records_from_values(&values).is_empty());
    }
}
