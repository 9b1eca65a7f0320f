/// FlatTable Flattener
///
/// Turns nested location records into flat rows plus a header list. Each
/// row keeps the record's remaining scalar fields verbatim (document
/// order), then appends `number`/`name` from the street branch and
/// `latitude`/`longitude` from the coordinates branch. The timezone branch
/// is dropped.
///
/// Headers are discovered from the shape of the **first** produced row
/// only. Datasets with heterogeneous row shapes therefore get headers that
/// are silently wrong for later rows; this first-row-defines-schema rule is
/// a documented limitation preserved for compatibility, not a bug to fix
/// here.

use crate::headers::{flat_field_names, FieldValue, Fields};
use crate::record::Location;
use crate::value::CellValue;
use indexmap::IndexMap;

/// A single flattened row: field name to scalar value, insertion-ordered.
pub type FlatRow = IndexMap<String, CellValue>;

/// A flattened dataset: the discovered header list and the rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flattened {
    pub headers: Vec<String>,
    pub data: Vec<FlatRow>,
}

/// Flatten an array of location records.
///
/// An empty input short-circuits to an empty header list instead of
/// attempting discovery on a row that does not exist.
///
/// # Examples
///
/// ```
/// use flattable::{flatten_locations, CellValue, Coordinates, Location, Street};
/// use indexmap::IndexMap;
///
/// let mut rest = IndexMap::new();
/// rest.insert("city".to_string(), CellValue::from("Paris"));
///
/// let location = Location {
///     street: Street { number: CellValue::Int(1), name: CellValue::from("Main") },
///     coordinates: Coordinates {
///         latitude: CellValue::from("10"),
///         longitude: CellValue::from("20"),
///     },
///     timezone: serde_json::Value::Null,
///     rest,
/// };
///
/// let flattened = flatten_locations(vec![location]);
/// assert_eq!(
///     flattened.headers,
///     vec!["city", "number", "name", "latitude", "longitude"]
/// );
/// assert_eq!(flattened.data[0]["city"], CellValue::from("Paris"));
/// ```
pub fn flatten_locations(locations: Vec<Location>) -> Flattened {
    let mut data = Vec::with_capacity(locations.len());

    for location in locations {
        let mut row = location.rest;
        row.insert("number".to_string(), location.street.number);
        row.insert("name".to_string(), location.street.name);
        row.insert("latitude".to_string(), location.coordinates.latitude);
        row.insert("longitude".to_string(), location.coordinates.longitude);
        data.push(row);
    }

    let headers = match data.first() {
        Some(first) => flat_field_names(&row_fields(first)),
        None => Vec::new(),
    };

    Flattened { headers, data }
}

/// View a flat row as a nested-record shape for header extraction.
fn row_fields(row: &FlatRow) -> Fields {
    row.iter()
        .map(|(key, value)| (key.clone(), FieldValue::Scalar(value.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Coordinates, Street};
    use serde_json::Value as JsonValue;

    fn location(city: &str, number: i64) -> Location {
        let mut rest = IndexMap::new();
        rest.insert("city".to_string(), CellValue::from(city));
        rest.insert("country".to_string(), CellValue::from("France"));
        Location {
            street: Street {
                number: CellValue::Int(number),
                name: CellValue::from("Rue de Rivoli"),
            },
            coordinates: Coordinates {
                latitude: CellValue::from("48.8566"),
                longitude: CellValue::from("2.3522"),
            },
            timezone: JsonValue::Null,
            rest,
        }
    }

    #[test]
    fn test_headers_follow_first_row_order() {
        let flattened = flatten_locations(vec![location("Paris", 12), location("Lyon", 3)]);
        assert_eq!(
            flattened.headers,
            vec!["city", "country", "number", "name", "latitude", "longitude"]
        );
        assert_eq!(flattened.data.len(), 2);
    }

    #[test]
    fn test_street_and_coordinates_expanded() {
        let flattened = flatten_locations(vec![location("Paris", 12)]);
        let row = &flattened.data[0];
        assert_eq!(row["number"], CellValue::Int(12));
        assert_eq!(row["name"], CellValue::from("Rue de Rivoli"));
        assert_eq!(row["latitude"], CellValue::from("48.8566"));
        assert_eq!(row["longitude"], CellValue::from("2.3522"));
    }

    #[test]
    fn test_timezone_is_dropped() {
        let mut loc = location("Paris", 12);
        loc.timezone = serde_json::json!({ "offset": "+1:00" });
        let flattened = flatten_locations(vec![loc]);
        assert!(!flattened.headers.contains(&"timezone".to_string()));
        assert!(!flattened.data[0].contains_key("timezone"));
        assert!(!flattened.data[0].contains_key("offset"));
    }

    #[test]
    fn test_empty_input() {
        let flattened = flatten_locations(Vec::new());
        assert!(flattened.headers.is_empty());
        assert!(flattened.data.is_empty());
    }

    #[test]
    fn test_headers_depend_only_on_first_row_shape() {
        let mut second = location("Lyon", 3);
        second.rest.insert("extra".to_string(), CellValue::from("x"));
        let first = location("Paris", 12);
        let expected = flatten_locations(vec![first.clone()]).headers;
        let flattened = flatten_locations(vec![first, second]);
        assert_eq!(flattened.headers, expected);
    }
}
