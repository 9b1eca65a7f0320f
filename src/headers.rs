/// FlatTable Header Extraction
///
/// Headers are the flat field names discovered from a nested record. The
/// nested shape is modeled as a tagged union of scalars and sub-objects
/// rather than untyped reflection, so the extractor is a structural walk:
/// scalar keys emit themselves, object keys splice in their own flat names
/// depth-first, in place.
///
/// Extraction performs no de-duplication. If two branches of the record
/// carry the same leaf name, both are emitted; callers that need unique
/// headers get whatever the first row's shape dictates. This mirrors the
/// observed behavior of the system being modeled and is covered by tests.

use crate::value::CellValue;
use indexmap::IndexMap;

/// A field in a nested record: either a scalar leaf or a sub-object.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Scalar(CellValue),
    Object(Fields),
}

/// An insertion-ordered set of named fields.
pub type Fields = IndexMap<String, FieldValue>;

/// Extract the flat field names of a nested record.
///
/// Keys are visited in insertion order. A scalar key contributes its own
/// name; an object key contributes the recursively extracted names of its
/// sub-fields, spliced in at the key's position.
///
/// # Examples
///
/// ```
/// use flattable::{CellValue, FieldValue, Fields, flat_field_names};
///
/// let mut street = Fields::new();
/// street.insert("number".to_string(), FieldValue::Scalar(CellValue::Int(1)));
/// street.insert("name".to_string(), FieldValue::Scalar(CellValue::from("Main")));
///
/// let mut record = Fields::new();
/// record.insert("city".to_string(), FieldValue::Scalar(CellValue::from("Paris")));
/// record.insert("street".to_string(), FieldValue::Object(street));
///
/// assert_eq!(flat_field_names(&record), vec!["city", "number", "name"]);
/// ```
pub fn flat_field_names(fields: &Fields) -> Vec<String> {
    let mut names = Vec::new();
    for (key, value) in fields {
        match value {
            FieldValue::Scalar(_) => names.push(key.clone()),
            FieldValue::Object(inner) => names.extend(flat_field_names(inner)),
        }
    }
    names
}
