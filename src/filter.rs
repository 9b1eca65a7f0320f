/// FlatTable Filter Engine
///
/// Free-text filtering over the serialized form of each row. A row matches
/// when the lowercased, insertion-ordered JSON string of its fields
/// contains the query as a substring, so queries can span key names, values,
/// and even the punctuation between adjacent fields. Filtering is applied
/// on read and never mutates the stored rows.

use crate::flatten::FlatRow;

/// Serialize a row to its canonical matching form: the JSON object string
/// of its fields in insertion order.
pub fn serialize_row(row: &FlatRow) -> String {
    serde_json::to_string(row).unwrap_or_default()
}

/// Whether a row's serialized form contains `query`. The query is expected
/// to be lowercase already; the row side is lowercased here.
pub fn row_matches(row: &FlatRow, query: &str) -> bool {
    serialize_row(row).to_lowercase().contains(query)
}

/// Filter rows by a free-text query, case-insensitively. An empty query
/// matches every row; row order is preserved.
pub fn filter_rows(rows: &[FlatRow], query: &str) -> Vec<FlatRow> {
    let query = query.to_lowercase();
    rows.iter()
        .filter(|row| row_matches(row, &query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::CellValue;

    fn row(city: &str, postcode: i64) -> FlatRow {
        let mut row = FlatRow::new();
        row.insert("city".to_string(), CellValue::from(city));
        row.insert("postcode".to_string(), CellValue::Int(postcode));
        row
    }

    #[test]
    fn test_serialization_is_insertion_ordered() {
        let serialized = serialize_row(&row("Paris", 75001));
        assert_eq!(serialized, "{\"city\":\"Paris\",\"postcode\":75001}");
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let rows = vec![row("Paris", 75001), row("Lyon", 69001)];
        let filtered = filter_rows(&rows, "");
        assert_eq!(filtered, rows);
    }

    #[test]
    fn test_substring_match_on_value() {
        let rows = vec![row("Paris", 75001), row("Lyon", 69001)];
        let filtered = filter_rows(&rows, "pari");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0]["city"], CellValue::from("Paris"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let rows = vec![row("Paris", 75001), row("Lyon", 69001)];
        assert_eq!(filter_rows(&rows, "PARIS"), filter_rows(&rows, "paris"));
        assert_eq!(filter_rows(&rows, "PARIS").len(), 1);
    }

    #[test]
    fn test_query_can_match_key_names() {
        let rows = vec![row("Paris", 75001)];
        assert_eq!(filter_rows(&rows, "postcode").len(), 1);
    }

    #[test]
    fn test_query_can_match_numbers() {
        let rows = vec![row("Paris", 75001), row("Lyon", 69001)];
        let filtered = filter_rows(&rows, "7500");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0]["city"], CellValue::from("Paris"));
    }

    #[test]
    fn test_no_match_returns_empty() {
        let rows = vec![row("Paris", 75001)];
        assert!(filter_rows(&rows, "berlin").is_empty());
    }

    #[test]
    fn test_filter_does_not_reorder() {
        let rows = vec![row("Paris", 1), row("Parma", 2), row("Parral", 3)];
        let filtered = filter_rows(&rows, "par");
        assert_eq!(filtered, rows);
    }
}
