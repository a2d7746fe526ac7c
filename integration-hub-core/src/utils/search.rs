//! Client-side search over record fields
//!
//! Used by screens whose backend does not filter (documents). Matching is a
//! case-insensitive substring test on the stringified value of each field;
//! nested fields use dotted paths such as `deal_data.TITLE`.

use integration_hub_provider::Record;

/// Whether any of `fields` of `record` contains `needle`.
///
/// A blank needle matches everything. Missing and non-scalar fields never
/// match.
pub fn matches(record: &Record, fields: &[&str], needle: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    fields.iter().any(|path| {
        record
            .field_str(path)
            .is_some_and(|value| value.to_lowercase().contains(&needle))
    })
}

/// Records of `records` matching `needle`, in their original order.
pub fn filter_records<'a>(records: &'a [Record], fields: &[&str], needle: &str) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|r| matches(r, fields, needle))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use integration_hub_provider::RecordShape;
    use serde_json::{Value, json};

    const DOCUMENT_FIELDS: &[&str] = &["document_number", "customer_name", "author"];

    fn doc(value: Value) -> Record {
        Record::from_json(value, &RecordShape::new("id")).unwrap()
    }

    fn documents() -> Vec<Record> {
        vec![
            doc(json!({"id": 1, "document_number": "ZK-0001", "customer_name": "Romashka LLC", "author": "Ivanova"})),
            doc(json!({"id": 2, "document_number": "ZK-0002", "customer_name": "Vector", "author": null})),
            doc(json!({"id": 3, "document_number": 77, "customer_name": "ROMASHKA retail"})),
        ]
    }

    #[test]
    fn blank_search_keeps_everything() {
        let docs = documents();
        assert_eq!(filter_records(&docs, DOCUMENT_FIELDS, "  ").len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let docs = documents();
        let hits: Vec<&str> = filter_records(&docs, DOCUMENT_FIELDS, "romashka")
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(hits, vec!["1", "3"]);
    }

    #[test]
    fn numeric_fields_are_matched_as_text() {
        let docs = documents();
        assert_eq!(filter_records(&docs, DOCUMENT_FIELDS, "77").len(), 1);
    }

    #[test]
    fn null_and_missing_fields_do_not_match() {
        let docs = documents();
        assert!(!matches(&docs[1], &["author", "order_type"], "null"));
    }

    #[test]
    fn dotted_paths_reach_nested_fields() {
        let change = doc(json!({"id": 9, "deal_data": {"TITLE": "Wholesale order"}}));
        assert!(matches(&change, &["deal_data.TITLE"], "WHOLESALE"));
        assert!(!matches(&change, &["deal_data.STAGE_ID"], "wholesale"));
    }
}
