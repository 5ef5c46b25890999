//! Column definitions for the record tables.

use crate::endpoints::RecordKind;

/// A table column: the header label and the JSON field it displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableHeader {
    pub text: &'static str,
    pub value: &'static str,
}

const fn header(text: &'static str, value: &'static str) -> TableHeader {
    TableHeader { text, value }
}

pub const REQUESTS: &[TableHeader] = &[
    header("ID", "id"),
    header("Lab Reference No.", "ref_no"),
    header("Date Received", "date_received"),
    header("Area Name", "area_name"),
    header("Customer Name", "customer_name"),
    header("Short Description", "short_description"),
    header("Long Description", "long_description"),
    header("Sales Person", "sales_person_id"),
    header("Status", "status"),
    header("Category", "category"),
    header("LPO No.", "lpo_no"),
    header("Created By", "created_by"),
    header("Created On", "created_on"),
];

pub const CUSTOMERS: &[TableHeader] = &[header("ID", "id"), header("Customer Name", "name")];

pub const AREAS: &[TableHeader] = &[header("ID", "id"), header("Area Name", "name")];

pub const SALES_PERSONS: &[TableHeader] = &[
    header("ID", "id"),
    header("First Name", "first_name"),
    header("Last Name", "last_name"),
];

pub const STICKER_CANVASES: &[TableHeader] = &[
    header("ID", "id"),
    header("Document ID", "document_id"),
    header("Stickers", "stickers_count"),
    header("Created By", "created_by"),
    header("Created On", "created_on"),
];

/// Columns shown for a record kind.
#[must_use]
pub fn headers_for(kind: RecordKind) -> &'static [TableHeader] {
    match kind {
        RecordKind::Requests => REQUESTS,
        RecordKind::Customers => CUSTOMERS,
        RecordKind::Areas => AREAS,
        RecordKind::SalesPersons => SALES_PERSONS,
        RecordKind::Stickers => STICKER_CANVASES,
    }
}

/// Renders one cell of a JSON row as display text. Missing and null values are blank.
#[must_use]
pub fn cell_text(row: &serde_json::Value, column: &TableHeader) -> String {
    match row.get(column.value) {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(serde_json::Value::Array(items)) => items.len().to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_requests_columns_in_order() {
        let values: Vec<&str> = REQUESTS.iter().map(|column| column.value).collect();
        assert_eq!(values.len(), 13);
        assert_eq!(values.first(), Some(&"id"));
        assert_eq!(values[1], "ref_no");
        assert_eq!(values.last(), Some(&"created_on"));
    }

    #[test]
    fn test_every_kind_has_unique_columns() {
        for kind in RecordKind::iter() {
            let columns = headers_for(kind);
            assert!(!columns.is_empty(), "{kind} has no columns");
            let unique: HashSet<&str> = columns.iter().map(|column| column.value).collect();
            assert_eq!(unique.len(), columns.len(), "{kind} repeats a column");
        }
    }

    #[test]
    fn test_cell_text() {
        let row = json!({
            "id": 4,
            "ref_no": "LAB-4",
            "status": null,
            "stickers": [1, 2, 3]
        });
        let column = |value| TableHeader { text: "", value };

        assert_eq!(cell_text(&row, &column("id")), "4");
        assert_eq!(cell_text(&row, &column("ref_no")), "LAB-4");
        assert_eq!(cell_text(&row, &column("status")), "");
        assert_eq!(cell_text(&row, &column("lpo_no")), "");
        assert_eq!(cell_text(&row, &column("stickers")), "3");
    }
}
