//! Wire types for laboratory requests, master data, and sticker canvases.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of a listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub total_count: u64,
    pub records: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            total_count: 0,
            records: Vec::new(),
        }
    }
}

/// Generic `{ response, message }` envelope used by mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiResponse {
    #[serde(default)]
    pub response: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiResponse {
    /// Reads an integer field of `response`, e.g. `new_request_id`.
    #[must_use]
    pub fn id_field(&self, key: &str) -> Option<i64> {
        self.response.as_ref()?.get(key)?.as_i64()
    }
}

/// A laboratory request as listed by the records endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestView {
    pub id: i64,
    /// Lab reference number, generated by the backend.
    pub ref_no: String,
    #[serde(default)]
    pub date_received: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub lpo_no: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub sales_person_id: Option<i64>,
    #[serde(default)]
    pub created_by: Option<String>,
    pub created_on: String,
    #[serde(default)]
    pub modified_by: Option<String>,
    #[serde(default)]
    pub modified_on: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub area_name: Option<String>,
}

/// Body of `POST /records/requests/create`. The reference number is not sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RequestCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_received: Option<NaiveDate>,
    pub customer_id: i64,
    pub area_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_person_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lpo_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// Body of `PATCH /records/requests/update/{id}`; absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RequestUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_received: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_person_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lpo_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
}

/// Customers and areas share this `{ id, name }` shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedRecord {
    pub id: i64,
    pub name: String,
}

/// Create/update body for customers and areas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NamedRecordInput {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SalesPerson {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl SalesPerson {
    /// Short form used in dropdowns: first name and last initial, e.g. `Jane D.`
    #[must_use]
    pub fn short_name(&self) -> String {
        match self.last_name.chars().next() {
            Some(initial) => format!("{} {initial}.", self.first_name),
            None => self.first_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SalesPersonInput {
    pub first_name: String,
    pub last_name: String,
}

/// A single sticker printed on a canvas, linked to a request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StickerView {
    pub id: i64,
    pub request_id: i64,
    pub sticker_canvas_id: i64,
    pub created_on: String,
    #[serde(default)]
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StickerCreate {
    pub request_id: i64,
}

/// A printable sheet of stickers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StickerCanvasView {
    pub id: i64,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub relative_file_path: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    pub created_on: String,
    #[serde(default)]
    pub stickers: Vec<StickerView>,
}

impl StickerCanvasView {
    #[must_use]
    pub fn stickers_count(&self) -> usize {
        self.stickers.len()
    }
}

/// Body of `POST /sticker-service/canvas/create`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StickerCanvasCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub stickers: Vec<StickerCreate>,
}

impl StickerCanvasCreate {
    /// Most stickers the backend accepts on one canvas.
    pub const MAX_STICKERS: usize = 10;

    /// Whether the canvas fits on a single sheet.
    #[must_use]
    pub fn within_limit(&self) -> bool {
        self.stickers.len() <= Self::MAX_STICKERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_page_deserialization() {
        let json = r#"{
            "total_count": 41,
            "records": [{
                "id": 3,
                "ref_no": "LAB-2024-0003",
                "date_received": "2024-05-02",
                "status": "Open",
                "category": null,
                "lpo_no": null,
                "short_description": "Soil sample",
                "long_description": null,
                "sales_person_id": 2,
                "created_by": "jdoe",
                "created_on": "2024-05-02T08:15:00+03:00",
                "modified_by": null,
                "modified_on": null,
                "customer_name": "Acme",
                "area_name": "North"
            }]
        }"#;
        let page: Page<RequestView> = serde_json::from_str(json).unwrap();

        assert_eq!(page.total_count, 41);
        let record = &page.records[0];
        assert_eq!(record.ref_no, "LAB-2024-0003");
        assert_eq!(record.date_received, NaiveDate::from_ymd_opt(2024, 5, 2));
        assert_eq!(record.customer_name.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_request_update_omits_untouched_fields() {
        let update = RequestUpdate {
            status: Some("Completed".to_string()),
            modified_by: Some("jdoe".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "status": "Completed", "modified_by": "jdoe" })
        );
    }

    #[test]
    fn test_api_response_id_field() {
        let response: ApiResponse = serde_json::from_str(
            r#"{"response":{"new_request_id":12},"message":"Request created successfully"}"#,
        )
        .unwrap();
        assert_eq!(response.id_field("new_request_id"), Some(12));
        assert_eq!(response.id_field("missing"), None);
        assert_eq!(ApiResponse::default().id_field("new_request_id"), None);
    }

    #[test]
    fn test_sales_person_short_name() {
        let person = SalesPerson {
            id: 1,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
        };
        assert_eq!(person.short_name(), "Jane D.");

        let no_last = SalesPerson {
            last_name: String::new(),
            ..person
        };
        assert_eq!(no_last.short_name(), "Jane");
    }

    #[test]
    fn test_sticker_canvas_limit() {
        let mut canvas = StickerCanvasCreate {
            stickers: (0..10).map(|id| StickerCreate { request_id: id }).collect(),
            ..Default::default()
        };
        assert!(canvas.within_limit());

        canvas.stickers.push(StickerCreate { request_id: 99 });
        assert!(!canvas.within_limit());
    }

    #[test]
    fn test_sticker_canvas_count() {
        let canvas: StickerCanvasView = serde_json::from_str(
            r#"{"id":5,"created_on":"2024-06-01T10:00:00","stickers":[
                {"id":1,"request_id":3,"sticker_canvas_id":5,"created_on":"2024-06-01T10:00:00"},
                {"id":2,"request_id":4,"sticker_canvas_id":5,"created_on":"2024-06-01T10:00:00"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(canvas.stickers_count(), 2);
        assert_eq!(canvas.document_id, None);
    }
}
