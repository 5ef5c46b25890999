//! Backend endpoint table.
//!
//! Every URL the frontend calls is built here from one configured base URL,
//! so pages never format paths themselves.

use std::{fmt, str::FromStr};

use strum::{EnumIter, IntoEnumIterator};

/// Record collections exposed with list/get/create/update/delete endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum RecordKind {
    Requests,
    Customers,
    Areas,
    SalesPersons,
    Stickers,
}

impl RecordKind {
    /// Path prefix of the collection, relative to the API base.
    #[must_use]
    pub fn collection_path(self) -> &'static str {
        match self {
            Self::Requests => "records/requests",
            Self::Customers => "records/customers",
            Self::Areas => "records/areas",
            Self::SalesPersons => "records/salespersons",
            Self::Stickers => "sticker-service/canvas",
        }
    }

    /// Slug used in the `/master-data/:record_name` route.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Requests => "requests",
            Self::Customers => "customers",
            Self::Areas => "areas",
            Self::SalesPersons => "salespersons",
            Self::Stickers => "stickers",
        }
    }

    /// Human readable title for page headings.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Requests => "Requests",
            Self::Customers => "Customers",
            Self::Areas => "Areas",
            Self::SalesPersons => "Sales Persons",
            Self::Stickers => "Stickers",
        }
    }

    /// Whether the kind is master data (editable reference records).
    #[must_use]
    pub fn is_master_data(self) -> bool {
        matches!(self, Self::Customers | Self::Areas | Self::SalesPersons)
    }

    /// Kinds reachable through the master-data route.
    pub fn master_data() -> impl Iterator<Item = Self> {
        Self::iter().filter(|kind| kind.is_master_data())
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(value))
            .ok_or_else(|| format!("unknown record kind: {value}"))
    }
}

/// URL builder rooted at the backend API base, e.g. `/api/v1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base_url: String,
}

impl ApiEndpoints {
    /// Create an endpoint table; a trailing `/` on `base_url` is ignored.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `POST` credentials here to open a cookie session.
    #[must_use]
    pub fn login(&self) -> String {
        self.url("users/login")
    }

    /// `GET` the user bound to the current cookie session.
    #[must_use]
    pub fn me(&self) -> String {
        self.url("users/me")
    }

    /// `GET`, paged with `start_index` and `batch_size` query parameters.
    #[must_use]
    pub fn list(&self, kind: RecordKind) -> String {
        self.url(&format!("{}/list", kind.collection_path()))
    }

    #[must_use]
    pub fn get(&self, kind: RecordKind, id: i64) -> String {
        self.url(&format!("{}/get/{id}", kind.collection_path()))
    }

    #[must_use]
    pub fn create(&self, kind: RecordKind) -> String {
        self.url(&format!("{}/create", kind.collection_path()))
    }

    #[must_use]
    pub fn update(&self, kind: RecordKind, id: i64) -> String {
        self.url(&format!("{}/update/{id}", kind.collection_path()))
    }

    #[must_use]
    pub fn delete(&self, kind: RecordKind, id: i64) -> String {
        self.url(&format!("{}/delete/{id}", kind.collection_path()))
    }

    /// `GET` with a `category` query parameter.
    #[must_use]
    pub fn dropdown_values(&self) -> String {
        self.url("utils/dropdown-values")
    }

    /// `POST` with `sticker_canvas_id` and `preview_only` query parameters.
    ///
    /// A preview answers with the PDF itself; otherwise the PDF is stored and
    /// the envelope carries its `document_id`.
    #[must_use]
    pub fn generate_sticker_pdf(&self) -> String {
        self.url("sticker-service/generate-sticker-pdf")
    }

    /// `GET` the stored PDF of a sticker canvas.
    #[must_use]
    pub fn sticker_document(&self, canvas_id: i64) -> String {
        self.url(&format!("sticker-service/document/{canvas_id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_user_endpoints() {
        let endpoints = ApiEndpoints::new("http://localhost:8000/api/v1/");
        assert_eq!(endpoints.base_url(), "http://localhost:8000/api/v1");
        assert_eq!(endpoints.login(), "http://localhost:8000/api/v1/users/login");
        assert_eq!(endpoints.me(), "http://localhost:8000/api/v1/users/me");
    }

    #[test]
    fn test_relative_base() {
        let endpoints = ApiEndpoints::new("/api/v1");
        assert_eq!(endpoints.list(RecordKind::Requests), "/api/v1/records/requests/list");
        assert_eq!(endpoints.dropdown_values(), "/api/v1/utils/dropdown-values");
    }

    #[test_case(RecordKind::Requests, "/api/v1/records/requests" ; "requests")]
    #[test_case(RecordKind::Customers, "/api/v1/records/customers" ; "customers")]
    #[test_case(RecordKind::Areas, "/api/v1/records/areas" ; "areas")]
    #[test_case(RecordKind::SalesPersons, "/api/v1/records/salespersons" ; "sales persons")]
    #[test_case(RecordKind::Stickers, "/api/v1/sticker-service/canvas" ; "stickers")]
    fn test_crud_endpoints(kind: RecordKind, prefix: &str) {
        let endpoints = ApiEndpoints::new("/api/v1");
        assert_eq!(endpoints.list(kind), format!("{prefix}/list"));
        assert_eq!(endpoints.get(kind, 9), format!("{prefix}/get/9"));
        assert_eq!(endpoints.create(kind), format!("{prefix}/create"));
        assert_eq!(endpoints.update(kind, 9), format!("{prefix}/update/9"));
        assert_eq!(endpoints.delete(kind, 9), format!("{prefix}/delete/9"));
    }

    #[test_case("/api/v1", "/api/v1/sticker-service" ; "relative base")]
    #[test_case("http://localhost:8000/api/v1/", "http://localhost:8000/api/v1/sticker-service" ; "absolute base")]
    fn test_sticker_document_endpoints(base: &str, prefix: &str) {
        let endpoints = ApiEndpoints::new(base);
        assert_eq!(
            endpoints.generate_sticker_pdf(),
            format!("{prefix}/generate-sticker-pdf")
        );
        assert_eq!(endpoints.sticker_document(9), format!("{prefix}/document/9"));
    }

    #[test]
    fn test_record_kind_slugs_parse_back() {
        for kind in RecordKind::iter() {
            assert_eq!(kind.slug().parse::<RecordKind>(), Ok(kind));
        }
        assert_eq!("Customers".parse::<RecordKind>(), Ok(RecordKind::Customers));
        assert!("invoices".parse::<RecordKind>().is_err());
    }

    #[test]
    fn test_master_data_kinds() {
        let kinds: Vec<RecordKind> = RecordKind::master_data().collect();
        assert_eq!(
            kinds,
            vec![RecordKind::Customers, RecordKind::Areas, RecordKind::SalesPersons]
        );
    }
}
