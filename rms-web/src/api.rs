use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use shared::models::{ApiResponse, LoginRequest, LoginResponse, MeResponse, Page};
use shared::reference::{self, RefCategory, RefValue};
use shared::{ApiEndpoints, ApiError, AuthBackend, RecordKind};

/// Lightweight API client for the records-management backend.
///
/// Every request carries the browser's cookies, which is how the backend
/// session travels.
#[derive(Clone, Debug)]
pub struct RmsClient {
    endpoints: ApiEndpoints,
    client: Client,
}

impl RmsClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoints: ApiEndpoints::new(&absolute_base(base_url)),
            client: build_client(),
        }
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = with_credentials(request)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        read_json(response).await
    }

    /// Fetch one page of a record collection.
    pub async fn list_records<T: DeserializeOwned>(
        &self,
        kind: RecordKind,
        start_index: u32,
        batch_size: u32,
    ) -> Result<Page<T>, ApiError> {
        let request = self
            .client
            .get(self.endpoints.list(kind))
            .query(&[("start_index", start_index), ("batch_size", batch_size)]);
        self.send(request).await
    }

    /// Fetch a single record by id.
    pub async fn get_record<T: DeserializeOwned>(
        &self,
        kind: RecordKind,
        id: i64,
    ) -> Result<T, ApiError> {
        self.send(self.client.get(self.endpoints.get(kind, id))).await
    }

    /// Create a record from `payload`.
    pub async fn create_record<P: Serialize + ?Sized>(
        &self,
        kind: RecordKind,
        payload: &P,
    ) -> Result<ApiResponse, ApiError> {
        self.send(self.client.post(self.endpoints.create(kind)).json(payload))
            .await
    }

    /// Patch the fields present in `payload`.
    pub async fn update_record<P: Serialize + ?Sized>(
        &self,
        kind: RecordKind,
        id: i64,
        payload: &P,
    ) -> Result<ApiResponse, ApiError> {
        self.send(self.client.patch(self.endpoints.update(kind, id)).json(payload))
            .await
    }

    pub async fn delete_record(&self, kind: RecordKind, id: i64) -> Result<ApiResponse, ApiError> {
        self.send(self.client.delete(self.endpoints.delete(kind, id)))
            .await
    }

    /// Dropdown values for one category; a payload without values yields an empty list.
    pub async fn ref_values(&self, category: RefCategory) -> Result<Vec<RefValue>, ApiError> {
        let request = self
            .client
            .get(self.endpoints.dropdown_values())
            .query(&[("category", category.as_str())]);
        let envelope: ApiResponse = self.send(request).await?;
        Ok(reference::values_from_response(&envelope))
    }

    /// Render a canvas to PDF and store it; the envelope carries `document_id`.
    pub async fn generate_sticker_document(&self, canvas_id: i64) -> Result<ApiResponse, ApiError> {
        let request = self
            .client
            .post(self.endpoints.generate_sticker_pdf())
            .query(&[("sticker_canvas_id", canvas_id.to_string())])
            .query(&[("preview_only", "false")]);
        self.send(request).await
    }

    /// Address of a canvas' stored PDF, for the browser to open or save.
    pub fn sticker_document_url(&self, canvas_id: i64, inline: bool) -> String {
        let disposition = if inline { "inline" } else { "attachment" };
        format!(
            "{}?content_disposition={disposition}",
            self.endpoints.sticker_document(canvas_id)
        )
    }
}

#[async_trait(?Send)]
impl AuthBackend for RmsClient {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.send(self.client.post(self.endpoints.login()).json(credentials))
            .await
    }

    async fn current_user(&self) -> Result<MeResponse, ApiError> {
        self.send(self.client.get(self.endpoints.me())).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), &body))
    }
}

#[cfg(target_arch = "wasm32")]
fn build_client() -> Client {
    Client::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

/// Anchors a path-only base such as `/api/v1` to the page origin, which the
/// fetch-backed client needs to build absolute URLs.
pub(crate) fn absolute_base(base_url: &str) -> String {
    if base_url.starts_with('/') {
        if let Some(origin) = page_origin() {
            return format!("{origin}{base_url}");
        }
    }
    base_url.to_string()
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}
