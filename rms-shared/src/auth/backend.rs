use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{LoginRequest, LoginResponse, MeResponse};

/// The two backend calls the session store depends on.
///
/// The browser client implements this over HTTP; tests script the responses.
/// Futures are not `Send` because everything runs on the UI event loop.
#[async_trait(?Send)]
pub trait AuthBackend {
    /// `POST /users/login`.
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// `GET /users/me`.
    async fn current_user(&self) -> Result<MeResponse, ApiError>;
}
