//! Scripted [`AuthBackend`] for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;

use super::AuthBackend;
use crate::errors::ApiError;
use crate::models::{LoginRequest, LoginResponse, MeResponse, User, UserRole};

pub(crate) fn sample_user() -> User {
    User {
        id: 7,
        username: "jdoe".to_string(),
        email: "john.doe@domain.com".to_string(),
        role: UserRole::User,
        is_active: Some(true),
        first_name: Some("John".to_string()),
        last_name: Some("Doe".to_string()),
        full_name: Some("John Doe".to_string()),
    }
}

/// Answers each call with the next queued response; an empty queue answers 401.
#[derive(Default)]
pub(crate) struct ScriptedBackend {
    login_responses: RefCell<VecDeque<Result<LoginResponse, ApiError>>>,
    me_responses: RefCell<VecDeque<Result<MeResponse, ApiError>>>,
    credentials: RefCell<Vec<LoginRequest>>,
    me_calls: Cell<usize>,
}

impl ScriptedBackend {
    pub(crate) fn push_login(&self, response: Result<LoginResponse, ApiError>) {
        self.login_responses.borrow_mut().push_back(response);
    }

    pub(crate) fn push_me(&self, response: Result<MeResponse, ApiError>) {
        self.me_responses.borrow_mut().push_back(response);
    }

    pub(crate) fn me_calls(&self) -> usize {
        self.me_calls.get()
    }

    pub(crate) fn last_credentials(&self) -> Option<LoginRequest> {
        self.credentials.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl AuthBackend for ScriptedBackend {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.credentials.borrow_mut().push(credentials.clone());
        let next = self.login_responses.borrow_mut().pop_front();
        next.unwrap_or_else(|| Err(ApiError::from_status(401, "")))
    }

    async fn current_user(&self) -> Result<MeResponse, ApiError> {
        self.me_calls.set(self.me_calls.get() + 1);
        let next = self.me_responses.borrow_mut().pop_front();
        next.unwrap_or_else(|| Err(ApiError::from_status(401, "")))
    }
}
