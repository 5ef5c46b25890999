#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]

//! Shared building blocks for the RMS frontend.
//!
//! Everything here compiles both natively and for `wasm32`, so the session
//! store and navigation guard can be exercised with plain `cargo test`.

pub mod auth;
pub mod endpoints;
pub mod errors;
pub mod models;
pub mod reference;
pub mod tables;

pub use auth::{
    AuthBackend, GuardedRoute, LoginState, Navigation, NavigationGuard, Session, SessionStore,
};
pub use endpoints::{ApiEndpoints, RecordKind};
pub use errors::ApiError;
