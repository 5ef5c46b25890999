//! Client-side authentication: the session store and the navigation guard.

mod backend;
mod guard;
mod session;

pub use backend::AuthBackend;
pub use guard::{GuardedRoute, Navigation, NavigationGuard};
pub use session::{LOGIN_FALLBACK_ERROR, LoginState, Session, SessionStore};

#[cfg(test)]
pub(crate) mod testing;
