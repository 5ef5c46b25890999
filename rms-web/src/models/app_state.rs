use crate::api::RmsClient;
use shared::{Session, SessionStore};
use yewdux::Store;

/// Session store handle provided to components through a context.
pub type SessionHandle = SessionStore<RmsClient>;

/// Reactive mirror of the session record; components re-render from this.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub session: Session,
}

impl AppState {
    /// Display name of the signed-in user, if any.
    pub fn user_name(&self) -> Option<String> {
        self.session
            .user
            .as_ref()
            .map(|user| user.display_name().to_string())
    }
}
