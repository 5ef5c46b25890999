use std::{cell::RefCell, fmt, rc::Rc};

use tracing::{debug, warn};

use super::AuthBackend;
use crate::models::{LoginRequest, User};

/// Shown when a login fails and the backend did not say why.
pub const LOGIN_FALLBACK_ERROR: &str =
    "Unauthorized account or invalid credentials. Please try again.";

/// Whether the browser holds a valid backend session.
///
/// `Unknown` means nobody has asked the backend yet, which is not the same as
/// having asked and been told no.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoginState {
    #[default]
    Unknown,
    LoggedIn,
    LoggedOut,
}

impl LoginState {
    #[must_use]
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    #[must_use]
    pub fn is_logged_in(self) -> bool {
        matches!(self, Self::LoggedIn)
    }
}

/// Client-side record of who is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub user: Option<User>,
    pub login_state: LoginState,
    /// Message from the most recent failed login.
    pub last_error: Option<String>,
    /// A login request is in flight.
    pub pending: bool,
}

type Listener = Rc<dyn Fn(&Session)>;

/// Handle to the single session record of the application.
///
/// Clones share the same record. The store is the only writer; everything
/// else reads snapshots or subscribes to changes. Calls are not serialized
/// against each other: when two requests overlap, the one that resolves last
/// decides the final state.
pub struct SessionStore<B> {
    backend: Rc<B>,
    state: Rc<RefCell<Session>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl<B> Clone for SessionStore<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Rc::clone(&self.backend),
            state: Rc::clone(&self.state),
            listeners: Rc::clone(&self.listeners),
        }
    }
}

impl<B> PartialEq for SessionStore<B> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<B> fmt::Debug for SessionStore<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &*self.state.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish_non_exhaustive()
    }
}

impl<B> SessionStore<B> {
    /// Creates a store in the `Unknown` state backed by `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Rc::new(backend),
            state: Rc::new(RefCell::new(Session::default())),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Copy of the current record.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn login_state(&self) -> LoginState {
        self.state.borrow().login_state
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    /// Registers a callback run with the new record after every change.
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn update(&self, change: impl FnOnce(&mut Session)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            change(&mut state);
            state.clone()
        };
        // Listeners may read the store again, so no borrow is held while they run.
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

impl<B: AuthBackend> SessionStore<B> {
    /// Sends credentials to the backend.
    ///
    /// On success the returned user is stored and the state becomes
    /// `LoggedIn`. On failure `last_error` holds the backend's `detail` or
    /// [`LOGIN_FALLBACK_ERROR`], and the state becomes `LoggedOut` so a stale
    /// session is never shown next to the error. Never retried.
    pub async fn login(&self, username: &str, password: &str) -> LoginState {
        self.update(|session| {
            session.pending = true;
            session.last_error = None;
        });

        let credentials = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let result = self.backend.login(&credentials).await;

        match result {
            Ok(response) => {
                debug!(username = %response.user.username, "login succeeded");
                self.update(|session| {
                    session.user = Some(response.user);
                    session.login_state = LoginState::LoggedIn;
                    session.pending = false;
                });
            }
            Err(err) => {
                warn!(error = %err, "login failed");
                self.update(|session| {
                    session.user = None;
                    session.login_state = LoginState::LoggedOut;
                    session.last_error = Some(err.user_message(LOGIN_FALLBACK_ERROR));
                    session.pending = false;
                });
            }
        }
        self.login_state()
    }

    /// Asks the backend who owns the current cookie session.
    ///
    /// Any failure, whether transport, 401, or a malformed body, leaves the
    /// store `LoggedOut` with no user. The failure is only logged.
    pub async fn check_auth(&self) -> LoginState {
        match self.backend.current_user().await {
            Ok(response) => {
                debug!(username = %response.user.username, "session is valid");
                self.update(|session| {
                    session.user = Some(response.user);
                    session.login_state = LoginState::LoggedIn;
                });
            }
            Err(err) => {
                let reason = err
                    .detail()
                    .map_or_else(|| err.to_string(), ToString::to_string);
                debug!(%reason, "authentication check failed");
                self.update(|session| {
                    session.user = None;
                    session.login_state = LoginState::LoggedOut;
                });
            }
        }
        self.login_state()
    }
}
