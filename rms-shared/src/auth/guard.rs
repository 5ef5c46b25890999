use std::fmt;

use tracing::debug;

use super::{AuthBackend, LoginState, SessionStore};

/// A destination the guard can reason about.
pub trait GuardedRoute: Sized {
    /// Whether only signed-in users may open this route.
    fn requires_auth(&self) -> bool;

    /// Where unauthenticated users are sent instead.
    fn login_route() -> Self;
}

/// Outcome of a navigation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation<R> {
    Proceed,
    Redirect(R),
}

/// Runs before every route transition.
///
/// The first navigation made while the login state is still `Unknown` waits
/// for one session check; every later navigation is decided from the cached
/// state. A failed check keeps protected routes closed until a login succeeds.
pub struct NavigationGuard<B> {
    session: SessionStore<B>,
}

impl<B> Clone for NavigationGuard<B> {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
        }
    }
}

impl<B> PartialEq for NavigationGuard<B> {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session
    }
}

impl<B> fmt::Debug for NavigationGuard<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationGuard")
            .field("session", &self.session)
            .finish()
    }
}

impl<B> NavigationGuard<B> {
    pub fn new(session: SessionStore<B>) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore<B> {
        &self.session
    }

    /// Synchronous decision from a known state. `Unknown` is treated as signed out.
    pub fn decide<R: GuardedRoute>(target: &R, state: LoginState) -> Navigation<R> {
        if target.requires_auth() && !state.is_logged_in() {
            Navigation::Redirect(R::login_route())
        } else {
            Navigation::Proceed
        }
    }
}

impl<B: AuthBackend> NavigationGuard<B> {
    /// Current login state, asking the backend first if it is still unknown.
    pub async fn resolve(&self) -> LoginState {
        match self.session.login_state() {
            LoginState::Unknown => {
                debug!("login state unknown, checking session before navigating");
                self.session.check_auth().await
            }
            known => known,
        }
    }

    /// Decides whether navigation to `target` may proceed.
    pub async fn before_each<R: GuardedRoute>(&self, target: &R) -> Navigation<R> {
        let state = self.resolve().await;
        Self::decide(target, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::testing::{ScriptedBackend, sample_user};
    use crate::errors::ApiError;
    use crate::models::{LoginResponse, MeResponse};
    use test_case::test_case;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Route {
        Home,
        Login,
        Requests,
        About,
    }

    impl GuardedRoute for Route {
        fn requires_auth(&self) -> bool {
            !matches!(self, Route::Login)
        }

        fn login_route() -> Self {
            Route::Login
        }
    }

    const PROTECTED: [Route; 3] = [Route::Home, Route::Requests, Route::About];

    fn guard(backend: ScriptedBackend) -> NavigationGuard<ScriptedBackend> {
        NavigationGuard::new(SessionStore::new(backend))
    }

    #[test_case(LoginState::LoggedOut ; "logged out")]
    #[test_case(LoginState::Unknown ; "unknown")]
    fn test_protected_routes_redirect_without_session(state: LoginState) {
        for route in PROTECTED {
            assert_eq!(
                NavigationGuard::<ScriptedBackend>::decide(&route, state),
                Navigation::Redirect(Route::Login),
                "{route:?} should redirect"
            );
        }
    }

    #[test_case(LoginState::LoggedIn ; "logged in")]
    #[test_case(LoginState::LoggedOut ; "logged out")]
    #[test_case(LoginState::Unknown ; "unknown")]
    fn test_public_routes_always_proceed(state: LoginState) {
        assert_eq!(
            NavigationGuard::<ScriptedBackend>::decide(&Route::Login, state),
            Navigation::Proceed
        );
    }

    #[test]
    fn test_protected_routes_proceed_when_logged_in() {
        for route in PROTECTED {
            assert_eq!(
                NavigationGuard::<ScriptedBackend>::decide(&route, LoginState::LoggedIn),
                Navigation::Proceed
            );
        }
    }

    #[tokio::test]
    async fn test_first_navigation_checks_once_and_lands_home() {
        let backend = ScriptedBackend::default();
        backend.push_me(Ok(MeResponse { user: sample_user() }));
        let guard = guard(backend);

        assert_eq!(guard.before_each(&Route::Home).await, Navigation::Proceed);
        assert_eq!(guard.before_each(&Route::Requests).await, Navigation::Proceed);
        assert_eq!(guard.before_each(&Route::About).await, Navigation::Proceed);

        assert_eq!(guard.session().backend().me_calls(), 1);
        assert_eq!(guard.session().user(), Some(sample_user()));
    }

    #[tokio::test]
    async fn test_failed_check_lands_on_login() {
        let backend = ScriptedBackend::default();
        backend.push_me(Err(ApiError::from_status(401, "")));
        let guard = guard(backend);

        assert_eq!(
            guard.before_each(&Route::Home).await,
            Navigation::Redirect(Route::Login)
        );
        assert_eq!(guard.session().backend().me_calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_check_is_not_retried() {
        let backend = ScriptedBackend::default();
        backend.push_me(Err(ApiError::Transport("offline".to_string())));
        backend.push_me(Ok(MeResponse { user: sample_user() }));
        let guard = guard(backend);

        for _ in 0..3 {
            assert_eq!(
                guard.before_each(&Route::Requests).await,
                Navigation::Redirect(Route::Login)
            );
        }
        assert_eq!(guard.before_each(&Route::Login).await, Navigation::Proceed);
        assert_eq!(guard.session().backend().me_calls(), 1);
    }

    #[tokio::test]
    async fn test_login_reopens_protected_routes() {
        let backend = ScriptedBackend::default();
        backend.push_me(Err(ApiError::from_status(401, "")));
        backend.push_login(Ok(LoginResponse {
            message: None,
            access_token: None,
            user: sample_user(),
        }));
        let guard = guard(backend);

        assert_eq!(
            guard.before_each(&Route::Home).await,
            Navigation::Redirect(Route::Login)
        );
        guard.session().login("jdoe", "S3cret!").await;
        assert_eq!(guard.before_each(&Route::Home).await, Navigation::Proceed);
        assert_eq!(guard.session().backend().me_calls(), 1);
    }

    #[tokio::test]
    async fn test_public_first_navigation_still_resolves_state() {
        let backend = ScriptedBackend::default();
        backend.push_me(Ok(MeResponse { user: sample_user() }));
        let guard = guard(backend);

        assert_eq!(guard.before_each(&Route::Login).await, Navigation::Proceed);
        assert_eq!(guard.session().login_state(), LoginState::LoggedIn);
    }
}
