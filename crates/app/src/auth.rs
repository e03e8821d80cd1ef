use dioxus::prelude::*;
use shared_types::{AuthUser, Session};

/// Client-side session, provided once by `App`.
///
/// `loading` starts out true and flips to false exactly once, when the
/// initial `get_current_user` call settles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub user: Signal<Option<AuthUser>>,
    pub loading: Signal<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            user: Signal::new(None),
            loading: Signal::new(true),
        }
    }

    /// Snapshot handed to the route guards. Reading it subscribes the
    /// calling component to both signals.
    pub fn session(&self) -> Session {
        Session {
            user: self.user.read().clone(),
            loading: *self.loading.read(),
        }
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.user.set(Some(user));
    }

    pub fn clear(&mut self) {
        self.user.set(None);
    }

    pub fn finish_loading(&mut self) {
        if *self.loading.peek() {
            self.loading.set(false);
        }
    }

    /// End the session on the server and locally.
    ///
    /// The local user is cleared even when the server call fails. Callers
    /// navigate to the login page afterwards.
    pub async fn logout(mut self) {
        if let Err(e) = server::api::logout().await {
            tracing::warn!(error = %e, "logout request failed");
        }
        self.clear();
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the session.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// What the initial lookup does to the session.
#[derive(Debug, PartialEq)]
enum Resolution {
    SetUser(AuthUser),
    Clear,
    Keep,
}

/// A user stored by a sign-in that finished first wins over the lookup.
fn resolve_initial(found: Option<AuthUser>, current: Option<&AuthUser>) -> Resolution {
    match (found, current) {
        (_, Some(_)) => Resolution::Keep,
        (Some(user), None) => Resolution::SetUser(user),
        (None, None) => Resolution::Clear,
    }
}

/// Resolve the initial session once on mount.
///
/// Any failure resolves to "no user" so guards never wait forever.
pub fn use_session_resolver() {
    let mut session = use_session();

    use_resource(move || async move {
        let found = match server::api::get_current_user().await {
            Ok(found) => found,
            Err(e) => {
                tracing::debug!(error = %e, "session lookup failed");
                None
            }
        };

        let current = session.user.peek().clone();
        match resolve_initial(found, current.as_ref()) {
            Resolution::SetUser(user) => session.set_user(user),
            Resolution::Clear => session.clear(),
            Resolution::Keep => tracing::debug!("session already set by sign-in"),
        }
        session.finish_loading();
    });
}
