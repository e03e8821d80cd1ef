use serde::{Deserialize, Serialize};

use crate::AuthUser;

/// Snapshot of the client's authentication state.
///
/// `loading` is true only while the initial session lookup is in flight.
/// Guards must not draw conclusions from `user` until it clears.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl Session {
    /// Session whose resolution has not finished yet.
    pub fn resolving() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    /// Resolved session with no signed-in user.
    pub fn anonymous() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    /// Resolved session for `user`.
    pub fn signed_in(user: AuthUser) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::resolving()
    }
}
