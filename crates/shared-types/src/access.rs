//! Route guard decisions.
//!
//! Both guards are pure functions of the session snapshot and the route's
//! requirement. Check order is fixed: `loading` first, then whether a user is
//! present, then role membership.

use serde::{Deserialize, Serialize};

use crate::{Session, UserRole};

/// Where a guard sends the visitor instead of rendering the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Redirect {
    Login,
    Dashboard,
    Unauthorized,
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::Login => "/login",
            Redirect::Dashboard => "/dashboard",
            Redirect::Unauthorized => "/unauthorized",
        }
    }
}

/// Outcome of evaluating a guard.
///
/// Redirects replace the current history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardDecision {
    ShowLoadingPlaceholder,
    RedirectTo(Redirect),
    RenderChildren,
}

/// Guard for protected routes.
///
/// An empty `required_roles` admits any signed-in user.
pub fn evaluate_protected(session: &Session, required_roles: &[UserRole]) -> GuardDecision {
    if session.loading {
        return GuardDecision::ShowLoadingPlaceholder;
    }

    let Some(user) = &session.user else {
        return GuardDecision::RedirectTo(Redirect::Login);
    };

    if !required_roles.is_empty() && !required_roles.contains(&user.role) {
        return GuardDecision::RedirectTo(Redirect::Unauthorized);
    }

    GuardDecision::RenderChildren
}

/// Guard for pages only anonymous visitors should see, such as `/login`.
pub fn evaluate_public_only(session: &Session) -> GuardDecision {
    if session.user.is_some() {
        GuardDecision::RedirectTo(Redirect::Dashboard)
    } else {
        GuardDecision::RenderChildren
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AuthUser;
    use pretty_assertions::assert_eq;

    fn user(role: UserRole) -> AuthUser {
        AuthUser {
            id: 1,
            full_name: "Jordan Reyes".into(),
            email: "jordan@clinic.test".into(),
            role,
            is_active: true,
        }
    }

    /// Requirement sets worth checking: empty, each single role, and a pair.
    fn requirements() -> Vec<Vec<UserRole>> {
        let mut sets = vec![vec![]];
        sets.extend(UserRole::ALL.iter().map(|r| vec![*r]));
        sets.push(vec![UserRole::Doctor, UserRole::Staff]);
        sets
    }

    #[test]
    fn loading_never_redirects() {
        let mut sessions = vec![Session::resolving()];
        for role in UserRole::ALL {
            sessions.push(Session {
                user: Some(user(role)),
                loading: true,
            });
        }

        for session in &sessions {
            for required in requirements() {
                assert_eq!(
                    evaluate_protected(session, &required),
                    GuardDecision::ShowLoadingPlaceholder
                );
            }
        }
    }

    #[test]
    fn anonymous_is_sent_to_login() {
        for required in requirements() {
            assert_eq!(
                evaluate_protected(&Session::anonymous(), &required),
                GuardDecision::RedirectTo(Redirect::Login)
            );
        }
    }

    #[test]
    fn role_outside_requirement_is_unauthorized() {
        for role in UserRole::ALL {
            let session = Session::signed_in(user(role));
            for required in requirements() {
                let expected = if required.is_empty() || required.contains(&role) {
                    GuardDecision::RenderChildren
                } else {
                    GuardDecision::RedirectTo(Redirect::Unauthorized)
                };
                assert_eq!(evaluate_protected(&session, &required), expected);
            }
        }
    }

    #[test]
    fn empty_requirement_admits_every_role() {
        for role in UserRole::ALL {
            assert_eq!(
                evaluate_protected(&Session::signed_in(user(role)), &[]),
                GuardDecision::RenderChildren
            );
        }
    }

    #[test]
    fn doctor_cannot_open_admin_route() {
        let session = Session::signed_in(user(UserRole::Doctor));
        assert_eq!(
            evaluate_protected(&session, &[UserRole::Admin]),
            GuardDecision::RedirectTo(Redirect::Unauthorized)
        );
    }

    #[test]
    fn public_only_redirects_signed_in_users() {
        for role in UserRole::ALL {
            assert_eq!(
                evaluate_public_only(&Session::signed_in(user(role))),
                GuardDecision::RedirectTo(Redirect::Dashboard)
            );
        }
    }

    #[test]
    fn public_only_renders_for_anonymous() {
        assert_eq!(
            evaluate_public_only(&Session::anonymous()),
            GuardDecision::RenderChildren
        );
        assert_eq!(
            evaluate_public_only(&Session::resolving()),
            GuardDecision::RenderChildren
        );
    }

    #[test]
    fn redirect_paths() {
        assert_eq!(Redirect::Login.path(), "/login");
        assert_eq!(Redirect::Dashboard.path(), "/dashboard");
        assert_eq!(Redirect::Unauthorized.path(), "/unauthorized");
    }
}
