//! Static path → access table.
//!
//! The router enum in the app names the views; this table is the single place
//! that says who may see them. [`dispatch`] is the generic entry point used by
//! the app's gate layout.

use serde::{Deserialize, Serialize};

use crate::access::{evaluate_protected, evaluate_public_only, GuardDecision, Redirect};
use crate::{Session, UserRole};

/// Access rule attached to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone, signed in or not.
    Public,
    /// Only visitors without a session.
    PublicOnly,
    /// Signed-in users whose role is listed. Empty means any role.
    Protected(&'static [UserRole]),
    /// Never rendered; always sends the visitor elsewhere.
    Redirect(Redirect),
}

impl Access {
    pub fn evaluate(&self, session: &Session) -> GuardDecision {
        match self {
            Access::Public => GuardDecision::RenderChildren,
            Access::PublicOnly => evaluate_public_only(session),
            Access::Protected(roles) => evaluate_protected(session, roles),
            Access::Redirect(target) => GuardDecision::RedirectTo(*target),
        }
    }
}

/// Views the router can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    Login,
    Dashboard,
    AdminDashboard,
    DoctorDashboard,
    StaffDashboard,
    Unauthorized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub access: Access,
    pub view: Option<View>,
}

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/login",
        access: Access::PublicOnly,
        view: Some(View::Login),
    },
    RouteEntry {
        path: "/dashboard",
        access: Access::Protected(&[]),
        view: Some(View::Dashboard),
    },
    RouteEntry {
        path: "/admin/dashboard",
        access: Access::Protected(&[UserRole::Admin]),
        view: Some(View::AdminDashboard),
    },
    RouteEntry {
        path: "/doctor/dashboard",
        access: Access::Protected(&[UserRole::Doctor]),
        view: Some(View::DoctorDashboard),
    },
    RouteEntry {
        path: "/staff/dashboard",
        access: Access::Protected(&[UserRole::Staff]),
        view: Some(View::StaffDashboard),
    },
    RouteEntry {
        path: "/unauthorized",
        access: Access::Public,
        view: Some(View::Unauthorized),
    },
    RouteEntry {
        path: "/",
        access: Access::Redirect(Redirect::Login),
        view: None,
    },
];

/// Strip query string, fragment and trailing slash.
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

pub fn lookup(path: &str) -> Option<&'static RouteEntry> {
    let path = normalize(path);
    ROUTES.iter().find(|entry| entry.path == path)
}

/// Decide what to do for `path` given the current session.
///
/// Paths missing from the table redirect to `/login`.
pub fn dispatch(path: &str, session: &Session) -> GuardDecision {
    match lookup(path) {
        Some(entry) => entry.access.evaluate(session),
        None => GuardDecision::RedirectTo(Redirect::Login),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AuthUser;
    use pretty_assertions::assert_eq;

    fn signed_in(role: UserRole) -> Session {
        Session::signed_in(AuthUser {
            id: 3,
            full_name: "Sam Okafor".into(),
            email: "sam@clinic.test".into(),
            role,
            is_active: true,
        })
    }

    #[test]
    fn doctor_on_admin_dashboard_is_unauthorized() {
        assert_eq!(
            dispatch("/admin/dashboard", &signed_in(UserRole::Doctor)),
            GuardDecision::RedirectTo(Redirect::Unauthorized)
        );
    }

    #[test]
    fn anonymous_on_dashboard_goes_to_login() {
        assert_eq!(
            dispatch("/dashboard", &Session::anonymous()),
            GuardDecision::RedirectTo(Redirect::Login)
        );
    }

    #[test]
    fn staff_on_staff_dashboard_renders_staff_view() {
        let entry = lookup("/staff/dashboard").unwrap();
        assert_eq!(entry.view, Some(View::StaffDashboard));
        assert_eq!(
            dispatch("/staff/dashboard", &signed_in(UserRole::Staff)),
            GuardDecision::RenderChildren
        );
    }

    #[test]
    fn unknown_path_goes_to_login() {
        for session in [
            Session::anonymous(),
            Session::resolving(),
            signed_in(UserRole::Admin),
        ] {
            assert_eq!(
                dispatch("/foo", &session),
                GuardDecision::RedirectTo(Redirect::Login)
            );
        }
    }

    #[test]
    fn root_always_goes_to_login() {
        assert_eq!(
            dispatch("/", &signed_in(UserRole::Staff)),
            GuardDecision::RedirectTo(Redirect::Login)
        );
        assert_eq!(lookup("/").unwrap().view, None);
    }

    #[test]
    fn login_is_public_only() {
        assert_eq!(
            dispatch("/login", &Session::anonymous()),
            GuardDecision::RenderChildren
        );
        assert_eq!(
            dispatch("/login", &signed_in(UserRole::User)),
            GuardDecision::RedirectTo(Redirect::Dashboard)
        );
    }

    #[test]
    fn unauthorized_page_is_public() {
        for session in [
            Session::anonymous(),
            Session::resolving(),
            signed_in(UserRole::Doctor),
        ] {
            assert_eq!(
                dispatch("/unauthorized", &session),
                GuardDecision::RenderChildren
            );
        }
    }

    #[test]
    fn general_dashboard_admits_every_role() {
        for role in UserRole::ALL {
            assert_eq!(
                dispatch("/dashboard", &signed_in(role)),
                GuardDecision::RenderChildren
            );
        }
    }

    #[test]
    fn role_dashboards_admit_only_their_role() {
        for role in UserRole::ALL {
            for (path, owner) in [
                ("/admin/dashboard", UserRole::Admin),
                ("/doctor/dashboard", UserRole::Doctor),
                ("/staff/dashboard", UserRole::Staff),
            ] {
                let expected = if role == owner {
                    GuardDecision::RenderChildren
                } else {
                    GuardDecision::RedirectTo(Redirect::Unauthorized)
                };
                assert_eq!(dispatch(path, &signed_in(role)), expected, "{role} on {path}");
            }
        }
    }

    #[test]
    fn protected_routes_wait_while_loading() {
        for entry in ROUTES {
            if let Access::Protected(_) = entry.access {
                assert_eq!(
                    dispatch(entry.path, &Session::resolving()),
                    GuardDecision::ShowLoadingPlaceholder
                );
            }
        }
    }

    #[test]
    fn lookup_ignores_query_and_trailing_slash() {
        assert_eq!(lookup("/dashboard/").unwrap().path, "/dashboard");
        assert_eq!(lookup("/login?next=%2Fdashboard").unwrap().path, "/login");
        assert_eq!(lookup("/staff/dashboard#top").unwrap().path, "/staff/dashboard");
        assert_eq!(lookup("").unwrap().path, "/");
        assert!(lookup("/admin").is_none());
    }

    #[test]
    fn role_home_paths_are_in_the_table() {
        for role in UserRole::ALL {
            if let Some(path) = role.home_path() {
                let Access::Protected(roles) = lookup(path).unwrap().access else {
                    panic!("{path} should be protected");
                };
                assert_eq!(roles.to_vec(), vec![role]);
            }
        }
    }
}
