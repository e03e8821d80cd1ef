use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, FeatureList, PageActions, PageHeader, PageTitle};
use shared_types::UserRole;

use crate::auth::use_session;
use crate::components::LogoutButton;

pub const ADMIN_FEATURES: &[&str] = &[
    "Manage Users",
    "View All Enquiries",
    "Manage Doctors",
    "System Settings",
    "View Reports",
];

pub const DOCTOR_FEATURES: &[&str] = &[
    "View My Appointments",
    "Patient Enquiries",
    "Update Availability",
    "Patient Notes",
    "View Schedule",
];

pub const STAFF_FEATURES: &[&str] = &[
    "View Patient Enquiries",
    "Book Appointments",
    "Check Doctor Availability",
    "Manage Appointments",
    "Send Notifications",
];

/// Honorific used in the welcome line.
fn greeting_prefix(role: UserRole) -> Option<&'static str> {
    match role {
        UserRole::Admin => Some("Admin"),
        UserRole::Doctor => Some("Dr."),
        UserRole::Staff | UserRole::User => None,
    }
}

fn welcome_line(role: UserRole, full_name: &str) -> String {
    match greeting_prefix(role) {
        Some(prefix) => format!("Welcome, {prefix} {full_name}!"),
        None => format!("Welcome, {full_name}!"),
    }
}

/// Page body shared by the admin, doctor and staff dashboards.
///
/// Only rendered after the gate has admitted the user, so a missing user
/// here means the session was cleared mid-render; nothing is shown then.
#[component]
pub fn RoleDashboard(role: UserRole, features: Vec<&'static str>) -> Element {
    let session = use_session();
    let Some(user) = session.user.read().clone() else {
        return rsx! {};
    };
    let title = format!("{} Dashboard", role.label());
    let welcome = welcome_line(role, &user.full_name);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "{title}" }
                PageActions {
                    LogoutButton {}
                }
            }
            main { class: "dashboard-main",
                Card {
                    CardHeader {
                        CardTitle { "{welcome}" }
                    }
                    CardContent {
                        p { class: "dashboard-detail", "Email: {user.email}" }
                        FeatureList {
                            heading: format!("{} Features", role.label()),
                            items: features,
                        }
                    }
                }
            }
        }
    }
}
