use dioxus::prelude::*;
use shared_ui::{
    Card, CardContent, CardFooter, CardHeader, CardTitle, PageActions, PageHeader, PageTitle,
};

use super::Route;
use crate::auth::use_session;
use crate::components::LogoutButton;

/// General dashboard, open to every signed-in role.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let Some(user) = session.user.read().clone() else {
        return rsx! {};
    };
    let role_label = user.role.label();
    let home = Route::home_for(user.role);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "HealthDesk Dashboard" }
                PageActions {
                    LogoutButton {}
                }
            }
            main { class: "dashboard-main",
                Card {
                    CardHeader {
                        CardTitle { "Welcome, {user.full_name}!" }
                    }
                    CardContent {
                        p { class: "dashboard-detail",
                            "Role: "
                            strong { "{role_label}" }
                        }
                        p { class: "dashboard-detail", "Email: {user.email}" }
                        p { class: "dashboard-detail", "This is your general dashboard." }
                    }
                    if let Some(home) = home {
                        CardFooter {
                            Link { to: home, class: "dashboard-link",
                                "Go to {role_label} Dashboard"
                            }
                        }
                    }
                }
            }
        }
    }
}
