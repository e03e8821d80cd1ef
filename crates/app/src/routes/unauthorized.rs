use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShieldAlert;
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};

use crate::components::LogoutButton;

/// Shown when a signed-in user opens a route their role may not see.
#[component]
pub fn Unauthorized() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./unauthorized.css") }

        div { class: "unauthorized-page",
            Card { class: "unauthorized-card",
                CardHeader {
                    div { class: "unauthorized-icon",
                        Icon { icon: LdShieldAlert, width: 40, height: 40 }
                    }
                    CardTitle { "Access Denied" }
                    CardDescription { "Unauthorized Access" }
                }
                CardContent {
                    p { "You don't have permission to access this page." }
                }
                CardFooter {
                    Button {
                        onclick: move |_| navigator().go_back(),
                        "Go Back"
                    }
                    LogoutButton { variant: ButtonVariant::Secondary }
                }
            }
        }
    }
}
