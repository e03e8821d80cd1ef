use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLogOut;
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant};

use crate::auth::use_session;
use crate::routes::Route;

/// Ends the session and replaces history with `/login`.
#[component]
pub fn LogoutButton(#[props(default)] variant: ButtonVariant) -> Element {
    let session = use_session();
    let mut pending = use_signal(|| false);

    let on_logout = move |_: MouseEvent| async move {
        pending.set(true);
        session.logout().await;
        pending.set(false);
        navigator().replace(Route::Login {});
    };

    rsx! {
        Button {
            variant,
            disabled: pending(),
            onclick: on_logout,
            Icon { icon: LdLogOut, width: 16, height: 16 }
            "Logout"
        }
    }
}
