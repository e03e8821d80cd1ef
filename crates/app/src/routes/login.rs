use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Form, FormError, Input,
};
use std::collections::HashMap;

use super::Route;
use crate::auth::use_session;

/// Email/password sign-in.
///
/// On success the user goes into the session and history is replaced with
/// `/dashboard`.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut submitting = use_signal(|| false);

    let handle_login = move |_: FormEvent| async move {
        submitting.set(true);
        error_msg.set(String::new());
        field_errors.set(HashMap::new());

        match server::api::login(email(), password()).await {
            Ok(user) => {
                session.set_user(user);
                navigator().replace(Route::Dashboard {});
            }
            Err(e) => {
                let err_str = e.to_string();
                let fields = AppError::parse_field_errors(&err_str);
                if fields.is_empty() {
                    error_msg.set(AppError::friendly_message(&err_str));
                } else {
                    field_errors.set(fields);
                }
            }
        }
        submitting.set(false);
    };

    let field_error = move |name: &str| field_errors.read().get(name).cloned().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "HealthDesk" }
                    CardDescription { "Sign in to your account" }
                }
                CardContent {
                    Form { onsubmit: handle_login,
                        FormError { message: error_msg() }
                        Input {
                            label: "Email",
                            input_type: "email",
                            placeholder: "you@clinic.org",
                            value: email(),
                            error: field_error("email"),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            error: field_error("password"),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            disabled: submitting(),
                            if submitting() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
