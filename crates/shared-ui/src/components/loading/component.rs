use dioxus::prelude::*;

/// Placeholder shown while the session is still being resolved.
///
/// Every guarded route uses this same component so the app never flashes a
/// route-specific loading state.
#[component]
pub fn LoadingPlaceholder(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "loading-placeholder", role: "status", "aria-live": "polite",
            div { class: "loading-spinner" }
            p { "{label}" }
        }
    }
}
