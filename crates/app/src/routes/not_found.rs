use dioxus::prelude::*;

/// Catch-all for paths outside the route table.
///
/// The gate redirects these to `/login` before this body is ever shown.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "unknown path");
    rsx! {}
}
