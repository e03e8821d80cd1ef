use dioxus::prelude::*;

/// Static list of feature labels shown on a role dashboard.
///
/// Items are labels only; they carry no navigation.
#[component]
pub fn FeatureList(
    #[props(default)] heading: String,
    items: Vec<&'static str>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section { class: "feature-list",
            if !heading.is_empty() {
                h3 { class: "feature-list-heading", "{heading}" }
            }
            ul {
                for item in items {
                    li { key: "{item}", class: "feature-list-item", "{item}" }
                }
            }
        }
    }
}
