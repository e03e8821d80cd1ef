use dioxus::prelude::*;

/// Labelled text input. A non-empty `error` is shown underneath.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] error: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            input {
                r#type: input_type,
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                "aria-invalid": !error.is_empty(),
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if !error.is_empty() {
                span { class: "input-error", "{error}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    #[test]
    fn field_error_is_rendered() {
        #[allow(non_snake_case)]
        fn Root() -> Element {
            rsx! {
                Input { label: "Email", input_type: "email", error: "Invalid email address" }
            }
        }
        let html = render(Root);
        assert!(html.contains("input-error"), "{html}");
        assert!(html.contains("Invalid email address"));
        assert!(html.contains(r#"type="email""#));
    }

    #[test]
    fn no_error_no_message() {
        #[allow(non_snake_case)]
        fn Root() -> Element {
            rsx! {
                Input { label: "Password", input_type: "password" }
            }
        }
        let html = render(Root);
        assert!(!html.contains("input-error"), "{html}");
        assert!(html.contains("Password"));
    }
}
