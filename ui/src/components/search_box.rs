use dioxus::prelude::*;

#[component]
pub fn SearchBox(
    value: String,
    placeholder: &'static str,
    on_search: EventHandler<String>,
) -> Element {
    rsx! {
        form {
            role: "search",
            onsubmit: move |evt| evt.prevent_default(),
            input {
                r#type: "search",
                name: "search",
                value: "{value}",
                placeholder,
                "aria-label": placeholder,
                oninput: move |evt| on_search.call(evt.value()),
            }
        }
    }
}
