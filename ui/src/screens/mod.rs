// This file makes the screen modules available to the rest of the application.

pub mod loans;
pub mod transactions;
pub mod users;

use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;

/// Inline message for a failed store operation, with a way to fetch again.
#[component]
fn LoadError(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "display: flex; align-items: baseline; gap: 1rem; color: var(--pico-del-color);",
            p { "Error: {message}" }
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}
