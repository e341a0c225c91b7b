use api::prefs::theme::Theme;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;

/// Flips between light and dark and remembers the choice.
#[component]
pub fn ThemeToggle() -> Element {
    let app_state = use_context::<AppState>();
    let mut prefs = use_context::<AppStateMut>().prefs;
    let theme = prefs.read().theme();

    let (icon, label) = match theme {
        Theme::Light => ("☾", "Switch to dark theme"),
        Theme::Dark => ("☀", "Switch to light theme"),
    };

    rsx! {
        button {
            class: "secondary outline",
            title: label,
            "aria-label": label,
            onclick: move |_| {
                let next = theme.toggled();
                prefs.write().set_theme(next, app_state.slot.as_ref());
            },
            "{icon}"
        }
    }
}
