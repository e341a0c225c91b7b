use api::pagination::has_next;
use api::pagination::has_previous;
use api::pagination::page_tokens;
use api::pagination::PageToken;
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;

/// Previous / page numbers / next. Ellipses are not clickable.
#[component]
pub fn Pager(current: usize, total: usize, on_change: EventHandler<usize>) -> Element {
    let prev_enabled = has_previous(current);
    let next_enabled = has_next(current, total);

    rsx! {
        nav {
            "aria-label": "Pagination",
            ul {
                li {
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        disabled: !prev_enabled,
                        on_click: move |_| {
                            if prev_enabled {
                                on_change.call(current - 1);
                            }
                        },
                        "Previous"
                    }
                }
            }
            ul {
                for (i, token) in page_tokens(current, total).into_iter().enumerate() {
                    li {
                        key: "{i}",
                        match token {
                            PageToken::Page(page) => rsx! {
                                Button {
                                    button_type: if page == current { ButtonType::Primary } else { ButtonType::Secondary },
                                    outline: page != current,
                                    on_click: move |_| on_change.call(page),
                                    "{page}"
                                }
                            },
                            PageToken::Ellipsis => rsx! {
                                span { "{token}" }
                            },
                        }
                    }
                }
            }
            ul {
                li {
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        disabled: !next_enabled,
                        on_click: move |_| {
                            if next_enabled {
                                on_change.call(current + 1);
                            }
                        },
                        "Next"
                    }
                }
            }
        }
    }
}
