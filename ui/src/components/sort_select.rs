use std::str::FromStr;

use api::records::LoanSortKey;
use api::records::UserSortKey;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

/// A sort key that can be offered in a `<select>`.
pub trait SortOption: IntoEnumIterator + FromStr + Copy + PartialEq + 'static {
    fn label(&self) -> &'static str;
    fn value(&self) -> &'static str;
}

impl SortOption for UserSortKey {
    fn label(&self) -> &'static str {
        UserSortKey::label(self)
    }
    fn value(&self) -> &'static str {
        self.as_str()
    }
}

impl SortOption for LoanSortKey {
    fn label(&self) -> &'static str {
        LoanSortKey::label(self)
    }
    fn value(&self) -> &'static str {
        self.as_str()
    }
}

/// "Sort by" dropdown. The blank entry keeps the server's order.
#[component]
pub fn SortSelect<K: SortOption>(selected: Option<K>, on_change: EventHandler<Option<K>>) -> Element {
    rsx! {
        select {
            name: "sort",
            "aria-label": "Sort by",
            onchange: move |evt| on_change.call(K::from_str(&evt.value()).ok()),
            option { value: "", selected: selected.is_none(), "Sort by" }
            for key in K::iter() {
                option {
                    value: key.value(),
                    selected: selected == Some(key),
                    "{key.label()}"
                }
            }
        }
    }
}
