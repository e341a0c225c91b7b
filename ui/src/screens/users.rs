use api::format::format_currency;
use api::query::QueryState;
use api::records::User;
use api::records::UserSortKey;
use dioxus::prelude::*;

use super::LoadError;
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::data_table::DataTable;
use crate::components::data_table::TableRow;
use crate::components::pager::Pager;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::search_box::SearchBox;
use crate::hooks::use_stores::fetch_users;

#[derive(Clone, PartialEq)]
struct UserRow(User);

impl TableRow for UserRow {
    fn columns() -> &'static [&'static str] {
        &["Name", "Account balance", "Recent transactions", "Action"]
    }

    fn render_row(&self, index: usize) -> Element {
        let user = &self.0;
        rsx! {
            tr {
                key: "{index}",
                td { "{user.name}" }
                td { "{format_currency(&user.account_balance)}" }
                td { "{format_currency(&user.recent_transaction)}" }
                td {
                    Button { button_type: ButtonType::Secondary, outline: true, "View Details" }
                }
            }
        }
    }
}

#[component]
pub fn UsersScreen() -> Element {
    let app_state = use_context::<AppState>();
    let state = use_context::<AppStateMut>();
    let mut query = use_signal(QueryState::<UserSortKey>::default);

    // New or refetched records invalidate the current page.
    use_effect(move || {
        let revision = state.users.read().revision();
        if query.peek().revision() != revision {
            query.write().follow_revision(revision);
        }
    });

    let (page, loading, error) = {
        let store = state.users.read();
        let page = query.read().run(store.items(), app_state.page_size());
        (page, store.is_loading(), store.error().map(str::to_string))
    };
    let current = query.read().page();
    let rows: Vec<UserRow> = page.items.into_iter().map(UserRow).collect();

    rsx! {
        SearchBox {
            value: query.read().search().to_string(),
            placeholder: "Search...",
            on_search: move |term: String| query.write().set_search(term),
        }

        if let Some(message) = error {
            LoadError {
                message,
                on_retry: move |_| fetch_users(&app_state, state),
            }
        }

        DataTable::<UserRow> {
            rows,
            loading,
            total_records: page.total_matches,
        }

        Pager {
            current,
            total: page.total_pages,
            on_change: move |p| query.write().set_page(p),
        }
    }
}
