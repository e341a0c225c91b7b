use api::format::format_currency;
use api::format::format_date;
use api::query::QueryState;
use api::records::Loan;
use api::records::LoanSortKey;
use dioxus::prelude::*;

use super::LoadError;
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::data_table::DataTable;
use crate::components::data_table::TableRow;
use crate::components::loan_request_modal::LoanRequestModal;
use crate::components::pager::Pager;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::search_box::SearchBox;
use crate::components::sort_select::SortSelect;
use crate::hooks::use_stores::fetch_loans;

#[derive(Clone, PartialEq)]
struct LoanRow(Loan);

impl TableRow for LoanRow {
    fn columns() -> &'static [&'static str] {
        &[
            "Name",
            "Active loan",
            "Settled loan",
            "Total loan",
            "Purpose",
            "Tenure",
            "Action",
        ]
    }

    fn render_row(&self, index: usize) -> Element {
        let loan = &self.0;
        rsx! {
            tr {
                key: "{index}",
                td { "{loan.name}" }
                td { "{format_currency(&loan.active_loan)}" }
                td { "{format_currency(&loan.settled_loan)}" }
                td { "{format_currency(&loan.total_amount)}" }
                td { "{loan.purpose}" }
                td { "{format_date(&loan.tenure)}" }
                td {
                    Button { button_type: ButtonType::Secondary, outline: true, "View Details" }
                }
            }
        }
    }
}

#[component]
pub fn LoansScreen() -> Element {
    let app_state = use_context::<AppState>();
    let state = use_context::<AppStateMut>();
    let mut query = use_signal(QueryState::<LoanSortKey>::default);
    let mut dialog_open = use_signal(|| false);

    // New or refetched records invalidate the current page.
    use_effect(move || {
        let revision = state.loans.read().revision();
        if query.peek().revision() != revision {
            query.write().follow_revision(revision);
        }
    });

    let (page, loading, error) = {
        let store = state.loans.read();
        let page = query.read().run(store.items(), app_state.page_size());
        (page, store.is_loading(), store.error().map(str::to_string))
    };
    let current = query.read().page();
    let rows: Vec<LoanRow> = page.items.into_iter().map(LoanRow).collect();

    rsx! {
        div {
            class: "grid",
            SearchBox {
                value: query.read().search().to_string(),
                placeholder: "Search loans...",
                on_search: move |term: String| query.write().set_search(term),
            }
            SortSelect::<LoanSortKey> {
                selected: query.read().sort(),
                on_change: move |key| query.write().set_sort(key),
            }
            div {
                style: "text-align: right;",
                Button {
                    on_click: move |_| dialog_open.set(true),
                    "Request Loan"
                }
            }
        }

        LoanRequestModal { is_open: dialog_open }

        if let Some(message) = error {
            LoadError {
                message,
                on_retry: move |_| fetch_loans(&app_state, state),
            }
        }

        DataTable::<LoanRow> {
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
