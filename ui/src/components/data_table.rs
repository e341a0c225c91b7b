use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;

/// One record as a table row. Implemented by each screen for its own view of
/// the data, so the same record can be laid out differently.
pub trait TableRow: Clone + PartialEq + 'static {
    /// Header labels, left to right.
    fn columns() -> &'static [&'static str];

    /// A `tr` with one cell per column. `index` is the position on the page.
    fn render_row(&self, index: usize) -> Element;
}

/// A table of one page of rows, with a loading bar while the store is busy,
/// an empty state when there is nothing to show, and a record count footer.
#[component]
pub fn DataTable<T: TableRow>(rows: Vec<T>, loading: bool, total_records: usize) -> Element {
    let columns = T::columns();
    let span = columns.len();

    rsx! {
        div {
            style: "overflow-x: auto;",
            table {
                class: "striped",
                thead {
                    tr {
                        for col in columns.iter() {
                            th { scope: "col", "{col}" }
                        }
                    }
                }
                tbody {
                    if loading {
                        tr {
                            td { colspan: "{span}", progress {} }
                        }
                    } else if rows.is_empty() {
                        tr {
                            td {
                                colspan: "{span}",
                                EmptyState { title: "No data available yet" }
                            }
                        }
                    } else {
                        for (index, row) in rows.iter().enumerate() {
                            {row.render_row(index)}
                        }
                    }
                }
                if total_records > 0 {
                    tfoot {
                        tr {
                            td { colspan: "{span.saturating_sub(1)}", "Total Records" }
                            td { style: "text-align: right;", "{total_records}" }
                        }
                    }
                }
            }
        }
    }
}
