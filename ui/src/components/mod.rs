//! Shared building blocks for the screens.
pub mod data_table;
pub mod empty_state;
pub mod loan_request_modal;
pub mod pager;
pub mod pico;
pub mod search_box;
pub mod sort_select;
pub mod theme_toggle;
pub mod toaster;
