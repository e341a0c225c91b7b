//! This crate contains everything the dashboard knows about its data: the
//! records served by the mock API, the HTTP client that fetches them, and the
//! UI-free logic the screens are built on.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod loan_form;
pub mod pagination;
pub mod prefs;
pub mod query;
pub mod records;
pub mod slot;
pub mod store;

pub use client::Backend;
pub use client::MockApi;
pub use error::ApiError;
