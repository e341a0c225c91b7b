//! Defines the mutable, reactive state for the application's UI.

use api::prefs::user_prefs::UserPrefs;
use api::records::Loan;
use api::records::User;
use api::store::RemoteStore;
use dioxus::prelude::*;

use crate::components::toaster::Toasts;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// Both stores are shared by every screen: the Users and Transactions views
/// read the same `users` collection.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    pub users: Signal<RemoteStore<User>>,
    pub loans: Signal<RemoteStore<Loan>>,
    pub prefs: Signal<UserPrefs>,
    pub toasts: Signal<Toasts>,
}
