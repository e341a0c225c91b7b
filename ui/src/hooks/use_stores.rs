//! Runs the shared stores' async operations on the UI event loop.
//!
//! Store transitions happen synchronously on either side of the request, so
//! no signal is held across an await.

use std::future::Future;

use api::records::LoanDraft;
use api::records::Record;
use api::store::RemoteStore;
use api::ApiError;
use api::Backend;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::toaster::show_notifications;

fn fetch_into<T, F>(mut store: Signal<RemoteStore<T>>, request: F)
where
    T: Record,
    F: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let ticket = store.write().begin_fetch();
    spawn(async move {
        let result = request.await;
        store.write().finish_fetch(ticket, result);
    });
}

/// Starts (or restarts) loading users. A fetch already in flight is
/// superseded.
pub fn fetch_users(app_state: &AppState, state: AppStateMut) {
    let app_state = app_state.clone();
    fetch_into(state.users, async move { app_state.api.users().await });
}

pub fn fetch_loans(app_state: &AppState, state: AppStateMut) {
    let app_state = app_state.clone();
    fetch_into(state.loans, async move { app_state.api.loans().await });
}

/// Sends a validated loan request, then shows the store's success or
/// failure notice. Returns whether the server accepted it.
pub async fn submit_loan(app_state: &AppState, state: AppStateMut, draft: LoanDraft) -> bool {
    let mut loans = state.loans;
    let ticket = loans.write().begin_create();
    let result = app_state.api.create_loan(&draft).await;

    let created = loans
        .write()
        .finish_create(ticket, result, app_state.slot.as_ref());
    let notes = loans.write().drain_notifications();
    show_notifications(state.toasts, notes);
    created
}

/// Loads both collections once, when the dashboard first mounts.
pub fn use_initial_fetch() {
    let app_state = use_context::<AppState>();
    let state = use_context::<AppStateMut>();
    use_effect(move || {
        fetch_users(&app_state, state);
        fetch_loans(&app_state, state);
    });
}
