use std::time::Duration;

use api::store::Notification;
use api::store::NotificationKind;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;

/// How long a toast stays up unless closed.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// The toasts currently on screen, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Toasts {
    next_id: u64,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    /// Shows a notification and returns the id to dismiss it by.
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind: notification.kind,
            message: notification.message,
        });
        id
    }

    /// Removes a toast. Unknown ids are ignored, so a toast closed by hand
    /// can still be "expired" later.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Puts notifications on screen and schedules their removal.
pub fn show_notifications(mut toasts: Signal<Toasts>, notifications: Vec<Notification>) {
    for notification in notifications {
        let id = toasts.write().push(notification);
        spawn(async move {
            crate::compat::sleep(TOAST_LIFETIME).await;
            toasts.write().dismiss(id);
        });
    }
}

/// Top-right stack of transient messages.
#[component]
pub fn Toaster() -> Element {
    let mut toasts = use_context::<AppStateMut>().toasts;

    rsx! {
        div {
            style: "position: fixed; top: 1rem; right: 1rem; z-index: 1000; max-width: 22rem;",
            for toast in toasts.read().items().iter().cloned() {
                article {
                    key: "{toast.id}",
                    role: if toast.kind.is_error() { "alert" } else { "status" },
                    style: if toast.kind.is_error() {
                        "margin-bottom: 0.5rem; border-left: 4px solid var(--pico-del-color);"
                    } else {
                        "margin-bottom: 0.5rem; border-left: 4px solid var(--pico-ins-color);"
                    },
                    div {
                        style: "display: flex; justify-content: space-between; gap: 1rem;",
                        span { "{toast.message}" }
                        a {
                            href: "#",
                            "aria-label": "Dismiss",
                            onclick: move |evt| {
                                evt.prevent_default();
                                toasts.write().dismiss(toast.id);
                            },
                            "×"
                        }
                    }
                }
            }
        }
    }
}
