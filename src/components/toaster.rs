//! Toaster Component
//!
//! Renders controller notifications as self-dismissing toasts.

use std::cell::Cell;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::notify::{Notification, NotificationKind, Notifier};

const SUCCESS_TIMEOUT_MS: u32 = 2_000;
const ERROR_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

fn display_time(kind: NotificationKind) -> u32 {
    match kind {
        NotificationKind::Success => SUCCESS_TIMEOUT_MS,
        NotificationKind::Error => ERROR_TIMEOUT_MS,
    }
}

/// Notifier that pushes into the toast list and schedules removal
pub struct ToastNotifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: Cell<u64>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<Vec<Toast>>) -> Self {
        Self {
            toasts,
            next_id: Cell::new(0),
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let timeout = display_time(notification.kind);
        log::debug!("[TOAST] {:?}: {}", notification.kind, notification.message);

        self.toasts.update(|list| list.push(Toast { id, notification }));

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            toasts.update(|list| list.retain(|toast| toast.id != id));
        });
    }
}

/// Top-right toast stack; clicking a toast dismisses it early
#[component]
pub fn Toaster(toasts: RwSignal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div class="toaster">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.notification.kind {
                        NotificationKind::Success => "toast success",
                        NotificationKind::Error => "toast error",
                    };
                    view! {
                        <div
                            class=class
                            role="status"
                            on:click=move |_| toasts.update(|list| list.retain(|t| t.id != id))
                        >
                            {toast.notification.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
