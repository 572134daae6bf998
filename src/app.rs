//! To-Do List App
//!
//! Wires the controller to its ports and renders the single-card layout.

use std::rc::Rc;

use leptos::prelude::*;

use crate::commands::{HttpTaskGateway, TaskGateway};
use crate::components::{NewTaskForm, TaskListView, TitleBar, Toast, ToastNotifier, Toaster};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::TaskListController;
use crate::prefs::{LocalStoragePreferences, MemoryPreferences, PreferenceStore};
use crate::theme::apply_theme;

fn open_preferences() -> Rc<dyn PreferenceStore> {
    match LocalStoragePreferences::open() {
        Some(prefs) => Rc::new(prefs),
        None => {
            log::warn!("[APP] localStorage unavailable, theme will not persist");
            Rc::new(MemoryPreferences::new(false))
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("[APP] Task backend at {}", config.api_base_url);

    let toasts = RwSignal::new(Vec::<Toast>::new());
    let gateway: Rc<dyn TaskGateway> = Rc::new(HttpTaskGateway::new(&config));
    let controller = Rc::new(TaskListController::new(
        gateway,
        open_preferences(),
        Rc::new(ToastNotifier::new(toasts)),
    ));

    // Re-render on every controller change
    let (state, set_state) = signal(controller.state());
    controller.subscribe(move |snapshot| set_state.set(snapshot.clone()));

    let ctx = AppContext::new(controller, state);
    provide_context(ctx);

    let dark_mode = Memo::new(move |_| state.with(|s| s.dark_mode));
    Effect::new(move |_| apply_theme(dark_mode.get()));

    // Load tasks on mount
    Effect::new(move |_| {
        log::info!("[APP] Loading tasks");
        ctx.spawn(|controller| async move { controller.load().await });
    });

    view! {
        <div class="app-shell">
            <div class="card">
                <TitleBar />
                <NewTaskForm />
                <TaskListView />
                <p class="task-count">
                    {move || state.with(|s| format!("{} tasks, {} remaining", s.tasks.len(), s.remaining()))}
                </p>
            </div>
            <Toaster toasts=toasts />
        </div>
    }
}
