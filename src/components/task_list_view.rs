//! Task List View Component
//!
//! Renders the current snapshot, one row per task in server order.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::use_app_context;

#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = use_app_context();
    let tasks = Memo::new(move |_| ctx.state.with(|s| s.tasks.clone()));

    view! {
        <ul class="task-list">
            // Keyed by the whole task so a changed title or flag re-renders its row
            <For
                each=move || tasks.get()
                key=|task| task.clone()
                children=move |task| view! { <TaskRow task=task /> }
            />
        </ul>
        <Show when=move || tasks.with(|list| list.is_empty())>
            <p class="empty-hint">"Nothing to do. Add a task above."</p>
        </Show>
    }
}
