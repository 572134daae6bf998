//! New Task Form Component
//!
//! Creation field with a floating label. Enter or "Add" submits.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let new_title = Memo::new(move |_| ctx.state.with(|s| s.new_title.clone()));

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.spawn(|controller| async move { controller.create().await });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <div class="floating-field">
                <input
                    id="new-task-input"
                    type="text"
                    placeholder=" "
                    prop:value=move || new_title.get()
                    on:input=move |ev| ctx.controller().set_new_title(&event_target_value(&ev))
                />
                <label for="new-task-input">"Add your task"</label>
            </div>
            <button type="submit" class="add-btn">"+ Add"</button>
        </form>
    }
}
