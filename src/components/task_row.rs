//! Task Row Component
//!
//! One task: checkbox, title (or inline editor), delete button.
//! Swiping the row left deletes it, same as the button.

use leptos::html;
use leptos::prelude::*;
use leptos_swipe::{
    create_swipe_signals, is_swipe_click, make_on_mousedown, make_on_mouseleave, make_on_mouseup,
    make_on_touchend, make_on_touchstart, SwipeDirection,
};

use crate::context::{use_app_context, AppContext};
use crate::models::{Task, TaskId};

fn spawn_delete(ctx: AppContext, id: TaskId) {
    ctx.spawn(move |controller| async move { controller.delete(&id).await });
}

/// A single task row in the list
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let swipe = create_swipe_signals();

    let id = task.id.clone();
    let completed = task.completed;

    let editing = {
        let id = id.clone();
        Memo::new(move |_| ctx.state.with(|s| s.is_editing(&id)))
    };

    let on_swipe = {
        let id = id.clone();
        Callback::new(move |direction: SwipeDirection| {
            if direction == SwipeDirection::Left {
                spawn_delete(ctx, id.clone());
            }
        })
    };

    let toggle = {
        let id = id.clone();
        move |ev: web_sys::MouseEvent| {
            // The row is re-rendered from the reloaded list, not the click.
            ev.prevent_default();
            let id = id.clone();
            ctx.spawn(move |controller| async move { controller.toggle_completed(&id).await });
        }
    };

    let delete = {
        let id = id.clone();
        move |_| spawn_delete(ctx, id.clone())
    };

    let title_or_editor = move || {
        if editing.get() {
            view! { <TaskTitleEditor id=id.clone() /> }.into_any()
        } else {
            let task = task.clone();
            let title = task.title.clone();
            view! {
                <span
                    class="task-title"
                    on:click=move |_| {
                        if !is_swipe_click(&swipe) {
                            ctx.controller().start_edit(&task);
                        }
                    }
                >
                    {title}
                </span>
            }
            .into_any()
        }
    };

    view! {
        <li
            class=move || if completed { "task-row completed" } else { "task-row" }
            on:mousedown=make_on_mousedown(swipe)
            on:mouseup=make_on_mouseup(swipe, on_swipe)
            on:mouseleave=make_on_mouseleave(swipe)
            on:touchstart=make_on_touchstart(swipe)
            on:touchend=make_on_touchend(swipe, on_swipe)
        >
            <input type="checkbox" prop:checked=completed on:click=toggle />
            {title_or_editor}
            <button class="delete-btn" title="Delete task" on:click=delete>"🗑"</button>
        </li>
    }
}

/// Inline title editor; blur or Enter saves, Escape cancels
#[component]
fn TaskTitleEditor(id: TaskId) -> impl IntoView {
    let ctx = use_app_context();
    let input_ref = NodeRef::<html::Input>::new();

    let draft = Memo::new(move |_| {
        ctx.state.with(|s| s.edit_title(&id).unwrap_or_default().to_string())
    });

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let commit = move || ctx.spawn(|controller| async move { controller.commit_edit().await });

    view! {
        <input
            class="task-title-input"
            type="text"
            node_ref=input_ref
            prop:value=move || draft.get()
            on:input=move |ev| ctx.controller().set_edit_title(&event_target_value(&ev))
            on:blur=move |_| commit()
            on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                "Enter" => commit(),
                "Escape" => ctx.controller().cancel_edit(),
                _ => {}
            }
        />
    }
}
