//! Title Bar Component
//!
//! App heading with the light/dark theme toggle.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn TitleBar() -> impl IntoView {
    let ctx = use_app_context();
    let dark_mode = Memo::new(move |_| ctx.state.with(|s| s.dark_mode));

    view! {
        <div class="title-bar">
            <h1>"To-Do List"</h1>
            <button
                class="theme-toggle"
                title=move || if dark_mode.get() { "Switch to light mode" } else { "Switch to dark mode" }
                on:click=move |_| ctx.controller().toggle_theme()
            >
                {move || if dark_mode.get() { "☀️" } else { "🌙" }}
            </button>
        </div>
    }
}
