//! To-Do List Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod models;
mod notify;
mod prefs;
mod store;
mod theme;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = rolling_logger::init(level, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&e.to_string().into());
    }

    mount_to_body(App);
}
