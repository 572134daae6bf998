//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::TaskListController;
use crate::store::TaskListState;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The controller lives on the UI thread only
    controller: StoredValue<Rc<TaskListController>, LocalStorage>,
    /// Latest state published by the controller
    pub state: ReadSignal<TaskListState>,
}

impl AppContext {
    pub fn new(controller: Rc<TaskListController>, state: ReadSignal<TaskListState>) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            state,
        }
    }

    pub fn controller(&self) -> Rc<TaskListController> {
        self.controller.get_value()
    }

    /// Run an async controller operation without blocking the event handler
    pub fn spawn<F, Fut>(&self, operation: F)
    where
        F: FnOnce(Rc<TaskListController>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let controller = self.controller();
        spawn_local(async move { operation(controller).await });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
