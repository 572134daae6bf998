//! UI Components
//!
//! Leptos components for the task list.

mod new_task_form;
mod task_list_view;
mod task_row;
mod title_bar;
mod toaster;

pub use new_task_form::NewTaskForm;
pub use task_list_view::TaskListView;
pub use task_row::TaskRow;
pub use title_bar::TitleBar;
pub use toaster::{Toast, ToastNotifier, Toaster};
