//! Task List State
//!
//! Plain snapshot of everything the view renders. Owned and mutated by
//! the controller; the view only ever sees clones.

use crate::models::{Task, TaskId};

/// The one task currently rendered with an inline editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: TaskId,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListState {
    /// Snapshot from the last successful fetch, in server order
    pub tasks: Vec<Task>,
    /// Text in the creation field
    pub new_title: String,
    /// `None` = idle
    pub editing: Option<EditDraft>,
    pub dark_mode: bool,
}

impl TaskListState {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Default::default()
        }
    }

    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.editing.as_ref().is_some_and(|draft| &draft.id == id)
    }

    /// Draft title for `id`, if that task is being edited
    pub fn edit_title(&self, id: &TaskId) -> Option<&str> {
        self.editing
            .as_ref()
            .filter(|draft| &draft.id == id)
            .map(|draft| draft.title.as_str())
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    pub fn remaining(&self) -> usize {
        self.tasks.len() - self.completed_count()
    }
}
