//! Task List Controller
//!
//! Owns the view state and drives the load → render → mutate → reload
//! cycle. Every successful mutation ends in a full reload; a failed one
//! leaves the state untouched and raises exactly one notification.
//!
//! State is borrowed only between awaits, never across one, so overlapping
//! operations started from the UI cannot trip the `RefCell`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::commands::{GatewayError, GatewayResult, Operation, TaskGateway};
use crate::models::{Task, TaskId};
use crate::notify::{Notification, Notifier};
use crate::prefs::PreferenceStore;
use crate::store::{EditDraft, TaskListState};

/// Shown when a create or rename is submitted with a blank title
pub const EMPTY_TITLE_MESSAGE: &str = "Task title cannot be empty.";

/// Render callback, invoked with the state after every change
pub type Observer = Box<dyn Fn(&TaskListState)>;

pub struct TaskListController {
    gateway: Rc<dyn TaskGateway>,
    preferences: Rc<dyn PreferenceStore>,
    notifier: Rc<dyn Notifier>,
    state: RefCell<TaskListState>,
    observers: RefCell<Vec<Observer>>,
}

impl TaskListController {
    /// Reads the theme preference once; the task list starts empty.
    pub fn new(
        gateway: Rc<dyn TaskGateway>,
        preferences: Rc<dyn PreferenceStore>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        let dark_mode = preferences.load_dark_mode();
        Self {
            gateway,
            preferences,
            notifier,
            state: RefCell::new(TaskListState::new(dark_mode)),
            observers: RefCell::new(Vec::new()),
        }
    }

    pub fn subscribe(&self, observer: impl Fn(&TaskListState) + 'static) {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    /// Clone of the current state
    pub fn state(&self) -> TaskListState {
        self.state.borrow().clone()
    }

    // ========================
    // Internal helpers
    // ========================

    fn update(&self, f: impl FnOnce(&mut TaskListState)) {
        f(&mut self.state.borrow_mut());
        self.emit();
    }

    fn emit(&self) {
        let snapshot = self.state();
        for observer in self.observers.borrow().iter() {
            observer(&snapshot);
        }
    }

    fn fail(&self, err: GatewayError) {
        log::warn!("[CONTROLLER] {}", err);
        self.notifier.notify(Notification::error(err.operation.failure_message()));
    }

    fn reject_blank_title(&self) {
        self.notifier.notify(Notification::error(EMPTY_TITLE_MESSAGE));
    }

    /// Confirm and reload on success, report on failure
    async fn settle<T>(&self, operation: Operation, result: GatewayResult<T>) {
        match result {
            Ok(_) => {
                if let Some(message) = operation.success_message() {
                    self.notifier.notify(Notification::success(message));
                }
                self.load().await;
            }
            Err(err) => self.fail(err),
        }
    }

    // ========================
    // Loading
    // ========================

    /// Replace the task list with a fresh snapshot from the backend.
    ///
    /// On failure the stale list stays in place.
    pub async fn load(&self) {
        match self.gateway.list().await {
            Ok(tasks) => {
                log::info!("[CONTROLLER] Loaded {} tasks", tasks.len());
                self.update(|state| state.tasks = tasks);
            }
            Err(err) => self.fail(err),
        }
    }

    // ========================
    // Creation
    // ========================

    pub fn set_new_title(&self, text: &str) {
        self.update(|state| state.new_title = text.to_string());
    }

    /// Submit the creation draft. Blank drafts never reach the backend.
    pub async fn create(&self) {
        let title = self.state.borrow().new_title.clone();
        if title.trim().is_empty() {
            self.reject_blank_title();
            return;
        }

        let result = self.gateway.create(&title).await;
        if result.is_ok() {
            // Keep anything typed while the request was in flight.
            self.update(|state| {
                if state.new_title == title {
                    state.new_title.clear();
                }
            });
        }
        self.settle(Operation::Create, result).await;
    }

    // ========================
    // Completion
    // ========================

    pub async fn toggle_completed(&self, id: &TaskId) {
        let toggled = self.state.borrow().find(id).map(Task::toggled);
        let Some(task) = toggled else {
            log::debug!("[CONTROLLER] Toggle on unknown task {}", id);
            return;
        };

        let result = self.gateway.update(&task).await;
        self.settle(Operation::Update, result).await;
    }

    // ========================
    // Inline editing
    // ========================

    /// Enter edit mode for `task`, replacing any edit in progress
    pub fn start_edit(&self, task: &Task) {
        self.update(|state| {
            state.editing = Some(EditDraft {
                id: task.id.clone(),
                title: task.title.clone(),
            });
        });
    }

    pub fn set_edit_title(&self, text: &str) {
        self.update(|state| {
            if let Some(draft) = state.editing.as_mut() {
                draft.title = text.to_string();
            }
        });
    }

    pub fn cancel_edit(&self) {
        if self.state.borrow().editing.is_some() {
            self.update(|state| state.editing = None);
        }
    }

    /// Save the edit draft. Edit mode ends before the request is sent and
    /// is not restored if the update fails.
    pub async fn commit_edit(&self) {
        let draft = self.state.borrow_mut().editing.take();
        let Some(draft) = draft else {
            return;
        };
        self.emit();

        if draft.title.trim().is_empty() {
            self.reject_blank_title();
            return;
        }

        let renamed = self.state.borrow().find(&draft.id).map(|task| task.renamed(&draft.title));
        let Some(task) = renamed else {
            log::warn!("[CONTROLLER] Task {} vanished while being edited", draft.id);
            return;
        };

        let result = self.gateway.update(&task).await;
        self.settle(Operation::Update, result).await;
    }

    // ========================
    // Deletion
    // ========================

    /// Delete button and left swipe both land here
    pub async fn delete(&self, id: &TaskId) {
        let result = self.gateway.delete(id).await;
        self.settle(Operation::Delete, result).await;
    }

    // ========================
    // Theme
    // ========================

    pub fn dark_mode(&self) -> bool {
        self.state.borrow().dark_mode
    }

    pub fn set_dark_mode(&self, dark: bool) {
        self.preferences.save_dark_mode(dark);
        self.update(|state| state.dark_mode = dark);
    }

    pub fn toggle_theme(&self) {
        self.set_dark_mode(!self.dark_mode());
    }
}
