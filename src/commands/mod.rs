//! REST Command Wrappers
//!
//! Frontend bindings to the task backend's REST endpoints.

mod task;

use std::fmt;

use async_trait::async_trait;

use crate::models::{Task, TaskId};

pub use task::HttpTaskGateway;

// ========================
// Errors
// ========================

/// Which backend call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Fixed user-facing message shown when this operation fails
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Load => "Failed to load tasks.",
            Operation::Create => "Failed to create task.",
            Operation::Update => "Failed to update task.",
            Operation::Delete => "Failed to delete task.",
        }
    }

    /// Confirmation shown after a successful mutation
    pub fn success_message(self) -> Option<&'static str> {
        match self {
            Operation::Load => None,
            Operation::Create => Some("Task added!"),
            Operation::Update => Some("Task updated!"),
            Operation::Delete => Some("Task deleted!"),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Operation::Load => "load",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(verb)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureCause {
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("{0}")]
    Transport(String),
}

/// Uniform failure of a gateway call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to {operation} task: {cause}")]
pub struct GatewayError {
    pub operation: Operation,
    pub cause: FailureCause,
}

impl GatewayError {
    pub fn status(operation: Operation, status: u16) -> Self {
        Self { operation, cause: FailureCause::Status(status) }
    }

    pub fn transport(operation: Operation, err: impl fmt::Display) -> Self {
        Self { operation, cause: FailureCause::Transport(err.to_string()) }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

// ========================
// Gateway
// ========================

/// The four REST calls the task list needs.
///
/// Futures are not `Send`: in the browser they are backed by `fetch`.
#[async_trait(?Send)]
pub trait TaskGateway {
    /// `GET /tasks`
    async fn list(&self) -> GatewayResult<Vec<Task>>;

    /// `POST /tasks` with `{title}`
    async fn create(&self, title: &str) -> GatewayResult<Task>;

    /// `PUT /tasks/{id}` with the full task
    async fn update(&self, task: &Task) -> GatewayResult<Task>;

    /// `DELETE /tasks/{id}`
    async fn delete(&self, id: &TaskId) -> GatewayResult<()>;
}
