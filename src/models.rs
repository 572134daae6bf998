//! Frontend Models
//!
//! Data structures matching the REST backend's task shape.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned task identifier (the backend may use numbers or strings)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(n) => write!(f, "{}", n),
            TaskId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TaskId {
    fn from(n: i64) -> Self {
        TaskId::Number(n)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId::Text(s.to_string())
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

impl Task {
    /// Copy with `completed` flipped
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// Copy carrying a new title
    pub fn renamed(&self, title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..self.clone()
        }
    }
}

/// Creation payload; `completed` defaults server-side
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask<'a> {
    pub title: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_id_accepts_number_or_string() {
        let numeric: Task =
            serde_json::from_value(json!({"id": 7, "title": "a", "completed": false})).unwrap();
        let text: Task =
            serde_json::from_value(json!({"id": "6650f1", "title": "b", "completed": true})).unwrap();

        assert_eq!(numeric.id, TaskId::Number(7));
        assert_eq!(text.id, TaskId::Text("6650f1".to_string()));
        assert_eq!(numeric.id.to_string(), "7");
        assert_eq!(text.id.to_string(), "6650f1");
    }

    #[test]
    fn test_task_serializes_full_shape() {
        let task = Task { id: TaskId::Number(3), title: "Buy milk".to_string(), completed: true };
        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            json!({"id": 3, "title": "Buy milk", "completed": true})
        );
    }

    #[test]
    fn test_toggled_and_renamed_keep_other_fields() {
        let task = Task { id: "x".into(), title: "Old".to_string(), completed: false };

        let toggled = task.toggled();
        assert!(toggled.completed);
        assert_eq!(toggled.title, "Old");

        let renamed = task.renamed("New");
        assert_eq!(renamed.title, "New");
        assert!(!renamed.completed);
        assert_eq!(renamed.id, task.id);
    }
}
