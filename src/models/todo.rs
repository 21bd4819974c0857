use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A short text task.
///
/// Persisted as one element of the JSON array in the data file, using camelCase
/// keys (`id`, `title`, `completed`, `createTime`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Positive, unique within the collection.
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    /// ISO-8601 text set once at creation. Kept verbatim so that saving the
    /// collection never rewrites timestamps of untouched todos.
    pub create_time: String,
}

impl Todo {
    /// Build a new todo stamped with the current time. The title is trimmed.
    pub fn new(id: u64, title: &str, completed: bool) -> Self {
        Self {
            id,
            title: title.trim().to_string(),
            completed,
            create_time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Rejected client input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required and must be a non-empty string")]
    EmptyTitle,
}

/// Input for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoInput {
    pub title: String,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl CreateTodoInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: None,
        }
    }

    /// Checks the parts of the payload the type system cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Input for updating a todo. All fields are optional for partial updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodoInput {
    /// Applied only when non-empty after trimming.
    #[serde(default)]
    pub title: Option<String>,
    /// Applied whenever present, including `false`.
    #[serde(default)]
    pub completed: Option<bool>,
}

impl UpdateTodoInput {
    /// Merge the provided fields into `todo`, leaving everything else untouched.
    pub fn apply(self, todo: &mut Todo) {
        if let Some(title) = self.title {
            let title = title.trim();
            if !title.is_empty() {
                todo.title = title.to_string();
            }
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}
