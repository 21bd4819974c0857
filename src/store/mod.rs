//! Persistence for the todo collection.
//!
//! The whole collection is loaded and saved as one unit. [`JsonFileStore`] keeps it
//! in a single pretty-printed JSON file; [`MemoryStore`] keeps it in process memory.

mod file;
mod memory;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Todo;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Failures while reading or writing the backing collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read todos from '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse todos in '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write todos to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize todos: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("No ids left: todo id {0} is already the maximum")]
    IdsExhausted(u64),
}

impl StoreError {
    /// True for failures on the load path (I/O or unparsable content).
    pub fn is_read(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Parse { .. })
    }
}

/// Whole-collection storage.
///
/// Implementations provide no locking of their own; callers that need
/// read-modify-write atomicity must serialize around `load_all`/`save_all`.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Load every todo in insertion order, initializing empty storage if needed.
    async fn load_all(&self) -> Result<Vec<Todo>, StoreError>;

    /// Replace the stored collection with `todos`.
    async fn save_all(&self, todos: &[Todo]) -> Result<(), StoreError>;
}

/// The id for the next todo: one past the current maximum, or 1 when empty.
/// Fails instead of reusing an id once the maximum is `u64::MAX`.
pub fn next_id(todos: &[Todo]) -> Result<u64, StoreError> {
    match todos.iter().map(|t| t.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(StoreError::IdsExhausted(max)),
    }
}
