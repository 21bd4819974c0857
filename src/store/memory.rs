use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{StoreError, TodoStore};
use crate::models::Todo;

/// Keeps the collection in process memory. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    todos: Arc<Mutex<Vec<Todo>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing collection.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Arc::new(Mutex::new(todos)),
        }
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn load_all(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = self.todos.lock().expect("memory store lock poisoned");
        Ok(todos.clone())
    }

    async fn save_all(&self, todos: &[Todo]) -> Result<(), StoreError> {
        let mut stored = self.todos.lock().expect("memory store lock poisoned");
        *stored = todos.to_vec();
        Ok(())
    }
}
