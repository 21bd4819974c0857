//! Todo operations over a [`TodoStore`].
//!
//! Every call round-trips through the store; nothing is cached between requests.
//! Mutations hold an exclusive guard across load, mutate and save, so concurrent
//! requests in this process cannot lose each other's updates or hand out the same id.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{CreateTodoInput, Todo, UpdateTodoInput};
use crate::store::{next_id, JsonFileStore, MemoryStore, StoreError, TodoStore};

type Result<T> = std::result::Result<T, StoreError>;

#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
    guard: Arc<RwLock<()>>,
}

impl TodoService {
    pub fn new(store: impl TodoStore) -> Self {
        Self {
            store: Arc::new(store),
            guard: Arc::new(RwLock::new(())),
        }
    }

    /// Service backed by a JSON file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonFileStore::new(path))
    }

    /// Service backed by an empty in-memory store.
    pub fn open_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Load the collection once, creating empty storage if none exists yet.
    /// Returns the number of stored todos.
    pub async fn init(&self) -> Result<usize> {
        let _guard = self.guard.write().await;
        Ok(self.store.load_all().await?.len())
    }

    pub async fn list(&self) -> Result<Vec<Todo>> {
        let _guard = self.guard.read().await;
        self.store.load_all().await
    }

    pub async fn get(&self, id: u64) -> Result<Option<Todo>> {
        let _guard = self.guard.read().await;
        let todos = self.store.load_all().await?;
        Ok(todos.into_iter().find(|t| t.id == id))
    }

    /// Append a new todo. The input is expected to be validated already.
    pub async fn create(&self, input: CreateTodoInput) -> Result<Todo> {
        let _guard = self.guard.write().await;
        let mut todos = self.store.load_all().await?;

        let todo = Todo::new(
            next_id(&todos)?,
            &input.title,
            input.completed.unwrap_or(false),
        );
        todos.push(todo.clone());
        self.store.save_all(&todos).await?;

        tracing::info!(id = todo.id, "Created todo");
        Ok(todo)
    }

    /// Merge `input` into the todo with `id`. Returns `None` without writing when
    /// no such todo exists.
    pub async fn update(&self, id: u64, input: UpdateTodoInput) -> Result<Option<Todo>> {
        let _guard = self.guard.write().await;
        let mut todos = self.store.load_all().await?;

        let Some(todo) = todos.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        input.apply(todo);
        let updated = todo.clone();

        self.store.save_all(&todos).await?;

        tracing::info!(id, "Updated todo");
        Ok(Some(updated))
    }

    /// Remove the todo with `id`. Returns `false` without writing when absent.
    pub async fn delete(&self, id: u64) -> Result<bool> {
        let _guard = self.guard.write().await;
        let mut todos = self.store.load_all().await?;

        let Some(index) = todos.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        todos.remove(index);
        self.store.save_all(&todos).await?;

        tracing::info!(id, "Deleted todo");
        Ok(true)
    }
}
