use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::{StoreError, TodoStore};
use crate::models::Todo;

/// Stores the collection as a JSON array in a single file.
///
/// Saves overwrite the file in place. There is no atomic rename and no file lock,
/// so a crash in the middle of a write can leave the file truncated.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl TodoStore for JsonFileStore {
    async fn load_all(&self) -> Result<Vec<Todo>, StoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "Data file not found, creating it");
                self.save_all(&[]).await?;
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let todos: Vec<Todo> =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(count = todos.len(), path = %self.path.display(), "Loaded todos");
        Ok(todos)
    }

    async fn save_all(&self, todos: &[Todo]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(todos).map_err(StoreError::Serialize)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.write_error(e))?;
            }
        }

        fs::write(&self.path, content)
            .await
            .map_err(|e| self.write_error(e))?;

        tracing::debug!(count = todos.len(), path = %self.path.display(), "Saved todos");
        Ok(())
    }
}
