//! Repository port for the task store.

use crate::task::domain::{NewTask, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task store contract.
///
/// Implementations own the identifier counter: every successful
/// [`TaskRepository::create`] returns an identifier strictly greater than
/// any handed out before, and identifiers are never reused. Mutations must
/// be serialized so concurrent callers cannot observe a torn counter or
/// lose an update.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task in creation order.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Allocates the next identifier and stores the draft under it.
    async fn create(&self, draft: NewTask) -> TaskRepositoryResult<Task>;

    /// Applies a partial update to an existing task and returns the result.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<Task>;

    /// Removes a task and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<Task>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a storage-layer error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
