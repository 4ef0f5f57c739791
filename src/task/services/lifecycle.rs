//! Service layer for task creation, lookup, update, and deletion.

use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskId, TaskPatch, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Titles of the records present when the demo store starts, with their
/// completion flag.
const DEMO_TASKS: [(&str, bool); 3] = [
    ("Learn Node.js", false),
    ("Build a REST API", true),
    ("Connect frontend to backend", false),
];

/// Request payload for a partial task update.
///
/// Fields left as `None` are not changed. A provided title is trimmed and
/// must not be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    completed: Option<bool>,
}

impl UpdateTaskRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    fn into_patch(self) -> Result<TaskPatch, TaskDomainError> {
        let mut patch = TaskPatch::new();
        if let Some(title) = self.title {
            patch = patch.with_title(TaskTitle::new(title)?);
        }
        if let Some(completed) = self.completed {
            patch = patch.with_completed(completed);
        }
        Ok(patch)
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskServiceError {
    /// Returns `true` when the error reports a missing task.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(TaskRepositoryError::NotFound(_)))
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Owns no state of its own; all task state lives in the injected
/// repository, and all timestamps come from the injected clock.
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns the current time according to the service clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    /// Lists all tasks in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when no task has
    /// the identifier.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }

    /// Creates a task from a raw title.
    ///
    /// The title is validated before the store is touched, so a rejected
    /// title never consumes an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] (wrapped) when the title is
    /// empty after trimming, or [`TaskServiceError::Repository`] when the
    /// store fails.
    pub async fn create(&self, title: impl Into<String>) -> TaskServiceResult<Task> {
        let title = TaskTitle::new(title).inspect_err(|err| debug!(%err, "rejected new task"))?;
        let task = self
            .repository
            .create(NewTask::new(title, &*self.clock))
            .await?;
        info!(task_id = %task.id(), title = %task.title(), "task created");
        Ok(task)
    }

    /// Applies a partial update to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when no task has
    /// the identifier, checked before the request is validated, or
    /// [`TaskDomainError::EmptyTitle`] (wrapped) when a provided title is
    /// empty after trimming.
    pub async fn update(&self, id: TaskId, request: UpdateTaskRequest) -> TaskServiceResult<Task> {
        self.get(id).await?;
        let patch = request
            .into_patch()
            .inspect_err(|err| debug!(task_id = %id, %err, "rejected task update"))?;
        if patch.is_empty() {
            debug!(task_id = %id, "task update carries no changes");
        }
        let task = self.repository.update(id, &patch).await?;
        info!(task_id = %id, completed = task.completed(), "task updated");
        Ok(task)
    }

    /// Deletes a task and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when no task has
    /// the identifier.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<Task> {
        let task = self.repository.remove(id).await?;
        info!(task_id = %id, "task deleted");
        Ok(task)
    }

    /// Populates the store with the demo task list.
    ///
    /// Goes through the regular create and update paths, so the seeded
    /// records consume identifiers like any other task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when any create or update fails.
    pub async fn seed_demo_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        let mut seeded = Vec::with_capacity(DEMO_TASKS.len());
        for (title, completed) in DEMO_TASKS {
            let mut task = self.create(title).await?;
            if completed {
                task = self
                    .update(task.id(), UpdateTaskRequest::new().with_completed(true))
                    .await?;
            }
            seeded.push(task);
        }
        info!(count = seeded.len(), "seeded demo tasks");
        Ok(seeded)
    }
}
