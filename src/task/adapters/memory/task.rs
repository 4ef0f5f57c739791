//! In-memory task repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Tasks are keyed by identifier in a [`BTreeMap`]; since identifiers are
/// allocated in increasing order, iteration order is creation order. The
/// map and the identifier counter share a single lock, so every mutation
/// is serialized. Once the identifier space is exhausted, further creates
/// fail rather than reuse an identifier.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    next_id: Option<TaskId>,
}

impl Default for InMemoryTaskState {
    fn default() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: Some(TaskId::FIRST),
        }
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty repository whose first task receives `first_id`.
    #[must_use]
    pub fn starting_at(first_id: TaskId) -> Self {
        let state = InMemoryTaskState {
            tasks: BTreeMap::new(),
            next_id: Some(first_id),
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn create(&self, draft: NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        let id = state.next_id.ok_or_else(|| {
            TaskRepositoryError::persistence(std::io::Error::other(
                "task identifier space exhausted",
            ))
        })?;
        state.next_id = id.checked_next();

        let task = Task::from_draft(id, draft);
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.apply(patch);
        Ok(task.clone())
    }

    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        state
            .tasks
            .remove(&id)
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}
