//! Route table for the task API.

use axum::{Router, routing::get};
use mockable::Clock;

use super::handlers;
use crate::task::{ports::TaskRepository, services::TaskService};

/// Path of the status probe.
pub const STATUS_PATH: &str = "/api/status";
/// Path of the task collection.
pub const TASKS_PATH: &str = "/api/tasks";
/// Path of a single task.
pub const TASK_PATH: &str = "/api/tasks/{id}";

/// Builds the API router over the given task service.
pub fn router<R, C>(tasks: TaskService<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(STATUS_PATH, get(handlers::status::<R, C>))
        .route(
            TASKS_PATH,
            get(handlers::list_tasks::<R, C>).post(handlers::create_task::<R, C>),
        )
        .route(
            TASK_PATH,
            get(handlers::get_task::<R, C>)
                .put(handlers::update_task::<R, C>)
                .delete(handlers::delete_task::<R, C>),
        )
        .with_state(tasks)
}
