//! Request handlers, one per route.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use mockable::Clock;
use tracing::debug;

use super::{ApiError, ApiResult, CreateTaskBody, Envelope, StatusReport, UpdateTaskBody};
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
    services::TaskService,
};

const CREATED: &str = "Task created successfully";
const UPDATED: &str = "Task updated successfully";
const DELETED: &str = "Task deleted successfully";

/// Resolves the `{id}` path segment. Anything that is not a positive
/// integer, including segments that fail percent-decoding, names no task.
fn task_id(path: Result<Path<String>, PathRejection>) -> ApiResult<TaskId> {
    let Path(raw_id) = path.map_err(|rejection| {
        debug!(%rejection, "unreadable task identifier");
        ApiError::NotFound
    })?;
    Ok(raw_id.parse()?)
}

/// `GET /api/status`
pub async fn status<R, C>(State(tasks): State<TaskService<R, C>>) -> Json<StatusReport>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    Json(StatusReport::running(tasks.now()))
}

/// `GET /api/tasks`
pub async fn list_tasks<R, C>(
    State(tasks): State<TaskService<R, C>>,
) -> ApiResult<Json<Envelope<Vec<Task>>>>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let all = tasks.list().await?;
    let count = all.len();
    Ok(Json(Envelope::data(all).with_count(count)))
}

/// `GET /api/tasks/{id}`
pub async fn get_task<R, C>(
    State(tasks): State<TaskService<R, C>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Envelope<Task>>>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id = task_id(path)?;
    let task = tasks.get(id).await?;
    Ok(Json(Envelope::data(task)))
}

/// `POST /api/tasks`
pub async fn create_task<R, C>(
    State(tasks): State<TaskService<R, C>>,
    body: Result<Json<CreateTaskBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Envelope<Task>>)>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Json(body) = body?;
    let task = tasks.create(body.title.unwrap_or_default()).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(task).with_message(CREATED)),
    ))
}

/// `PUT /api/tasks/{id}`
///
/// The task must exist before the body is inspected, so an unknown or
/// non-numeric identifier yields 404 regardless of body content.
pub async fn update_task<R, C>(
    State(tasks): State<TaskService<R, C>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> ApiResult<Json<Envelope<Task>>>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id = task_id(path)?;
    tasks.get(id).await?;
    let Json(body) = body?;
    let task = tasks.update(id, body.into()).await?;
    Ok(Json(Envelope::data(task).with_message(UPDATED)))
}

/// `DELETE /api/tasks/{id}`
pub async fn delete_task<R, C>(
    State(tasks): State<TaskService<R, C>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Envelope<Task>>>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id = task_id(path)?;
    let task = tasks.delete(id).await?;
    Ok(Json(Envelope::data(task).with_message(DELETED)))
}
