//! HTTP API layer.
//!
//! Exposes the task service over five REST operations plus a status probe.
//! Every response, success or failure, is wrapped in the JSON [`Envelope`]
//! shape `{success, data?, message?, count?}`.

mod envelope;
mod error;
mod handlers;
mod payload;
mod routes;

pub use envelope::{Envelope, StatusReport};
pub use error::{ApiError, ApiResult};
pub use payload::{CreateTaskBody, UpdateTaskBody};
pub use routes::{STATUS_PATH, TASK_PATH, TASKS_PATH, router};
