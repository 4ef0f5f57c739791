//! Application services for task orchestration.

mod lifecycle;

pub use lifecycle::{TaskService, TaskServiceError, TaskServiceResult, UpdateTaskRequest};
