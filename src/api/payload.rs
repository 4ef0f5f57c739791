//! Request bodies accepted by the API.
//!
//! Bodies are deserialized into these strict types before reaching the
//! service. `completed` must be a JSON boolean; any other type fails
//! deserialization and is reported as a bad request.

use serde::Deserialize;

use crate::task::services::UpdateTaskRequest;

/// Body of `POST /api/tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateTaskBody {
    /// Title of the new task. A missing title is treated as empty.
    #[serde(default)]
    pub title: Option<String>,
}

/// Body of `PUT /api/tasks/{id}`.
///
/// Omitted or `null` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskBody {
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement completion flag.
    #[serde(default)]
    pub completed: Option<bool>,
}

impl From<UpdateTaskBody> for UpdateTaskRequest {
    fn from(body: UpdateTaskBody) -> Self {
        let mut request = Self::new();
        if let Some(title) = body.title {
            request = request.with_title(title);
        }
        if let Some(completed) = body.completed {
            request = request.with_completed(completed);
        }
        request
    }
}
