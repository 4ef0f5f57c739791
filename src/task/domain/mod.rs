//! Domain model for task tracking.
//!
//! Task records are small: an integer identifier assigned by the store, a
//! validated title, a completion flag, and an immutable creation timestamp.
//! All infrastructure concerns stay outside of this boundary.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::{TaskId, TaskTitle};
pub use task::{NewTask, Task, TaskPatch};
pub(crate) use task::iso8601_millis;
