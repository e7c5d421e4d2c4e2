//! Domain model for task management.
//!
//! The task domain models the task entity, its validated fields, and the
//! create and patch inputs accepted by storage, while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskDescription, TaskId, TaskTitle};
pub use task::{NewTask, PersistedTaskData, Task, TaskPatch, TaskStatus, order_for_listing};
