//! Request and response bodies for the task routes.

use crate::task::{
    domain::TaskStatus,
    services::{CreateTaskRequest, UpdateTaskRequest},
};
use serde::{Deserialize, Serialize};

/// Body of `POST /tasks`.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskBody {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Initial status; `TODO` when omitted.
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

impl From<CreateTaskBody> for CreateTaskRequest {
    fn from(body: CreateTaskBody) -> Self {
        let mut request = Self::new(body.title, body.description);
        if let Some(status) = body.status {
            request = request.with_status(status);
        }
        request
    }
}

/// Body of `PUT /tasks/{id}`.
///
/// Absent and `null` fields both keep the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskBody {
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement status.
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

impl From<UpdateTaskBody> for UpdateTaskRequest {
    fn from(body: UpdateTaskBody) -> Self {
        let UpdateTaskBody {
            title,
            description,
            status,
        } = body;
        let mut request = Self::new();
        if let Some(new_title) = title {
            request = request.with_title(new_title);
        }
        if let Some(new_description) = description {
            request = request.with_description(new_description);
        }
        if let Some(new_status) = status {
            request = request.with_status(new_status);
        }
        request
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}
