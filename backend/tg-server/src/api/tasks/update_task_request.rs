use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Request body for updating a task; absent fields are kept
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default, alias = "dueDate")]
    pub due_date: Option<DateTime<Utc>>,
}
