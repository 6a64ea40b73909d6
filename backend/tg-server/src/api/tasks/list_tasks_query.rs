use serde::Deserialize;

/// Query parameters for listing tasks
#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
    /// Case-insensitive substring of title or description
    pub search: Option<String>,
}
