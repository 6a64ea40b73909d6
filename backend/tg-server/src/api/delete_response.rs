use serde::Serialize;

/// Response body for delete operations
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_id: String,
}
