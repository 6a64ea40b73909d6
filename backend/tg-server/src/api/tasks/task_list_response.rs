use crate::TaskDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub count: usize,
    pub tasks: Vec<TaskDto>,
}
