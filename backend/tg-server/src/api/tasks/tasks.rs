//! Task REST API handlers
//!
//! Every query is scoped to the authenticated user; another user's task
//! id answers 404 exactly like a missing one.

use crate::{
    ApiError, ApiResult, AppState, CreateTaskRequest, CurrentUser, DeleteResponse,
    ListTasksQuery, TaskDto, TaskListResponse, TaskResponse, UpdateTaskRequest, ValidJson,
    ValidQuery,
};

use tg_core::{NewTask, Task, TaskFilter, TaskPriority, TaskStatus, TaskUpdate};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// GET /tasks
///
/// List the caller's tasks, newest first, with optional filters
pub async fn list_tasks(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidQuery(query): ValidQuery<ListTasksQuery>,
) -> ApiResult<Json<TaskListResponse>> {
    let filter = TaskFilter {
        status: query.status.as_deref().map(TaskStatus::from_str).transpose()?,
        priority: query
            .priority
            .as_deref()
            .map(TaskPriority::from_str)
            .transpose()?,
        search: query.search.filter(|s| !s.trim().is_empty()),
    };

    state.require_store()?;

    let tasks: Vec<TaskDto> = state
        .tasks
        .list(user.id, &filter)
        .await?
        .into_iter()
        .map(TaskDto::from)
        .collect();

    Ok(Json(TaskListResponse {
        count: tasks.len(),
        tasks,
    }))
}

/// GET /tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    state.require_store()?;

    let task = state
        .tasks
        .find(user.id, task_id)
        .await?
        .ok_or_else(|| task_not_found(&id))?;

    Ok(Json(TaskResponse {
        task: TaskDto::from(task),
    }))
}

/// POST /tasks
pub async fn create_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidJson(req): ValidJson<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    let new_task = NewTask {
        title: req.title.trim().to_string(),
        description: req.description,
        status: req.status.as_deref().map(TaskStatus::from_str).transpose()?,
        priority: req
            .priority
            .as_deref()
            .map(TaskPriority::from_str)
            .transpose()?,
        due_date: req.due_date,
    };
    new_task.validate()?;

    state.require_store()?;

    let task = Task::new(user.id, new_task);
    state.tasks.create(&task).await?;

    log::debug!("User {} created task {}", user.id, task.id);

    Ok((
        StatusCode::CREATED,
        Json(TaskResponse {
            task: TaskDto::from(task),
        }),
    ))
}

/// PUT /tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    let update = TaskUpdate {
        title: req.title.map(|t| t.trim().to_string()),
        description: req.description,
        status: req.status.as_deref().map(TaskStatus::from_str).transpose()?,
        priority: req
            .priority
            .as_deref()
            .map(TaskPriority::from_str)
            .transpose()?,
        due_date: req.due_date,
    };
    update.validate()?;

    state.require_store()?;

    let task = state
        .tasks
        .update(user.id, task_id, update)
        .await?
        .ok_or_else(|| task_not_found(&id))?;

    Ok(Json(TaskResponse {
        task: TaskDto::from(task),
    }))
}

/// DELETE /tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    state.require_store()?;

    if !state.tasks.delete(user.id, task_id).await? {
        return Err(task_not_found(&id));
    }

    Ok(Json(DeleteResponse {
        deleted_id: task_id.to_string(),
    }))
}

#[track_caller]
fn task_not_found(id: &str) -> ApiError {
    ApiError::not_found(format!("Task {} not found", id))
}
