//! Task entity - a unit of work owned by exactly one user.

use crate::validation::require_non_empty;
use crate::models::now;
use crate::{Result as CoreErrorResult, TaskPriority, TaskStatus};

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    /// Owner; tasks are only ever visible to this user
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a task for `user_id`, filling in default status and priority
    pub fn new(user_id: Uuid, new_task: NewTask) -> Self {
        let now = now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: new_task.title,
            description: new_task.description,
            status: new_task.status.unwrap_or_default(),
            priority: new_task.priority.unwrap_or_default(),
            due_date: new_task.due_date.map(|d| d.trunc_subsecs(0)),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, bumping `updated_at` when anything changed
    pub fn apply(&mut self, update: TaskUpdate) {
        let mut changed = false;

        if let Some(title) = update.title {
            self.title = title;
            changed = true;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
            changed = true;
        }
        if let Some(status) = update.status {
            self.status = status;
            changed = true;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
            changed = true;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = Some(due_date.trunc_subsecs(0));
            changed = true;
        }

        if changed {
            self.updated_at = now();
        }
    }

    /// Case-insensitive substring match on title or description
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<DateTime<Utc>>,
}

impl NewTask {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        require_non_empty("title", &self.title)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskUpdate {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if let Some(ref title) = self.title {
            require_non_empty("title", title)?;
        }
        Ok(())
    }
}

/// Listing filters; all present filters must match
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub search: Option<String>,
}
