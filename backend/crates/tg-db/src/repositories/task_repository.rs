//! Task persistence. Every query is scoped to the owning user, so one
//! user can never read or modify another user's tasks.

use crate::connection::bounded;
use crate::credential_store::timestamp;
use crate::{DbError, Result as DbErrorResult};

use tg_core::{Task, TaskFilter, TaskPriority, TaskStatus, TaskUpdate};

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use uuid::Uuid;

const TASK_COLUMNS: &str =
    "id, user_id, title, description, status, priority, due_date, created_at, updated_at";

pub struct TaskRepository {
    pool: SqlitePool,
    operation_timeout: Duration,
}

impl TaskRepository {
    pub fn new(pool: SqlitePool, operation_timeout: Duration) -> Self {
        Self {
            pool,
            operation_timeout,
        }
    }

    /// Newest first. Search is a case-insensitive substring match on title or description.
    pub async fn list(&self, user_id: Uuid, filter: &TaskFilter) -> DbErrorResult<Vec<Task>> {
        bounded(self.operation_timeout, "list_tasks", async {
            let mut query: QueryBuilder<Sqlite> =
                QueryBuilder::new(format!("SELECT {TASK_COLUMNS} FROM tasks WHERE user_id = "));
            query.push_bind(user_id.to_string());

            if let Some(status) = filter.status {
                query.push(" AND status = ").push_bind(status.as_str());
            }
            if let Some(priority) = filter.priority {
                query.push(" AND priority = ").push_bind(priority.as_str());
            }
            if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
                let pattern = format!("%{}%", escape_like(&search.to_lowercase()));
                query
                    .push(" AND (LOWER(title) LIKE ")
                    .push_bind(pattern.clone())
                    .push(" ESCAPE '\\' OR LOWER(COALESCE(description, '')) LIKE ")
                    .push_bind(pattern)
                    .push(" ESCAPE '\\')");
            }

            query.push(" ORDER BY created_at DESC, rowid DESC");

            let rows = query.build().fetch_all(&self.pool).await?;
            rows.iter().map(task_from_row).collect()
        })
        .await
    }

    pub async fn find(&self, user_id: Uuid, id: Uuid) -> DbErrorResult<Option<Task>> {
        bounded(self.operation_timeout, "find_task", async {
            let row = sqlx::query(&format!(
                "SELECT {TASK_COLUMNS} FROM tasks WHERE id = ? AND user_id = ?"
            ))
            .bind(id.to_string())
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

            row.as_ref().map(task_from_row).transpose()
        })
        .await
    }

    pub async fn create(&self, task: &Task) -> DbErrorResult<()> {
        bounded(self.operation_timeout, "create_task", async {
            sqlx::query(
                r#"
                    INSERT INTO tasks (
                        id, user_id, title, description, status, priority,
                        due_date, created_at, updated_at
                    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(task.id.to_string())
            .bind(task.user_id.to_string())
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.status.as_str())
            .bind(task.priority.as_str())
            .bind(task.due_date.map(|dt| dt.timestamp()))
            .bind(task.created_at.timestamp())
            .bind(task.updated_at.timestamp())
            .execute(&self.pool)
            .await?;

            Ok(())
        })
        .await
    }

    /// `None` when no task with `id` belongs to `user_id`
    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        update: TaskUpdate,
    ) -> DbErrorResult<Option<Task>> {
        bounded(self.operation_timeout, "update_task", async {
            let mut tx = self.pool.begin().await?;

            let row = sqlx::query(&format!(
                "SELECT {TASK_COLUMNS} FROM tasks WHERE id = ? AND user_id = ?"
            ))
            .bind(id.to_string())
            .bind(user_id.to_string())
            .fetch_optional(&mut *tx)
            .await?;

            let Some(mut task) = row.as_ref().map(task_from_row).transpose()? else {
                return Ok(None);
            };

            task.apply(update);

            sqlx::query(
                r#"
                    UPDATE tasks
                    SET title = ?, description = ?, status = ?, priority = ?,
                        due_date = ?, updated_at = ?
                    WHERE id = ? AND user_id = ?
                "#,
            )
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.status.as_str())
            .bind(task.priority.as_str())
            .bind(task.due_date.map(|dt| dt.timestamp()))
            .bind(task.updated_at.timestamp())
            .bind(task.id.to_string())
            .bind(task.user_id.to_string())
            .execute(&mut *tx)
            .await?;

            tx.commit().await?;

            Ok(Some(task))
        })
        .await
    }

    /// False when no task with `id` belongs to `user_id`
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> DbErrorResult<bool> {
        bounded(self.operation_timeout, "delete_task", async {
            let result = sqlx::query("DELETE FROM tasks WHERE id = ? AND user_id = ?")
                .bind(id.to_string())
                .bind(user_id.to_string())
                .execute(&self.pool)
                .await?;

            Ok(result.rows_affected() > 0)
        })
        .await
    }
}

fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn task_from_row(row: &SqliteRow) -> DbErrorResult<Task> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let status: String = row.try_get("status")?;
    let priority: String = row.try_get("priority")?;
    let due_date: Option<i64> = row.try_get("due_date")?;

    Ok(Task {
        id: Uuid::parse_str(&id)
            .map_err(|e| DbError::corrupt(format!("Invalid UUID in tasks.id: {}", e)))?,
        user_id: Uuid::parse_str(&user_id)
            .map_err(|e| DbError::corrupt(format!("Invalid UUID in tasks.user_id: {}", e)))?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        status: TaskStatus::from_str(&status)
            .map_err(|e| DbError::corrupt(format!("Invalid TaskStatus in tasks.status: {}", e)))?,
        priority: TaskPriority::from_str(&priority).map_err(|e| {
            DbError::corrupt(format!("Invalid TaskPriority in tasks.priority: {}", e))
        })?,
        due_date: due_date
            .map(|secs| timestamp(secs, "tasks.due_date"))
            .transpose()?,
        created_at: timestamp(row.try_get("created_at")?, "tasks.created_at")?,
        updated_at: timestamp(row.try_get("updated_at")?, "tasks.updated_at")?,
    })
}
