use tg_core::{NewTask, NewUser, Task, TaskPriority, TaskStatus};

use uuid::Uuid;

pub fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        secret: "s3cret-pass".to_string(),
        name: "Test User".to_string(),
    }
}

pub fn create_test_task(user_id: Uuid, title: &str) -> Task {
    Task::new(
        user_id,
        NewTask {
            title: title.to_string(),
            ..Default::default()
        },
    )
}

pub fn create_test_task_with(
    user_id: Uuid,
    title: &str,
    description: Option<&str>,
    status: TaskStatus,
    priority: TaskPriority,
) -> Task {
    Task::new(
        user_id,
        NewTask {
            title: title.to_string(),
            description: description.map(String::from),
            status: Some(status),
            priority: Some(priority),
            due_date: None,
        },
    )
}
