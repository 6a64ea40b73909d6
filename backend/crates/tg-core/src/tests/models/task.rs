use crate::{NewTask, Task, TaskPriority, TaskStatus, TaskUpdate};

use uuid::Uuid;

fn new_task(title: &str) -> NewTask {
    NewTask {
        title: title.to_string(),
        ..Default::default()
    }
}

#[test]
fn given_minimal_input_when_task_created_then_defaults_apply() {
    let owner = Uuid::new_v4();

    let task = Task::new(owner, new_task("Write report"));

    assert_eq!(task.user_id, owner);
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.priority, TaskPriority::Medium);
    assert_eq!(task.description, None);
    assert_eq!(task.due_date, None);
}

#[test]
fn given_blank_title_when_validated_then_title_field_error() {
    let err = new_task("   ").validate().unwrap_err();
    assert_eq!(err.field(), Some("title"));
}

#[test]
fn given_update_without_title_when_validated_then_ok() {
    let update = TaskUpdate {
        status: Some(TaskStatus::Completed),
        ..Default::default()
    };
    assert!(update.validate().is_ok());
}

#[test]
fn given_update_with_blank_title_when_validated_then_error() {
    let update = TaskUpdate {
        title: Some(String::new()),
        ..Default::default()
    };
    assert!(update.validate().is_err());
}

#[test]
fn given_update_when_applied_then_fields_change() {
    let mut task = Task::new(Uuid::new_v4(), new_task("Draft"));

    task.apply(TaskUpdate {
        title: Some("Final".to_string()),
        priority: Some(TaskPriority::High),
        ..Default::default()
    });

    assert_eq!(task.title, "Final");
    assert_eq!(task.priority, TaskPriority::High);
    assert_eq!(task.status, TaskStatus::Pending);
}

#[test]
fn given_task_when_searching_then_matches_title_or_description_case_insensitively() {
    let mut task = Task::new(Uuid::new_v4(), new_task("Buy Groceries"));
    task.description = Some("Milk and EGGS".to_string());

    assert!(task.matches_search("groceries"));
    assert!(task.matches_search("eggs"));
    assert!(!task.matches_search("laundry"));
}
