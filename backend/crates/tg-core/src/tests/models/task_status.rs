use crate::{CoreError, TaskStatus};

use std::str::FromStr;

#[test]
fn test_task_status_as_str() {
    assert_eq!(TaskStatus::Pending.as_str(), "pending");
    assert_eq!(TaskStatus::InProgress.as_str(), "in-progress");
    assert_eq!(TaskStatus::Completed.as_str(), "completed");
}

#[test]
fn test_task_status_from_str() {
    assert_eq!(TaskStatus::from_str("pending").unwrap(), TaskStatus::Pending);
    assert_eq!(
        TaskStatus::from_str("in-progress").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(
        TaskStatus::from_str("completed").unwrap(),
        TaskStatus::Completed
    );
}

#[test]
fn given_unknown_status_when_parsed_then_error_names_status_field() {
    let err = TaskStatus::from_str("done").unwrap_err();

    assert!(matches!(err, CoreError::InvalidTaskStatus { ref value, .. } if value == "done"));
    assert_eq!(err.field(), Some("status"));
}

#[test]
fn test_task_status_default() {
    assert_eq!(TaskStatus::default(), TaskStatus::Pending);
}

#[test]
fn test_task_status_serde_uses_wire_names() {
    let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
    assert_eq!(json, "\"in-progress\"");

    let parsed: TaskStatus = serde_json::from_str("\"completed\"").unwrap();
    assert_eq!(parsed, TaskStatus::Completed);
}
