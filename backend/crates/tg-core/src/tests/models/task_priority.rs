use crate::TaskPriority;

use std::str::FromStr;

#[test]
fn test_task_priority_from_str() {
    assert_eq!(TaskPriority::from_str("low").unwrap(), TaskPriority::Low);
    assert_eq!(
        TaskPriority::from_str("medium").unwrap(),
        TaskPriority::Medium
    );
    assert_eq!(TaskPriority::from_str("high").unwrap(), TaskPriority::High);
    assert!(TaskPriority::from_str("urgent").is_err());
}

#[test]
fn test_task_priority_default() {
    assert_eq!(TaskPriority::default(), TaskPriority::Medium);
}

#[test]
fn test_task_priority_display_matches_as_str() {
    for priority in [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High] {
        assert_eq!(priority.to_string(), priority.as_str());
    }
}
