//! Tests for deserializing ClickUp API payloads into the data model.
//!
//! The live API serializes assignee ids as numbers and `date_created` as
//! a string of epoch millis; both forms must parse.

use pretty_assertions::assert_eq;
use serde_json::json;
use taskdeck::data::{Task, Workspace};

#[test]
fn test_workspace_parses_numeric_id() {
    let workspace: Workspace =
        serde_json::from_value(json!({"id": 9001, "name": "Engineering"})).unwrap();
    assert_eq!(workspace.id, "9001");
    assert_eq!(workspace.name, "Engineering");
}

#[test]
fn test_task_parses_full_payload() {
    let task: Task = serde_json::from_value(json!({
        "id": "abc1",
        "name": "Fix login flow",
        "type": "bug",
        "url": "https://app.clickup.com/t/abc1",
        "status": {"status": "in progress", "color": "#ffcc00"},
        "assignees": [
            {"id": 183, "username": "ada", "email": "ada@example.com"},
            {"id": "184", "username": "bob"}
        ],
        "date_created": "1712345678901",
        "unknown_field": {"ignored": true}
    }))
    .unwrap();

    assert_eq!(task.task_type.as_deref(), Some("bug"));
    assert_eq!(task.status.as_ref().unwrap().status, "in progress");
    assert_eq!(task.assignees.len(), 2);
    assert_eq!(task.assignees[0].id, "183");
    assert_eq!(task.assignees[1].id, "184");
    assert_eq!(task.date_created, Some(1712345678901));
}

#[test]
fn test_task_parses_minimal_payload() {
    let task: Task = serde_json::from_value(json!({
        "id": "abc2",
        "name": "Untriaged",
        "url": "https://app.clickup.com/t/abc2"
    }))
    .unwrap();

    assert_eq!(task.task_type, None);
    assert!(task.status.is_none());
    assert!(task.assignees.is_empty());
    assert_eq!(task.date_created, None);
}

#[test]
fn test_task_accepts_numeric_date_created() {
    let task: Task = serde_json::from_value(json!({
        "id": "abc3",
        "name": "Numeric date",
        "url": "https://app.clickup.com/t/abc3",
        "date_created": 1700000000000i64
    }))
    .unwrap();

    assert_eq!(task.date_created, Some(1700000000000));
}

#[test]
fn test_task_tolerates_unparseable_date() {
    let task: Task = serde_json::from_value(json!({
        "id": "abc4",
        "name": "Bad date",
        "url": "https://app.clickup.com/t/abc4",
        "date_created": "not-a-number"
    }))
    .unwrap();

    assert_eq!(task.date_created, None);
}

#[test]
fn test_persisted_workspace_roundtrip() {
    let workspace = Workspace {
        id: "1".to_string(),
        name: "Eng".to_string(),
    };
    let encoded = serde_json::to_string(&workspace).unwrap();
    let decoded: Workspace = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, workspace);
}

#[test]
fn test_null_status_and_type_parse_as_none() {
    let task: Task = serde_json::from_value(json!({
        "id": "abc5",
        "name": "Nulls",
        "type": null,
        "url": "https://app.clickup.com/t/abc5",
        "status": null,
        "date_created": null
    }))
    .unwrap();

    assert!(task.status.is_none());
    assert!(task.task_type.is_none());
    assert_eq!(task.date_created, None);
}
