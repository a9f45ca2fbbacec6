//! Tests for the derived-state pipeline: distinct filter options, the
//! filter predicate, and the deterministic badge colors.
//!
//! These tests verify:
//! 1. Distinct assignees/statuses/types keep first-seen order and dedup
//! 2. The synthetic "none" assignee appears exactly once
//! 3. All active filters are ANDed, and filtering is idempotent
//! 4. color_from_id is pure and well formed

use pretty_assertions::assert_eq;
use taskdeck::data::color::{color_from_id, FALLBACK_COLOR};
use taskdeck::data::derive::{
    distinct_assignees, distinct_statuses, distinct_task_types, filter_and_sort, matches_filters,
};
use taskdeck::data::{Assignee, FilterSelection, Task, TaskStatus, NO_ASSIGNEE_ID};

/// Create a task with the given assignees, status, and type
fn make_task(
    id: &str,
    assignees: &[(&str, &str)],
    status: Option<&str>,
    task_type: Option<&str>,
) -> Task {
    Task {
        id: id.to_string(),
        name: format!("Task {}", id),
        task_type: task_type.map(str::to_string),
        url: format!("https://app.clickup.com/t/{}", id),
        status: status.map(|s| TaskStatus {
            status: s.to_string(),
        }),
        assignees: assignees
            .iter()
            .map(|(id, name)| Assignee {
                id: id.to_string(),
                username: name.to_string(),
            })
            .collect(),
        date_created: None,
    }
}

// ============================================================================
// Distinct Option Tests
// ============================================================================

#[test]
fn test_distinct_assignees_dedup_and_order() {
    let tasks = vec![
        make_task("t1", &[("7", "grace"), ("3", "ada")], None, None),
        make_task("t2", &[("3", "ada"), ("9", "linus")], None, None),
    ];

    let ids: Vec<_> = distinct_assignees(&tasks)
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, vec!["7", "3", "9"]);
}

#[test]
fn test_single_none_entry_for_many_unassigned_tasks() {
    let tasks = vec![
        make_task("t1", &[], None, None),
        make_task("t2", &[], None, None),
        make_task("t3", &[("1", "ada")], None, None),
        make_task("t4", &[], None, None),
    ];

    let assignees = distinct_assignees(&tasks);
    assert_eq!(
        assignees
            .iter()
            .filter(|a| a.id == NO_ASSIGNEE_ID)
            .count(),
        1
    );
    assert_eq!(assignees.len(), 2);
    assert_eq!(assignees[0].username, "No Assignee");
}

#[test]
fn test_distinct_statuses_skip_statusless() {
    let tasks = vec![
        make_task("t1", &[], Some("in progress"), None),
        make_task("t2", &[], None, None),
        make_task("t3", &[], Some("done"), None),
        make_task("t4", &[], Some("in progress"), None),
    ];

    assert_eq!(distinct_statuses(&tasks), vec!["in progress", "done"]);
}

#[test]
fn test_distinct_types_skip_empty() {
    let tasks = vec![
        make_task("t1", &[], None, Some("bug")),
        make_task("t2", &[], None, Some("")),
        make_task("t3", &[], None, None),
        make_task("t4", &[], None, Some("feature")),
        make_task("t5", &[], None, Some("bug")),
    ];

    assert_eq!(distinct_task_types(&tasks), vec!["bug", "feature"]);
}

// ============================================================================
// Filter Predicate Tests
// ============================================================================

#[test]
fn test_none_sentinel_keeps_unassigned_tasks() {
    // One unassigned task with a status; matches the synthetic group only
    let tasks = vec![make_task("t1", &[], Some("Done"), None)];

    let assignees = distinct_assignees(&tasks);
    assert_eq!(assignees.len(), 1);
    assert_eq!(assignees[0].id, NO_ASSIGNEE_ID);

    let mut selection = FilterSelection::default();
    selection.assignees.insert(NO_ASSIGNEE_ID.to_string());
    assert_eq!(filter_and_sort(&tasks, &selection), vec![0]);

    // A real assignee id instead of "none" excludes the unassigned task
    selection.assignees.clear();
    selection.assignees.insert("42".to_string());
    assert!(filter_and_sort(&tasks, &selection).is_empty());
}

#[test]
fn test_assignee_filter_matches_any_member() {
    let tasks = vec![
        make_task("t1", &[("1", "ada"), ("2", "bob")], None, None),
        make_task("t2", &[("3", "carol")], None, None),
    ];

    let mut selection = FilterSelection::default();
    selection.assignees.insert("2".to_string());
    assert_eq!(filter_and_sort(&tasks, &selection), vec![0]);
}

#[test]
fn test_active_filters_are_anded() {
    let tasks = vec![
        make_task("t1", &[("1", "ada")], Some("done"), Some("bug")),
        make_task("t2", &[("1", "ada")], Some("done"), Some("feature")),
        make_task("t3", &[("1", "ada")], Some("open"), Some("bug")),
        make_task("t4", &[("2", "bob")], Some("done"), Some("bug")),
    ];

    let mut selection = FilterSelection::default();
    selection.assignees.insert("1".to_string());
    selection.statuses.insert("done".to_string());
    selection.task_type = Some("bug".to_string());

    assert_eq!(filter_and_sort(&tasks, &selection), vec![0]);
}

#[test]
fn test_type_filter_requires_exact_match() {
    let task = make_task("t1", &[], None, Some("bugfix"));
    let mut selection = FilterSelection::default();
    selection.task_type = Some("bug".to_string());
    assert!(!matches_filters(&task, &selection));

    selection.task_type = Some("bugfix".to_string());
    assert!(matches_filters(&task, &selection));
}

#[test]
fn test_filtering_is_idempotent() {
    let tasks = vec![
        make_task("t1", &[("1", "ada")], Some("done"), None),
        make_task("t2", &[], Some("open"), None),
        make_task("t3", &[("2", "bob")], Some("done"), None),
    ];

    let mut selection = FilterSelection::default();
    selection.statuses.insert("done".to_string());

    let once = filter_and_sort(&tasks, &selection);
    let kept: Vec<Task> = once.iter().map(|&i| tasks[i].clone()).collect();
    let twice = filter_and_sort(&kept, &selection);

    assert_eq!(twice.len(), once.len());
    assert_eq!(twice, (0..kept.len()).collect::<Vec<_>>());
}

// ============================================================================
// Badge Color Tests
// ============================================================================

#[test]
fn test_color_is_stable_across_calls() {
    for id in ["1", "183", "none", ""] {
        assert_eq!(color_from_id(id), color_from_id(id));
    }
}

#[test]
fn test_color_format() {
    let color = color_from_id("183");
    assert_eq!(color.len(), 7);
    assert!(color.starts_with('#'));
    assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_empty_id_uses_fallback() {
    assert_eq!(color_from_id(""), FALLBACK_COLOR);
    assert_eq!(FALLBACK_COLOR, "#888888");
}
