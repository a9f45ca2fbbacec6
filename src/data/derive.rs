//! Derived state for the task grid.
//!
//! Pure functions over the raw task collection and the current filter/sort
//! selections. Everything here is recomputed whenever an input changes;
//! nothing is cached across unrelated changes.

use super::{Assignee, FilterSelection, SortKey, Task, NO_ASSIGNEE_ID, NO_ASSIGNEE_NAME};
use std::collections::HashSet;

/// Distinct assignees across the task list, in first-seen order.
///
/// Tasks with zero assignees contribute a single synthetic "no assignee"
/// entry, inserted at the position of the first unassigned task.
pub fn distinct_assignees(tasks: &[Task]) -> Vec<Assignee> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for task in tasks {
        if task.assignees.is_empty() && seen.insert(NO_ASSIGNEE_ID.to_string()) {
            out.push(Assignee {
                id: NO_ASSIGNEE_ID.to_string(),
                username: NO_ASSIGNEE_NAME.to_string(),
            });
        }
        for assignee in &task.assignees {
            if seen.insert(assignee.id.clone()) {
                out.push(assignee.clone());
            }
        }
    }
    out
}

/// Distinct status strings in first-seen order, skipping statusless tasks.
pub fn distinct_statuses(tasks: &[Task]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for task in tasks {
        if let Some(status) = &task.status {
            if seen.insert(status.status.clone()) {
                out.push(status.status.clone());
            }
        }
    }
    out
}

/// Distinct non-empty task types in first-seen order.
pub fn distinct_task_types(tasks: &[Task]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for task in tasks {
        if let Some(task_type) = task.task_type.as_deref().filter(|t| !t.is_empty()) {
            if seen.insert(task_type.to_string()) {
                out.push(task_type.to_string());
            }
        }
    }
    out
}

/// Whether a task passes every active filter (all filters ANDed).
pub fn matches_filters(task: &Task, selection: &FilterSelection) -> bool {
    if !selection.assignees.is_empty() {
        let passes = if task.assignees.is_empty() {
            selection.assignees.contains(NO_ASSIGNEE_ID)
        } else {
            task.assignees
                .iter()
                .any(|a| selection.assignees.contains(&a.id))
        };
        if !passes {
            return false;
        }
    }

    if let Some(wanted) = &selection.task_type {
        if task.task_type.as_deref() != Some(wanted.as_str()) {
            return false;
        }
    }

    if !selection.statuses.is_empty() {
        // A task with no status never matches an active status filter.
        let passes = task
            .status
            .as_ref()
            .is_some_and(|s| selection.statuses.contains(&s.status));
        if !passes {
            return false;
        }
    }

    true
}

/// Filter then sort, returning indices into `tasks`.
///
/// Sorting is stable; with no sort key the original fetch order is kept.
/// Missing `date_created` sorts as zero (first).
pub fn filter_and_sort(tasks: &[Task], selection: &FilterSelection) -> Vec<usize> {
    let mut indices: Vec<usize> = tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| matches_filters(task, selection))
        .map(|(i, _)| i)
        .collect();

    match selection.sort {
        Some(SortKey::Name) => {
            indices.sort_by_cached_key(|&i| tasks[i].name.to_lowercase());
        }
        Some(SortKey::DateCreated) => {
            indices.sort_by_key(|&i| tasks[i].date_created.unwrap_or(0));
        }
        Some(SortKey::AssigneeCount) => {
            indices.sort_by_key(|&i| tasks[i].assignees.len());
        }
        None => {}
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TaskStatus;

    fn make_task(id: &str, assignees: &[(&str, &str)], status: Option<&str>) -> Task {
        Task {
            id: id.to_string(),
            name: format!("Task {}", id),
            task_type: None,
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

    #[test]
    fn distinct_assignees_keeps_first_seen_order() {
        let tasks = vec![
            make_task("t1", &[("2", "bob"), ("1", "alice")], None),
            make_task("t2", &[("1", "alice"), ("3", "carol")], None),
        ];

        let ids: Vec<_> = distinct_assignees(&tasks).into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }

    #[test]
    fn unassigned_tasks_collapse_into_one_sentinel() {
        let tasks = vec![
            make_task("t1", &[], None),
            make_task("t2", &[("1", "alice")], None),
            make_task("t3", &[], None),
        ];

        let assignees = distinct_assignees(&tasks);
        let none_count = assignees.iter().filter(|a| a.id == NO_ASSIGNEE_ID).count();
        assert_eq!(none_count, 1);
        // Sentinel sits where the first unassigned task was seen.
        assert_eq!(assignees[0].id, NO_ASSIGNEE_ID);
        assert_eq!(assignees[0].username, NO_ASSIGNEE_NAME);
    }

    #[test]
    fn statusless_tasks_are_skipped() {
        let tasks = vec![
            make_task("t1", &[], Some("Done")),
            make_task("t2", &[], None),
            make_task("t3", &[], Some("Done")),
        ];
        assert_eq!(distinct_statuses(&tasks), vec!["Done"]);
    }

    #[test]
    fn status_filter_excludes_statusless_tasks() {
        let task = make_task("t1", &[], None);
        let mut selection = FilterSelection::default();
        selection.statuses.insert("Done".to_string());
        assert!(!matches_filters(&task, &selection));
    }

    #[test]
    fn empty_selection_passes_everything() {
        let task = make_task("t1", &[], None);
        assert!(matches_filters(&task, &FilterSelection::default()));
    }
}
