use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod color;
pub mod derive;

/// Sentinel assignee id for the synthetic "no assignee" group.
///
/// Real ClickUp ids are numeric, so this never collides with a backend id;
/// it is never sent to the remote API.
pub const NO_ASSIGNEE_ID: &str = "none";
pub const NO_ASSIGNEE_NAME: &str = "No Assignee";

/// A top-level ClickUp container ("team" on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(deserialize_with = "de_string_or_number")]
    pub id: String,
    pub name: String,
}

/// Immutable task snapshot from the last fetch of the selected workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub task_type: Option<String>,
    pub url: String,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub assignees: Vec<Assignee>,
    /// Epoch millis; the API serializes this as a string.
    #[serde(default, deserialize_with = "de_opt_millis")]
    pub date_created: Option<i64>,
}

/// Status wrapper as returned by the API: `"status": {"status": "done"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskStatus {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignee {
    /// The API serializes assignee ids as numbers; keep them as strings so
    /// the sentinel [`NO_ASSIGNEE_ID`] fits in the same key space.
    #[serde(deserialize_with = "de_string_or_number")]
    pub id: String,
    pub username: String,
}

/// Sort key for the task grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    DateCreated,
    AssigneeCount,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::DateCreated => "Date Created",
            Self::AssigneeCount => "Number of Assignees",
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        match idx {
            1 => Some(Self::Name),
            2 => Some(Self::DateCreated),
            3 => Some(Self::AssigneeCount),
            _ => None,
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Name, Self::DateCreated, Self::AssigneeCount].into_iter()
    }
}

/// Ephemeral per-workspace filter and sort selections.
///
/// Fully reset whenever the selected workspace changes.
#[derive(Debug, Clone, Default)]
pub struct FilterSelection {
    pub assignees: HashSet<String>,
    pub statuses: HashSet<String>,
    pub task_type: Option<String>,
    pub sort: Option<SortKey>,
}

impl FilterSelection {
    pub fn clear(&mut self) {
        self.assignees.clear();
        self.statuses.clear();
        self.task_type = None;
        self.sort = None;
    }
}

fn de_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StrOrNum {
        Str(String),
        Num(i64),
    }

    Ok(match StrOrNum::deserialize(deserializer)? {
        StrOrNum::Str(s) => s,
        StrOrNum::Num(n) => n.to_string(),
    })
}

fn de_opt_millis<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Millis {
        Num(i64),
        Str(String),
    }

    Ok(match Option::<Millis>::deserialize(deserializer)? {
        Some(Millis::Num(n)) => Some(n),
        Some(Millis::Str(s)) => s.parse().ok(),
        None => None,
    })
}
