//! Sprint timeline maintenance.
//!
//! A timeline is a collection of sprints, each with start/end instants, a
//! status and an assignment map. Functions here take the collection by
//! reference and return an updated copy:
//! - `ripple_delete` removes a sprint and shifts later sprints into the gap,
//!   re-deriving their sequential rotation chain
//! - `reorder` changes sequence position only
//! - `plan_sprints` drafts a run of future sprints
//! - `start_sprint` / `activate` keep a single active sprint

mod plan;
mod reorder;
mod ripple;

pub use plan::{plan_sprints, SprintLength, SprintRequest, MAX_DRAFTS, MAX_SPRINT_LENGTH};
pub use reorder::{move_sprint, reorder};
pub use ripple::ripple_delete;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::roster::{Assignments, History};

/// Opaque sprint identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SprintId(pub String);

impl SprintId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SprintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sprint lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SprintStatus {
    #[default]
    Planning,
    Active,
    Completed,
}

impl SprintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

/// One iteration with its dates and role assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    pub id: SprintId,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub status: SprintStatus,
    #[serde(default)]
    pub assignments: Assignments,
}

impl Sprint {
    /// Create a planning sprint with no assignments.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: SprintId::new(id),
            name: name.into(),
            start_date,
            end_date,
            status: SprintStatus::Planning,
            assignments: Assignments::new(),
        }
    }

    pub fn with_status(mut self, status: SprintStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_assignments(mut self, assignments: Assignments) -> Self {
        self.assignments = assignments;
        self
    }

    /// Length of the sprint, `end_date - start_date`.
    pub fn duration(&self) -> chrono::Duration {
        self.end_date - self.start_date
    }
}

/// Copy of `sprints` sorted by start date. Equal starts keep their order.
pub fn sorted_by_start(sprints: &[Sprint]) -> Vec<Sprint> {
    let mut sorted = sprints.to_vec();
    sorted.sort_by_key(|s| s.start_date);
    sorted
}

/// The first sprint marked active, if any.
pub fn active_sprint(sprints: &[Sprint]) -> Option<&Sprint> {
    sprints.iter().find(|s| s.status == SprintStatus::Active)
}

/// History formed by the sprint with the latest start date.
///
/// Rotation never looks this up on its own; callers that want "rotate from the
/// most recent sprint" ask for it explicitly.
pub fn latest_assignments(sprints: &[Sprint]) -> History<'_> {
    sprints
        .iter()
        .max_by_key(|s| s.start_date)
        .map(|s| History::Previous(&s.assignments))
        .unwrap_or(History::Fresh)
}

/// Append `sprint` as the active sprint.
///
/// Any sprint that was active becomes completed.
pub fn start_sprint(sprints: &[Sprint], sprint: Sprint) -> Vec<Sprint> {
    let id = sprint.id.clone();
    let mut updated = sprints.to_vec();
    updated.push(sprint);
    activate(&updated, &id)
}

/// Mark the sprint with `id` active and complete any other active sprint.
///
/// Unknown ids leave the collection unchanged.
pub fn activate(sprints: &[Sprint], id: &SprintId) -> Vec<Sprint> {
    if !sprints.iter().any(|s| &s.id == id) {
        return sprints.to_vec();
    }
    sprints
        .iter()
        .cloned()
        .map(|mut s| {
            if &s.id == id {
                s.status = SprintStatus::Active;
            } else if s.status == SprintStatus::Active {
                s.status = SprintStatus::Completed;
            }
            s
        })
        .collect()
}
