//! Reordering sprints without touching their dates.

use super::{Sprint, SprintId};

/// Move the sprint at `from` to position `to` in the sequence.
///
/// Only order changes: dates, statuses and assignments are left as they were.
/// Out-of-range positions return the input unchanged.
pub fn reorder(sprints: &[Sprint], from: usize, to: usize) -> Vec<Sprint> {
    let mut ordered = sprints.to_vec();
    if from >= ordered.len() || to >= ordered.len() {
        return ordered;
    }
    let sprint = ordered.remove(from);
    ordered.insert(to, sprint);
    ordered
}

/// Move the sprint with `id` to position `to`. Unknown ids are a no-op.
pub fn move_sprint(sprints: &[Sprint], id: &SprintId, to: usize) -> Vec<Sprint> {
    match sprints.iter().position(|s| &s.id == id) {
        Some(from) => reorder(sprints, from, to),
        None => sprints.to_vec(),
    }
}
