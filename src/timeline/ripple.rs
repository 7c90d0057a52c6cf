//! Deleting a sprint and closing the gap it leaves.

use chrono::Duration;
use tracing::debug;

use crate::roster::{History, Member, Role};
use crate::rotation::rotate_sequential;

use super::{sorted_by_start, Sprint, SprintId};

/// Delete a sprint and close the gap it leaves.
///
/// Sprints are ordered by start date. Every sprint from the deleted position
/// onward keeps its duration but is moved to start right after its
/// predecessor ends (one calendar day later), or at the deleted sprint's start
/// if it is now first. Each moved sprint with a predecessor gets its
/// assignments recomputed by sequential rotation from the predecessor's
/// updated map, since the rotation chain changed when a link was removed.
/// Sprints before the deleted one are untouched.
///
/// An unknown id returns the input unchanged, so a repeated delete is harmless.
pub fn ripple_delete(
    sprints: &[Sprint],
    deleted: &SprintId,
    members: &[Member],
    roles: &[Role],
) -> Vec<Sprint> {
    let mut sorted = sorted_by_start(sprints);
    let Some(idx) = sorted.iter().position(|s| &s.id == deleted) else {
        debug!(sprint = %deleted, "ripple delete: sprint not found");
        return sprints.to_vec();
    };

    let gap_start = sorted.remove(idx).start_date;

    for i in idx..sorted.len() {
        let (done, rest) = sorted.split_at_mut(i);
        let current = &mut rest[0];
        let previous = done.last();

        let duration = current.duration();
        let start = match previous {
            Some(prev) => prev.end_date + Duration::days(1),
            None => gap_start,
        };
        current.start_date = start;
        current.end_date = start + duration;

        if let Some(prev) = previous {
            current.assignments =
                rotate_sequential(members, roles, History::Previous(&prev.assignments));
        }
        debug!(sprint = %current.id, start = %current.start_date, "ripple delete: rescheduled");
    }

    sorted
}
