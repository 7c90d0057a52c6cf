//! Sequential rotation: a deterministic cyclic shift over name-sorted members.

use tracing::debug;

use crate::roster::{active_members, Assignments, History, Member, Role};

use super::collate::sort_by_name;

/// Rotate roles by a deterministic cyclic shift.
///
/// Active members are put in a stable name order. The first role (in role
/// order) whose previous member is still active anchors the rotation: if that
/// member sat at position `p` and held role `r`, the new list starts at
/// `p - r + 1`, so everyone moves one role forward. Without an anchor the
/// sorted order is used as is.
///
/// Returns an empty map when there are no active members or no roles.
/// With fewer members than roles, members wrap around.
pub fn rotate_sequential(members: &[Member], roles: &[Role], history: History<'_>) -> Assignments {
    let mut sorted = active_members(members);
    if sorted.is_empty() || roles.is_empty() {
        return Assignments::new();
    }

    // Stable sort, so duplicate names keep roster order.
    sort_by_name(&mut sorted, |m| m.name.as_str());
    let n = sorted.len();

    let anchor = roles.iter().enumerate().find_map(|(role_idx, role)| {
        let member_id = history.member_for(&role.id)?;
        let pos = sorted.iter().position(|m| &m.id == member_id)?;
        Some((role_idx, pos))
    });

    let shift = match anchor {
        Some((role_idx, pos)) => {
            let shift = (pos as i64 - role_idx as i64 + 1).rem_euclid(n as i64) as usize;
            debug!(anchor_role = role_idx, anchor_pos = pos, shift, "sequential rotation anchored");
            shift
        }
        None => 0,
    };

    sorted.rotate_left(shift);

    roles
        .iter()
        .enumerate()
        .map(|(i, role)| (role.id.clone(), sorted[i % n].id.clone()))
        .collect()
}
