//! Random rotation: bounded shuffle-and-retry that avoids repeating last sprint's pairs.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::roster::{active_members, Assignments, History, Member, Role};

/// Shuffles tried before settling for the least-conflicting one.
pub const MAX_ATTEMPTS: usize = 10;

/// Shuffle members onto roles, avoiding last sprint's pairings where possible.
///
/// Uses the thread-local generator. See [`rotate_random_with`].
pub fn rotate_random(members: &[Member], roles: &[Role], history: History<'_>) -> Assignments {
    rotate_random_with(&mut rand::thread_rng(), members, roles, history)
}

/// Shuffle members onto roles using the given random source.
///
/// Tries up to [`MAX_ATTEMPTS`] uniform shuffles. A candidate where no role
/// keeps its previous member is returned immediately; otherwise the first
/// candidate with the fewest conflicts wins.
pub fn rotate_random_with<R: Rng + ?Sized>(
    rng: &mut R,
    members: &[Member],
    roles: &[Role],
    history: History<'_>,
) -> Assignments {
    let mut shuffled = active_members(members);
    if shuffled.is_empty() {
        return Assignments::new();
    }
    let n = shuffled.len();

    let mut best: Option<(usize, Assignments)> = None;
    for attempt in 1..=MAX_ATTEMPTS {
        shuffled.shuffle(rng);
        let candidate: Assignments = roles
            .iter()
            .enumerate()
            .map(|(i, role)| (role.id.clone(), shuffled[i % n].id.clone()))
            .collect();

        let conflicts = history.conflicts(&candidate);
        if conflicts == 0 {
            debug!(attempt, "random rotation found conflict-free assignment");
            return candidate;
        }
        if best.as_ref().map_or(true, |(fewest, _)| conflicts < *fewest) {
            best = Some((conflicts, candidate));
        }
    }

    let (conflicts, assignments) = best.unwrap_or_default();
    debug!(conflicts, "random rotation settled after {} attempts", MAX_ATTEMPTS);
    assignments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{MemberId, RoleId};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn roster(count: usize) -> Vec<Member> {
        (1..=count).map(|i| Member::new(format!("m{}", i), format!("Member {}", i))).collect()
    }

    fn roles(count: usize) -> Vec<Role> {
        (1..=count).map(|i| Role::new(format!("r{}", i), format!("Role {}", i))).collect()
    }

    #[test]
    fn test_covers_every_role() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = rotate_random_with(&mut rng, &roster(3), &roles(4), History::Fresh);
        assert_eq!(result.len(), 4);
        for role in roles(4) {
            assert!(result.contains_role(&role.id));
        }
    }

    #[test]
    fn test_no_active_members_gives_empty_map() {
        let inactive = vec![Member::new("m1", "Ann").with_active(false)];
        assert!(rotate_random(&inactive, &roles(2), History::Fresh).is_empty());
        assert!(rotate_random(&[], &roles(2), History::Fresh).is_empty());
    }

    #[test]
    fn test_no_roles_gives_empty_map() {
        assert!(rotate_random(&roster(3), &[], History::Fresh).is_empty());
    }

    #[test]
    fn test_single_member_keeps_unavoidable_conflict() {
        let members = roster(1);
        let previous: Assignments = [(RoleId::new("r1"), MemberId::new("m1"))].into_iter().collect();
        let result = rotate_random(&members, &roles(1), History::Previous(&previous));
        assert_eq!(result.get(&RoleId::new("r1")), Some(&MemberId::new("m1")));
    }

    #[test]
    fn test_uses_only_active_members() {
        let mut members = roster(4);
        members[1].active = false;
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let result = rotate_random_with(&mut rng, &members, &roles(3), History::Fresh);
            assert!(result.iter().all(|(_, m)| m.as_str() != "m2"));
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let members = roster(5);
        let a = rotate_random_with(&mut StdRng::seed_from_u64(99), &members, &roles(4), History::Fresh);
        let b = rotate_random_with(&mut StdRng::seed_from_u64(99), &members, &roles(4), History::Fresh);
        assert_eq!(a, b);
    }
}
