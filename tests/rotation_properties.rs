use rand::rngs::StdRng;
use rand::SeedableRng;

use rota::rotation::{rotate_random_with, rotate_sequential, Strategy};
use rota::{Assignments, History, Member, MemberId, Role, RoleId};

fn members(names: &[&str]) -> Vec<Member> {
    names
        .iter()
        .map(|name| Member::new(name.to_lowercase(), *name))
        .collect()
}

fn roles(count: usize) -> Vec<Role> {
    (1..=count)
        .map(|i| Role::new(format!("r{}", i), format!("Role {}", i)))
        .collect()
}

fn member_at(assignments: &Assignments, role: &Role) -> String {
    assignments
        .get(&role.id)
        .map(MemberId::to_string)
        .unwrap_or_default()
}

#[test]
fn test_sequential_is_deterministic() {
    let team = members(&["Erin", "alice", "Carol", "bob", "Dave"]);
    let roles = roles(3);
    let previous: Assignments = [
        (RoleId::new("r1"), MemberId::new("carol")),
        (RoleId::new("r2"), MemberId::new("dave")),
    ]
    .into_iter()
    .collect();

    let first = rotate_sequential(&team, &roles, History::Previous(&previous));
    for _ in 0..20 {
        assert_eq!(rotate_sequential(&team, &roles, History::Previous(&previous)), first);
    }
}

#[test]
fn test_sequential_cyclic_shift_advances_one_step() {
    let team = members(&["Dave", "alice", "Carol", "bob"]);
    let roles = roles(3);
    let order = ["alice", "bob", "carol", "dave"];

    let mut current = rotate_sequential(&team, &roles, History::Fresh);
    for step in 0..8 {
        for (i, role) in roles.iter().enumerate() {
            assert_eq!(member_at(&current, role), order[(i + step) % order.len()], "step {}", step);
        }
        current = rotate_sequential(&team, &roles, History::Previous(&current));
    }
}

#[test]
fn test_both_strategies_cover_every_role() {
    let mut rng = StdRng::seed_from_u64(7);
    for (member_count, role_count) in [(1, 4), (2, 2), (3, 5), (5, 4), (6, 1)] {
        let names: Vec<String> = (0..member_count).map(|i| format!("Member {}", i)).collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let team = members(&name_refs);
        let roles = roles(role_count);

        for strategy in [Strategy::Sequential, Strategy::Random] {
            let assignments = strategy
                .rotate(&mut rng, &team, &roles, History::Fresh)
                .expect("computed strategy");
            assert_eq!(assignments.len(), role_count);
            for role in &roles {
                let member = assignments.get(&role.id).expect("role assigned");
                assert!(team.iter().any(|m| &m.id == member));
            }
        }
    }
}

#[test]
fn test_random_avoids_conflicts_when_possible() {
    let team = members(&["Alice", "Bob", "Carol", "Dave", "Erin"]);
    let roles = roles(4);
    let previous: Assignments = roles
        .iter()
        .zip(&team)
        .map(|(role, member)| (role.id.clone(), member.id.clone()))
        .collect();

    let mut rng = StdRng::seed_from_u64(2024);
    let trials = 1000;
    let clean = (0..trials)
        .filter(|_| {
            let assignments = rotate_random_with(&mut rng, &team, &roles, History::Previous(&previous));
            assignments.conflicts_with(&previous) == 0
        })
        .count();

    assert!(
        clean * 100 >= trials * 99,
        "only {} of {} runs were conflict-free",
        clean,
        trials
    );
}

#[test]
fn test_empty_inputs_are_safe() {
    let mut rng = StdRng::seed_from_u64(1);
    let team = members(&["Alice", "Bob"]);
    let inactive: Vec<Member> = team.iter().cloned().map(|m| m.with_active(false)).collect();

    for strategy in [Strategy::Sequential, Strategy::Random] {
        let no_members = strategy.rotate(&mut rng, &[], &roles(3), History::Fresh).unwrap();
        let no_active = strategy.rotate(&mut rng, &inactive, &roles(3), History::Fresh).unwrap();
        let no_roles = strategy.rotate(&mut rng, &team, &[], History::Fresh).unwrap();
        assert!(no_members.is_empty());
        assert!(no_active.is_empty());
        assert!(no_roles.is_empty());
    }
}
