use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use rota::calendar::add_weekdays;
use rota::roster::{Assignments, History, Member, MemberId, Role, RoleId};
use rota::rotation::{rotate_sequential, Strategy};
use rota::timeline::{plan_sprints, reorder, ripple_delete, Sprint, SprintLength, SprintRequest};

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn team() -> (Vec<Member>, Vec<Role>) {
    (
        vec![Member::new("alice", "Alice"), Member::new("bob", "Bob")],
        vec![Role::new("R1", "Facilitator"), Role::new("R2", "Scribe")],
    )
}

fn pairs(r1: &str, r2: &str) -> Assignments {
    [
        (RoleId::new("R1"), MemberId::new(r1)),
        (RoleId::new("R2"), MemberId::new(r2)),
    ]
    .into_iter()
    .collect()
}

fn drafted(count: usize) -> Vec<Sprint> {
    let (members, roles) = team();
    let request = SprintRequest {
        start: day(2024, 1, 1),
        count,
        length: SprintLength::Days(10),
        strategy: Strategy::Sequential,
        first_number: 1,
    };
    plan_sprints(
        &mut StdRng::seed_from_u64(3),
        &request,
        &members,
        &roles,
        History::Fresh,
    )
    .unwrap()
}

#[test]
fn test_add_weekdays_examples() {
    // Monday + 5 weekdays is the following Monday
    assert_eq!(add_weekdays(day(2024, 1, 1), 5), day(2024, 1, 8));
    // Friday + 1 weekday is Monday
    assert_eq!(add_weekdays(day(2024, 1, 5), 1), day(2024, 1, 8));
}

#[test]
fn test_drafted_timeline_is_contiguous_and_chained() {
    let sprints = drafted(4);
    for pair in sprints.windows(2) {
        assert_eq!(pair[1].start_date, pair[0].end_date + Duration::days(1));
        let (members, roles) = team();
        assert_eq!(
            pair[1].assignments,
            rotate_sequential(&members, &roles, History::Previous(&pair[0].assignments))
        );
    }
    assert_eq!(sprints[0].assignments, pairs("alice", "bob"));
    assert_eq!(sprints[1].assignments, pairs("bob", "alice"));
}

#[test]
fn test_delete_middle_preserves_durations_and_rechains() {
    let (members, roles) = team();
    let sprints = drafted(3);
    let deleted = sprints[1].id.clone();

    let updated = ripple_delete(&sprints, &deleted, &members, &roles);

    assert_eq!(updated.len(), 2);
    assert_eq!(updated[0], sprints[0]);
    assert_eq!(updated[1].id, sprints[2].id);
    assert_eq!(updated[1].start_date, sprints[0].end_date + Duration::days(1));
    assert_eq!(updated[1].duration(), Duration::days(10));
    assert_eq!(updated[1].assignments, pairs("bob", "alice"));
}

#[test]
fn test_delete_everything_one_by_one() {
    let (members, roles) = team();
    let mut sprints = drafted(4);
    let start = sprints[0].start_date;

    while let Some(first) = sprints.first().map(|s| s.id.clone()) {
        sprints = ripple_delete(&sprints, &first, &members, &roles);
        if let Some(head) = sprints.first() {
            assert_eq!(head.start_date, start);
        }
        for pair in sprints.windows(2) {
            assert_eq!(pair[1].start_date, pair[0].end_date + Duration::days(1));
        }
    }
    assert!(sprints.is_empty());
}

#[test]
fn test_reorder_changes_only_sequence() {
    let sprints = drafted(3);
    let moved = reorder(&sprints, 0, 2);

    assert_eq!(moved.len(), 3);
    assert_eq!(moved[2], sprints[0]);
    for sprint in &sprints {
        let same = moved.iter().find(|s| s.id == sprint.id).unwrap();
        assert_eq!(same, sprint);
    }
}
