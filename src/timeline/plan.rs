//! Drafting runs of upcoming sprints.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::calendar::checked_add_weekdays;
use crate::error::{Result, RotaError};
use crate::roster::{Assignments, History, Member, Role};
use crate::rotation::Strategy;
use crate::sprint_id::generate_sprint_id_with;

use super::{Sprint, SprintStatus};

/// Longest accepted sprint length, in either unit.
pub const MAX_SPRINT_LENGTH: u32 = 3650;

/// Most sprints drafted by one `plan_sprints` call.
pub const MAX_DRAFTS: usize = 520;

/// How long each drafted sprint runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SprintLength {
    /// End date is this many calendar days after the start.
    Days(u32),
    /// End date is this many weekdays after the start (see `add_weekdays`).
    Weekdays(u32),
}

impl SprintLength {
    /// End instant for a sprint beginning at `start`, or `None` past the
    /// last representable date.
    pub fn end_from(&self, start: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match *self {
            Self::Days(days) => start.checked_add_signed(Duration::days(i64::from(days))),
            Self::Weekdays(count) => checked_add_weekdays(start, count),
        }
    }

    pub fn count(&self) -> u32 {
        match *self {
            Self::Days(n) | Self::Weekdays(n) => n,
        }
    }

    /// Reject lengths outside `1..=MAX_SPRINT_LENGTH`.
    pub fn validate(self) -> Result<Self> {
        if (1..=MAX_SPRINT_LENGTH).contains(&self.count()) {
            Ok(self)
        } else {
            Err(RotaError::InvalidArgument(format!(
                "sprint length must be between 1 and {} (got {})",
                MAX_SPRINT_LENGTH,
                self.count()
            )))
        }
    }
}

impl Default for SprintLength {
    fn default() -> Self {
        Self::Days(18)
    }
}

/// Parameters for drafting a run of sprints.
#[derive(Debug, Clone)]
pub struct SprintRequest {
    /// Start of the first drafted sprint.
    pub start: DateTime<Utc>,
    /// Number of sprints to draft, at most [`MAX_DRAFTS`].
    pub count: usize,
    pub length: SprintLength,
    pub strategy: Strategy,
    /// Number given to the first draft's name ("Sprint N").
    pub first_number: usize,
}

fn out_of_range() -> RotaError {
    RotaError::InvalidArgument("sprint dates run past the supported calendar range".to_string())
}

/// Draft `request.count` planning sprints back to back.
///
/// Each draft rotates from the previous draft's assignments; the first one
/// rotates from `history`. Drafts start the day after the previous draft ends.
/// With [`Strategy::Manual`] the drafts carry no assignments.
///
/// Fails with [`RotaError::InvalidArgument`] when the count exceeds
/// [`MAX_DRAFTS`] or a draft's dates leave the representable range.
pub fn plan_sprints<R: Rng + ?Sized>(
    rng: &mut R,
    request: &SprintRequest,
    members: &[Member],
    roles: &[Role],
    history: History<'_>,
) -> Result<Vec<Sprint>> {
    if request.count > MAX_DRAFTS {
        return Err(RotaError::InvalidArgument(format!(
            "cannot draft more than {} sprints at once (got {})",
            MAX_DRAFTS, request.count
        )));
    }

    let mut drafts: Vec<Sprint> = Vec::new();
    let mut start = request.start;

    for i in 0..request.count {
        let previous = match drafts.last() {
            Some(prev) => History::Previous(&prev.assignments),
            None => history,
        };
        let assignments = request
            .strategy
            .rotate(rng, members, roles, previous)
            .unwrap_or_else(Assignments::new);

        let end = request.length.end_from(start).ok_or_else(out_of_range)?;
        drafts.push(Sprint {
            id: generate_sprint_id_with(rng),
            name: format!("Sprint {}", request.first_number.saturating_add(i)),
            start_date: start,
            end_date: end,
            status: SprintStatus::Planning,
            assignments,
        });
        start = end.checked_add_signed(Duration::days(1)).ok_or_else(out_of_range)?;
    }

    Ok(drafts)
}
