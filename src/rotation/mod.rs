//! Rotation engine: computes a new role-to-member map from the roster and
//! the previous sprint's map.
//!
//! Two strategies are provided:
//! - sequential: deterministic cyclic shift over a name-sorted member list
//! - random: bounded shuffle-and-retry that avoids repeating last sprint's pairs
//!
//! A manual mode lets the caller supply the map directly.

mod collate;
mod random;
mod sequential;

pub use collate::{compare_names, sort_by_name};
pub use random::{rotate_random, rotate_random_with, MAX_ATTEMPTS};
pub use sequential::rotate_sequential;

use rand::Rng;

use crate::error::{Result, RotaError};
use crate::roster::{Assignments, History, Member, Role};

/// How a sprint's assignments are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Deterministic cyclic shift.
    #[default]
    Sequential,
    /// Shuffle with conflict avoidance.
    Random,
    /// Caller supplies the map.
    Manual,
}

impl Strategy {
    /// Parse strategy from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Some(Self::Sequential),
            "random" => Some(Self::Random),
            "manual" => Some(Self::Manual),
            _ => None,
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Random => "random",
            Self::Manual => "manual",
        }
    }

    /// Run this strategy. Returns `None` for [`Strategy::Manual`], which the
    /// engine does not compute.
    pub fn rotate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        members: &[Member],
        roles: &[Role],
        history: History<'_>,
    ) -> Option<Assignments> {
        match self {
            Self::Sequential => Some(rotate_sequential(members, roles, history)),
            Self::Random => Some(rotate_random_with(rng, members, roles, history)),
            Self::Manual => None,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a caller-supplied map, resolving roles and members by id or name.
///
/// Each pair is `(role, member)`. Unknown roles or members are errors; a role
/// named twice keeps the last member. Inactive members are accepted since the
/// caller is choosing explicitly.
pub fn manual_assignments(
    members: &[Member],
    roles: &[Role],
    pairs: &[(String, String)],
) -> Result<Assignments> {
    let mut assignments = Assignments::new();
    for (role_key, member_key) in pairs {
        let role = roles
            .iter()
            .find(|r| r.id.as_str() == role_key || r.name.eq_ignore_ascii_case(role_key))
            .ok_or_else(|| RotaError::UnknownRole(role_key.clone()))?;
        let member = members
            .iter()
            .find(|m| m.id.as_str() == member_key || m.name.eq_ignore_ascii_case(member_key))
            .ok_or_else(|| RotaError::UnknownMember(member_key.clone()))?;
        assignments.insert(role.id.clone(), member.id.clone());
    }
    Ok(assignments)
}
