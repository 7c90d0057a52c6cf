//! Roster types: members, roles and role-to-member assignment maps.
//!
//! Members and roles are plain value records. Roles are kept in a
//! caller-defined display order, which the rotation engine relies on.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque member identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub String);

/// Opaque role identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(pub String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl RoleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A person eligible for role assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    /// Only active members take part in rotation.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Member {
    /// Create a new active member.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(id),
            name: name.into(),
            active: true,
        }
    }

    /// Builder-style toggle for the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// A named responsibility filled once per sprint.
///
/// `color`, `description` and `icon` are display metadata; rotation ignores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Role {
    /// Create a role with no display metadata.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: RoleId::new(id),
            name: name.into(),
            color: String::new(),
            description: None,
            icon: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Active members in roster order.
pub fn active_members(members: &[Member]) -> Vec<&Member> {
    members.iter().filter(|m| m.active).collect()
}

/// Role-to-member mapping for a single sprint.
///
/// A role with no entry is unassigned. Keys are kept sorted by role id so the
/// serialized form is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignments(BTreeMap<RoleId, MemberId>);

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Member assigned to a role, if any.
    pub fn get(&self, role: &RoleId) -> Option<&MemberId> {
        self.0.get(role)
    }

    /// Assign a member to a role, replacing any previous member for it.
    pub fn insert(&mut self, role: RoleId, member: MemberId) -> Option<MemberId> {
        self.0.insert(role, member)
    }

    /// Leave a role unassigned.
    pub fn remove(&mut self, role: &RoleId) -> Option<MemberId> {
        self.0.remove(role)
    }

    pub fn contains_role(&self, role: &RoleId) -> bool {
        self.0.contains_key(role)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, RoleId, MemberId> {
        self.0.iter()
    }

    /// Number of roles whose member is unchanged from `previous`.
    pub fn conflicts_with(&self, previous: &Assignments) -> usize {
        self.0
            .iter()
            .filter(|(role, member)| previous.get(role) == Some(*member))
            .count()
    }
}

impl FromIterator<(RoleId, MemberId)> for Assignments {
    fn from_iter<I: IntoIterator<Item = (RoleId, MemberId)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Assignments {
    type Item = (&'a RoleId, &'a MemberId);
    type IntoIter = btree_map::Iter<'a, RoleId, MemberId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// What a rotation is computed against.
///
/// `Fresh` means there is no previous sprint; `Previous` carries the map the
/// new rotation should move away from. A `Previous` map may be partial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum History<'a> {
    #[default]
    Fresh,
    Previous(&'a Assignments),
}

impl<'a> History<'a> {
    /// Previous member for a role, if history names one.
    pub fn member_for(&self, role: &RoleId) -> Option<&'a MemberId> {
        match *self {
            Self::Fresh => None,
            Self::Previous(map) => map.get(role),
        }
    }

    /// Conflicts between a candidate map and this history.
    pub fn conflicts(&self, candidate: &Assignments) -> usize {
        match self {
            Self::Fresh => 0,
            Self::Previous(map) => candidate.conflicts_with(map),
        }
    }
}

impl<'a> From<Option<&'a Assignments>> for History<'a> {
    fn from(previous: Option<&'a Assignments>) -> Self {
        previous.map_or(Self::Fresh, Self::Previous)
    }
}
