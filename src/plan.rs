//! The plan document: roster plus sprint timeline, stored as JSON.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, RotaError};
use crate::roster::{Member, MemberId, Role, RoleId};
use crate::timeline::{Sprint, SprintId};

/// Partial update for one sprint. `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SprintEdit {
    pub name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    /// Role key to member key. A `None` member leaves the role unassigned.
    pub assignments: Vec<(String, Option<String>)>,
}

/// Partial update for a role. An empty description or icon clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleEdit {
    pub name: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// Everything rota persists between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub members: Vec<Member>,
    /// Role order matters: it is the order the sequential strategy walks.
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub sprints: Vec<Sprint>,
}

impl Plan {
    /// Load a plan from `path`. A missing file is an empty plan.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no plan file, starting empty");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| RotaError::io(path, e))?;
        serde_json::from_str(&content).map_err(|source| RotaError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the plan to `path` as pretty JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| RotaError::io(parent, e))?;
            }
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| RotaError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, content + "\n").map_err(|e| RotaError::io(path, e))
    }

    /// Starter roster written by `rota init`.
    pub fn sample() -> Self {
        Self {
            members: vec![Member::new("alex", "Alex"), Member::new("sam", "Sam")],
            roles: vec![
                Role::new("facilitator", "Facilitator")
                    .with_color("bg-blue-500")
                    .with_description("Runs the ceremonies and keeps discussions on track")
                    .with_icon("🎯"),
                Role::new("scribe", "Scribe")
                    .with_color("bg-green-500")
                    .with_description("Takes notes and records decisions")
                    .with_icon("📝"),
                Role::new("timekeeper", "Timekeeper")
                    .with_color("bg-yellow-500")
                    .with_description("Watches the clock during meetings")
                    .with_icon("⏱️"),
                Role::new("mood-maker", "Mood Maker")
                    .with_color("bg-purple-500")
                    .with_description("Keeps team spirit up")
                    .with_icon("🎉"),
            ],
            sprints: Vec::new(),
        }
    }

    /// Find a member by exact id or case-insensitive name.
    pub fn find_member(&self, key: &str) -> Option<&Member> {
        self.members
            .iter()
            .find(|m| m.id.as_str() == key)
            .or_else(|| self.members.iter().find(|m| m.name.eq_ignore_ascii_case(key)))
    }

    /// Find a role by exact id or case-insensitive name.
    pub fn find_role(&self, key: &str) -> Option<&Role> {
        self.roles
            .iter()
            .find(|r| r.id.as_str() == key)
            .or_else(|| self.roles.iter().find(|r| r.name.eq_ignore_ascii_case(key)))
    }

    pub fn sprint(&self, id: &str) -> Option<&Sprint> {
        self.sprints.iter().find(|s| s.id.as_str() == id)
    }

    /// Add an active member and return its id.
    pub fn add_member(&mut self, name: &str) -> Result<MemberId> {
        let name = non_empty(name, "member name")?;
        let id = MemberId::new(unique_slug(name, |s| {
            self.members.iter().any(|m| m.id.as_str() == s)
        }));
        self.members.push(Member::new(id.as_str(), name));
        Ok(id)
    }

    /// Flip a member's active flag and return the new value.
    pub fn toggle_member(&mut self, key: &str) -> Result<bool> {
        let id = self.member_id(key)?;
        let member = self
            .members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| RotaError::UnknownMember(key.to_string()))?;
        member.active = !member.active;
        Ok(member.active)
    }

    /// Give a member a new display name. The id stays the same.
    ///
    /// Returns the previous name.
    pub fn rename_member(&mut self, key: &str, name: &str) -> Result<String> {
        let name = non_empty(name, "member name")?;
        let id = self.member_id(key)?;
        let member = self
            .members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| RotaError::UnknownMember(key.to_string()))?;
        Ok(std::mem::replace(&mut member.name, name.to_string()))
    }

    /// Remove a member from the roster.
    ///
    /// Past sprints keep their assignments; rotation skips ids it cannot find.
    pub fn remove_member(&mut self, key: &str) -> Result<Member> {
        let id = self.member_id(key)?;
        let idx = self
            .members
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| RotaError::UnknownMember(key.to_string()))?;
        Ok(self.members.remove(idx))
    }

    /// Append a role to the end of the role order and return its id.
    pub fn add_role(
        &mut self,
        name: &str,
        description: Option<&str>,
        color: &str,
    ) -> Result<RoleId> {
        let name = non_empty(name, "role name")?;
        let id = RoleId::new(unique_slug(name, |s| {
            self.roles.iter().any(|r| r.id.as_str() == s)
        }));
        let mut role = Role::new(id.as_str(), name).with_color(color);
        if let Some(description) = description {
            role = role.with_description(description);
        }
        self.roles.push(role);
        Ok(id)
    }

    /// Apply `edit` to a role, keeping its id and position.
    pub fn update_role(&mut self, key: &str, edit: &RoleEdit) -> Result<RoleId> {
        let name = edit.name.as_deref().map(|n| non_empty(n, "role name")).transpose()?;
        let id = self
            .find_role(key)
            .map(|r| r.id.clone())
            .ok_or_else(|| RotaError::UnknownRole(key.to_string()))?;
        let role = self
            .roles
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RotaError::UnknownRole(key.to_string()))?;

        if let Some(name) = name {
            role.name = name.to_string();
        }
        if let Some(ref color) = edit.color {
            role.color = color.trim().to_string();
        }
        if let Some(ref description) = edit.description {
            role.description = optional(description);
        }
        if let Some(ref icon) = edit.icon {
            role.icon = optional(icon);
        }
        Ok(role.id.clone())
    }

    pub fn remove_role(&mut self, key: &str) -> Result<Role> {
        let idx = self
            .find_role(key)
            .and_then(|role| self.roles.iter().position(|r| r.id == role.id))
            .ok_or_else(|| RotaError::UnknownRole(key.to_string()))?;
        Ok(self.roles.remove(idx))
    }

    /// Apply `edit` to the sprint with `id`.
    ///
    /// Role and member keys resolve like [`Plan::find_role`] and
    /// [`Plan::find_member`]. Nothing changes unless every key resolves and
    /// the resulting end date is not before the start.
    pub fn edit_sprint(&mut self, id: &str, edit: &SprintEdit) -> Result<&Sprint> {
        let name = edit.name.as_deref().map(|n| non_empty(n, "sprint name")).transpose()?;
        let changes = edit
            .assignments
            .iter()
            .map(|(role, member)| -> Result<(RoleId, Option<MemberId>)> {
                let role_id = self
                    .find_role(role)
                    .map(|r| r.id.clone())
                    .ok_or_else(|| RotaError::UnknownRole(role.clone()))?;
                let member_id = member.as_deref().map(|m| self.member_id(m)).transpose()?;
                Ok((role_id, member_id))
            })
            .collect::<Result<Vec<_>>>()?;

        let sprint = self
            .sprints
            .iter_mut()
            .find(|s| s.id.as_str() == id)
            .ok_or_else(|| RotaError::UnknownSprint(id.to_string()))?;
        let start = edit.start_date.unwrap_or(sprint.start_date);
        let end = edit.end_date.unwrap_or(sprint.end_date);
        if end < start {
            return Err(RotaError::InvalidArgument(format!(
                "sprint end {} is before its start {}",
                end.format("%Y-%m-%d"),
                start.format("%Y-%m-%d")
            )));
        }

        if let Some(name) = name {
            sprint.name = name.to_string();
        }
        sprint.start_date = start;
        sprint.end_date = end;
        for (role, member) in changes {
            match member {
                Some(member) => sprint.assignments.insert(role, member),
                None => sprint.assignments.remove(&role),
            };
        }
        debug!(sprint = id, "sprint edited");
        Ok(&*sprint)
    }

    /// Number for the next "Sprint N" name: one past the highest existing N.
    pub fn next_sprint_number(&self) -> usize {
        self.sprints
            .iter()
            .filter_map(|s| s.name.strip_prefix("Sprint ")?.trim().parse::<usize>().ok())
            .max()
            .unwrap_or(0)
            .saturating_add(1)
    }

    /// Default start for a new sprint: the day after the latest end, or `today`.
    pub fn next_start(&self, today: DateTime<Utc>) -> DateTime<Utc> {
        self.sprints
            .iter()
            .map(|s| s.end_date)
            .max()
            .and_then(|end| end.checked_add_signed(Duration::days(1)))
            .unwrap_or(today)
    }

    /// Check that a sprint id exists.
    pub fn require_sprint(&self, id: &str) -> Result<SprintId> {
        self.sprint(id)
            .map(|s| s.id.clone())
            .ok_or_else(|| RotaError::UnknownSprint(id.to_string()))
    }

    fn member_id(&self, key: &str) -> Result<MemberId> {
        self.find_member(key)
            .map(|m| m.id.clone())
            .ok_or_else(|| RotaError::UnknownMember(key.to_string()))
    }
}

fn non_empty<'a>(value: &'a str, what: &str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RotaError::InvalidArgument(format!("{} must not be empty", what)));
    }
    Ok(value)
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Lowercase, dash-separated id derived from `name`, suffixed until `taken` is false.
fn unique_slug(name: &str, taken: impl Fn(&str) -> bool) -> String {
    let base: String = name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("-");
    let base = if base.is_empty() { "id".to_string() } else { base };

    if !taken(&base) {
        return base;
    }
    (2..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| !taken(candidate))
        .unwrap_or(base)
}
