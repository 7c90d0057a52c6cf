use rota::color::{self, emoji};
use rota::config::{Config, MemberAction, RoleAction};
use rota::RoleEdit;
use rota::Result;

use super::{load_plan, record, save_plan};

/// Add, toggle, rename or remove a team member.
pub fn cmd_member(config: &Config, action: &MemberAction) -> Result<()> {
    let mut plan = load_plan(config)?;

    let message = match action {
        MemberAction::Add { name } => {
            let id = plan.add_member(name)?;
            println!("{} Added {} [{}]", emoji::CHECK, color::member(name.trim()), id);
            format!("Added member {} ({})", name.trim(), id)
        }
        MemberAction::Toggle { member } => {
            let active = plan.toggle_member(member)?;
            let state = if active { "active" } else { "inactive" };
            println!("{} {} is now {}", emoji::CHECK, color::member(member), state);
            format!("Marked member {} {}", member, state)
        }
        MemberAction::Rename { member, name } => {
            let old = plan.rename_member(member, name)?;
            println!("{} Renamed {} to {}", emoji::CHECK, old, color::member(name.trim()));
            format!("Renamed member {} to {}", old, name.trim())
        }
        MemberAction::Remove { member } => {
            let removed = plan.remove_member(member)?;
            println!("{} Removed {} [{}]", emoji::CHECK, color::member(&removed.name), removed.id);
            format!("Removed member {} ({})", removed.name, removed.id)
        }
    };

    save_plan(config, &plan)?;
    record(config, "member", &message)
}

/// Add, edit or remove a role.
pub fn cmd_role(config: &Config, action: &RoleAction) -> Result<()> {
    let mut plan = load_plan(config)?;

    let message = match action {
        RoleAction::Add {
            name,
            description,
            color: role_color,
        } => {
            let id = plan.add_role(name, description.as_deref(), role_color)?;
            if let Some(role) = plan.roles.last() {
                println!("{} Added role {} [{}]", emoji::CHECK, color::role(role), id);
            }
            format!("Added role {} ({})", name.trim(), id)
        }
        RoleAction::Edit {
            role,
            name,
            color: role_color,
            description,
            icon,
        } => {
            let edit = RoleEdit {
                name: name.clone(),
                color: role_color.clone(),
                description: description.clone(),
                icon: icon.clone(),
            };
            let id = plan.update_role(role, &edit)?;
            if let Some(updated) = plan.roles.iter().find(|r| r.id == id) {
                println!("{} Updated role {} [{}]", emoji::CHECK, color::role(updated), id);
            }
            format!("Updated role {}", id)
        }
        RoleAction::Remove { role } => {
            let removed = plan.remove_role(role)?;
            println!("{} Removed role {} [{}]", emoji::CHECK, removed.name, removed.id);
            format!("Removed role {} ({})", removed.name, removed.id)
        }
    };

    save_plan(config, &plan)?;
    record(config, "role", &message)
}
