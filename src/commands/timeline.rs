use rota::color::{self, emoji};
use rota::config::Config;
use rota::timeline::{activate, move_sprint, ripple_delete};
use rota::{Result, RotaError, SprintEdit};

use super::rotate::parse_pairs;
use super::status::print_sprint;
use super::{format_day, load_plan, parse_date, record, save_plan};

/// Change a sprint's name, dates or single assignments. Other sprints are untouched.
pub fn cmd_edit_sprint(
    config: &Config,
    id: &str,
    name: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
    assign: &[String],
    clear: &[String],
) -> Result<()> {
    let mut plan = load_plan(config)?;
    let edit = SprintEdit {
        name: name.map(str::to_string),
        start_date: start.map(parse_date).transpose()?,
        end_date: end.map(parse_date).transpose()?,
        assignments: parse_pairs(assign)?
            .into_iter()
            .map(|(role, member)| (role, Some(member)))
            .chain(clear.iter().map(|role| (role.trim().to_string(), None)))
            .collect(),
    };
    if edit == SprintEdit::default() {
        return Err(RotaError::InvalidArgument(
            "nothing to change (use --name, --start, --end, --assign or --clear)".to_string(),
        ));
    }

    let sprint_name = plan.edit_sprint(id, &edit)?.name.clone();
    save_plan(config, &plan)?;
    record(config, "edit", &format!("Edited {} ({})", sprint_name, id))?;

    println!("{} Updated {}", emoji::CHECK, color::label(&sprint_name));
    if let Some(position) = plan.sprints.iter().position(|s| s.id.as_str() == id) {
        print_sprint(&plan, position + 1, &plan.sprints[position]);
    }
    Ok(())
}

/// Delete a sprint; later sprints shift back into its dates.
pub fn cmd_delete(config: &Config, id: &str) -> Result<()> {
    let mut plan = load_plan(config)?;
    let sprint_id = plan.require_sprint(id)?;
    let name = plan.sprint(id).map(|s| s.name.clone()).unwrap_or_default();

    let updated = ripple_delete(&plan.sprints, &sprint_id, &plan.members, &plan.roles);
    let shifted: Vec<usize> = updated
        .iter()
        .enumerate()
        .filter(|(_, s)| plan.sprint(s.id.as_str()).map(|old| old.start_date) != Some(s.start_date))
        .map(|(i, _)| i)
        .collect();
    plan.sprints = updated;
    save_plan(config, &plan)?;
    record(
        config,
        "delete",
        &format!("Deleted {} ({}); {} later sprint(s) shifted", name, sprint_id, shifted.len()),
    )?;

    println!("{} Deleted {} ({})", emoji::CHECK, color::label(&name), sprint_id);
    for sprint in shifted.iter().map(|&i| &plan.sprints[i]) {
        println!(
            "  {} now {} to {}",
            sprint.name,
            format_day(&sprint.start_date),
            format_day(&sprint.end_date)
        );
    }
    Ok(())
}

/// Move a sprint to a 1-based position. Dates are left as they are.
pub fn cmd_move(config: &Config, id: &str, position: usize) -> Result<()> {
    let mut plan = load_plan(config)?;
    let sprint_id = plan.require_sprint(id)?;
    if position == 0 || position > plan.sprints.len() {
        return Err(RotaError::InvalidArgument(format!(
            "position must be between 1 and {}",
            plan.sprints.len()
        )));
    }

    plan.sprints = move_sprint(&plan.sprints, &sprint_id, position - 1);
    save_plan(config, &plan)?;
    record(config, "move", &format!("Moved {} to position {}", sprint_id, position))?;

    println!("{} Moved {} to position {}", emoji::CHECK, sprint_id, color::number(position));
    Ok(())
}

/// Mark a sprint active; the previously active sprint is completed.
pub fn cmd_activate(config: &Config, id: &str) -> Result<()> {
    let mut plan = load_plan(config)?;
    let sprint_id = plan.require_sprint(id)?;

    plan.sprints = activate(&plan.sprints, &sprint_id);
    save_plan(config, &plan)?;
    record(config, "activate", &format!("Activated {}", sprint_id))?;

    println!("{} {} is now {}", emoji::SPRINT, sprint_id, color::success("active"));
    Ok(())
}
