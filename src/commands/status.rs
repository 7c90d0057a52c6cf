use rota::calendar::count_weekdays;
use rota::color::{self, emoji};
use rota::config::Config;
use rota::timeline::active_sprint;
use rota::{Plan, Result, Sprint};

use super::{format_day, load_plan};

/// Show the roster and the sprint timeline.
pub fn cmd_status(config: &Config) -> Result<()> {
    let plan = load_plan(config)?;

    println!("{} {} ({}):", emoji::TEAM, color::label("Team"), config.files_plan);
    if plan.members.is_empty() {
        println!("  (no members)");
    }
    for member in &plan.members {
        let state = if member.active {
            color::success("active")
        } else {
            color::warning("inactive")
        };
        println!("  {} [{}] {}", color::member(&member.name), member.id, state);
    }

    println!("\n{} {}:", emoji::TASK, color::label("Roles"));
    if plan.roles.is_empty() {
        println!("  (no roles)");
    }
    for role in &plan.roles {
        match role.description {
            Some(ref description) => println!("  {} - {}", color::role(role), description),
            None => println!("  {}", color::role(role)),
        }
    }

    println!("\n{} {}:", emoji::CALENDAR, color::label("Sprints"));
    if plan.sprints.is_empty() {
        println!("  (no sprints, run 'rota rotate' to start one)");
    }
    for (i, sprint) in plan.sprints.iter().enumerate() {
        print_sprint(&plan, i + 1, sprint);
    }

    if let Some(active) = active_sprint(&plan.sprints) {
        println!(
            "\n{} Active: {} ({} to {})",
            emoji::SPRINT,
            color::label(&active.name),
            format_day(&active.start_date),
            format_day(&active.end_date)
        );
    }
    Ok(())
}

/// Print one sprint with its assignment table.
pub(super) fn print_sprint(plan: &Plan, position: usize, sprint: &Sprint) {
    println!(
        "  {}. {} [{}] {} to {} ({} weekdays) {}",
        color::number(position),
        color::label(&sprint.name),
        sprint.id,
        format_day(&sprint.start_date),
        format_day(&sprint.end_date),
        count_weekdays(sprint.start_date, sprint.end_date),
        color::status(sprint.status)
    );
    for role in &plan.roles {
        let member = sprint.assignments.get(&role.id).map(|id| {
            plan.find_member(id.as_str())
                .map(|m| m.name.as_str())
                .unwrap_or(id.as_str())
        });
        println!("       {}", color::assignment_line(role, member));
    }
}
