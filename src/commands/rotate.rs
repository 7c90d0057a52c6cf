use rota::color::{self, emoji};
use rota::config::{Config, SprintDates};
use rota::rotation::manual_assignments;
use rota::sprint_id::generate_sprint_id;
use rota::timeline::{latest_assignments, plan_sprints, start_sprint, SprintRequest, MAX_DRAFTS};
use rota::{Result, RotaError, Sprint, Strategy};

use super::{load_plan, record, save_plan, sprint_length, sprint_start};
use super::status::print_sprint;

/// Start a new active sprint, rotated from the latest sprint.
pub fn cmd_rotate(
    config: &Config,
    strategy: Option<Strategy>,
    assign: &[String],
    dates: &SprintDates,
) -> Result<()> {
    let mut plan = load_plan(config)?;
    let strategy = if assign.is_empty() {
        strategy.unwrap_or(config.strategy)
    } else {
        Strategy::Manual
    };

    let history = latest_assignments(&plan.sprints);
    let assignments = match strategy.rotate(&mut rand::thread_rng(), &plan.members, &plan.roles, history) {
        Some(assignments) => assignments,
        None => {
            if assign.is_empty() {
                return Err(RotaError::InvalidArgument(
                    "manual rotation needs at least one --assign ROLE=MEMBER".to_string(),
                ));
            }
            manual_assignments(&plan.members, &plan.roles, &parse_pairs(assign)?)?
        }
    };
    let repeats = history.conflicts(&assignments);

    let start = sprint_start(&plan, dates)?;
    let end = sprint_length(config, dates)?.end_from(start).ok_or_else(|| {
        RotaError::InvalidArgument("sprint end date is past the supported calendar range".to_string())
    })?;
    let sprint = Sprint::new(
        generate_sprint_id().0,
        format!("Sprint {}", plan.next_sprint_number()),
        start,
        end,
    )
    .with_assignments(assignments);
    let (id, name) = (sprint.id.clone(), sprint.name.clone());

    plan.sprints = start_sprint(&plan.sprints, sprint);
    save_plan(config, &plan)?;
    record(
        config,
        "rotate",
        &format!("Started {} ({}) with {} rotation", name, id, strategy),
    )?;

    println!("{} {} ({} rotation)", emoji::ROTATE, color::success("New sprint started"), strategy);
    if let Some(position) = plan.sprints.iter().position(|s| s.id == id) {
        print_sprint(&plan, position + 1, &plan.sprints[position]);
    }
    if repeats > 0 {
        println!(
            "{} {}",
            emoji::WARNING,
            color::warning(&format!("{} role(s) kept the same member as last sprint", repeats))
        );
    }
    Ok(())
}

/// Draft upcoming sprints, each rotated from the one before.
pub fn cmd_plan(
    config: &Config,
    count: Option<usize>,
    strategy: Option<Strategy>,
    dates: &SprintDates,
) -> Result<()> {
    let mut plan = load_plan(config)?;
    let request = SprintRequest {
        start: sprint_start(&plan, dates)?,
        count: count.unwrap_or(config.sprints_plan_count),
        length: sprint_length(config, dates)?,
        strategy: strategy.unwrap_or(config.strategy),
        first_number: plan.next_sprint_number(),
    };
    if !(1..=MAX_DRAFTS).contains(&request.count) {
        return Err(RotaError::InvalidArgument(format!(
            "count must be between 1 and {}",
            MAX_DRAFTS
        )));
    }

    let drafts = plan_sprints(
        &mut rand::thread_rng(),
        &request,
        &plan.members,
        &plan.roles,
        latest_assignments(&plan.sprints),
    )?;
    let first_position = plan.sprints.len() + 1;
    plan.sprints.extend(drafts);
    save_plan(config, &plan)?;
    record(
        config,
        "plan",
        &format!("Drafted {} sprint(s) with {} rotation", request.count, request.strategy),
    )?;

    println!(
        "{} Drafted {} sprint(s):",
        emoji::CALENDAR,
        color::number(request.count)
    );
    for (offset, sprint) in plan.sprints[first_position - 1..].iter().enumerate() {
        print_sprint(&plan, first_position + offset, sprint);
    }
    Ok(())
}

/// Split `ROLE=MEMBER` arguments.
pub(super) fn parse_pairs(assign: &[String]) -> Result<Vec<(String, String)>> {
    assign
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((role, member)) if !role.trim().is_empty() && !member.trim().is_empty() => {
                Ok((role.trim().to_string(), member.trim().to_string()))
            }
            _ => Err(RotaError::InvalidArgument(format!(
                "invalid assignment '{}' (expected ROLE=MEMBER)",
                pair
            ))),
        })
        .collect()
}
