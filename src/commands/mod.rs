pub mod init;
pub mod log;
pub mod roster;
pub mod rotate;
pub mod status;
pub mod timeline;

pub use init::cmd_init;
pub use log::cmd_log;
pub use roster::{cmd_member, cmd_role};
pub use rotate::{cmd_plan, cmd_rotate};
pub use status::cmd_status;
pub use timeline::{cmd_activate, cmd_delete, cmd_edit_sprint, cmd_move};

use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};

use rota::config::{parse_sprint_length, Config, SprintDates};
use rota::log::ActivityLog;
use rota::timeline::SprintLength;
use rota::{Plan, Result, RotaError};

/// Load the plan document named by the config.
fn load_plan(config: &Config) -> Result<Plan> {
    Plan::load(&config.files_plan)
}

fn save_plan(config: &Config, plan: &Plan) -> Result<()> {
    plan.save(&config.files_plan)
}

/// Append an activity log entry.
fn record(config: &Config, actor: &str, message: &str) -> Result<()> {
    ActivityLog::new(&config.files_log)
        .with_max_lines(config.log_max_lines)
        .log(actor, message)
        .map_err(|e| RotaError::io(&config.files_log, e))
}

/// Midnight UTC today.
fn today() -> DateTime<Utc> {
    Utc.from_utc_datetime(&Utc::now().date_naive().and_time(NaiveTime::MIN))
}

/// Years accepted for `--start` / `--end`.
const YEARS: RangeInclusive<i32> = 1900..=9999;

/// Parse `YYYY-MM-DD` into midnight UTC.
fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        RotaError::InvalidArgument(format!("invalid date '{}' (expected YYYY-MM-DD): {}", value, e))
    })?;
    if !YEARS.contains(&date.year()) {
        return Err(RotaError::InvalidArgument(format!(
            "date '{}' is out of range (years {} to {})",
            value,
            YEARS.start(),
            YEARS.end()
        )));
    }
    Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

/// Sprint length from `--length`/`--unit`, falling back to the config.
fn sprint_length(config: &Config, dates: &SprintDates) -> Result<SprintLength> {
    let (default_length, default_unit) = match config.sprint_length {
        SprintLength::Days(n) => (n, "days"),
        SprintLength::Weekdays(n) => (n, "weekdays"),
    };
    let length = dates.length.unwrap_or(default_length);
    let unit = dates.unit.as_deref().unwrap_or(default_unit);
    parse_sprint_length(length, unit)
        .ok_or_else(|| {
            RotaError::InvalidArgument(format!("unknown sprint unit '{}' (expected days or weekdays)", unit))
        })?
        .validate()
}

/// Start of the next sprint: `--start` if given, else right after the timeline.
fn sprint_start(plan: &Plan, dates: &SprintDates) -> Result<DateTime<Utc>> {
    match dates.start {
        Some(ref value) => parse_date(value),
        None => Ok(plan.next_start(today())),
    }
}

fn format_day(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}
