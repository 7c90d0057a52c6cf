use crate::rotation::Strategy;
use crate::timeline::SprintLength;

use super::types::{parse_sprint_length, Config};

/// Apply `ROTA_*` variables. Unparseable values are ignored.
pub(super) fn apply_env<F>(config: &mut Config, var: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = var("ROTA_PLAN_FILE") {
        config.files_plan = val;
    }
    if let Some(val) = var("ROTA_LOG_FILE") {
        config.files_log = val;
    }
    if let Some(val) = var("ROTA_LOG_MAX_LINES") {
        if let Ok(n) = val.parse::<usize>() {
            if n > 0 {
                config.log_max_lines = n;
            }
        }
    }
    if let Some(val) = var("ROTA_STRATEGY") {
        if let Some(strategy) = Strategy::parse(&val) {
            config.strategy = strategy;
        }
    }

    let (mut length, mut unit) = match config.sprint_length {
        SprintLength::Days(n) => (n, "days".to_string()),
        SprintLength::Weekdays(n) => (n, "weekdays".to_string()),
    };
    if let Some(val) = var("ROTA_SPRINT_LENGTH") {
        if let Ok(n) = val.parse() {
            length = n;
        }
    }
    if let Some(val) = var("ROTA_SPRINT_UNIT") {
        unit = val;
    }
    if let Some(sprint_length) = parse_sprint_length(length, &unit) {
        config.sprint_length = sprint_length;
    }

    if let Some(val) = var("ROTA_SPRINT_COUNT") {
        if let Ok(n) = val.parse() {
            config.sprints_plan_count = n;
        }
    }
}
