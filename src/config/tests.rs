use std::collections::HashMap;

use super::*;
use crate::rotation::Strategy;
use crate::timeline::SprintLength;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

fn args(list: &[&str]) -> CliArgs {
    let mut all = vec!["rota".to_string()];
    all.extend(list.iter().map(|s| s.to_string()));
    parse_args(all).unwrap()
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.files_plan, ".rota/plan.json");
    assert_eq!(config.files_log, ".rota/activity.log");
    assert_eq!(config.strategy, Strategy::Sequential);
    assert_eq!(config.sprint_length, SprintLength::Days(18));
    assert_eq!(config.sprints_plan_count, 5);
    assert_eq!(config.log_max_lines, DEFAULT_LOG_MAX_LINES);
}

#[test]
fn test_parse_toml_full() {
    let content = r#"
[files]
plan = "team/plan.json"
log = "team/activity.log"

[rotation]
strategy = "random"

[sprints]
length = 10
unit = "weekdays"
count = 3

[log]
max_lines = 200
"#;
    let config = Config::parse_toml(content).unwrap();
    assert_eq!(config.files_plan, "team/plan.json");
    assert_eq!(config.files_log, "team/activity.log");
    assert_eq!(config.strategy, Strategy::Random);
    assert_eq!(config.sprint_length, SprintLength::Weekdays(10));
    assert_eq!(config.sprints_plan_count, 3);
    assert_eq!(config.log_max_lines, 200);
}

#[test]
fn test_parse_toml_partial_keeps_defaults() {
    let config = Config::parse_toml("[sprints]\nlength = 14\n").unwrap();
    assert_eq!(config.sprint_length, SprintLength::Days(14));
    assert_eq!(config.files_plan, ".rota/plan.json");
}

#[test]
fn test_parse_toml_empty() {
    assert_eq!(Config::parse_toml("").unwrap(), Config::default());
}

#[test]
fn test_parse_toml_invalid_strategy() {
    let err = Config::parse_toml("[rotation]\nstrategy = \"fair\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(ref msg) if msg.contains("rotation.strategy")));
}

#[test]
fn test_parse_toml_invalid_unit() {
    let err = Config::parse_toml("[sprints]\nunit = \"fortnights\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(ref msg) if msg.contains("sprints.unit")));
}

#[test]
fn test_parse_toml_unknown_key() {
    assert!(Config::parse_toml("[rotation]\nattempts = 20\n").is_err());
}

#[test]
fn test_parse_toml_zero_max_lines() {
    assert!(Config::parse_toml("[log]\nmax_lines = 0\n").is_err());
}

#[test]
fn test_default_toml_parses_to_defaults() {
    let config = Config::parse_toml(&Config::default_toml()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_apply_env() {
    let mut config = Config::default();
    env::apply_env(
        &mut config,
        vars(&[
            ("ROTA_PLAN_FILE", "/tmp/plan.json"),
            ("ROTA_STRATEGY", "random"),
            ("ROTA_SPRINT_LENGTH", "10"),
            ("ROTA_SPRINT_UNIT", "weekdays"),
            ("ROTA_SPRINT_COUNT", "8"),
            ("ROTA_LOG_MAX_LINES", "50"),
        ]),
    );
    assert_eq!(config.files_plan, "/tmp/plan.json");
    assert_eq!(config.strategy, Strategy::Random);
    assert_eq!(config.sprint_length, SprintLength::Weekdays(10));
    assert_eq!(config.sprints_plan_count, 8);
    assert_eq!(config.log_max_lines, 50);
}

#[test]
fn test_apply_env_ignores_invalid_values() {
    let mut config = Config::default();
    env::apply_env(
        &mut config,
        vars(&[
            ("ROTA_STRATEGY", "fair"),
            ("ROTA_SPRINT_LENGTH", "ten"),
            ("ROTA_SPRINT_UNIT", "moons"),
            ("ROTA_LOG_MAX_LINES", "0"),
        ]),
    );
    assert_eq!(config, Config::default());
}

#[test]
fn test_cli_overrides_env() {
    let mut config = Config::default();
    env::apply_env(&mut config, vars(&[("ROTA_PLAN_FILE", "env.json")]));
    config.apply_cli(&args(&["--plan-file", "cli.json", "status"]));
    assert_eq!(config.files_plan, "cli.json");
}

#[test]
fn test_parse_args_rotate_manual() {
    let cli = args(&["rotate", "--assign", "Scribe=Alice", "-a", "Timekeeper=Bob", "--start", "2024-01-01"]);
    match cli.command {
        Some(Command::Rotate { strategy, assign, dates }) => {
            assert_eq!(strategy, None);
            assert_eq!(assign, vec!["Scribe=Alice", "Timekeeper=Bob"]);
            assert_eq!(dates.start.as_deref(), Some("2024-01-01"));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_args_plan() {
    let cli = args(&["plan", "-n", "4", "--strategy", "random", "--length", "10", "--unit", "weekdays"]);
    assert_eq!(
        cli.command,
        Some(Command::Plan {
            count: Some(4),
            strategy: Some(Strategy::Random),
            dates: SprintDates {
                start: None,
                length: Some(10),
                unit: Some("weekdays".to_string()),
            },
        })
    );
}

#[test]
fn test_parse_args_rejects_unknown_strategy() {
    let result = parse_args(vec!["rota".to_string(), "rotate".to_string(), "-s".to_string(), "fair".to_string()]);
    assert!(result.is_err());
}

#[test]
fn test_parse_args_member_and_move() {
    assert_eq!(
        args(&["member", "add", "Dana"]).command,
        Some(Command::Member { action: MemberAction::Add { name: "Dana".to_string() } })
    );
    assert_eq!(
        args(&["move", "abc12345", "2"]).command,
        Some(Command::Move { id: "abc12345".to_string(), position: 2 })
    );
}

#[test]
fn test_parse_args_sprint_edit() {
    let cli = args(&["sprint", "edit", "abc12345", "--end", "2024-02-01", "-a", "Scribe=Bob", "--clear", "Host"]);
    assert_eq!(
        cli.command,
        Some(Command::Sprint {
            action: SprintAction::Edit {
                id: "abc12345".to_string(),
                name: None,
                start: None,
                end: Some("2024-02-01".to_string()),
                assign: vec!["Scribe=Bob".to_string()],
                clear: vec!["Host".to_string()],
            },
        })
    );
}

#[test]
fn test_parse_args_rename_and_role_edit() {
    assert_eq!(
        args(&["member", "rename", "sam", "Samira"]).command,
        Some(Command::Member {
            action: MemberAction::Rename {
                member: "sam".to_string(),
                name: "Samira".to_string(),
            }
        })
    );
    assert_eq!(
        args(&["role", "edit", "scribe", "--description", ""]).command,
        Some(Command::Role {
            action: RoleAction::Edit {
                role: "scribe".to_string(),
                name: None,
                color: None,
                description: Some(String::new()),
                icon: None,
            }
        })
    );
}

#[test]
fn test_no_command_defaults_to_none() {
    assert_eq!(args(&[]).command, None);
}
