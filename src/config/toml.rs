use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::rotation::Strategy;
use crate::timeline::SprintLength;

use super::types::{parse_sprint_length, Config, ConfigError};

/// On-disk shape of rota.toml. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    files: FilesSection,
    rotation: RotationSection,
    sprints: SprintsSection,
    log: LogSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FilesSection {
    plan: Option<String>,
    log: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RotationSection {
    strategy: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SprintsSection {
    length: Option<u32>,
    unit: Option<String>,
    count: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LogSection {
    max_lines: Option<usize>,
}

pub(super) fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
    Config::parse_toml(&content)
}

pub(super) fn parse_toml(content: &str) -> Result<Config, ConfigError> {
    let file: FileConfig = ::toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    let mut config = Config::default();

    if let Some(plan) = file.files.plan {
        config.files_plan = plan;
    }
    if let Some(log) = file.files.log {
        config.files_log = log;
    }
    if let Some(ref strategy) = file.rotation.strategy {
        config.strategy = Strategy::parse(strategy)
            .ok_or_else(|| ConfigError::Parse(format!("invalid rotation.strategy: {}", strategy)))?;
    }

    let (current_len, current_unit) = match config.sprint_length {
        SprintLength::Days(n) => (n, "days"),
        SprintLength::Weekdays(n) => (n, "weekdays"),
    };
    let length = file.sprints.length.unwrap_or(current_len);
    let unit = file.sprints.unit.as_deref().unwrap_or(current_unit);
    config.sprint_length = parse_sprint_length(length, unit)
        .ok_or_else(|| ConfigError::Parse(format!("invalid sprints.unit: {}", unit)))?;

    if let Some(count) = file.sprints.count {
        config.sprints_plan_count = count;
    }
    if let Some(max_lines) = file.log.max_lines {
        if max_lines == 0 {
            return Err(ConfigError::Parse("log.max_lines must be positive".to_string()));
        }
        config.log_max_lines = max_lines;
    }

    Ok(config)
}
