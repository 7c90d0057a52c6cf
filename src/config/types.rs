use std::path::Path;

use thiserror::Error;

use crate::rotation::Strategy;
use crate::timeline::SprintLength;

use super::cli::CliArgs;
use super::{env, toml};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "rota.toml";

/// Default maximum activity log lines before rotation.
pub const DEFAULT_LOG_MAX_LINES: usize = 1000;

/// Rota configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path to the JSON plan document (roster and sprints).
    pub files_plan: String,
    /// Path to the activity log.
    pub files_log: String,
    /// Activity log lines kept before the file is rotated.
    pub log_max_lines: usize,
    /// Strategy used by `rotate` and `plan` when none is given.
    pub strategy: Strategy,
    /// Length of new sprints.
    pub sprint_length: SprintLength,
    /// Number of sprints drafted by `plan` when none is given.
    pub sprints_plan_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files_plan: ".rota/plan.json".to_string(),
            files_log: ".rota/activity.log".to_string(),
            log_max_lines: DEFAULT_LOG_MAX_LINES,
            strategy: Strategy::Sequential,
            sprint_length: SprintLength::Days(18),
            sprints_plan_count: 5,
        }
    }
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Precedence: CLI args > env vars > config file > defaults.
    /// A missing default `rota.toml` is fine; a missing file named with
    /// `--config` is an error.
    pub fn load(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = match cli_args.config {
            Some(ref path) => Self::load_from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::load_from_file(DEFAULT_CONFIG_FILE)?,
            None => Self::default(),
        };

        config.apply_env();
        config.apply_cli(cli_args);
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        toml::load_from_file(path)
    }

    /// Parse TOML content into configuration.
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        toml::parse_toml(content)
    }

    /// Apply environment variables.
    fn apply_env(&mut self) {
        env::apply_env(self, |key| std::env::var(key).ok());
    }

    /// Apply CLI arguments.
    pub(super) fn apply_cli(&mut self, args: &CliArgs) {
        if let Some(ref path) = args.plan_file {
            self.files_plan = path.clone();
        }
        if let Some(ref path) = args.log_file {
            self.files_log = path.clone();
        }
    }

    /// Generate default rota.toml content.
    pub fn default_toml() -> String {
        format!(
            r#"# Rota configuration

[files]
plan = ".rota/plan.json"
log = ".rota/activity.log"

[rotation]
strategy = "sequential"  # sequential, random or manual

[sprints]
length = 18
unit = "days"  # days or weekdays
count = 5      # sprints drafted by `rota plan`

[log]
max_lines = {}
"#,
            DEFAULT_LOG_MAX_LINES
        )
    }
}

/// Parse a sprint length from a count and unit name.
pub fn parse_sprint_length(length: u32, unit: &str) -> Option<SprintLength> {
    match unit.trim().to_lowercase().as_str() {
        "days" | "day" => Some(SprintLength::Days(length)),
        "weekdays" | "weekday" => Some(SprintLength::Weekdays(length)),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading config file.
    #[error("config I/O error: {0}")]
    Io(String),
    /// Parse error in config file.
    #[error("config parse error: {0}")]
    Parse(String),
}
