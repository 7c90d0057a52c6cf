//! Configuration loading for rota.
//!
//! Supports rota.toml, CLI flags, and environment variables.
//! Precedence (highest to lowest): CLI flags > env vars > config file > defaults.

mod cli;
mod env;
mod toml;
mod types;

pub use cli::{parse_args, CliArgs, Command, MemberAction, RoleAction, SprintAction, SprintDates};
pub use types::{
    parse_sprint_length, Config, ConfigError, DEFAULT_CONFIG_FILE, DEFAULT_LOG_MAX_LINES,
};

#[cfg(test)]
mod tests;
