use clap::{Args, Parser, Subcommand};

use crate::rotation::Strategy;

/// CLI arguments parsed from command line.
#[derive(Debug, Default, Parser)]
#[command(name = "rota", version, about = "Rotate team roles across sprints")]
pub struct CliArgs {
    /// Path to config file (default: rota.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<String>,
    /// Path to the plan document
    #[arg(long, global = true, value_name = "PATH")]
    pub plan_file: Option<String>,
    /// Path to the activity log
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<String>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Rota subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Create .rota/ with a sample roster and a default rota.toml
    Init,
    /// Show the roster and the sprint timeline (default)
    Status,
    /// Start a new active sprint with rotated assignments
    Rotate {
        /// sequential, random or manual
        #[arg(short, long, value_parser = parse_strategy)]
        strategy: Option<Strategy>,
        /// Manual assignment, repeatable (implies --strategy manual)
        #[arg(short, long = "assign", value_name = "ROLE=MEMBER")]
        assign: Vec<String>,
        #[command(flatten)]
        dates: SprintDates,
    },
    /// Draft upcoming sprints, each rotated from the one before
    Plan {
        /// Number of sprints to draft
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// sequential, random or manual
        #[arg(short, long, value_parser = parse_strategy)]
        strategy: Option<Strategy>,
        #[command(flatten)]
        dates: SprintDates,
    },
    /// Delete a sprint and shift later sprints into its place
    Delete {
        /// Sprint id
        id: String,
    },
    /// Move a sprint to another position without changing its dates
    Move {
        /// Sprint id
        id: String,
        /// New 1-based position
        position: usize,
    },
    /// Mark a sprint active (the previous active sprint is completed)
    Activate {
        /// Sprint id
        id: String,
    },
    /// Edit sprints in place
    Sprint {
        #[command(subcommand)]
        action: SprintAction,
    },
    /// Manage team members
    Member {
        #[command(subcommand)]
        action: MemberAction,
    },
    /// Manage roles
    Role {
        #[command(subcommand)]
        action: RoleAction,
    },
    /// Show recent activity log entries
    Log {
        /// Number of entries
        #[arg(short = 'n', long, default_value_t = 10)]
        lines: usize,
    },
}

/// Start date and length overrides shared by `rotate` and `plan`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct SprintDates {
    /// First sprint start (YYYY-MM-DD); defaults to today or after the last sprint
    #[arg(long, value_name = "DATE")]
    pub start: Option<String>,
    /// Sprint length, in the configured unit
    #[arg(long)]
    pub length: Option<u32>,
    /// Unit for --length: days or weekdays
    #[arg(long)]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum SprintAction {
    /// Change a sprint's name, dates or individual assignments
    Edit {
        /// Sprint id
        id: String,
        #[arg(long)]
        name: Option<String>,
        /// New start date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        start: Option<String>,
        /// New end date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        end: Option<String>,
        /// Set one role's member, repeatable
        #[arg(short, long = "assign", value_name = "ROLE=MEMBER")]
        assign: Vec<String>,
        /// Leave a role unassigned, repeatable
        #[arg(long = "clear", value_name = "ROLE")]
        clear: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum MemberAction {
    /// Add an active member
    Add { name: String },
    /// Flip a member between active and inactive
    Toggle { member: String },
    /// Change a member's display name
    Rename { member: String, name: String },
    /// Remove a member from the roster
    Remove { member: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum RoleAction {
    /// Append a role to the end of the role order
    Add {
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "")]
        color: String,
    },
    /// Change a role's name, color, description or icon
    Edit {
        role: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
        /// Empty text clears the description
        #[arg(long)]
        description: Option<String>,
        /// Empty text clears the icon
        #[arg(long)]
        icon: Option<String>,
    },
    /// Remove a role
    Remove { role: String },
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    Strategy::parse(s).ok_or_else(|| format!("unknown strategy '{}' (expected sequential, random or manual)", s))
}

/// Parse CLI arguments from an iterator. The first item is the program name.
pub fn parse_args<I>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = String>,
{
    CliArgs::try_parse_from(args)
}
