//! Terminal color utilities using ANSI escape codes.
//!
//! Provides colored output for role names, members, sprint statuses, and log lines.

/// ANSI color codes
pub mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const WHITE: &str = "\x1b[37m";

    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    pub const BRIGHT_BLUE: &str = "\x1b[94m";
    pub const BRIGHT_MAGENTA: &str = "\x1b[95m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
}

use codes::*;

use crate::roster::Role;
use crate::timeline::SprintStatus;

/// Fallback palette for members and for roles without a known color name.
const PALETTE: &[&str] = &[
    CYAN,
    MAGENTA,
    YELLOW,
    BLUE,
    BRIGHT_CYAN,
    BRIGHT_MAGENTA,
    BRIGHT_YELLOW,
    BRIGHT_BLUE,
    GREEN,
    BRIGHT_GREEN,
];

/// Get a deterministic palette color for a name, based on its initial.
pub fn name_color(name: &str) -> &'static str {
    let initial = name.chars().next().unwrap_or('A');
    let index = (initial.to_ascii_uppercase() as usize).wrapping_sub('A' as usize);
    PALETTE[index % PALETTE.len()]
}

/// Map a role's configured color name to an ANSI code.
///
/// Accepts plain names (`blue`) and Tailwind-style classes (`bg-blue-500`).
pub fn role_color(color: &str) -> Option<&'static str> {
    let color = color.to_ascii_lowercase();
    let name = color
        .trim_start_matches("bg-")
        .trim_start_matches("text-")
        .split('-')
        .next()
        .unwrap_or("");
    match name {
        "red" | "rose" => Some(RED),
        "green" | "emerald" | "lime" => Some(GREEN),
        "yellow" | "amber" | "orange" => Some(YELLOW),
        "blue" | "sky" | "indigo" => Some(BLUE),
        "purple" | "violet" | "magenta" | "pink" | "fuchsia" => Some(MAGENTA),
        "cyan" | "teal" => Some(CYAN),
        "white" | "gray" | "grey" | "slate" => Some(WHITE),
        _ => None,
    }
}

/// Color a role name using its configured color.
pub fn role(role: &Role) -> String {
    let color = role_color(&role.color).unwrap_or_else(|| name_color(&role.name));
    format!("{}{}{}{}", BOLD, color, role.name, RESET)
}

/// Color a member name deterministically.
pub fn member(name: &str) -> String {
    format!("{}{}{}", name_color(name), name, RESET)
}

/// Color a sprint status.
pub fn status(status: SprintStatus) -> String {
    let color = match status {
        SprintStatus::Planning => YELLOW,
        SprintStatus::Active => GREEN,
        SprintStatus::Completed => DIM,
    };
    format!("{}{}{}", color, status.as_str(), RESET)
}

/// Color a timestamp (dim white).
pub fn timestamp(ts: &str) -> String {
    format!("{}{}{}", DIM, ts, RESET)
}

/// Color success messages (green).
pub fn success(text: &str) -> String {
    format!("{}{}{}", GREEN, text, RESET)
}

/// Color warning messages (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", YELLOW, text, RESET)
}

/// Color a label (bold).
pub fn label(text: &str) -> String {
    format!("{}{}{}", BOLD, text, RESET)
}

/// Color a number/count (bright cyan).
pub fn number(n: impl std::fmt::Display) -> String {
    format!("{}{}{}", BRIGHT_CYAN, n, RESET)
}

/// One `role -> member` line of an assignment table.
pub fn assignment_line(role: &Role, member_name: Option<&str>) -> String {
    let member = match member_name {
        Some(name) => self::member(name),
        None => format!("{}(unassigned){}", DIM, RESET),
    };
    format!("{} {} {}", self::role(role), timestamp("->"), member)
}

/// Colorize an activity log line in the format: "timestamp | actor | message"
pub fn log_line(line: &str) -> String {
    let parts: Vec<&str> = line.splitn(3, " | ").collect();
    if parts.len() != 3 {
        return line.to_string();
    }
    format!(
        "{} | {}{}{}{} | {}",
        timestamp(parts[0]),
        BOLD,
        name_color(parts[1]),
        parts[1],
        RESET,
        parts[2]
    )
}

/// Emoji constants for consistent usage
pub mod emoji {
    pub const CHECK: &str = "✅";
    pub const WARNING: &str = "⚠️";
    pub const SPRINT: &str = "🏃";
    pub const CALENDAR: &str = "📅";
    pub const ROTATE: &str = "🔄";
    pub const SPARKLES: &str = "✨";
    pub const TEAM: &str = "👥";
    pub const TASK: &str = "📋";
}
