//! Activity log with rotation.
//!
//! Every change to the plan is appended to a plain-text log, one entry per
//! line: `YYYY-MM-DD HH:MM:SS | <actor> | <message>`. When the file grows past
//! a line limit it is moved aside to a timestamped `.bak` file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

pub use crate::config::DEFAULT_LOG_MAX_LINES as DEFAULT_MAX_LINES;

/// Append-only activity log.
pub struct ActivityLog {
    /// Path to the log file.
    pub path: PathBuf,
    /// Maximum lines before rotation.
    pub max_lines: usize,
}

impl ActivityLog {
    /// Create a log writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_lines: DEFAULT_MAX_LINES,
        }
    }

    /// Create a logger with a custom max lines setting.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Write a log entry.
    pub fn log(&self, actor: &str, message: &str) -> io::Result<()> {
        self.ensure_dir()?;

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let line = format_entry(&timestamp, actor, message);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        file.flush()?;

        self.rotate_if_needed()
    }

    fn ensure_dir(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    fn rotate_if_needed(&self) -> io::Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        if count_lines(&self.path)? <= self.max_lines {
            return Ok(());
        }
        rotate_log(&self.path)
    }

    /// Get the current line count of the log file.
    pub fn line_count(&self) -> io::Result<usize> {
        if !self.path.exists() {
            return Ok(0);
        }
        count_lines(&self.path)
    }

    /// Read the last N lines from the log file.
    pub fn read_recent(&self, n: usize) -> io::Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.path)?;
        let lines: Vec<String> = BufReader::new(file).lines().collect::<Result<_, _>>()?;
        let start = lines.len().saturating_sub(n);
        Ok(lines[start..].to_vec())
    }
}

/// Format one log line.
///
/// # Examples
/// ```
/// use rota::log::format_entry;
/// let line = format_entry("2024-01-01 09:00:00", "rotate", "Sprint 3 started");
/// assert_eq!(line, "2024-01-01 09:00:00 | rotate | Sprint 3 started");
/// ```
pub fn format_entry(timestamp: &str, actor: &str, message: &str) -> String {
    format!("{} | {} | {}", timestamp, actor, message)
}

/// Split a log line into (timestamp, actor, message).
pub fn parse_entry(line: &str) -> Option<(&str, &str, &str)> {
    let mut parts = line.splitn(3, " | ");
    let timestamp = parts.next()?;
    let actor = parts.next()?;
    let message = parts.next()?;
    Some((timestamp, actor, message))
}

/// Count lines in a file.
pub fn count_lines(path: &Path) -> io::Result<usize> {
    let file = File::open(path)?;
    Ok(BufReader::new(file).lines().count())
}

/// Rotate a log file.
///
/// Moves the file to `<name>.<timestamp>.bak` and starts an empty one.
pub fn rotate_log(path: &Path) -> io::Result<()> {
    if !path.exists() {
        return Ok(());
    }

    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    let backup_name = format!(
        "{}.{}.bak",
        path.file_name().and_then(|n| n.to_str()).unwrap_or("log"),
        timestamp
    );
    fs::rename(path, path.with_file_name(backup_name))?;
    File::create(path)?;
    Ok(())
}
