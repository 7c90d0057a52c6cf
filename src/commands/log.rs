use rota::color::{self, emoji};
use rota::config::Config;
use rota::log::ActivityLog;
use rota::{Result, RotaError};

/// Show the most recent activity log entries.
pub fn cmd_log(config: &Config, lines: usize) -> Result<()> {
    let log = ActivityLog::new(&config.files_log);
    let recent = log
        .read_recent(lines)
        .map_err(|e| RotaError::io(&config.files_log, e))?;

    println!("{} {} ({}):", emoji::TASK, color::label("Recent Activity"), config.files_log);
    if recent.is_empty() {
        println!("  (no entries)");
    }
    for line in recent {
        println!("  {}", color::log_line(&line));
    }
    Ok(())
}
