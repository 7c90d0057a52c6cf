use std::fs;
use std::path::Path;

use rota::color::{self, emoji};
use rota::config::{Config, DEFAULT_CONFIG_FILE};
use rota::{Plan, Result, RotaError};

use super::{record, save_plan};

/// Create the plan document with a sample roster, and a default rota.toml.
pub fn cmd_init(config: &Config) -> Result<()> {
    println!("{} Initializing rota...", emoji::SPARKLES);

    if Path::new(&config.files_plan).exists() {
        println!("  Plan already exists: {}", config.files_plan);
    } else {
        let plan = Plan::sample();
        save_plan(config, &plan)?;
        println!(
            "  Created {} ({} roles, {} members)",
            config.files_plan,
            color::number(plan.roles.len()),
            color::number(plan.members.len())
        );
        record(config, "init", "Created plan with sample roster")?;
    }

    if Path::new(DEFAULT_CONFIG_FILE).exists() {
        println!("  Config already exists: {}", DEFAULT_CONFIG_FILE);
    } else {
        fs::write(DEFAULT_CONFIG_FILE, Config::default_toml())
            .map_err(|e| RotaError::io(DEFAULT_CONFIG_FILE, e))?;
        println!("  Created {}", DEFAULT_CONFIG_FILE);
    }

    println!("\n{}", color::success("Rota initialized."));
    println!("  Use 'rota member add <name>' to build the roster.");
    println!("  Use 'rota rotate' to start the first sprint.");
    Ok(())
}
