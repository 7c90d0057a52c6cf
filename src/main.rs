use std::env;
use std::process;

use rota::config::{self, Command, Config, SprintAction};

mod commands;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("ROTA_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init()
        .ok();

    let cli = match config::parse_args(env::args()) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let config = match Config::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Default command is Status if none specified
    let command = cli.command.clone().unwrap_or(Command::Status);

    let result = match command {
        Command::Init => commands::cmd_init(&config),
        Command::Status => commands::cmd_status(&config),
        Command::Rotate {
            strategy,
            assign,
            dates,
        } => commands::cmd_rotate(&config, strategy, &assign, &dates),
        Command::Plan {
            count,
            strategy,
            dates,
        } => commands::cmd_plan(&config, count, strategy, &dates),
        Command::Delete { id } => commands::cmd_delete(&config, &id),
        Command::Move { id, position } => commands::cmd_move(&config, &id, position),
        Command::Activate { id } => commands::cmd_activate(&config, &id),
        Command::Sprint {
            action:
                SprintAction::Edit {
                    id,
                    name,
                    start,
                    end,
                    assign,
                    clear,
                },
        } => commands::cmd_edit_sprint(
            &config,
            &id,
            name.as_deref(),
            start.as_deref(),
            end.as_deref(),
            &assign,
            &clear,
        ),
        Command::Member { action } => commands::cmd_member(&config, &action),
        Command::Role { action } => commands::cmd_role(&config, &action),
        Command::Log { lines } => commands::cmd_log(&config, lines),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
