use anyhow::Result;
use clap::Parser;

use gaffer::cli::commands::actions::ActionsCommand;
use gaffer::cli::commands::check::CheckCommand;
use gaffer::cli::commands::matrix::MatrixCommand;
use gaffer::cli::commands::next::NextCommand;
use gaffer::cli::commands::state::StateCommand;
use gaffer::cli::commands::show_engine_overview;
use gaffer::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    gaffer::telemetry::init_telemetry()?;
    gaffer::config::init_config()?;

    match cli.command {
        // Default behavior: no subcommand - explain how to evaluate an event
        None => show_engine_overview(),
        Some(Commands::State {
            event,
            admin,
            owner,
            user,
            format,
        }) => StateCommand::new(event)
            .with_viewer(admin, owner, user)
            .with_format(format)
            .execute(),
        Some(Commands::Check {
            event,
            to,
            admin,
            owner,
            user,
            format,
        }) => CheckCommand::new(event, to)
            .with_viewer(admin, owner, user)
            .with_format(format)
            .execute(),
        Some(Commands::Actions {
            event,
            action,
            format,
        }) => ActionsCommand::new(event)
            .with_action(action)
            .with_format(format)
            .execute(),
        Some(Commands::Next {
            event,
            status,
            format,
        }) => NextCommand::new(event, status).with_format(format).execute(),
        Some(Commands::Matrix { format }) => MatrixCommand::new().with_format(format).execute(),
    }
}
