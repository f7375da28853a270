//! statstack CLI - set up and tear down a self-hosted analytics stack
//!
//! Usage: statstack [OPTIONS] [COMMAND]
//!
//! Commands:
//!   setup     Configure access, generate secrets and start the stack
//!   teardown  Remove every container, volume, network and generated file
//!   down      Stop the stack, keeping its data
//!   status    Show the state of the stack's containers

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use statstack::presentation::{Cli, Commands};

mod commands;
mod ui;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if commands::is_closed_input(&err) => {
            eprintln!("Input closed; nothing more to do.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            ui::error::print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let directory = cli.directory.as_deref();
    let verbose = cli.verbose;
    let color = cli.color;

    match cli.command {
        Some(Commands::Setup) => commands::setup::cmd_setup(directory, verbose, color),
        Some(Commands::Teardown { yes }) => {
            commands::teardown::cmd_teardown(directory, yes, verbose, color)
        }
        Some(Commands::Down) => commands::lifecycle::cmd_down(directory, verbose, color),
        Some(Commands::Status) => commands::lifecycle::cmd_status(directory, verbose, color),
        None => {
            let unicode = ui::terminal::detect_capabilities().supports_unicode;
            commands::menu::interactive_menu(directory, verbose, color, unicode)
        }
    }
}
