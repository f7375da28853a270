//! Interactive menu shown when no subcommand is given

use std::path::Path;

use anyhow::Result;
use clap::CommandFactory;
use dialoguer::Select;

use statstack::presentation::{Cli, ColorWhen};

use crate::ui::terminal::stdin_is_interactive;
use crate::ui::theme::StatstackTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuEntry {
    Setup,
    Status,
    Down,
    Teardown,
    Quit,
}

impl MenuEntry {
    const ALL: [MenuEntry; 5] = [
        MenuEntry::Setup,
        MenuEntry::Status,
        MenuEntry::Down,
        MenuEntry::Teardown,
        MenuEntry::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Setup => "Set up and start the stack",
            Self::Status => "Show container status",
            Self::Down => "Stop the stack (keep data)",
            Self::Teardown => "Tear down everything (deletes data)",
            Self::Quit => "Quit",
        }
    }
}

pub fn interactive_menu(
    directory: Option<&Path>,
    verbose: u8,
    color: Option<ColorWhen>,
    unicode: bool,
) -> Result<()> {
    if !stdin_is_interactive() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let items: Vec<&str> = MenuEntry::ALL.iter().map(MenuEntry::label).collect();
    let theme = StatstackTheme::new(unicode);
    let selection = Select::with_theme(&theme)
        .with_prompt("What would you like to do?")
        .items(&items)
        .default(0)
        .interact_opt()?;

    match selection.map(|i| MenuEntry::ALL[i]) {
        Some(MenuEntry::Setup) => super::setup::cmd_setup(directory, verbose, color),
        Some(MenuEntry::Status) => super::lifecycle::cmd_status(directory, verbose, color),
        Some(MenuEntry::Down) => super::lifecycle::cmd_down(directory, verbose, color),
        Some(MenuEntry::Teardown) => {
            super::teardown::cmd_teardown(directory, false, verbose, color)
        }
        Some(MenuEntry::Quit) | None => Ok(()),
    }
}
