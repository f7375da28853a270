//! Command handlers
//!
//! Each handler loads configuration, builds the use case through the factory
//! and renders the outcome. Errors are returned as `anyhow::Error` and
//! printed by `main`.

pub mod lifecycle;
pub mod menu;
pub mod setup;
pub mod teardown;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use statstack::config::{load_layered, user_config_path, Config};
use statstack::domain::entities::StackLayout;
use statstack::domain::ports::{PromptError, Prompter};
use statstack::infrastructure::{DialoguerPrompter, LinePrompter};
use statstack::presentation::ColorWhen;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::terminal::stdin_is_interactive;
use crate::ui::theme::StatstackTheme;

/// Everything a handler needs about where and how it runs
pub struct CommandContext {
    pub layout: StackLayout,
    pub config: Config,
    pub ui: UiContext,
}

impl CommandContext {
    pub fn load(directory: Option<&Path>, verbose: u8, color: Option<ColorWhen>) -> Result<Self> {
        let root = resolve_root(directory)?;
        let user_config = user_config_path();
        let loaded = load_layered(&root, user_config.as_deref(), |key| std::env::var(key).ok())?;

        let ui = UiContext::new(verbose, color, &loaded.config);
        for warning in &loaded.warnings {
            eprintln!("{} {}", Icon::Warning.colored(ui.color, ui.unicode), warning);
        }
        if ui.verbose > 1 {
            for source in &loaded.sources {
                eprintln!("config: {}", source.display());
            }
        }

        Ok(Self {
            layout: StackLayout::new(root),
            config: loaded.config,
            ui,
        })
    }

    pub fn project(&self) -> &str {
        &self.config.stack.project
    }
}

fn resolve_root(directory: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let root = match directory {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => cwd.join(dir),
        None => cwd,
    };
    if !root.is_dir() {
        anyhow::bail!("{} is not a directory", root.display());
    }
    Ok(root)
}

/// Run `f` with the terminal prompter, or a line reader when stdin is piped
pub fn with_prompter<T>(ui: &UiContext, f: impl FnOnce(&dyn Prompter) -> T) -> T {
    if stdin_is_interactive() {
        let prompter = DialoguerPrompter::new(Box::new(StatstackTheme::new(ui.unicode)));
        f(&prompter)
    } else {
        let prompter = LinePrompter::new(std::io::stdin().lock(), std::io::stderr());
        f(&prompter)
    }
}

/// Closed input while prompting ends the command without an error
pub fn is_closed_input(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<statstack::StatstackError>(),
        Some(statstack::StatstackError::Prompt(PromptError::Eof))
    )
}
