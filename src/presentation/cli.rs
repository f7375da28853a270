//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--color, --verbose, -C) are inherited by all subcommands
//! - Running without a subcommand opens an interactive menu

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// statstack - set up and tear down a self-hosted analytics stack
#[derive(Parser, Debug)]
#[command(name = "statstack")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'statstack' without arguments for an interactive menu.")]
pub struct Cli {
    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v echoes every docker command)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Stack directory (defaults to the current directory)
    #[arg(short = 'C', long = "directory", global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Configure access, generate secrets and start the stack
    Setup,

    /// Remove every container, volume, network and generated file of the stack
    Teardown {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Stop the stack, keeping its data
    Down,

    /// Show the state of the stack's containers
    Status,
}
