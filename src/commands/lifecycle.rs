//! Down and status command handlers

use std::path::Path;

use anyhow::Result;

use statstack::presentation::factory::create_lifecycle_use_case;
use statstack::presentation::ColorWhen;

use crate::ui::sink::ConsoleSink;
use crate::ui::views::status::{render_down_result, render_status, render_status_header};

use super::CommandContext;

pub fn cmd_down(directory: Option<&Path>, verbose: u8, color: Option<ColorWhen>) -> Result<()> {
    let ctx = CommandContext::load(directory, verbose, color)?;
    let ui = ctx.ui;

    let use_case = create_lifecycle_use_case(&ctx.config, ui.echo_commands());
    let sink = ConsoleSink::new(ui.color, ui.unicode);
    let stopped = use_case.down(&ctx.layout, ctx.project(), &sink)?;

    eprint!("{}", render_down_result(stopped, ui.color, ui.unicode));
    Ok(())
}

pub fn cmd_status(directory: Option<&Path>, verbose: u8, color: Option<ColorWhen>) -> Result<()> {
    let ctx = CommandContext::load(directory, verbose, color)?;
    let ui = ctx.ui;

    eprint!(
        "{}",
        render_status_header(ctx.layout.root(), ui.color, ui.unicode)
    );
    let use_case = create_lifecycle_use_case(&ctx.config, ui.echo_commands());
    let statuses = use_case.status(&ctx.layout, ctx.project())?;

    // stdout carries only the orchestrator's own output
    print!("{}", render_status(&statuses, false));
    Ok(())
}
