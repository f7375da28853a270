//! Setup command handler

use std::path::Path;

use anyhow::Result;

use statstack::application::SetupOptions;
use statstack::presentation::factory::create_setup_use_case;
use statstack::presentation::ColorWhen;

use crate::ui::sink::ConsoleSink;
use crate::ui::views::setup::{render_setup_header, render_setup_result};

use super::{with_prompter, CommandContext};

pub fn cmd_setup(directory: Option<&Path>, verbose: u8, color: Option<ColorWhen>) -> Result<()> {
    let ctx = CommandContext::load(directory, verbose, color)?;
    let ui = ctx.ui;

    eprint!(
        "{}",
        render_setup_header(ctx.layout.root(), ctx.project(), ui.color, ui.unicode)
    );

    let use_case = create_setup_use_case(&ctx.config, ui.echo_commands());
    let options = SetupOptions::new(ctx.layout.clone(), ctx.config.stack_settings());
    let sink = ConsoleSink::new(ui.color, ui.unicode);

    let result = with_prompter(&ui, |prompter| use_case.execute(&options, prompter, &sink))?;

    eprint!(
        "{}",
        render_setup_result(&result, sink.warnings(), ui.color, ui.unicode)
    );
    Ok(())
}
