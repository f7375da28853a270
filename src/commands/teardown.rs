//! Teardown command handler

use std::path::Path;

use anyhow::Result;

use statstack::application::{TeardownOptions, TeardownOutcome};
use statstack::presentation::factory::create_teardown_use_case;
use statstack::presentation::ColorWhen;

use crate::ui::sink::ConsoleSink;
use crate::ui::views::teardown::{
    render_teardown_cancelled, render_teardown_header, render_teardown_result,
    render_teardown_warning,
};

use super::{with_prompter, CommandContext};

pub fn cmd_teardown(
    directory: Option<&Path>,
    yes: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let ctx = CommandContext::load(directory, verbose, color)?;
    let ui = ctx.ui;

    eprint!("{}", render_teardown_header(ctx.project(), ui.color, ui.unicode));
    if !yes {
        eprint!("{}", render_teardown_warning(ui.color, ui.unicode));
    }

    let use_case = create_teardown_use_case(&ctx.config, ui.echo_commands());
    let options = TeardownOptions::new(ctx.layout.clone(), ctx.project()).assume_yes(yes);
    let sink = ConsoleSink::new(ui.color, ui.unicode);

    let outcome = with_prompter(&ui, |prompter| use_case.execute(&options, prompter, &sink))?;

    match outcome {
        TeardownOutcome::Cancelled => {
            eprint!("{}", render_teardown_cancelled(ui.color, ui.unicode));
        }
        TeardownOutcome::Completed(report) => {
            eprint!("{}", render_teardown_result(&report, ui.color, ui.unicode));
        }
    }
    Ok(())
}
