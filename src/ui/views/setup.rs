//! Setup command UI views

use std::path::Path;

use statstack::application::SetupResult;
use statstack::domain::value_objects::AccessMode;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_setup_header(
    root: &Path,
    project: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Setup, "statstack setup");
    header.add("Directory", root.display().to_string());
    header.add("Project", project);
    header.render(supports_color, supports_unicode)
}

/// `warnings` is the number of warnings already reported while running
pub fn render_setup_result(
    result: &SetupResult,
    warnings: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let config = &result.config;
    let mut summary = ResultSummary::success("Stack Started");
    summary.add_stat("file(s) written", result.written.len());
    if !result.bundled.is_empty() {
        summary.add_stat("bundled manifest(s) restored", result.bundled.len());
    }
    summary.add_stat("compose project(s) started", result.stacks_started);

    for (service, url) in result.endpoints() {
        summary.add_row(
            service.label(),
            ColoredText::plain(url).bold().render(supports_color),
        );
    }

    match config.mode() {
        AccessMode::Tunnel => {
            summary.add_info("Services listen on loopback only.");
            summary.add_info("Point your tunnel agent at the localhost addresses above.");
        }
        AccessMode::Domain => {
            summary.add_info("Point each hostname's DNS record at this host.");
            summary.add_info("Caddy requests certificates on first use.");
        }
        AccessMode::DirectAddress => {}
    }
    summary.add_info("Admin credentials are in .env");

    for kept in &result.kept {
        summary.add_warning(format!("{} was left in place", kept.display()));
    }
    if warnings > 0 {
        summary.add_warning(format!("{} warning(s) reported above", warnings));
    }
    summary.with_next_step("statstack status");

    summary.render(supports_color, supports_unicode)
}
