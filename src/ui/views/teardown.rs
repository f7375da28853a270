//! Teardown command UI views

use statstack::application::TeardownReport;
use statstack::domain::ports::ResourceKind;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::primitives::icon::Icon;

pub fn render_teardown_header(project: &str, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Teardown, "statstack teardown");
    header.add("Project", project);
    header.render(supports_color, supports_unicode)
}

/// Shown before the confirmation prompt
pub fn render_teardown_warning(supports_color: bool, supports_unicode: bool) -> String {
    let mut block = WarningBlock::new("This cannot be undone");
    block.add_line("Every statstack container, volume and network will be removed.");
    block.add_line("Analytics data, dashboards and recordings are deleted with the volumes.");
    block.add_line("Generated configuration files are deleted too.");
    block.render(supports_color, supports_unicode)
}

pub fn render_teardown_cancelled(supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Teardown cancelled. Nothing was changed.\n",
        Icon::Arrow.colored(supports_color, supports_unicode)
    )
}

pub fn render_teardown_result(
    report: &TeardownReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if report.is_clean() {
        ResultSummary::success("Teardown Complete")
    } else {
        ResultSummary::partial("Teardown Incomplete")
    };

    for kind in ResourceKind::ALL {
        summary.add_stat(format!("{}(s) removed", kind), report.removed_of(kind).len());
    }
    summary.add_stat("generated file(s) deleted", report.files_removed.len());

    for (kind, names) in &report.remaining {
        for name in names {
            summary.add_row(kind.as_str(), name.as_str());
        }
    }

    if report.removed_count() == 0 && report.files_removed.is_empty() && report.is_clean() {
        summary.add_info("Nothing to remove");
    }
    for kept in &report.files_kept {
        summary.add_warning(format!("{} was not generated by statstack", kept.display()));
    }
    for failure in &report.failures {
        summary.add_warning(format!("{}: {}", failure.target, failure.message));
    }
    if !report.is_clean() {
        summary.add_warning(format!(
            "{} resource(s) still present",
            report.remaining_count()
        ));
        summary.with_next_step("statstack teardown --yes");
    }

    summary.render(supports_color, supports_unicode)
}
