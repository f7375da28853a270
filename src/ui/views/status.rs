//! Status and down command UI views

use std::path::Path;

use statstack::application::StackStatus;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_status_header(
    root: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Status, "statstack status");
    header.add("Directory", root.display().to_string());
    header.render(supports_color, supports_unicode)
}

/// `compose ps` output per project, passed through unchanged
pub fn render_status(statuses: &[StackStatus], supports_color: bool) -> String {
    let mut out = String::new();
    for status in statuses {
        out.push('\n');
        out.push_str(
            &ColoredText::info(status.project.as_str())
                .bold()
                .render(supports_color),
        );
        out.push('\n');
        out.push_str(&status.output);
        if !status.output.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

pub fn render_down_result(stopped: usize, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Stopped {} compose project(s). Volumes were kept; run 'statstack setup' to start again.\n",
        Icon::Down.colored(supports_color, supports_unicode),
        stopped
    )
}
