//! Error rendering for the command line

use statstack::domain::ports::EngineError;
use statstack::StatstackError;

use crate::ui::blocks::error::ErrorBlock;

pub fn format_statstack_error(
    err: &StatstackError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let block = match err {
        StatstackError::Engine(EngineError::MissingDependency { name, hint }) => ErrorBlock::new(
            "Missing dependency",
            format!("'{}' was not found on PATH.", name),
        )
        .with_fix(hint.clone()),
        StatstackError::Engine(e @ EngineError::CommandFailed { .. }) => {
            ErrorBlock::new("Container engine error", e.to_string()).with_fix(
                "Generated files were kept. Fix the problem above and run 'statstack setup' again.",
            )
        }
        StatstackError::InvalidConfig { file, message } => {
            ErrorBlock::new("Invalid configuration", message.clone())
                .with_detail(format!("in {}", file.display()))
                .with_fix("Edit the file and try again.")
        }
        StatstackError::InvalidManifest { file, message } => {
            ErrorBlock::new("Invalid compose manifest", message.clone())
                .with_detail(format!("in {}", file.display()))
                .with_fix("Delete the file to restore the bundled copy on the next setup.")
        }
        StatstackError::Locked { path } => ErrorBlock::new(
            "Another run is in progress",
            format!("The lock on {} is held.", path.display()),
        )
        .with_fix("Wait for the other statstack command to finish."),
        other => ErrorBlock::new("Error", other.to_string()),
    };
    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(statstack) = err.downcast_ref::<StatstackError>() {
        return format_statstack_error(statstack, supports_color, supports_unicode);
    }

    format!("[ERROR] {:#}\n", err)
}

pub fn print_error(err: &anyhow::Error) {
    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
