//! Teardown options

use std::path::PathBuf;

use crate::domain::entities::StackLayout;

/// Options for the teardown command
#[derive(Debug, Clone)]
pub struct TeardownOptions {
    pub layout: StackLayout,
    /// Compose project name; also the resource prefix swept
    pub project: String,
    /// Skip the confirmation prompt
    pub assume_yes: bool,
    /// Run lock to hold; `None` skips locking
    pub lock_path: Option<PathBuf>,
}

impl TeardownOptions {
    pub fn new(layout: StackLayout, project: impl Into<String>) -> Self {
        let lock_path = Some(layout.lock_file());
        Self {
            layout,
            project: project.into(),
            assume_yes: false,
            lock_path,
        }
    }

    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    pub fn without_lock(mut self) -> Self {
        self.lock_path = None;
        self
    }
}
