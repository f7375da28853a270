//! Setup options

use std::path::PathBuf;

use crate::domain::entities::{StackLayout, StackSettings};
use crate::render::Stamp;

/// Options for the setup command
#[derive(Debug, Clone)]
pub struct SetupOptions {
    /// Where manifests live and artifacts are written
    pub layout: StackLayout,
    /// Values from configuration
    pub settings: StackSettings,
    /// Run lock to hold; `None` skips locking
    pub lock_path: Option<PathBuf>,
    /// Header time for generated files; `None` uses the current time
    pub stamp: Option<Stamp>,
}

impl SetupOptions {
    pub fn new(layout: StackLayout, settings: StackSettings) -> Self {
        let lock_path = Some(layout.lock_file());
        Self {
            layout,
            settings,
            lock_path,
            stamp: None,
        }
    }

    pub fn with_stamp(mut self, stamp: Stamp) -> Self {
        self.stamp = Some(stamp);
        self
    }

    pub fn without_lock(mut self) -> Self {
        self.lock_path = None;
        self
    }
}
