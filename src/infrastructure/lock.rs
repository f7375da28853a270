//! Working-directory run lock
//!
//! `setup`, `down` and `teardown` hold an exclusive advisory lock on
//! `.statstack.lock` for their whole run. A second invocation fails at once
//! instead of waiting.

use std::fs;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{StatstackError, StatstackResult};

/// Held lock; released on drop
#[derive(Debug)]
pub struct RunLock {
    file: fs::File,
    path: PathBuf,
}

impl RunLock {
    pub fn acquire(path: &Path) -> StatstackResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(Self {
                file,
                path: path.to_path_buf(),
            }),
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => {
                Err(StatstackError::Locked {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
