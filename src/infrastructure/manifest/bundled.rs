//! Manifests and service configs shipped with the binary
//!
//! Written into the stack directory when missing. Existing files are the
//! operator's and are never overwritten.

use std::path::PathBuf;

use crate::domain::entities::layout::{PRIMARY_MANIFEST, SUBSTACK_MANIFEST};
use crate::domain::entities::StackLayout;
use crate::domain::ports::{FileSystem, FsResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundledFile {
    pub path: &'static str,
    pub content: &'static str,
}

pub const BUNDLED: [BundledFile; 4] = [
    BundledFile {
        path: PRIMARY_MANIFEST,
        content: include_str!("../../../stack/docker-compose.yml"),
    },
    BundledFile {
        path: SUBSTACK_MANIFEST,
        content: include_str!("../../../stack/docker-compose.openreplay.yml"),
    },
    BundledFile {
        path: "loki/loki-config.yml",
        content: include_str!("../../../stack/loki/loki-config.yml"),
    },
    BundledFile {
        path: "promtail/promtail-config.yml",
        content: include_str!("../../../stack/promtail/promtail-config.yml"),
    },
];

/// Write every bundled file that is absent; returns the paths written
pub fn write_missing<FS: FileSystem + ?Sized>(
    fs: &FS,
    layout: &StackLayout,
) -> FsResult<Vec<PathBuf>> {
    let mut written = Vec::new();
    for file in BUNDLED {
        let path = layout.path(file.path);
        if fs.exists(&path) {
            continue;
        }
        fs.write(&path, file.content)?;
        written.push(path);
    }
    Ok(written)
}
