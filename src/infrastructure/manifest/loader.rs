//! Compose manifest loading

use std::path::Path;

use crate::domain::entities::ComposeManifest;
use crate::domain::ports::FileSystem;
use crate::error::{StatstackError, StatstackResult};

/// Parse manifest text
pub fn parse_manifest(file: &Path, content: &str) -> StatstackResult<ComposeManifest> {
    serde_yaml_ng::from_str(content).map_err(|e| StatstackError::InvalidManifest {
        file: file.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a manifest; `None` when the file does not exist
pub fn load_manifest<FS: FileSystem + ?Sized>(
    fs: &FS,
    path: &Path,
) -> StatstackResult<Option<ComposeManifest>> {
    if !fs.exists(path) {
        return Ok(None);
    }
    let content = fs.read(path).map_err(std::io::Error::from)?;
    parse_manifest(path, &content).map(Some)
}
