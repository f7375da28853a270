//! Compose manifests: bundled copies and loading

mod bundled;
mod loader;

pub use bundled::{write_missing, BundledFile, BUNDLED};
pub use loader::{load_manifest, parse_manifest};
