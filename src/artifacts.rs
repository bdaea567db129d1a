//! Discovery of local build artifacts slated for upload.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{LcgError, Result};

/// A local file queued for upload to a release.
#[derive(Debug, Clone)]
pub struct Artifact {
    /// File name used as the asset name on the release.
    pub name: String,
    /// Size in bytes, reported during discovery.
    pub size: u64,
    pub path: PathBuf,
}

/// List the regular files in `dir`, sorted by name for a deterministic
/// upload order. Subdirectories are skipped. A missing directory or an
/// empty result is fatal.
pub fn discover(dir: impl AsRef<Path>) -> Result<Vec<Artifact>> {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        return Err(LcgError::artifacts(format!("{} not found", dir.display())));
    }

    let mut artifacts = vec![];

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let metadata = entry.metadata()?;

        if !metadata.is_file() {
            continue;
        }

        artifacts.push(Artifact {
            name: entry.file_name().to_string_lossy().to_string(),
            size: metadata.len(),
            path: entry.path(),
        });
    }

    if artifacts.is_empty() {
        return Err(LcgError::artifacts(format!(
            "no files found in {}",
            dir.display()
        )));
    }

    artifacts.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(artifacts)
}
