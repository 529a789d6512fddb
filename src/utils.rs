//! Utility functions for writing rendered pages

use crate::error::{Error, Result};
use crate::types::RenderedPage;
use std::path::{Path, PathBuf};

/// Create the output directory (and any missing parents)
pub async fn ensure_output_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| Error::Write {
            path: dir.to_path_buf(),
            source,
        })
}

/// Write a rendered page into `dir`, replacing any previous version
///
/// Writes are not atomic: an interrupted run may leave a truncated page,
/// which the next run overwrites.
///
/// # Returns
///
/// The full path of the written file
pub async fn write_page(dir: &Path, page: &RenderedPage) -> Result<PathBuf> {
    let path = dir.join(&page.file_name);
    tokio::fs::write(&path, page.html.as_bytes())
        .await
        .map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
    tracing::debug!(path = %path.display(), bytes = page.html.len(), "Wrote page");
    Ok(path)
}
