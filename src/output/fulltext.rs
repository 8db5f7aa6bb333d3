//! Per-bill full-text files

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Write one bill's captured text to `<dir>/<stem>.txt`, creating the
/// directory on demand, and return the path written.
///
/// `stem` must already be filesystem-safe (see
/// `utils::string_utils::safe_file_stem`); this function only joins and
/// writes.
pub async fn save_full_text(dir: &Path, stem: &str, text: &str) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("creating full-text directory {}", dir.display()))?;

    let path = dir.join(format!("{stem}.txt"));
    tokio::fs::write(&path, text)
        .await
        .with_context(|| format!("writing {}", path.display()))?;

    Ok(path)
}
