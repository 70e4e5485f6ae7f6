//! Environment/runtime helpers
//!
//! Prepares the local filesystem for the embedded SQLite database used in
//! development setups.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

/// Resolve the on-disk file behind a SQLite URL.
///
/// Returns `None` for non-SQLite URLs and for in-memory databases.
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Ensure the parent directory of a SQLite database file exists.
pub async fn ensure_database_dir(url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(url) else {
        debug!("database url is not a sqlite file; nothing to prepare");
        return Ok(());
    };
    let Some(dir) = file.parent().filter(|d| !d.as_os_str().is_empty()) else {
        return Ok(());
    };
    if tokio::fs::metadata(dir).await.is_err() {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", display(dir)))?;
        info!(dir = %self::display(dir), "created embedded database directory");
    }
    Ok(())
}

fn display(p: &Path) -> String {
    p.to_string_lossy().into_owned()
}
