//! Output file writing.
//!
//! The bundle is written to a sibling temporary file and renamed over the
//! target, so a reader sees either the previous bundle or the new one in
//! full. Nothing touches the target until the bundler has succeeded.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use tokio::fs;

use crate::error::{Error, Result};

/// Check that `outfile` stays inside `root` once `.`/`..` are resolved.
pub fn validate_output_path(root: &Path, outfile: &Path) -> Result<PathBuf> {
    if outfile.as_os_str().to_string_lossy().contains('\0') {
        return Err(Error::invalid_config("outfile", "contains a null byte"));
    }

    let root = root.clean();
    let full_path = root.join(outfile).clean();

    if !full_path.starts_with(&root) || full_path == root {
        return Err(Error::invalid_config(
            "outfile",
            format!(
                "'{}' escapes the project root '{}'",
                outfile.display(),
                root.display()
            ),
        ));
    }

    Ok(full_path)
}

/// Write `content` to `path`, replacing any existing file atomically.
///
/// Parent directories are created as needed. On failure the temporary file
/// is removed and the previous contents of `path` are left in place.
pub async fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| Error::WriteFailure {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    let temp_path = temp_path_for(path);

    if let Err(source) = fs::write(&temp_path, content).await {
        cleanup_temp_file(&temp_path).await;
        return Err(Error::WriteFailure {
            path: temp_path,
            source,
        });
    }

    if let Err(source) = fs::rename(&temp_path, path).await {
        cleanup_temp_file(&temp_path).await;
        return Err(Error::WriteFailure {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}

/// `index.js` -> `index.js.tmp`, in the same directory so rename stays on one filesystem.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

async fn cleanup_temp_file(temp_path: &Path) {
    if let Err(e) = fs::remove_file(temp_path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(
                "Failed to clean up temporary file '{}': {}",
                temp_path.display(),
                e
            );
        }
    }
}
