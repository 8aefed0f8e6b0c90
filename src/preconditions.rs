use std::path::{Path, PathBuf};

use crate::error::{QaTagError, Result};

/// Repository marker expected in the working directory.
///
/// A directory in a normal clone, a file in a worktree or submodule.
pub const REPOSITORY_MARKER: &str = ".git";

/// Checks that `workdir` is a repository root and holds the manifest.
///
/// # Returns
/// * `Ok(PathBuf)` - Full path to the manifest
/// * `Err(NotARepository)` - If there is no `.git` in `workdir`
/// * `Err(ManifestMissing)` - If the manifest file does not exist
pub fn check(workdir: &Path, manifest: &str) -> Result<PathBuf> {
    if !workdir.join(REPOSITORY_MARKER).exists() {
        return Err(QaTagError::NotARepository(workdir.display().to_string()));
    }

    let manifest_path = workdir.join(manifest);
    if !manifest_path.is_file() {
        return Err(QaTagError::ManifestMissing(
            manifest_path.display().to_string(),
        ));
    }

    Ok(manifest_path)
}
