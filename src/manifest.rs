//! Reading the project version from a manifest file.
//!
//! JSON manifests (`package.json`) carry a top-level `version` string; TOML
//! manifests (`Cargo.toml`) carry `package.version`, or a top-level `version`.

use std::fs;
use std::path::Path;

use crate::error::{QaTagError, Result};

/// Version string read from the project manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectVersion(String);

impl ProjectVersion {
    /// Wraps a version string, returning `None` when it is blank.
    pub fn new(version: impl Into<String>) -> Option<Self> {
        let version = version.into();
        if version.trim().is_empty() {
            None
        } else {
            Some(ProjectVersion(version.trim().to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the version parses as semantic versioning.
    pub fn is_semver(&self) -> bool {
        semver::Version::parse(&self.0).is_ok()
    }
}

impl std::fmt::Display for ProjectVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Manifest syntax, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    Json,
    Toml,
}

impl ManifestKind {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ManifestKind::Toml,
            _ => ManifestKind::Json,
        }
    }
}

/// Reads the manifest at `path` and returns its version.
///
/// # Returns
/// * `Ok(ProjectVersion)` - The non-empty version string
/// * `Err(ManifestMissing)` - If the file does not exist
/// * `Err(MissingVersionField)` - If the version is absent, empty or not a string
/// * `Err(Manifest)` - If the file cannot be parsed
pub fn read_version(path: &Path) -> Result<ProjectVersion> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => QaTagError::ManifestMissing(path.display().to_string()),
        _ => QaTagError::Io(e),
    })?;
    let version = match ManifestKind::from_path(path) {
        ManifestKind::Json => json_version(&contents),
        ManifestKind::Toml => toml_version(&contents),
    }
    .map_err(|e| QaTagError::manifest(format!("{}: {}", path.display(), e)))?;

    version
        .and_then(ProjectVersion::new)
        .ok_or_else(|| QaTagError::MissingVersionField(path.display().to_string()))
}

fn json_version(contents: &str) -> std::result::Result<Option<String>, String> {
    let value: serde_json::Value = serde_json::from_str(contents).map_err(|e| e.to_string())?;

    Ok(value
        .get("version")
        .and_then(|v| v.as_str())
        .map(str::to_string))
}

fn toml_version(contents: &str) -> std::result::Result<Option<String>, String> {
    let value: toml::Table = toml::from_str(contents).map_err(|e| e.to_string())?;

    let version = value
        .get("package")
        .and_then(|package| package.get("version"))
        .or_else(|| value.get("version"))
        .and_then(|v| v.as_str())
        .map(str::to_string);

    Ok(version)
}
