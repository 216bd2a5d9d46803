//! Package-relative data file resolution.
//!
//! Dataset definitions refer to data files by paths relative to the package
//! root (e.g. `datasets_in_progress/topics.xml`). Resolution handles the
//! environments the crate runs in:
//!
//! - Custom: `$IRANTHOLOGY_DATA_DIR` environment variable
//! - Development: workspace root derived from `CARGO_MANIFEST_DIR`
//! - Distribution: relative to the executable

use std::path::{Path, PathBuf};

/// Environment variable overriding the package data root.
pub const DATA_DIR_ENV: &str = "IRANTHOLOGY_DATA_DIR";

/// A data file addressed relative to the package root.
///
/// Construction stores only the relative path; [`PackageDataFile::resolve`]
/// picks a base directory at access time and never touches the filesystem
/// beyond existence probes. A file that exists nowhere resolves to the
/// development location so that the eventual open error names a real path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDataFile {
    relative: PathBuf,
}

impl PackageDataFile {
    /// Creates a data file reference from a package-relative path.
    pub fn new(relative: impl Into<PathBuf>) -> Self {
        Self {
            relative: relative.into(),
        }
    }

    /// The package-relative path as given.
    pub fn relative_path(&self) -> &Path {
        &self.relative
    }

    /// Resolves the file against the package data root.
    ///
    /// Search order:
    /// 1. `$IRANTHOLOGY_DATA_DIR`
    /// 2. Workspace root (development; `CARGO_MANIFEST_DIR` is
    ///    `crates/iranthology-core`, the package root is two levels up)
    /// 3. The executable's directory (distribution)
    ///
    /// The first base under which the file exists wins. If it exists under
    /// none, the workspace-root candidate is returned so error messages
    /// point at the expected development location.
    pub fn resolve(&self) -> PathBuf {
        let mut fallback = None;

        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            let candidate = PathBuf::from(dir).join(&self.relative);
            if candidate.exists() {
                return candidate;
            }
            fallback = Some(candidate);
        }

        let workspace = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .and_then(|p| p.parent())
            .map(|p| p.join(&self.relative));
        if let Some(ref candidate) = workspace {
            if candidate.exists() {
                return candidate.clone();
            }
        }

        if let Ok(exe) = std::env::current_exe() {
            if let Some(exe_dir) = exe.parent() {
                let candidate = exe_dir.join(&self.relative);
                if candidate.exists() {
                    return candidate;
                }
            }
        }

        fallback
            .or(workspace)
            .unwrap_or_else(|| self.relative.clone())
    }
}

impl From<&str> for PackageDataFile {
    fn from(relative: &str) -> Self {
        Self::new(relative)
    }
}
