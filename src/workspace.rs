//! Artifacts workspace provisioning for finetuning runs

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Checkpoint directory name under the artifacts root
const CHECKPOINTS_DIR: &str = "checkpoints";

/// Resolved artifact directories for a finetuning run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Workspace root holding datasets, checkpoints, and run outputs
    pub root: PathBuf,
    /// Directory the trainer saves checkpoints into
    pub checkpoints: PathBuf,
}

impl ArtifactPaths {
    /// Compute the directory layout under `root` without touching the filesystem.
    pub fn under(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            checkpoints: root.join(CHECKPOINTS_DIR),
        }
    }

    /// Ensure both directories exist, creating missing parents.
    ///
    /// Idempotent: directories that already exist are left as they are and a
    /// repeat call succeeds. Filesystem failures propagate to the caller.
    pub fn provision(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::create_dir_all(&self.checkpoints)?;
        Ok(())
    }
}

/// Default artifacts root: `~/brawn_artifacts`, falling back to a relative
/// path when no home directory can be resolved.
pub fn default_artifacts_root() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join("brawn_artifacts"))
        .unwrap_or_else(|| PathBuf::from("brawn_artifacts"))
}
