//! Project materialization
//!
//! [`materialize`] turns a configuration into files through a [`Storage`]
//! backend:
//!
//! 1. Fail with `TargetExists` if the target root is present (nothing written)
//! 2. Create the directory skeleton
//! 3. Write every planned artifact in plan order
//!
//! A storage failure aborts the run; files already written stay on disk.

pub mod plan;
pub mod storage;

use crate::config::ProjectConfig;
use crate::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};

pub use plan::{plan, FileArtifact, GenerationPlan};
pub use storage::{LocalStorage, MemoryStorage, Storage, StorageOp};

/// What a run created (or, for a preview, would create)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Absolute or invocation-relative project root
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub artifacts: Vec<FileArtifact>,
}

impl GenerationReport {
    fn new(root: PathBuf, plan: GenerationPlan) -> Self {
        Self {
            root,
            directories: plan.directories,
            artifacts: plan.artifacts,
        }
    }

    /// Relative paths of every file, in write order
    pub fn file_paths(&self) -> impl Iterator<Item = &Path> {
        self.artifacts.iter().map(|a| a.path.as_path())
    }
}

/// Project root for `config` under `invocation_root`
pub fn target_root(config: &ProjectConfig, invocation_root: &Path) -> PathBuf {
    invocation_root.join(config.name())
}

fn ensure_absent<S: Storage + ?Sized>(root: &Path, storage: &S) -> Result<()> {
    if storage.exists(root) {
        return Err(ScaffoldError::TargetExists(root.to_path_buf()));
    }
    Ok(())
}

/// Plan the run and check the target, without writing anything
pub fn preview<S: Storage + ?Sized>(
    config: &ProjectConfig,
    invocation_root: &Path,
    storage: &S,
) -> Result<GenerationReport> {
    let root = target_root(config, invocation_root);
    ensure_absent(&root, storage)?;
    Ok(GenerationReport::new(root, plan(config)?))
}

/// Generate the project under `invocation_root/<name>`
pub fn materialize<S: Storage + ?Sized>(
    config: &ProjectConfig,
    invocation_root: &Path,
    storage: &S,
) -> Result<GenerationReport> {
    let root = target_root(config, invocation_root);
    ensure_absent(&root, storage)?;

    // Render everything before the first write so a rendering error leaves no trace
    let plan = plan(config)?;

    for dir in &plan.directories {
        let path = root.join(dir);
        storage
            .create_dir_all(&path)
            .map_err(|e| ScaffoldError::storage(&path, e))?;
    }

    for artifact in &plan.artifacts {
        let path = root.join(&artifact.path);
        storage
            .write(&path, &artifact.contents)
            .map_err(|e| ScaffoldError::storage(&path, e))?;
    }

    Ok(GenerationReport::new(root, plan))
}
