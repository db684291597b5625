//! # ActionCLI Project Directory Resolution
//!
//! File: cli/src/common/fs/project.rs
//!
//! ## Overview
//!
//! A project is a directory containing an `actioncli.toml` file. Commands may
//! be run from any subdirectory: the search walks up from the starting
//! directory and stops at the first project file, or gives up at the first
//! directory holding a `.git` folder (the repository boundary).
//!
//! Actions never call these functions directly. They receive an
//! `Arc<dyn DirectoryService>` from their injector, which lets tests substitute
//! a fixed directory.
//!
use crate::core::error::{ActionCliError, Result};
use anyhow::anyhow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name marking a project root. Also the project-level configuration file.
pub const PROJECT_FILE_NAME: &str = "actioncli.toml";

/// Resolves the directory an action operates on.
pub trait DirectoryService: Send + Sync {
    fn project_dir(&self) -> Result<PathBuf>;
}

/// Resolves the project directory from the process working directory.
///
/// Falls back to the working directory itself when no project file is found,
/// so `init` can run in an empty folder.
#[derive(Debug, Default, Clone, Copy)]
pub struct WorkingDirectoryService;

impl DirectoryService for WorkingDirectoryService {
    fn project_dir(&self) -> Result<PathBuf> {
        let cwd = std::env::current_dir().map_err(|e| {
            anyhow!(ActionCliError::DirectoryResolution(format!(
                "cannot read current directory: {}",
                e
            )))
        })?;
        Ok(find_project_root(&cwd).unwrap_or(cwd))
    }
}

/// # Find Project Root (`find_project_root`)
///
/// Walks from `start` towards the filesystem root looking for `PROJECT_FILE_NAME`.
///
/// ## Returns
///
/// * `Some(dir)`: the first ancestor (including `start`) containing the project file.
/// * `None`: a `.git` directory or the filesystem root was reached first.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        if dir.join(PROJECT_FILE_NAME).is_file() {
            debug!("Found project file in {}", dir.display());
            return Some(dir.to_path_buf());
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

/// Directory service returning a fixed path. Test-only.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct StaticDirectoryService(pub PathBuf);

#[cfg(test)]
impl DirectoryService for StaticDirectoryService {
    fn project_dir(&self) -> Result<PathBuf> {
        Ok(self.0.clone())
    }
}
