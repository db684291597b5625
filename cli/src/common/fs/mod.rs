//! # ActionCLI Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers shared by the actions and the configuration loader.
//!
//! - **`project`**: Locates the project root (the nearest ancestor holding
//!   `actioncli.toml`) and defines the `DirectoryService` collaborator that
//!   actions receive through injection.
//!
//! ```rust
//! use crate::common::fs::project::{DirectoryService, WorkingDirectoryService};
//!
//! let dirs = WorkingDirectoryService;
//! let root = dirs.project_dir()?;
//! ```
//!

/// Project root discovery and the `DirectoryService` trait.
pub mod project;
