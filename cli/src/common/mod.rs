//! # ActionCLI Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared collaborators used by the actions, kept apart from the command
//! wiring (`commands::`) and the framework infrastructure (`core::`).
//!
//! - **`fs`**: project directory discovery and the `DirectoryService` trait.
//! - **`ui`**: the `Console` trait actions write their output through.
//!

/// Filesystem utilities (project root discovery).
pub mod fs;
/// Terminal output.
pub mod ui;
