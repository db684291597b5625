//! # ActionCLI Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the ActionCLI application.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ActionCliError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! Errors fall into three groups:
//! - Injection errors, raised when an action cannot be constructed. The command
//!   builder returns them unchanged and the action never runs.
//! - Run errors (invalid flag combinations, directory resolution, cancellation),
//!   raised by actions and propagated through composite actions.
//! - Configuration errors, raised while loading or validating `actioncli.toml`.
//!
//! Flag registration conflicts are not represented here: clap panics while the
//! command tree is assembled, which is a startup bug rather than a runtime error.
//!
//! ## Examples
//!
//! ```rust
//! if flags.all && flags.service.is_some() {
//!     return Err(anyhow!(ActionCliError::InvalidFlags(
//!         "cannot specify both --all and --service".into()
//!     )));
//! }
//!
//! // Pattern matching on error types
//! match result {
//!     Err(e) if e.downcast_ref::<ActionCliError>().map_or(false, |ae| matches!(ae, ActionCliError::Cancelled { .. })) => {
//!         println!("Interrupted.");
//!     }
//!     other => other?,
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the ActionCLI application.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ActionCliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("failed resolving action '{action}': {reason}")]
    Injection { action: String, reason: String },

    #[error("Invalid flags: {0}")]
    InvalidFlags(String),

    #[error("Directory resolution failed: {0}")]
    DirectoryResolution(String),

    #[error("Operation cancelled before step '{step}'")]
    Cancelled { step: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
