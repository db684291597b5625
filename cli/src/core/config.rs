//! # ActionCLI Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the defaults that actions fall back to when a flag is
//! not given on the command line.
//!
//! Configuration sources (in order of precedence):
//! 1. Project `actioncli.toml` in the current directory or an ancestor
//! 2. User `config.toml` in the platform config directory
//!    (e.g. `~/.config/actioncli/config.toml`)
//! 3. Built-in defaults (everything unset)
//!
//! ```toml
//! [defaults]
//! template = "todo-nodejs-mongo"
//! branch = "main"
//! environment = "dev"
//! ```
//!
//! Configuration is loaded by the action injectors, after `--cwd` has been
//! applied, so the project file is looked up relative to the directory the
//! command actually runs in. A file that fails to parse or validate makes the
//! injector fail.
//!
use crate::{
    common::fs::project::{find_project_root, PROJECT_FILE_NAME},
    core::error::{ActionCliError, Result},
};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Fallback values for action flags.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    /// Template used by `init` when `--template` is absent.
    pub template: Option<String>,
    /// Template branch used by `init` when `--branch` is absent.
    pub branch: Option<String>,
    /// Environment used by `deploy` when `--environment` is absent.
    pub environment: Option<String>,
}

/// Loads and merges the user and project configuration for the current directory.
pub fn load_config() -> Result<Config> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    load_config_from(user_config_path().as_deref(), &cwd)
}

/// # Load Config From (`load_config_from`)
///
/// Loads the user file at `user_path` (if given and present) and the project
/// file found by searching upward from `start_dir`, merges them and validates
/// the result.
pub fn load_config_from(user_path: Option<&Path>, start_dir: &Path) -> Result<Config> {
    let user = match user_path {
        Some(path) if path.is_file() => {
            info!("Loading user configuration from: {}", path.display());
            Some(load_config_from_path(path)?)
        }
        _ => None,
    };

    let project = match find_project_root(start_dir) {
        Some(root) => {
            let path = root.join(PROJECT_FILE_NAME);
            info!("Loading project configuration from: {}", path.display());
            Some(load_config_from_path(&path)?)
        }
        None => {
            debug!("No {} found from {}", PROJECT_FILE_NAME, start_dir.display());
            None
        }
    };

    let merged = merge_configs(user.unwrap_or_default(), project);
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "ActionCLI", "actioncli")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win field by field; unset project fields keep the user value.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    Config {
        defaults: Defaults {
            template: project.defaults.template.or(user.defaults.template),
            branch: project.defaults.branch.or(user.defaults.branch),
            environment: project.defaults.environment.or(user.defaults.environment),
        },
    }
}

fn validate_config(config: &Config) -> Result<()> {
    let fields = [
        ("defaults.template", &config.defaults.template),
        ("defaults.branch", &config.defaults.branch),
        ("defaults.environment", &config.defaults.environment),
    ];
    for (name, value) in fields {
        if matches!(value, Some(v) if v.trim().is_empty()) {
            return Err(anyhow!(ActionCliError::Config(format!(
                "{} must not be blank",
                name
            ))));
        }
    }
    Ok(())
}
