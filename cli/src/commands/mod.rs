//! # ActionCLI Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module declares the commands of the ActionCLI and the bootstrap
//! routine that wires them into a `CommandTree`.
//!
//! ## Architecture
//!
//! Each command module provides three things:
//! - a flag struct implementing `ActionFlags`
//! - a `command()` descriptor and an `inject(&Services)` constructor
//! - an action implementing `Action`
//!
//! `root` pairs every descriptor with its injector through `build_command`.
//! Injectors are plain constructor functions: nothing is generated, and the
//! only shared state they see is the `Services` bundle.
//!
//! ## Commands
//!
//! - `init`: initialize a project from a template
//! - `deploy`: deploy one or all services
//! - `up`: `init` followed by `deploy`
//!
use crate::{
    common::{
        fs::project::{DirectoryService, WorkingDirectoryService},
        ui::console::{Console, StdConsole},
    },
    core::{
        builder::{build_command, CommandTree},
        config::{self, Config},
        error::{ActionCliError, Result},
    },
};
use anyhow::anyhow;
use clap::Command;
use std::sync::Arc;

/// Command for deploying one or all services.
pub mod deploy;
/// Command for initializing a project from a template.
pub mod init;
/// Composite command running `init` then `deploy`.
pub mod up;

/// Collaborators shared by every injector.
#[derive(Clone)]
pub struct Services {
    pub directories: Arc<dyn DirectoryService>,
    pub console: Arc<dyn Console>,
}

impl Services {
    /// Services backed by the process working directory and stdout.
    pub fn standard() -> Self {
        Self {
            directories: Arc::new(WorkingDirectoryService),
            console: Arc::new(StdConsole),
        }
    }
}

/// # Build Root Command Tree (`root`)
///
/// Registers `init`, `deploy` and `up` under the `actioncli` root command.
pub fn root(services: Services) -> CommandTree {
    let init_services = services.clone();
    let deploy_services = services.clone();
    let up_services = services;

    CommandTree::new(
        Command::new("actioncli")
            .about("Compose and run injected CLI actions")
            .version(clap::crate_version!())
            .propagate_version(true),
    )
    .register(build_command(init::command(), move || {
        init::inject(&init_services)
    }))
    .register(build_command(deploy::command(), move || {
        deploy::inject(&deploy_services)
    }))
    .register(build_command(up::command(), move || up::inject(&up_services)))
}

/// Loads configuration on behalf of an injector, reporting failures as
/// injection errors for `action`.
pub(crate) fn load_injected_config(action: &str) -> Result<Config> {
    config::load_config().map_err(|e| {
        anyhow!(ActionCliError::Injection {
            action: action.to_string(),
            reason: format!("{:#}", e),
        })
    })
}
