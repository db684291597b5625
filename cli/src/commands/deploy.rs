//! # ActionCLI Deploy Command
//!
//! File: cli/src/commands/deploy.rs
//!
//! ## Overview
//!
//! `actioncli deploy` targets either one service (`--service`) or every
//! service of the project (`--all`, or no selection at all). The action
//! reports the target, environment and arguments; the deployment itself
//! belongs to an external collaborator.
//!
//! ```bash
//! actioncli deploy --service api -e dev
//! actioncli deploy --all
//! ```
//!
use crate::{
    commands::{load_injected_config, Services},
    common::{fs::project::DirectoryService, ui::console::Console},
    core::{
        action::Action,
        config::Config,
        context::ActionContext,
        error::{ActionCliError, Result},
        flags::{ActionFlags, GlobalFlags},
    },
};
use anyhow::anyhow;
use async_trait::async_trait;
use clap::{Args, Command};
use std::sync::Arc;
use tracing::info;

/// Flags for `actioncli deploy`.
#[derive(Args, Debug, Clone, Default)]
pub struct DeployFlags {
    /// Deploys a specific service (all services when unspecified).
    #[arg(long)]
    pub service: Option<String>,

    /// Deploys all services listed in the project.
    #[arg(long)]
    pub all: bool,

    /// The name of the environment to use.
    #[arg(short, long, env = "ACTIONCLI_ENV")]
    pub environment: Option<String>,

    #[arg(skip)]
    pub(crate) global: Arc<GlobalFlags>,
}

impl ActionFlags for DeployFlags {
    fn bind(&mut self, global: Arc<GlobalFlags>) {
        self.global = global;
    }

    fn global(&self) -> &GlobalFlags {
        &self.global
    }
}

/// Command descriptor for `deploy`.
pub fn command() -> Command {
    Command::new("deploy").about("Deploy the application's code.")
}

/// Constructs a `DeployAction` from the shared services and the loaded configuration.
pub fn inject(services: &Services) -> Result<DeployAction> {
    let config = load_injected_config("deploy")?;
    Ok(DeployAction::new(
        Arc::clone(&services.directories),
        Arc::clone(&services.console),
        config,
    ))
}

pub struct DeployAction {
    directories: Arc<dyn DirectoryService>,
    console: Arc<dyn Console>,
    config: Config,
}

impl DeployAction {
    pub fn new(
        directories: Arc<dyn DirectoryService>,
        console: Arc<dyn Console>,
        config: Config,
    ) -> Self {
        Self {
            directories,
            console,
            config,
        }
    }
}

#[async_trait]
impl Action for DeployAction {
    type Flags = DeployFlags;

    async fn run(&self, _ctx: &ActionContext, flags: &DeployFlags, args: &[String]) -> Result<()> {
        if flags.all && flags.service.is_some() {
            return Err(anyhow!(ActionCliError::InvalidFlags(
                "cannot specify both --all and --service".to_string()
            )));
        }

        let target = match &flags.service {
            Some(service) => format!("service '{}'", service),
            None => "all services".to_string(),
        };
        let environment = flags
            .environment
            .clone()
            .or_else(|| self.config.defaults.environment.clone());

        let project_dir = self.directories.project_dir()?;
        info!("Deploying {} (environment: {:?})", target, environment);

        self.console.message(&format!(
            "Deploying {} from {}",
            target,
            project_dir.display()
        ));
        self.console.message(&format!(
            "  environment: {}",
            environment.as_deref().unwrap_or("(default)")
        ));
        self.console
            .message(&format!("  no-prompt:   {}", flags.global().no_prompt));
        self.console.message(&format!("  args:        {:?}", args));
        Ok(())
    }
}
