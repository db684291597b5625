//! # ActionCLI Init Command
//!
//! File: cli/src/commands/init.rs
//!
//! ## Overview
//!
//! `actioncli init` prepares a project from a template. The action resolves
//! the project directory and reports the template, branch and arguments it
//! would initialize with; the template fetch itself belongs to an external
//! collaborator.
//!
//! ## Flags
//!
//! - `-t, --template <TEMPLATE>`: template name, falls back to `defaults.template`
//! - `-b, --branch <BRANCH>`: template branch, falls back to `defaults.branch`
//!
//! A branch given on the command line with no template from either source is
//! rejected.
//!
//! ```bash
//! actioncli init -t todo-nodejs-mongo
//! actioncli init -t todo-python-mongo -b main --no-prompt
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
use tracing::{debug, info};

/// Flags for `actioncli init`.
#[derive(Args, Debug, Clone, Default)]
pub struct InitFlags {
    /// The template to use when you initialize the project.
    #[arg(short, long)]
    pub template: Option<String>,

    /// The template branch to initialize from.
    #[arg(short, long)]
    pub branch: Option<String>,

    #[arg(skip)]
    pub(crate) global: Arc<GlobalFlags>,
}

impl ActionFlags for InitFlags {
    fn bind(&mut self, global: Arc<GlobalFlags>) {
        self.global = global;
    }

    fn global(&self) -> &GlobalFlags {
        &self.global
    }
}

/// Command descriptor for `init`.
pub fn command() -> Command {
    Command::new("init")
        .about("Initialize a new application.")
        .long_about(
            "Initialize a new application.\n\n\
             When a template is supplied (or configured in actioncli.toml), the project \
             is initialized from it. Otherwise the current project directory is prepared as-is.",
        )
}

/// Constructs an `InitAction` from the shared services and the loaded configuration.
pub fn inject(services: &Services) -> Result<InitAction> {
    let config = load_injected_config("init")?;
    Ok(InitAction::new(
        Arc::clone(&services.directories),
        Arc::clone(&services.console),
        config,
    ))
}

pub struct InitAction {
    directories: Arc<dyn DirectoryService>,
    console: Arc<dyn Console>,
    config: Config,
}

impl InitAction {
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
impl Action for InitAction {
    type Flags = InitFlags;

    async fn run(&self, _ctx: &ActionContext, flags: &InitFlags, args: &[String]) -> Result<()> {
        let template = flags
            .template
            .clone()
            .or_else(|| self.config.defaults.template.clone());

        if flags.branch.is_some() && template.is_none() {
            return Err(anyhow!(ActionCliError::InvalidFlags(
                "template name required when specifying a branch name".to_string()
            )));
        }
        // A configured branch only means something alongside a template.
        let branch = match &template {
            Some(_) => flags
                .branch
                .clone()
                .or_else(|| self.config.defaults.branch.clone()),
            None => None,
        };

        let project_dir = self.directories.project_dir()?;
        info!(
            "Initializing {} (template: {:?}, branch: {:?})",
            project_dir.display(),
            template,
            branch
        );
        debug!("init global flags: {:?}", flags.global());

        self.console
            .message(&format!("Initializing project in {}", project_dir.display()));
        self.console.message(&format!(
            "  template:  {}",
            template.as_deref().unwrap_or("(none)")
        ));
        self.console.message(&format!(
            "  branch:    {}",
            branch.as_deref().unwrap_or("(default)")
        ));
        self.console
            .message(&format!("  no-prompt: {}", flags.global().no_prompt));
        self.console.message(&format!("  args:      {:?}", args));
        Ok(())
    }
}
