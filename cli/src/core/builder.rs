//! # ActionCLI Command Builder
//!
//! File: cli/src/core/builder.rs
//!
//! ## Overview
//!
//! This module turns `(descriptor, injector)` pairs into runnable command
//! nodes and assembles them under a root command.
//!
//! ## Architecture
//!
//! - `build_command`: generic over the action type. At registration it wires
//!   the action's flag struct (`ActionFlags::setup`) and a trailing
//!   positional-args argument into the descriptor. Flags may follow
//!   positionals; everything after a literal `--` passes through verbatim.
//!   At execution it invokes the injector, populates and binds the flags,
//!   and calls `Action::run`.
//! - `CommandTree`: owns the root command and the global flag registration.
//!   `parse_from` selects a node and captures the shared `GlobalFlags`.
//! - `Invocation`: a parsed, not yet executed command. `execute` applies
//!   `--cwd` and runs the node's handler.
//!
//! Each node moves through two states only: registered (flags bound to the
//! clap command) and executing (injector invoked, action running).
//! An injector failure is returned unchanged and the action is never run.
//!
//! ## Examples
//!
//! ```rust
//! let tree = CommandTree::new(Command::new("actioncli"))
//!     .register(build_command(init::command(), move || init::inject(&services)));
//!
//! let invocation = tree.parse_from(["actioncli", "init", "-t", "todo"])?;
//! invocation.execute(ActionContext::new()).await?;
//! ```
//!
use crate::core::{
    action::Action,
    context::ActionContext,
    error::{ActionCliError, Result},
    flags::{ActionFlags, GlobalFlags},
};
use anyhow::anyhow;
use clap::{error::ErrorKind, Arg, ArgMatches, Args, Command, FromArgMatches};
use futures_util::future::{BoxFuture, FutureExt};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::{debug, info};

/// Id of the trailing positional-arguments argument added to every node.
const ARGS_ID: &str = "args";

type Handler =
    Box<dyn Fn(ActionContext, Arc<GlobalFlags>, ArgMatches) -> BoxFuture<'static, Result<()>> + Send + Sync>;

/// A registered command: the clap definition plus its type-erased handler.
pub struct CommandNode {
    command: Command,
    handler: Handler,
}

impl CommandNode {
    pub fn name(&self) -> &str {
        self.command.get_name()
    }
}

/// # Build Command (`build_command`)
///
/// Pairs a command descriptor with an action injector.
///
/// ## Arguments
///
/// * `descriptor`: The clap command (name, about text) for this action.
/// * `injector`: Constructs the action on demand. Invoked once per execution,
///   after parsing, so construction may depend on the working directory and
///   configuration present at run time.
///
/// ## Returns
///
/// * `CommandNode`: the descriptor with the flag struct's options and a
///   trailing `ARGS...` positional registered, and a handler that runs the
///   injected action.
pub fn build_command<A, I>(descriptor: Command, injector: I) -> CommandNode
where
    A: Action + 'static,
    A::Flags: ActionFlags,
    I: Fn() -> Result<A> + Send + Sync + 'static,
{
    let command = <A::Flags as ActionFlags>::setup(descriptor).arg(
        Arg::new(ARGS_ID)
            .value_name("ARGS")
            .help("Arguments passed through to the action")
            .num_args(0..),
    );
    let name = command.get_name().to_string();

    let handler: Handler = Box::new(
        move |ctx: ActionContext, global: Arc<GlobalFlags>, matches: ArgMatches| {
            debug!("Resolving action '{}'", name);
            let action = injector();
            let name = name.clone();
            async move {
                let action = action?;
                let mut flags = <A::Flags as FromArgMatches>::from_arg_matches(&matches)?;
                flags.bind(global);
                let args = positional_args(&matches);
                info!("Running action '{}' with args {:?}", name, args);
                action.run(&ctx, &flags, &args).await
            }
            .boxed()
        },
    );

    CommandNode { command, handler }
}

fn positional_args(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>(ARGS_ID)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// Root of the command tree.
pub struct CommandTree {
    root: Command,
    nodes: Vec<CommandNode>,
}

impl CommandTree {
    /// Creates a tree whose root carries the global flags.
    pub fn new(root: Command) -> Self {
        let root = GlobalFlags::augment_args(root)
            .subcommand_required(true)
            .arg_required_else_help(true);
        Self {
            root,
            nodes: Vec::new(),
        }
    }

    /// Adds a node. Registering the same command name twice is a startup bug
    /// and panics.
    pub fn register(mut self, node: CommandNode) -> Self {
        assert!(
            !self.nodes.iter().any(|n| n.name() == node.name()),
            "command '{}' is registered twice",
            node.name()
        );
        self.nodes.push(node);
        self
    }

    /// The full clap command, root plus every registered node.
    pub fn command(&self) -> Command {
        self.nodes
            .iter()
            .fold(self.root.clone(), |root, node| root.subcommand(node.command.clone()))
    }

    /// # Parse Arguments (`parse_from`)
    ///
    /// Parses `argv` (including the binary name) and selects the node to run.
    /// Has no side effects; `--cwd` is only applied by `Invocation::execute`.
    ///
    /// ## Returns
    ///
    /// * `Ok(Invocation)`: the selected node with its matches and global flags.
    /// * `Err(clap::Error)`: usage errors, and the `--help`/`--version` displays.
    pub fn parse_from<I, T>(&self, argv: I) -> std::result::Result<Invocation<'_>, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = self.command();
        let matches = command.try_get_matches_from_mut(argv)?;

        let Some((name, sub_matches)) = matches.subcommand() else {
            return Err(command.error(ErrorKind::MissingSubcommand, "a command is required"));
        };
        let Some(node) = self.nodes.iter().find(|n| n.name() == name) else {
            return Err(command.error(
                ErrorKind::InvalidSubcommand,
                format!("unrecognized command '{name}'"),
            ));
        };

        // Globals propagate into the subcommand matches wherever they appeared.
        let global = GlobalFlags::from_arg_matches(sub_matches)?;

        Ok(Invocation {
            node,
            global: Arc::new(global),
            matches: sub_matches.clone(),
        })
    }
}

/// A parsed command ready to execute.
pub struct Invocation<'a> {
    node: &'a CommandNode,
    global: Arc<GlobalFlags>,
    matches: ArgMatches,
}

impl Invocation<'_> {
    pub fn command_name(&self) -> &str {
        self.node.name()
    }

    pub fn global(&self) -> &GlobalFlags {
        &self.global
    }

    /// Applies `--cwd`, then runs the selected node's handler.
    pub async fn execute(self, ctx: ActionContext) -> Result<()> {
        let Invocation {
            node,
            global,
            matches,
        } = self;

        if let Some(cwd) = &global.cwd {
            change_working_dir(cwd)?;
        }

        (node.handler)(ctx, global, matches).await
    }
}

/// Expands a leading `~` without round-tripping through UTF-8.
fn expand_working_dir(cwd: &Path) -> PathBuf {
    shellexpand::path::tilde(cwd).into_owned()
}

fn change_working_dir(cwd: &Path) -> Result<()> {
    let expanded = expand_working_dir(cwd);
    std::env::set_current_dir(&expanded).map_err(|e| {
        anyhow!(ActionCliError::DirectoryResolution(format!(
            "cannot change working directory to '{}': {}",
            expanded.display(),
            e
        )))
    })?;
    debug!("Working directory set to {}", expanded.display());
    Ok(())
}
