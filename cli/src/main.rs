//! # ActionCLI Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the ActionCLI application.
//! It handles:
//! - Building the command tree from the registered actions
//! - Parsing the command line and the global flags
//! - Setting up the logging system based on `--debug` / `-v`
//! - Executing the selected action and mapping failure to exit code 1
//!
//! ## Architecture
//!
//! - `core`: the framework (action trait, flag contract, command builder, config, errors)
//! - `commands`: the `init`, `deploy` and `up` actions and the bootstrap routine
//! - `common`: collaborators injected into actions (directory service, console)
//!
//! ## Examples
//!
//! ```bash
//! actioncli init -t todo-nodejs-mongo
//! actioncli deploy --service api -e dev
//! actioncli -vv up -t todo-nodejs-mongo --all --no-prompt
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via the command tree
//! 2. Configure logging from the parsed global flags
//! 3. Install the Ctrl+C listener on the action context
//! 4. Execute the selected command and report any error
//!
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod common;
mod core;

use crate::core::context::ActionContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let tree = commands::root(commands::Services::standard());
    // Usage errors, --help and --version exit here with clap's own codes.
    let invocation = tree
        .parse_from(std::env::args_os())
        .unwrap_or_else(|e| e.exit());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(invocation.global().log_level()));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!(
        "Selected command '{}' with global flags {:?}",
        invocation.command_name(),
        invocation.global()
    );

    let ctx = ActionContext::new();
    ctx.cancel_on_interrupt();

    if let Err(e) = invocation.execute(ctx).await {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
