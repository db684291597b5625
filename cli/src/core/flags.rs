//! # ActionCLI Flag Structs
//!
//! File: cli/src/core/flags.rs
//!
//! ## Overview
//!
//! Every action is paired with a typed flag struct. Flag structs derive
//! `clap::Args`, which gives them a registration step (`setup`) that adds
//! their options to a `clap::Command`. After parsing, the command builder
//! populates the struct from the matches and calls `bind` to hand it the
//! shared `GlobalFlags` of the invocation.
//!
//! Composite flag structs (see `UpFlags`) embed other flag structs with
//! `#[command(flatten)]`. Their `setup` registers each embedded struct in turn
//! and their `bind` forwards the same `Arc<GlobalFlags>` to each one, so every
//! nested view of the global options points at the same instance.
//!
//! Two embedded structs declaring the same flag name trip clap's debug
//! assertions when the tree is built. That is a startup bug, never a runtime
//! error.
//!
use clap::{ArgAction, Args, Command};
use std::{path::PathBuf, sync::Arc};

/// Options shared by every command of one invocation.
///
/// Registered on the root command with `global = true`, so they may appear
/// before or after the subcommand name.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalFlags {
    /// Accepts the default value instead of prompting.
    #[arg(long, global = true)]
    pub no_prompt: bool,

    /// Sets the current working directory before running the command.
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Enables debug logging.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Increases log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl GlobalFlags {
    /// Log level implied by `--debug` and the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match (self.debug, self.verbose) {
            (_, n) if n >= 3 => "trace",
            (true, _) | (_, 2) => "debug",
            (_, 1) => "info",
            _ => "warn",
        }
    }
}

/// Contract implemented by every per-action flag struct.
pub trait ActionFlags: Args + Send + Sync + 'static {
    /// Registers this struct's options on `registry`.
    fn setup(registry: Command) -> Command {
        Self::augment_args(registry)
    }

    /// Stores the shared global flags for later reads.
    fn bind(&mut self, global: Arc<GlobalFlags>);

    fn global(&self) -> &GlobalFlags;
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::FromArgMatches;

    #[test]
    fn test_log_level_mapping() {
        let mut flags = GlobalFlags::default();
        assert_eq!(flags.log_level(), "warn");
        flags.verbose = 1;
        assert_eq!(flags.log_level(), "info");
        flags.verbose = 2;
        assert_eq!(flags.log_level(), "debug");
        flags.verbose = 5;
        assert_eq!(flags.log_level(), "trace");
        flags.verbose = 0;
        flags.debug = true;
        assert_eq!(flags.log_level(), "debug");
    }

    #[test]
    fn test_globals_parse_after_subcommand() {
        let cmd = GlobalFlags::augment_args(Command::new("root"))
            .subcommand(Command::new("init"));
        let matches = cmd
            .try_get_matches_from(["root", "init", "--no-prompt", "-C", "/tmp", "-vv"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        let global = GlobalFlags::from_arg_matches(sub).unwrap();

        assert!(global.no_prompt);
        assert_eq!(global.cwd, Some(PathBuf::from("/tmp")));
        assert_eq!(global.verbose, 2);
        assert!(!global.debug);
    }
}
