//! # ActionCLI Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the framework pieces every command is built from.
//!
//! ## Architecture
//!
//! - `action`: the `Action` trait (`run(ctx, flags, args)`)
//! - `flags`: `GlobalFlags` and the `ActionFlags` contract for per-action flag structs
//! - `builder`: `build_command`, `CommandTree` and `Invocation`
//! - `context`: `ActionContext`, the cancellation state passed to actions
//! - `config`: loading of `actioncli.toml` defaults
//! - `error`: `ActionCliError` and the `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::action::Action;
//! use crate::core::builder::{build_command, CommandTree};
//! use crate::core::error::{ActionCliError, Result};
//! ```
//!
pub mod action;
pub mod builder;
pub mod config;
pub mod context;
pub mod error;
pub mod flags;
