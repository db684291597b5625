//! # ActionCLI Action Trait
//!
//! File: cli/src/core/action.rs
//!
//! An `Action` is the unit of business logic bound to one command. The
//! associated `Flags` type ties each action to the flag struct the command
//! builder populates for it. Composite actions hold other actions as
//! `Box<dyn Action<Flags = ...>>` and call them in sequence.
//!
use crate::core::{context::ActionContext, error::Result};
use async_trait::async_trait;

#[async_trait]
pub trait Action: Send + Sync {
    type Flags: Send + Sync;

    /// Runs the action with its populated flags and the residual positional
    /// arguments. Returns the first error encountered.
    async fn run(&self, ctx: &ActionContext, flags: &Self::Flags, args: &[String]) -> Result<()>;
}
