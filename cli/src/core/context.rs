//! # ActionCLI Execution Context
//!
//! File: cli/src/core/context.rs
//!
//! ## Overview
//!
//! `ActionContext` is handed to every `Action::run` call. It carries the
//! cancellation state for the current invocation: a shared flag that the
//! Ctrl+C listener sets and that actions may check between steps.
//! Leaf actions are free to ignore it; composite actions consult it before
//! starting each constituent step. A second Ctrl+C exits immediately.
//!
use crate::core::error::{ActionCliError, Result};
use anyhow::anyhow;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tracing::{error, info, warn};

/// Exit status after a repeated Ctrl+C (128 + SIGINT).
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Cancellation-bearing context shared by all actions of one invocation.
#[derive(Debug, Clone, Default)]
pub struct ActionContext {
    cancelled: Arc<AtomicBool>,
}

impl ActionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// # Ensure Active (`ensure_active`)
    ///
    /// Returns `ActionCliError::Cancelled` naming `step` if cancellation has
    /// been requested, `Ok(())` otherwise.
    pub fn ensure_active(&self, step: &str) -> Result<()> {
        if self.is_cancelled() {
            return Err(anyhow!(ActionCliError::Cancelled {
                step: step.to_string(),
            }));
        }
        Ok(())
    }

    /// Requests cancellation, visible to every clone of this context.
    /// Returns `true` when cancellation had already been requested.
    pub fn interrupt(&self) -> bool {
        self.cancelled.swap(true, Ordering::SeqCst)
    }

    /// Spawns a background task listening for Ctrl+C. The first press cancels
    /// this context so composite actions stop before their next step; a second
    /// press exits the process with status 130.
    /// Must be called from within a tokio runtime.
    pub fn cancel_on_interrupt(&self) {
        let ctx = self.clone();
        tokio::spawn(async move {
            loop {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    error!("Failed to install Ctrl+C handler: {}", e);
                    return;
                }
                if ctx.interrupt() {
                    warn!("Received second Ctrl+C, exiting.");
                    std::process::exit(INTERRUPTED_EXIT_CODE);
                }
                info!("Received Ctrl+C, cancelling remaining steps (press again to exit)...");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_is_active() {
        let ctx = ActionContext::new();
        assert!(!ctx.is_cancelled());
        assert!(ctx.ensure_active("init").is_ok());
    }

    #[test]
    fn test_cancel_is_shared_across_clones() {
        let ctx = ActionContext::new();
        let clone = ctx.clone();
        clone.interrupt();

        assert!(ctx.is_cancelled());
        let err = ctx.ensure_active("deploy").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ActionCliError>(),
            Some(&ActionCliError::Cancelled {
                step: "deploy".into()
            })
        );
    }

    #[test]
    fn test_second_interrupt_is_reported_as_repeat() {
        let ctx = ActionContext::new();
        assert!(!ctx.interrupt());
        assert!(ctx.is_cancelled());
        assert!(ctx.interrupt());
    }
}
