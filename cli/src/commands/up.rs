//! # ActionCLI Up Command
//!
//! File: cli/src/commands/up.rs
//!
//! ## Overview
//!
//! `actioncli up` is a composite command: it runs `init` and then `deploy`
//! with the flags of both commands available on one command line.
//!
//! ## Workflow
//!
//! 1. Check the context for cancellation, then run the init action with `flags.init`.
//! 2. Check the context again, then run the deploy action with `flags.deploy`.
//!
//! Both steps receive the same positional arguments. The first failure stops
//! the sequence: deploy is never started after a failed init. Nothing is
//! rolled back when deploy fails after a successful init.
//!
//! ```bash
//! actioncli up -t todo-nodejs-mongo --service api --no-prompt
//! ```
//!
use crate::{
    commands::{
        deploy::{DeployAction, DeployFlags},
        init::{InitAction, InitFlags},
        load_injected_config, Services,
    },
    common::ui::console::Console,
    core::{
        action::Action,
        context::ActionContext,
        error::Result,
        flags::{ActionFlags, GlobalFlags},
    },
};
use anyhow::Context;
use async_trait::async_trait;
use clap::{Args, Command};
use std::sync::Arc;
use tracing::info;

/// Flags for `actioncli up`: the init and deploy flag sets side by side.
///
/// The derived `setup` registers `InitFlags` then `DeployFlags` on the same
/// command, so their flag names must stay disjoint.
#[derive(Args, Debug, Clone, Default)]
pub struct UpFlags {
    #[command(flatten)]
    pub init: InitFlags,

    #[command(flatten)]
    pub deploy: DeployFlags,
}

impl ActionFlags for UpFlags {
    fn bind(&mut self, global: Arc<GlobalFlags>) {
        self.init.bind(Arc::clone(&global));
        self.deploy.bind(global);
    }

    fn global(&self) -> &GlobalFlags {
        self.init.global()
    }
}

/// Command descriptor for `up`.
pub fn command() -> Command {
    Command::new("up").about("Initialize and deploy the application in one step.")
}

/// Constructs an `UpAction` wrapping freshly built init and deploy actions.
pub fn inject(services: &Services) -> Result<UpAction> {
    let config = load_injected_config("up")?;
    let init = InitAction::new(
        Arc::clone(&services.directories),
        Arc::clone(&services.console),
        config.clone(),
    );
    let deploy = DeployAction::new(
        Arc::clone(&services.directories),
        Arc::clone(&services.console),
        config,
    );
    Ok(UpAction::new(
        Box::new(init),
        Box::new(deploy),
        Arc::clone(&services.console),
    ))
}

pub struct UpAction {
    init: Box<dyn Action<Flags = InitFlags>>,
    deploy: Box<dyn Action<Flags = DeployFlags>>,
    console: Arc<dyn Console>,
}

impl UpAction {
    pub fn new(
        init: Box<dyn Action<Flags = InitFlags>>,
        deploy: Box<dyn Action<Flags = DeployFlags>>,
        console: Arc<dyn Console>,
    ) -> Self {
        Self {
            init,
            deploy,
            console,
        }
    }
}

#[async_trait]
impl Action for UpAction {
    type Flags = UpFlags;

    async fn run(&self, ctx: &ActionContext, flags: &UpFlags, args: &[String]) -> Result<()> {
        ctx.ensure_active("init")?;
        info!("up: running init");
        self.init
            .run(ctx, &flags.init, args)
            .await
            .context("up: init step failed")?;

        ctx.ensure_active("deploy")?;
        info!("up: running deploy");
        self.deploy
            .run(ctx, &flags.deploy, args)
            .await
            .context("up: deploy step failed")?;

        self.console.message("Up completed: init and deploy succeeded.");
        Ok(())
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ui::console::RecordingConsole;
    use crate::core::error::ActionCliError;
    use anyhow::anyhow;
    use std::sync::Mutex;

    /// Shared log of which steps ran, in order.
    type Calls = Arc<Mutex<Vec<String>>>;

    struct FakeStep<F> {
        name: &'static str,
        fail: bool,
        calls: Calls,
        seen: Arc<Mutex<Option<GlobalFlags>>>,
        _flags: std::marker::PhantomData<fn(&F)>,
    }

    impl<F> FakeStep<F> {
        fn new(name: &'static str, fail: bool, calls: &Calls) -> Self {
            Self {
                name,
                fail,
                calls: Arc::clone(calls),
                seen: Arc::new(Mutex::new(None)),
                _flags: std::marker::PhantomData,
            }
        }
    }

    #[async_trait]
    impl<F: ActionFlags> Action for FakeStep<F> {
        type Flags = F;

        async fn run(&self, _ctx: &ActionContext, flags: &F, _args: &[String]) -> Result<()> {
            self.calls.lock().unwrap().push(self.name.to_string());
            *self.seen.lock().unwrap() = Some(flags.global().clone());
            if self.fail {
                return Err(anyhow!(ActionCliError::InvalidFlags(format!(
                    "{} failed",
                    self.name
                ))));
            }
            Ok(())
        }
    }

    fn up_with(init_fails: bool, deploy_fails: bool, calls: &Calls) -> (UpAction, Arc<RecordingConsole>) {
        let console = Arc::new(RecordingConsole::default());
        let up = UpAction::new(
            Box::new(FakeStep::<InitFlags>::new("init", init_fails, calls)),
            Box::new(FakeStep::<DeployFlags>::new("deploy", deploy_fails, calls)),
            console.clone(),
        );
        (up, console)
    }

    #[tokio::test]
    async fn test_up_runs_init_then_deploy() {
        let calls = Calls::default();
        let (up, console) = up_with(false, false, &calls);

        up.run(&ActionContext::new(), &UpFlags::default(), &[])
            .await
            .unwrap();

        assert_eq!(*calls.lock().unwrap(), vec!["init", "deploy"]);
        assert!(console.output().contains("Up completed"));
    }

    #[tokio::test]
    async fn test_up_stops_when_init_fails() {
        let calls = Calls::default();
        let (up, console) = up_with(true, false, &calls);

        let err = up
            .run(&ActionContext::new(), &UpFlags::default(), &[])
            .await
            .unwrap_err();

        assert_eq!(*calls.lock().unwrap(), vec!["init"]);
        assert_eq!(err.to_string(), "up: init step failed");
        assert_eq!(
            err.root_cause().to_string(),
            "Invalid flags: init failed"
        );
        assert!(console.lines().is_empty());
    }

    #[tokio::test]
    async fn test_up_reports_deploy_failure_without_rollback() {
        let calls = Calls::default();
        let (up, _console) = up_with(false, true, &calls);

        let err = up
            .run(&ActionContext::new(), &UpFlags::default(), &[])
            .await
            .unwrap_err();

        assert_eq!(*calls.lock().unwrap(), vec!["init", "deploy"]);
        assert_eq!(err.to_string(), "up: deploy step failed");
    }

    #[tokio::test]
    async fn test_up_does_not_start_when_cancelled() {
        let calls = Calls::default();
        let (up, _console) = up_with(false, false, &calls);
        let ctx = ActionContext::new();
        ctx.interrupt();

        let err = up.run(&ctx, &UpFlags::default(), &[]).await.unwrap_err();

        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(
            err.downcast_ref::<ActionCliError>(),
            Some(&ActionCliError::Cancelled {
                step: "init".into()
            })
        );
    }

    #[tokio::test]
    async fn test_up_shares_global_flags_with_both_steps() {
        let calls = Calls::default();
        let init = FakeStep::<InitFlags>::new("init", false, &calls);
        let deploy = FakeStep::<DeployFlags>::new("deploy", false, &calls);
        let init_seen = Arc::clone(&init.seen);
        let deploy_seen = Arc::clone(&deploy.seen);
        let up = UpAction::new(
            Box::new(init),
            Box::new(deploy),
            Arc::new(RecordingConsole::default()),
        );

        let global = Arc::new(GlobalFlags {
            no_prompt: true,
            ..Default::default()
        });
        let mut flags = UpFlags::default();
        flags.bind(Arc::clone(&global));

        assert!(Arc::ptr_eq(&flags.init.global, &global));
        assert!(Arc::ptr_eq(&flags.deploy.global, &global));

        up.run(&ActionContext::new(), &flags, &[]).await.unwrap();

        assert_eq!(init_seen.lock().unwrap().as_ref(), Some(&*global));
        assert_eq!(deploy_seen.lock().unwrap().as_ref(), Some(&*global));
    }
}
