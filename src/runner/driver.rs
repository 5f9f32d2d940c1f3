#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, anyhow};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::types::{Stage, StageStatus};

/// Cadence observed between stage transitions when no override is given.
pub const DEFAULT_TICK: Duration = Duration::from_millis(1500);

/// Decides whether a stage finishes cleanly when its turn to complete
/// arrives. Consulted once per stage; returning true marks the stage
/// `Error` instead of `Completed`.
pub trait FaultInjector: Send + Sync {
    fn should_fail(&self, index: usize, stage: &Stage) -> bool;
}

/// What the clock does after a stage has been marked `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureAction {
    /// Stop immediately; stages past the failed one stay pending.
    #[default]
    Abort,
    /// Keep ticking through the remaining stages.
    Continue,
}

/// Timer-driven scheduler that advances an ordered stage list one step per
/// tick: finish the previous stage, start the current one, stop once the
/// index moves past the end. The full list is republished after every tick
/// so observers always see the latest snapshot.
///
/// A single runner can start any number of independent runs.
#[derive(Clone)]
pub struct StageRunner {
    tick: Duration,
    injector: Option<Arc<dyn FaultInjector>>,
    on_failure: FailureAction,
}

impl StageRunner {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            injector: None,
            on_failure: FailureAction::Abort,
        }
    }

    pub fn builder() -> StageRunnerBuilder {
        StageRunnerBuilder::new()
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Start driving `stages`. The first stage becomes `running` on the
    /// first tick; a run of N stages finishes after N + 1 ticks, the last
    /// tick doing nothing but closing out the final stage.
    pub fn start(&self, stages: Vec<Stage>) -> StageRun {
        let (tx, rx) = watch::channel(stages.clone());
        let tick = self.tick;
        let injector = self.injector.clone();
        let on_failure = self.on_failure;
        let task = tokio::spawn(async move {
            drive(tx, stages, tick, injector, on_failure).await;
        });

        StageRun {
            rx,
            task: Some(task),
        }
    }
}

pub struct StageRunnerBuilder {
    tick: Duration,
    injector: Option<Arc<dyn FaultInjector>>,
    on_failure: FailureAction,
}

impl StageRunnerBuilder {
    pub fn new() -> Self {
        Self {
            tick: DEFAULT_TICK,
            injector: None,
            on_failure: FailureAction::Abort,
        }
    }

    pub fn tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn fault_injector<F>(mut self, injector: F, on_failure: FailureAction) -> Self
    where
        F: FaultInjector + 'static,
    {
        self.injector = Some(Arc::new(injector));
        self.on_failure = on_failure;
        self
    }

    pub fn build(self) -> StageRunner {
        StageRunner {
            tick: self.tick,
            injector: self.injector,
            on_failure: self.on_failure,
        }
    }
}

impl Default for StageRunnerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to an in-flight staged run.
///
/// Dropping the handle cancels the run, so the timer is released on every
/// exit path; hold the handle for as long as the run should keep ticking.
pub struct StageRun {
    rx: watch::Receiver<Vec<Stage>>,
    task: Option<JoinHandle<()>>,
}

impl StageRun {
    /// Latest published stage list.
    pub fn snapshot(&self) -> Vec<Stage> {
        self.rx.borrow().clone()
    }

    /// Watch the stage list as it is republished after every tick. The
    /// channel closes once the run finishes or is cancelled.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Stage>> {
        self.rx.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task
            .as_ref()
            .map(|task| task.is_finished())
            .unwrap_or(true)
    }

    /// Stop the clock immediately; stages keep whatever status they had.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Wait for the run to finish naturally and return the final list.
    pub async fn wait(mut self) -> Result<Vec<Stage>> {
        let Some(task) = self.task.take() else {
            return Err(anyhow!("Stage run was already cancelled"));
        };
        task.await
            .map_err(|_| anyhow!("Stage run was cancelled before completing"))?;
        Ok(self.rx.borrow().clone())
    }
}

impl Drop for StageRun {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn drive(
    tx: watch::Sender<Vec<Stage>>,
    mut stages: Vec<Stage>,
    tick: Duration,
    injector: Option<Arc<dyn FaultInjector>>,
    on_failure: FailureAction,
) {
    let mut index = 0usize;

    loop {
        tokio::time::sleep(tick).await;

        if index > 0 && finish_stage(&mut stages, index - 1, injector.as_deref(), on_failure) {
            let _ = tx.send(stages);
            return;
        }

        if let Some(stage) = stages.get_mut(index) {
            stage.set_status(StageStatus::Running);
        }

        index += 1;

        if index > stages.len() {
            if !stages.is_empty() {
                let last = stages.len() - 1;
                finish_stage(&mut stages, last, injector.as_deref(), on_failure);
            }
            let _ = tx.send(stages);
            return;
        }

        let _ = tx.send(stages.clone());
    }
}

/// Close out the stage at `index`, honoring the fault policy. Returns true
/// when the run must abort. Stages that are not currently running (already
/// completed, errored, or never started) are left untouched.
fn finish_stage(
    stages: &mut [Stage],
    index: usize,
    injector: Option<&dyn FaultInjector>,
    on_failure: FailureAction,
) -> bool {
    let Some(stage) = stages.get_mut(index) else {
        return false;
    };
    if stage.status() != StageStatus::Running {
        return false;
    }

    if let Some(injector) = injector {
        if injector.should_fail(index, stage) {
            stage.set_status(StageStatus::Error);
            return on_failure == FailureAction::Abort;
        }
    }

    stage.set_status(StageStatus::Completed);
    false
}
