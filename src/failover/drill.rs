#![allow(dead_code)]

use std::time::Duration;

use anyhow::Result;

use crate::config::SimulationSettings;
use crate::runner::{StageRun, StageRunner};

use super::types::{DeploymentFleet, FailoverPlan, Site};

/// Summary handed back once a failover has been applied to the fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailoverReport {
    pub target: Site,
    pub moved: usize,
    pub running_on_target: usize,
}

/// Drives a failover rehearsal: the staged run first, then a trailing
/// one-shot delay before the fleet actually flips to the target site.
pub struct FailoverDrill {
    runner: StageRunner,
    finalize_delay: Duration,
}

impl FailoverDrill {
    pub fn new(settings: &SimulationSettings) -> Self {
        Self {
            runner: StageRunner::new(settings.tick()),
            finalize_delay: settings.finalize_delay(),
        }
    }

    pub fn with_runner(runner: StageRunner, finalize_delay: Duration) -> Self {
        Self {
            runner,
            finalize_delay,
        }
    }

    /// Start the staged portion of the failover. The caller owns the
    /// returned handle and may watch, await, or cancel it.
    pub fn begin(&self, plan: &FailoverPlan) -> StageRun {
        self.runner.start(plan.stages())
    }

    /// The caller-level continuation: wait out the trailing delay, then
    /// flip the planned deployments and the active site.
    pub async fn finalize(
        &self,
        fleet: &mut DeploymentFleet,
        plan: &FailoverPlan,
    ) -> FailoverReport {
        tokio::time::sleep(self.finalize_delay).await;
        fleet.apply_failover(plan);
        FailoverReport {
            target: plan.target(),
            moved: plan.deployment_ids().len(),
            running_on_target: fleet.running_count(plan.target()),
        }
    }

    /// Run the whole drill to completion: stages, trailing delay, flip.
    pub async fn run(
        &self,
        fleet: &mut DeploymentFleet,
        plan: &FailoverPlan,
    ) -> Result<FailoverReport> {
        let run = self.begin(plan);
        run.wait().await?;
        Ok(self.finalize(fleet, plan).await)
    }
}
