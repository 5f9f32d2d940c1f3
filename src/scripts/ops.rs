#![allow(dead_code)]

use std::time::Duration;

use anyhow::{Result, bail};

use crate::config::SimulationSettings;
use crate::runner::{Stage, StageRun, StageRunner};

use super::types::{
    CleanIntegrationSettings, ConnectionList, KafkaSettings, ReplicaSetInventory,
    replicaset_cleanup_stages,
};

/// Final stage snapshot of a script run, plus how many inventory rows the
/// run removed (zero for scripts that only animate).
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptReport {
    pub stages: Vec<Stage>,
    pub removed: usize,
}

/// Drives the maintenance scripts: clean-integration, Kafka maintenance,
/// replicaset cleanup, and the connection probe.
pub struct MaintenanceScripts {
    runner: StageRunner,
    connection_probe: Duration,
}

impl MaintenanceScripts {
    pub fn new(settings: &SimulationSettings) -> Self {
        Self {
            runner: StageRunner::new(settings.tick()),
            connection_probe: settings.connection_probe(),
        }
    }

    pub fn with_runner(runner: StageRunner, connection_probe: Duration) -> Self {
        Self {
            runner,
            connection_probe,
        }
    }

    pub fn begin_clean_integration(&self, settings: &CleanIntegrationSettings) -> StageRun {
        self.runner.start(settings.stages())
    }

    pub async fn run_clean_integration(
        &self,
        settings: &CleanIntegrationSettings,
    ) -> Result<ScriptReport> {
        let stages = self.begin_clean_integration(settings).wait().await?;
        Ok(ScriptReport { stages, removed: 0 })
    }

    pub fn begin_kafka(&self, settings: &KafkaSettings) -> StageRun {
        self.runner.start(settings.stages())
    }

    pub async fn run_kafka(&self, settings: &KafkaSettings) -> Result<ScriptReport> {
        let stages = self.begin_kafka(settings).wait().await?;
        Ok(ScriptReport { stages, removed: 0 })
    }

    /// Validate the selection and start the cleanup stages. The rows are
    /// only removed once the run finishes (`finish_replicaset_cleanup`).
    pub fn begin_replicaset_cleanup(
        &self,
        inventory: &ReplicaSetInventory,
        ids: &[u32],
    ) -> Result<StageRun> {
        if ids.is_empty() {
            bail!("Select at least one replicaset to clean up");
        }
        for id in ids {
            if inventory.get(*id).is_none() {
                bail!("Unknown replicaset id {id}");
            }
        }
        Ok(self.runner.start(replicaset_cleanup_stages(ids.len())))
    }

    pub fn finish_replicaset_cleanup(
        &self,
        inventory: &mut ReplicaSetInventory,
        ids: &[u32],
    ) -> usize {
        inventory.remove(ids)
    }

    pub async fn run_replicaset_cleanup(
        &self,
        inventory: &mut ReplicaSetInventory,
        ids: &[u32],
    ) -> Result<ScriptReport> {
        let run = self.begin_replicaset_cleanup(inventory, ids)?;
        let stages = run.wait().await?;
        let removed = self.finish_replicaset_cleanup(inventory, ids);
        Ok(ScriptReport { stages, removed })
    }

    /// Simulated connectivity probe: after the fixed probe delay the
    /// connection reports connected and its check stamp refreshes.
    pub async fn test_connection(&self, connections: &mut ConnectionList, id: &str) -> Result<()> {
        if connections.get(id).is_none() {
            bail!("Unknown connection '{id}'");
        }
        tokio::time::sleep(self.connection_probe).await;
        connections.mark_connected(id)
    }
}
