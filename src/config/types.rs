use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct Config {
    pub simulation: SimulationSettings,
    pub health: HealthSettings,
    pub output: OutputSettings,
}

/// Cadences for the timer-driven operation simulators.
#[derive(Debug, Clone)]
pub struct SimulationSettings {
    pub tick_ms: u64,
    pub finalize_delay_ms: u64,
    pub connection_probe_ms: u64,
}

impl SimulationSettings {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn finalize_delay(&self) -> Duration {
        Duration::from_millis(self.finalize_delay_ms)
    }

    pub fn connection_probe(&self) -> Duration {
        Duration::from_millis(self.connection_probe_ms)
    }
}

/// Delays and sampling thresholds for the health check simulator.
#[derive(Debug, Clone)]
pub struct HealthSettings {
    pub sweep_delay_ms: u64,
    pub single_check_delay_ms: u64,
    pub send_delay_ms: u64,
    pub down_threshold: f64,
    pub sweep_degraded_threshold: f64,
    pub single_degraded_threshold: f64,
    /// Fixed sampler seed; None draws one from OS entropy per run.
    pub seed: Option<u64>,
}

impl HealthSettings {
    pub fn sweep_delay(&self) -> Duration {
        Duration::from_millis(self.sweep_delay_ms)
    }

    pub fn single_check_delay(&self) -> Duration {
        Duration::from_millis(self.single_check_delay_ms)
    }

    pub fn send_delay(&self) -> Duration {
        Duration::from_millis(self.send_delay_ms)
    }
}

#[derive(Debug, Clone)]
pub struct OutputSettings {
    pub color: bool,
}

// File configuration types
#[derive(Debug, Deserialize)]
pub(super) struct FileConfig {
    #[serde(default)]
    pub simulation: Option<FileSimulationSettings>,
    #[serde(default)]
    pub health: Option<FileHealthSettings>,
    #[serde(default)]
    pub output: Option<FileOutputSettings>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FileSimulationSettings {
    pub tick_ms: Option<u64>,
    pub finalize_delay_ms: Option<u64>,
    pub connection_probe_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FileHealthSettings {
    pub sweep_delay_ms: Option<u64>,
    pub single_check_delay_ms: Option<u64>,
    pub send_delay_ms: Option<u64>,
    pub down_threshold: Option<f64>,
    pub sweep_degraded_threshold: Option<f64>,
    pub single_degraded_threshold: Option<f64>,
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FileOutputSettings {
    pub color: Option<bool>,
}

// Serialization helpers
#[derive(Serialize)]
pub(super) struct PersistedConfig {
    pub simulation: PersistedSimulation,
    pub health: PersistedHealth,
    pub output: PersistedOutput,
}

#[derive(Serialize)]
pub(super) struct PersistedSimulation {
    pub tick_ms: u64,
    pub finalize_delay_ms: u64,
    pub connection_probe_ms: u64,
}

#[derive(Serialize)]
pub(super) struct PersistedHealth {
    pub sweep_delay_ms: u64,
    pub single_check_delay_ms: u64,
    pub send_delay_ms: u64,
    pub down_threshold: f64,
    pub sweep_degraded_threshold: f64,
    pub single_degraded_threshold: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Serialize)]
pub(super) struct PersistedOutput {
    pub color: bool,
}

impl From<&Config> for PersistedConfig {
    fn from(config: &Config) -> Self {
        PersistedConfig {
            simulation: PersistedSimulation {
                tick_ms: config.simulation.tick_ms,
                finalize_delay_ms: config.simulation.finalize_delay_ms,
                connection_probe_ms: config.simulation.connection_probe_ms,
            },
            health: PersistedHealth {
                sweep_delay_ms: config.health.sweep_delay_ms,
                single_check_delay_ms: config.health.single_check_delay_ms,
                send_delay_ms: config.health.send_delay_ms,
                down_threshold: config.health.down_threshold,
                sweep_degraded_threshold: config.health.sweep_degraded_threshold,
                single_degraded_threshold: config.health.single_degraded_threshold,
                seed: config.health.seed,
            },
            output: PersistedOutput {
                color: config.output.color,
            },
        }
    }
}
