use super::constants::*;
use super::types::{HealthSettings, OutputSettings, SimulationSettings};

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            finalize_delay_ms: DEFAULT_FINALIZE_DELAY_MS,
            connection_probe_ms: DEFAULT_CONNECTION_PROBE_MS,
        }
    }
}

impl Default for HealthSettings {
    fn default() -> Self {
        Self {
            sweep_delay_ms: DEFAULT_SWEEP_DELAY_MS,
            single_check_delay_ms: DEFAULT_SINGLE_CHECK_DELAY_MS,
            send_delay_ms: DEFAULT_SEND_DELAY_MS,
            down_threshold: DEFAULT_DOWN_THRESHOLD,
            sweep_degraded_threshold: DEFAULT_SWEEP_DEGRADED_THRESHOLD,
            single_degraded_threshold: DEFAULT_SINGLE_DEGRADED_THRESHOLD,
            seed: None,
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { color: true }
    }
}
