pub const DEFAULT_TICK_MS: u64 = 1500;
pub const DEFAULT_FINALIZE_DELAY_MS: u64 = 1000;
pub const DEFAULT_CONNECTION_PROBE_MS: u64 = 2000;
pub const DEFAULT_SWEEP_DELAY_MS: u64 = 2000;
pub const DEFAULT_SINGLE_CHECK_DELAY_MS: u64 = 1000;
pub const DEFAULT_SEND_DELAY_MS: u64 = 1500;
pub const DEFAULT_DOWN_THRESHOLD: f64 = 0.05;
pub const DEFAULT_SWEEP_DEGRADED_THRESHOLD: f64 = 0.10;
pub const DEFAULT_SINGLE_DEGRADED_THRESHOLD: f64 = 0.15;
