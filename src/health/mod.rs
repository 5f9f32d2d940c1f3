pub mod checker;
pub mod sampler;
pub mod types;

#[allow(unused_imports)]
pub use checker::{HealthChecker, PlacementAdapter, SendReceipt, SimulatedPlacement};
#[allow(unused_imports)]
pub use sampler::{SeededSampler, StatusSampler};
#[allow(unused_imports)]
pub use types::{SendTarget, ServiceRegistry, ServiceStatus, SystemService};

#[cfg(test)]
mod tests;
