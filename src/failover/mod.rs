pub mod drill;
pub mod types;

#[allow(unused_imports)]
pub use drill::{FailoverDrill, FailoverReport};
#[allow(unused_imports)]
pub use types::{Deployment, DeploymentFleet, DeploymentStatus, FailoverPlan, PodCount, Site};

#[cfg(test)]
mod tests;
