pub mod driver;
pub mod types;

#[allow(unused_imports)]
pub use driver::{FailureAction, FaultInjector, StageRun, StageRunner, StageRunnerBuilder};
#[allow(unused_imports)]
pub use types::{Stage, StageStatus};
