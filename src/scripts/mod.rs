pub mod ops;
pub mod types;

#[allow(unused_imports)]
pub use ops::{MaintenanceScripts, ScriptReport};
#[allow(unused_imports)]
pub use types::{
    CleanIntegrationSettings, ConnectionConfig, ConnectionList, ConnectionPatch, ConnectionStatus,
    KafkaSettings, ReplicaSet, ReplicaSetInventory, ReplicaSetStatus,
};

#[cfg(test)]
mod tests;
