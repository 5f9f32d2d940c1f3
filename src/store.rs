use crate::configmap::ConfigMapCatalog;
use crate::failover::DeploymentFleet;
use crate::health::ServiceRegistry;
use crate::rules::RuleSet;
use crate::scripts::{ConnectionList, ReplicaSetInventory};

/// Application-root owner of every mutable collection. Command handlers
/// receive a reference instead of reaching for ambient state; each
/// collection enforces its own update operations. Nothing here persists —
/// a fresh store is seeded per invocation.
#[derive(Debug, Clone)]
pub struct AppStore {
    pub fleet: DeploymentFleet,
    pub configmaps: ConfigMapCatalog,
    pub services: ServiceRegistry,
    pub rules: RuleSet,
    pub connections: ConnectionList,
    pub replicasets: ReplicaSetInventory,
}

impl AppStore {
    pub fn seeded() -> Self {
        Self {
            fleet: DeploymentFleet::seeded(),
            configmaps: ConfigMapCatalog::seeded(),
            services: ServiceRegistry::seeded(),
            rules: RuleSet::seeded(),
            connections: ConnectionList::seeded(),
            replicasets: ReplicaSetInventory::seeded(),
        }
    }
}
