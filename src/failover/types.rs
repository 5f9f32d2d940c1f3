#![allow(dead_code)]

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow, bail};

use crate::runner::Stage;

/// One of the two cluster sites a deployment can run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    Primary,
    Secondary,
}

impl Site {
    pub fn other(self) -> Site {
        match self {
            Site::Primary => Site::Secondary,
            Site::Secondary => Site::Primary,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Site::Primary => "Primary Site",
            Site::Secondary => "Secondary Site",
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            Site::Primary => "us-east-1.openshift.com",
            Site::Secondary => "us-west-2.openshift.com",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Site::Primary => write!(f, "primary"),
            Site::Secondary => write!(f, "secondary"),
        }
    }
}

impl FromStr for Site {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Site::Primary),
            "secondary" => Ok(Site::Secondary),
            other => Err(anyhow!("Unknown site '{other}' (expected primary or secondary)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentStatus {
    Running,
    Stopped,
    Starting,
    Stopping,
    Error,
}

impl fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeploymentStatus::Running => "running",
            DeploymentStatus::Stopped => "stopped",
            DeploymentStatus::Starting => "starting",
            DeploymentStatus::Stopping => "stopping",
            DeploymentStatus::Error => "error",
        };
        write!(f, "{label}")
    }
}

/// Ready/desired pod pair, rendered as "3/3".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PodCount {
    pub ready: u32,
    pub desired: u32,
}

impl PodCount {
    pub fn new(ready: u32, desired: u32) -> Self {
        Self { ready, desired }
    }

    pub fn none() -> Self {
        Self::new(0, 0)
    }

    pub fn full(replicas: u32) -> Self {
        Self::new(replicas, replicas)
    }
}

impl fmt::Display for PodCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.ready, self.desired)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deployment {
    pub id: u32,
    pub name: String,
    pub kind: String,
    pub primary_status: DeploymentStatus,
    pub secondary_status: DeploymentStatus,
    pub primary_pods: PodCount,
    pub secondary_pods: PodCount,
    pub memory: String,
    pub cpu: String,
    pub replicas: u32,
}

impl Deployment {
    pub fn status_on(&self, site: Site) -> DeploymentStatus {
        match site {
            Site::Primary => self.primary_status,
            Site::Secondary => self.secondary_status,
        }
    }

    pub fn pods_on(&self, site: Site) -> PodCount {
        match site {
            Site::Primary => self.primary_pods,
            Site::Secondary => self.secondary_pods,
        }
    }
}

/// The two-site deployment fleet plus the currently active site. All
/// mutation goes through the defined operations below.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentFleet {
    deployments: Vec<Deployment>,
    active_site: Site,
}

impl DeploymentFleet {
    pub fn new(deployments: Vec<Deployment>, active_site: Site) -> Self {
        Self {
            deployments,
            active_site,
        }
    }

    pub fn deployments(&self) -> &[Deployment] {
        &self.deployments
    }

    pub fn active_site(&self) -> Site {
        self.active_site
    }

    pub fn get(&self, id: u32) -> Option<&Deployment> {
        self.deployments.iter().find(|deployment| deployment.id == id)
    }

    pub fn ids(&self) -> Vec<u32> {
        self.deployments.iter().map(|deployment| deployment.id).collect()
    }

    pub fn running_count(&self, site: Site) -> usize {
        self.deployments
            .iter()
            .filter(|deployment| deployment.status_on(site) == DeploymentStatus::Running)
            .count()
    }

    pub fn ready_pod_total(&self, site: Site) -> u32 {
        self.deployments
            .iter()
            .map(|deployment| deployment.pods_on(site).ready)
            .sum()
    }

    /// Validate a failover selection against the fleet.
    pub fn plan_failover(&self, target: Site, deployment_ids: Vec<u32>) -> Result<FailoverPlan> {
        if deployment_ids.is_empty() {
            bail!("Select at least one deployment before starting a failover");
        }
        for id in &deployment_ids {
            if self.get(*id).is_none() {
                bail!("Unknown deployment id {id}");
            }
        }
        Ok(FailoverPlan {
            target,
            deployment_ids,
        })
    }

    /// Flip the planned deployments to the target site and make it active.
    pub fn apply_failover(&mut self, plan: &FailoverPlan) {
        for deployment in &mut self.deployments {
            if !plan.deployment_ids.contains(&deployment.id) {
                continue;
            }
            match plan.target {
                Site::Primary => {
                    deployment.primary_status = DeploymentStatus::Running;
                    deployment.secondary_status = DeploymentStatus::Stopped;
                    deployment.primary_pods = PodCount::full(deployment.replicas);
                    deployment.secondary_pods = PodCount::none();
                }
                Site::Secondary => {
                    deployment.primary_status = DeploymentStatus::Stopped;
                    deployment.secondary_status = DeploymentStatus::Running;
                    deployment.primary_pods = PodCount::none();
                    deployment.secondary_pods = PodCount::full(deployment.replicas);
                }
            }
        }
        self.active_site = plan.target;
    }

    pub fn seeded() -> Self {
        let seed = |id: u32, name: &str, kind: &str, replicas: u32, memory: &str, cpu: &str| {
            Deployment {
                id,
                name: name.to_string(),
                kind: kind.to_string(),
                primary_status: DeploymentStatus::Running,
                secondary_status: DeploymentStatus::Stopped,
                primary_pods: PodCount::full(replicas),
                secondary_pods: PodCount::none(),
                memory: memory.to_string(),
                cpu: cpu.to_string(),
                replicas,
            }
        };

        Self::new(
            vec![
                seed(1, "myapp-deployment", "Web Application", 3, "2.4 GB", "1.2 cores"),
                seed(2, "api-deployment", "REST API", 2, "1.8 GB", "0.8 cores"),
                seed(3, "worker-deployment", "Background Worker", 4, "3.2 GB", "1.6 cores"),
                seed(4, "cache-deployment", "Redis Cache", 1, "1.0 GB", "0.4 cores"),
                seed(5, "queue-deployment", "Message Queue", 2, "1.5 GB", "0.6 cores"),
                seed(6, "scheduler-deployment", "Task Scheduler", 1, "0.8 GB", "0.3 cores"),
                seed(7, "database-deployment", "PostgreSQL", 1, "4.0 GB", "2.0 cores"),
                seed(8, "monitoring-deployment", "Monitoring Service", 1, "1.2 GB", "0.5 cores"),
            ],
            Site::Primary,
        )
    }
}

/// A validated failover selection: the target site and the deployments to
/// move there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailoverPlan {
    target: Site,
    deployment_ids: Vec<u32>,
}

impl FailoverPlan {
    pub fn target(&self) -> Site {
        self.target
    }

    pub fn source(&self) -> Site {
        self.target.other()
    }

    pub fn deployment_ids(&self) -> &[u32] {
        &self.deployment_ids
    }

    /// The ordered stage list for this failover, with the selection size
    /// and site names baked into the stage names.
    pub fn stages(&self) -> Vec<Stage> {
        let count = self.deployment_ids.len();
        let source = self.source().display_name();
        let target = self.target.display_name();
        Stage::list([
            format!("Validating {count} deployment(s)"),
            format!("Creating snapshots on {source}"),
            format!("Syncing data to {target}"),
            format!("Stopping deployments on {source}"),
            "Updating DNS records".to_string(),
            format!("Starting deployments on {target}"),
            "Verifying health checks".to_string(),
            "Updating load balancer configuration".to_string(),
            "Finalizing failover".to_string(),
        ])
    }
}
