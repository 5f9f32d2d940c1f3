use std::fmt;

use anyhow::{Result, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Healthy,
    Degraded,
    Down,
    Checking,
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ServiceStatus::Healthy => "healthy",
            ServiceStatus::Degraded => "degraded",
            ServiceStatus::Down => "down",
            ServiceStatus::Checking => "checking",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemService {
    pub id: u32,
    pub name: String,
    pub kind: String,
    pub status: ServiceStatus,
    pub response_time: String,
    pub uptime: String,
    pub last_checked: String,
    pub cpu: String,
    pub memory: String,
    pub requests: String,
}

/// The monitored services. Status changes go through the checker; direct
/// field pokes are reserved for the registry's own operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRegistry {
    services: Vec<SystemService>,
}

impl ServiceRegistry {
    pub fn new(services: Vec<SystemService>) -> Self {
        Self { services }
    }

    pub fn services(&self) -> &[SystemService] {
        &self.services
    }

    pub fn get(&self, id: u32) -> Option<&SystemService> {
        self.services.iter().find(|service| service.id == id)
    }

    pub fn healthy_count(&self) -> usize {
        self.count_with(ServiceStatus::Healthy)
    }

    pub fn degraded_count(&self) -> usize {
        self.count_with(ServiceStatus::Degraded)
    }

    pub fn down_count(&self) -> usize {
        self.count_with(ServiceStatus::Down)
    }

    fn count_with(&self, status: ServiceStatus) -> usize {
        self.services
            .iter()
            .filter(|service| service.status == status)
            .count()
    }

    pub(super) fn set_all(&mut self, status: ServiceStatus) {
        for service in &mut self.services {
            service.status = status;
        }
    }

    pub(super) fn set_status(&mut self, id: u32, status: ServiceStatus) -> Result<()> {
        let Some(service) = self.services.iter_mut().find(|service| service.id == id) else {
            bail!("Unknown service id {id}");
        };
        service.status = status;
        Ok(())
    }

    pub(super) fn for_each_mut(&mut self, mut apply: impl FnMut(&mut SystemService)) {
        for service in &mut self.services {
            apply(service);
        }
    }

    pub(super) fn stamp(&mut self, id: u32, status: ServiceStatus) -> Result<ServiceStatus> {
        let Some(service) = self.services.iter_mut().find(|service| service.id == id) else {
            bail!("Unknown service id {id}");
        };
        service.status = status;
        service.last_checked = "Just now".to_string();
        Ok(status)
    }

    pub fn seeded() -> Self {
        let seed = |id: u32,
                    name: &str,
                    kind: &str,
                    status: ServiceStatus,
                    response_time: &str,
                    uptime: &str,
                    cpu: &str,
                    memory: &str,
                    requests: &str| {
            SystemService {
                id,
                name: name.to_string(),
                kind: kind.to_string(),
                status,
                response_time: response_time.to_string(),
                uptime: uptime.to_string(),
                last_checked: "Just now".to_string(),
                cpu: cpu.to_string(),
                memory: memory.to_string(),
                requests: requests.to_string(),
            }
        };

        use ServiceStatus::{Degraded, Healthy};
        Self::new(vec![
            seed(1, "API Gateway", "REST API", Healthy, "45ms", "99.98%", "23%", "1.2 GB", "1,245/min"),
            seed(2, "MongoDB Primary", "Database", Healthy, "12ms", "99.99%", "45%", "3.8 GB", "892/min"),
            seed(3, "RabbitMQ", "Message Queue", Healthy, "8ms", "99.95%", "18%", "896 MB", "3,421/min"),
            seed(4, "Redis Cache", "Cache", Healthy, "3ms", "99.97%", "12%", "512 MB", "5,678/min"),
            seed(5, "Worker Service", "Background Worker", Degraded, "234ms", "98.45%", "78%", "2.1 GB", "234/min"),
            seed(6, "Kafka Broker", "Event Stream", Healthy, "15ms", "99.92%", "34%", "1.8 GB", "2,890/min"),
            seed(7, "PostgreSQL", "Database", Healthy, "18ms", "99.96%", "38%", "2.4 GB", "567/min"),
            seed(8, "Load Balancer", "Network", Healthy, "5ms", "99.99%", "15%", "428 MB", "8,945/min"),
        ])
    }
}

/// Where a data placement test sends its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendTarget {
    RabbitMq { queue: String },
    MongoDb { collection: String },
}

impl SendTarget {
    pub fn label(&self) -> String {
        match self {
            SendTarget::RabbitMq { queue } => format!("RabbitMQ queue: {queue}"),
            SendTarget::MongoDb { collection } => format!("MongoDB collection: {collection}"),
        }
    }
}
