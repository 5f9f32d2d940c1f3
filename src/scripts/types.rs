#![allow(dead_code)]

use std::fmt;

use anyhow::{Result, bail};

use crate::runner::Stage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
    Error,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Disconnected => "disconnected",
            ConnectionStatus::Error => "error",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionConfig {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub status: ConnectionStatus,
    pub host: String,
    pub port: String,
    pub username: String,
    pub database: Option<String>,
    pub last_checked: String,
}

/// Field edits applied to a connection; unset fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct ConnectionPatch {
    pub host: Option<String>,
    pub port: Option<String>,
    pub username: Option<String>,
    pub database: Option<String>,
}

/// Named integration endpoints the maintenance scripts talk to.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionList {
    connections: Vec<ConnectionConfig>,
}

impl ConnectionList {
    pub fn new(connections: Vec<ConnectionConfig>) -> Self {
        Self { connections }
    }

    pub fn connections(&self) -> &[ConnectionConfig] {
        &self.connections
    }

    pub fn get(&self, id: &str) -> Option<&ConnectionConfig> {
        self.connections.iter().find(|conn| conn.id == id)
    }

    pub fn update(&mut self, id: &str, patch: ConnectionPatch) -> Result<()> {
        let Some(connection) = self.connections.iter_mut().find(|conn| conn.id == id) else {
            bail!("Unknown connection '{id}'");
        };
        if let Some(host) = patch.host {
            connection.host = host;
        }
        if let Some(port) = patch.port {
            connection.port = port;
        }
        if let Some(username) = patch.username {
            connection.username = username;
        }
        if let Some(database) = patch.database {
            connection.database = Some(database);
        }
        Ok(())
    }

    pub fn toggle_status(&mut self, id: &str) -> Result<ConnectionStatus> {
        let Some(connection) = self.connections.iter_mut().find(|conn| conn.id == id) else {
            bail!("Unknown connection '{id}'");
        };
        connection.status = match connection.status {
            ConnectionStatus::Connected => ConnectionStatus::Disconnected,
            _ => ConnectionStatus::Connected,
        };
        Ok(connection.status)
    }

    pub(super) fn mark_connected(&mut self, id: &str) -> Result<()> {
        let Some(connection) = self.connections.iter_mut().find(|conn| conn.id == id) else {
            bail!("Unknown connection '{id}'");
        };
        connection.status = ConnectionStatus::Connected;
        connection.last_checked = "Just now".to_string();
        Ok(())
    }

    pub fn seeded() -> Self {
        let seed = |id: &str,
                    name: &str,
                    kind: &str,
                    status: ConnectionStatus,
                    host: &str,
                    port: &str,
                    username: &str,
                    database: Option<&str>,
                    last_checked: &str| {
            ConnectionConfig {
                id: id.to_string(),
                name: name.to_string(),
                kind: kind.to_string(),
                status,
                host: host.to_string(),
                port: port.to_string(),
                username: username.to_string(),
                database: database.map(str::to_string),
                last_checked: last_checked.to_string(),
            }
        };

        Self::new(vec![
            seed(
                "mongodb",
                "MongoDB",
                "Database",
                ConnectionStatus::Connected,
                "mongodb.production.local",
                "27017",
                "admin",
                Some("main_db"),
                "2 minutes ago",
            ),
            seed(
                "redis",
                "Redis Cache",
                "Cache",
                ConnectionStatus::Connected,
                "redis.production.local",
                "6379",
                "default",
                None,
                "5 minutes ago",
            ),
            seed(
                "rabbitmq",
                "RabbitMQ",
                "Message Queue",
                ConnectionStatus::Connected,
                "rabbitmq.production.local",
                "5672",
                "admin",
                None,
                "1 minute ago",
            ),
            seed(
                "kafka",
                "Kafka Broker",
                "Message Streaming",
                ConnectionStatus::Connected,
                "kafka.production.local",
                "9092",
                "kafka-admin",
                None,
                "3 minutes ago",
            ),
            seed(
                "postgresql",
                "PostgreSQL",
                "Database",
                ConnectionStatus::Disconnected,
                "postgres.production.local",
                "5432",
                "postgres",
                Some("analytics_db"),
                "Never",
            ),
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplicaSetStatus {
    Active,
    Inactive,
}

impl fmt::Display for ReplicaSetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplicaSetStatus::Active => write!(f, "Active"),
            ReplicaSetStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplicaSet {
    pub id: u32,
    pub name: String,
    pub pods: String,
    pub deployment: String,
    pub created: String,
    pub status: ReplicaSetStatus,
    pub last_accessed: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplicaSetInventory {
    replicasets: Vec<ReplicaSet>,
}

impl ReplicaSetInventory {
    pub fn new(replicasets: Vec<ReplicaSet>) -> Self {
        Self { replicasets }
    }

    pub fn replicasets(&self) -> &[ReplicaSet] {
        &self.replicasets
    }

    pub fn get(&self, id: u32) -> Option<&ReplicaSet> {
        self.replicasets.iter().find(|rs| rs.id == id)
    }

    pub fn len(&self) -> usize {
        self.replicasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replicasets.is_empty()
    }

    pub fn inactive_count(&self) -> usize {
        self.replicasets
            .iter()
            .filter(|rs| rs.status == ReplicaSetStatus::Inactive)
            .count()
    }

    pub fn active_count(&self) -> usize {
        self.len() - self.inactive_count()
    }

    pub(super) fn remove(&mut self, ids: &[u32]) -> usize {
        let before = self.replicasets.len();
        self.replicasets.retain(|rs| !ids.contains(&rs.id));
        before - self.replicasets.len()
    }

    pub fn seeded() -> Self {
        let seed = |id: u32,
                    name: &str,
                    pods: &str,
                    deployment: &str,
                    created: &str,
                    status: ReplicaSetStatus,
                    last_accessed: &str| {
            ReplicaSet {
                id,
                name: name.to_string(),
                pods: pods.to_string(),
                deployment: deployment.to_string(),
                created: created.to_string(),
                status,
                last_accessed: last_accessed.to_string(),
            }
        };

        use ReplicaSetStatus::{Active, Inactive};
        Self::new(vec![
            seed(1, "myapp-deployment-1", "3/3", "myapp-deployment", "2024-01-15", Active, "2 hours ago"),
            seed(2, "myapp-deployment-2", "0/0", "myapp-deployment", "2024-02-01", Inactive, "15 days ago"),
            seed(3, "myapp-deployment-3", "0/0", "myapp-deployment", "2024-01-20", Inactive, "30 days ago"),
            seed(4, "worker-deployment-5", "2/2", "worker-deployment", "2024-01-10", Active, "1 hour ago"),
            seed(5, "worker-deployment-6", "0/0", "worker-deployment", "2024-02-10", Inactive, "45 days ago"),
            seed(6, "api-deployment-8", "0/0", "api-deployment", "2023-12-01", Inactive, "90 days ago"),
            seed(7, "api-deployment-9", "0/0", "api-deployment", "2024-01-05", Inactive, "60 days ago"),
            seed(8, "cache-deployment-4", "1/1", "cache-deployment", "2024-02-12", Active, "30 minutes ago"),
            seed(9, "queue-deployment-7", "0/0", "queue-deployment", "2024-01-25", Inactive, "50 days ago"),
            seed(10, "scheduler-deployment-2", "0/0", "scheduler-deployment", "2024-02-08", Inactive, "20 days ago"),
        ])
    }
}

/// Which integration backends the clean-integration script touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanIntegrationSettings {
    pub mongo: bool,
    pub redis: bool,
    pub rabbitmq: bool,
}

impl Default for CleanIntegrationSettings {
    fn default() -> Self {
        Self {
            mongo: true,
            redis: true,
            rabbitmq: true,
        }
    }
}

impl CleanIntegrationSettings {
    /// Optional backend stages first, then the fixed reset/verify tail.
    pub fn stages(&self) -> Vec<Stage> {
        let mut names = Vec::new();
        if self.mongo {
            names.push("Cleaning MongoDB collections".to_string());
        }
        if self.redis {
            names.push("Flushing Redis cache".to_string());
        }
        if self.rabbitmq {
            names.push("Cleaning RabbitMQ queues".to_string());
        }
        names.push("Resetting API Connections".to_string());
        names.push("Verifying Data Integrity".to_string());
        Stage::list(names)
    }
}

/// Parameters for a Kafka maintenance run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KafkaSettings {
    pub topic: String,
    pub partitions: u32,
    pub purge_messages: bool,
}

impl Default for KafkaSettings {
    fn default() -> Self {
        Self {
            topic: "default-topic".to_string(),
            partitions: 3,
            purge_messages: false,
        }
    }
}

impl KafkaSettings {
    pub fn stages(&self) -> Vec<Stage> {
        let mut names = vec![
            "Connecting to Kafka Broker".to_string(),
            format!("Accessing topic: {}", self.topic),
            format!("Checking {} partitions", self.partitions),
        ];
        if self.purge_messages {
            names.push("Purging old messages".to_string());
        }
        names.push("Processing Messages".to_string());
        names.push("Updating Offsets".to_string());
        Stage::list(names)
    }
}

/// Stage list for deleting `count` selected replicasets.
pub(super) fn replicaset_cleanup_stages(count: usize) -> Vec<Stage> {
    Stage::list([
        format!("Backing up {count} replicaset(s)"),
        "Stopping replicaset connections".to_string(),
        "Removing replicaset data".to_string(),
        "Updating system registry".to_string(),
        "Cleaning up disk space".to_string(),
    ])
}
