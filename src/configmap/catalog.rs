use anyhow::{Result, bail};
use chrono::Utc;

use crate::jsontext;

use super::types::{ConfigMap, ConfigMapVersion, human_size};

/// The ConfigMap collection. All mutation goes through the operations
/// below; invalid JSON never reaches the stored payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigMapCatalog {
    configmaps: Vec<ConfigMap>,
}

impl ConfigMapCatalog {
    pub fn new(configmaps: Vec<ConfigMap>) -> Self {
        Self { configmaps }
    }

    pub fn configmaps(&self) -> &[ConfigMap] {
        &self.configmaps
    }

    pub fn get(&self, id: u32) -> Option<&ConfigMap> {
        self.configmaps.iter().find(|map| map.id == id)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&ConfigMap> {
        self.configmaps.iter().find(|map| map.name == name)
    }

    /// Case-insensitive substring match on name or deployment.
    pub fn search(&self, query: &str) -> Vec<&ConfigMap> {
        let query = query.to_lowercase();
        self.configmaps
            .iter()
            .filter(|map| {
                map.name.to_lowercase().contains(&query)
                    || map.deployment.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Store a new payload. Validates the JSON first; on failure nothing
    /// changes. On success the payload, size, and modification stamp are
    /// updated and a new version is prepended to the history.
    pub fn update_data(
        &mut self,
        id: u32,
        data: String,
        editor: &str,
        changes: &str,
    ) -> Result<()> {
        jsontext::validate(&data)?;

        let Some(map) = self.configmaps.iter_mut().find(|map| map.id == id) else {
            bail!("Unknown ConfigMap id {id}");
        };

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M").to_string();
        let next_version = map
            .versions
            .iter()
            .map(|version| version.id)
            .max()
            .unwrap_or(0)
            + 1;
        map.versions.insert(
            0,
            ConfigMapVersion {
                id: next_version,
                timestamp: timestamp.clone(),
                editor: editor.to_string(),
                changes: changes.to_string(),
                data: data.clone(),
            },
        );
        map.size = human_size(data.len());
        map.last_modified = timestamp;
        map.data = data;
        Ok(())
    }

    /// Set the current payload to a stored version's payload. The history
    /// itself is left alone.
    pub fn restore_version(&mut self, id: u32, version_id: u32) -> Result<String> {
        let Some(map) = self.configmaps.iter_mut().find(|map| map.id == id) else {
            bail!("Unknown ConfigMap id {id}");
        };
        let Some(version) = map.versions.iter().find(|version| version.id == version_id) else {
            bail!("ConfigMap '{}' has no version {version_id}", map.name);
        };
        map.data = version.data.clone();
        Ok(map.data.clone())
    }

    pub fn seeded() -> Self {
        let myapp_current = r#"{"server":{"port":8080,"host":"0.0.0.0","timeout":30000},"database":{"connectionString":"mongodb://localhost:27017","maxPoolSize":10,"retryWrites":true},"logging":{"level":"info","format":"json","destination":"stdout"},"features":{"enableCache":true,"enableMetrics":true,"enableHealthCheck":true}}"#;
        let myapp_v2 = r#"{"server":{"port":8080,"host":"0.0.0.0","timeout":20000},"database":{"connectionString":"mongodb://localhost:27017","maxPoolSize":10,"retryWrites":true},"logging":{"level":"info","format":"json","destination":"stdout"},"features":{"enableCache":true,"enableMetrics":true,"enableHealthCheck":true}}"#;
        let myapp_v3 = r#"{"server":{"port":8080,"host":"0.0.0.0","timeout":20000},"database":{"connectionString":"mongodb://localhost:27017","maxPoolSize":10,"retryWrites":true},"logging":{"level":"info","format":"json","destination":"stdout"},"features":{"enableCache":true,"enableMetrics":false,"enableHealthCheck":false}}"#;
        let worker_current = r#"{"worker":{"concurrency":5,"timeout":60000,"retryAttempts":3},"queue":{"name":"default","priority":"normal","prefetch":10},"monitoring":{"enabled":true,"interval":5000}}"#;
        let worker_v2 = r#"{"worker":{"concurrency":3,"timeout":60000,"retryAttempts":3},"queue":{"name":"default","priority":"normal","prefetch":10},"monitoring":{"enabled":true,"interval":5000}}"#;
        let api_current = r#"{"api":{"version":"v1","basePath":"/api","rateLimit":{"enabled":true,"maxRequests":100,"windowMs":60000}},"cors":{"enabled":true,"origins":["https://example.com","https://app.example.com"],"methods":["GET","POST","PUT","DELETE"]},"authentication":{"type":"jwt","expiresIn":"1h","refreshTokenExpiry":"7d"},"cache":{"ttl":300,"maxSize":1000}}"#;
        let cache_current = r#"{"redis":{"host":"redis-service","port":6379,"maxRetries":3,"retryDelay":500},"ttl":{"default":3600,"sessions":86400,"temp":300}}"#;
        let scheduler_current = r#"{"scheduler":{"enabled":true,"timezone":"UTC","jobs":[{"name":"cleanup","cron":"0 2 * * *","enabled":true},{"name":"backup","cron":"0 0 * * *","enabled":true},{"name":"reports","cron":"0 8 * * 1","enabled":false}]}}"#;
        let scheduler_v2 = r#"{"scheduler":{"enabled":true,"timezone":"UTC","jobs":[{"name":"cleanup","cron":"0 2 * * *","enabled":true},{"name":"backup","cron":"0 0 * * *","enabled":true},{"name":"reports","cron":"0 8 * * 1","enabled":true}]}}"#;

        let version = |id: u32, timestamp: &str, editor: &str, changes: &str, data: &str| {
            ConfigMapVersion {
                id,
                timestamp: timestamp.to_string(),
                editor: editor.to_string(),
                changes: changes.to_string(),
                data: data.to_string(),
            }
        };

        Self::new(vec![
            ConfigMap {
                id: 1,
                name: "myapp-config".to_string(),
                deployment: "myapp-deployment".to_string(),
                namespace: "production".to_string(),
                last_modified: "2024-02-14 10:30".to_string(),
                size: "2.3 KB".to_string(),
                data: myapp_current.to_string(),
                versions: vec![
                    version(
                        1,
                        "2024-02-14 10:30",
                        "john.doe@company.com",
                        "Updated server timeout from 20000 to 30000",
                        myapp_current,
                    ),
                    version(
                        2,
                        "2024-02-13 15:20",
                        "jane.smith@company.com",
                        "Enabled metrics and health check features",
                        myapp_v2,
                    ),
                    version(
                        3,
                        "2024-02-12 09:15",
                        "john.doe@company.com",
                        "Changed log level to info",
                        myapp_v3,
                    ),
                ],
            },
            ConfigMap {
                id: 2,
                name: "worker-config".to_string(),
                deployment: "worker-deployment".to_string(),
                namespace: "production".to_string(),
                last_modified: "2024-02-13 14:45".to_string(),
                size: "1.8 KB".to_string(),
                data: worker_current.to_string(),
                versions: vec![
                    version(
                        1,
                        "2024-02-13 14:45",
                        "admin@company.com",
                        "Increased worker concurrency to 5",
                        worker_current,
                    ),
                    version(
                        2,
                        "2024-02-11 11:30",
                        "john.doe@company.com",
                        "Enabled monitoring",
                        worker_v2,
                    ),
                ],
            },
            ConfigMap {
                id: 3,
                name: "api-config".to_string(),
                deployment: "api-deployment".to_string(),
                namespace: "production".to_string(),
                last_modified: "2024-02-15 08:00".to_string(),
                size: "3.1 KB".to_string(),
                data: api_current.to_string(),
                versions: vec![version(
                    1,
                    "2024-02-15 08:00",
                    "jane.smith@company.com",
                    "Added rate limiting configuration",
                    api_current,
                )],
            },
            ConfigMap {
                id: 4,
                name: "cache-config".to_string(),
                deployment: "cache-deployment".to_string(),
                namespace: "production".to_string(),
                last_modified: "2024-02-10 16:20".to_string(),
                size: "1.2 KB".to_string(),
                data: cache_current.to_string(),
                versions: vec![version(
                    1,
                    "2024-02-10 16:20",
                    "admin@company.com",
                    "Initial configuration",
                    cache_current,
                )],
            },
            ConfigMap {
                id: 5,
                name: "scheduler-config".to_string(),
                deployment: "scheduler-deployment".to_string(),
                namespace: "production".to_string(),
                last_modified: "2024-02-14 12:00".to_string(),
                size: "1.5 KB".to_string(),
                data: scheduler_current.to_string(),
                versions: vec![
                    version(
                        1,
                        "2024-02-14 12:00",
                        "john.doe@company.com",
                        "Disabled weekly reports job",
                        scheduler_current,
                    ),
                    version(
                        2,
                        "2024-02-13 09:30",
                        "jane.smith@company.com",
                        "Added backup and reports jobs",
                        scheduler_v2,
                    ),
                ],
            },
        ])
    }
}
