#![allow(dead_code)]

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::config::HealthSettings;
use crate::jsontext;

use super::sampler::{SeededSampler, StatusSampler};
use super::types::{SendTarget, ServiceRegistry, ServiceStatus};

/// Outcome of a simulated data placement test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub target: String,
    pub bytes: usize,
}

/// Hands a validated payload to the placement target. The simulator ships
/// one implementation; a real backend would slot in here.
#[async_trait]
pub trait PlacementAdapter: Send + Sync {
    async fn place(&self, target: &SendTarget, payload: &Value) -> Result<()>;
}

/// Default adapter: no backend, just the fixed placement delay.
pub struct SimulatedPlacement {
    delay: Duration,
}

impl SimulatedPlacement {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PlacementAdapter for SimulatedPlacement {
    async fn place(&self, _target: &SendTarget, _payload: &Value) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Runs the simulated health probes: a whole-registry sweep, single-service
/// checks, and the data placement test. Statuses come from the injected
/// sampler so outcomes are reproducible under a fixed seed.
pub struct HealthChecker {
    sampler: Box<dyn StatusSampler>,
    placement: Box<dyn PlacementAdapter>,
    settings: HealthSettings,
}

impl HealthChecker {
    pub fn new(settings: HealthSettings) -> Self {
        let sampler = Box::new(SeededSampler::new(settings.seed));
        let placement = Box::new(SimulatedPlacement::new(settings.send_delay()));
        Self {
            sampler,
            placement,
            settings,
        }
    }

    pub fn with_sampler(settings: HealthSettings, sampler: Box<dyn StatusSampler>) -> Self {
        let placement = Box::new(SimulatedPlacement::new(settings.send_delay()));
        Self {
            sampler,
            placement,
            settings,
        }
    }

    pub fn with_placement(mut self, placement: Box<dyn PlacementAdapter>) -> Self {
        self.placement = placement;
        self
    }

    /// Flip every service to `checking` while the sweep is in flight.
    pub fn begin_sweep(&self, registry: &mut ServiceRegistry) {
        registry.set_all(ServiceStatus::Checking);
    }

    /// Resample every service and refresh its check stamp.
    pub fn complete_sweep(&mut self, registry: &mut ServiceRegistry) {
        let down = self.settings.down_threshold;
        let threshold = self.settings.sweep_degraded_threshold;
        let sampler = self.sampler.as_mut();
        registry.for_each_mut(|service| {
            service.status = classify(sampler.sample(), down, threshold);
            service.last_checked = "Just now".to_string();
        });
    }

    pub async fn sweep(&mut self, registry: &mut ServiceRegistry) {
        self.begin_sweep(registry);
        tokio::time::sleep(self.settings.sweep_delay()).await;
        self.complete_sweep(registry);
    }

    pub fn begin_check(&self, registry: &mut ServiceRegistry, id: u32) -> Result<()> {
        registry.set_status(id, ServiceStatus::Checking)
    }

    pub fn complete_check(
        &mut self,
        registry: &mut ServiceRegistry,
        id: u32,
    ) -> Result<ServiceStatus> {
        let status = classify(
            self.sampler.sample(),
            self.settings.down_threshold,
            self.settings.single_degraded_threshold,
        );
        registry.stamp(id, status)
    }

    pub async fn check_one(
        &mut self,
        registry: &mut ServiceRegistry,
        id: u32,
    ) -> Result<ServiceStatus> {
        self.begin_check(registry, id)?;
        tokio::time::sleep(self.settings.single_check_delay()).await;
        self.complete_check(registry, id)
    }

    /// Validate the payload, then hand it to the placement adapter. A
    /// payload that does not parse surfaces an error before the adapter
    /// is ever called.
    pub async fn send_payload(&self, target: &SendTarget, payload: &str) -> Result<SendReceipt> {
        let value = jsontext::validate(payload)?;
        self.placement.place(target, &value).await?;
        Ok(SendReceipt {
            target: target.label(),
            bytes: payload.len(),
        })
    }
}

fn classify(sample: f64, down_threshold: f64, degraded_threshold: f64) -> ServiceStatus {
    if sample < down_threshold {
        ServiceStatus::Down
    } else if sample < degraded_threshold {
        ServiceStatus::Degraded
    } else {
        ServiceStatus::Healthy
    }
}
