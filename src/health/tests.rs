use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use tokio::time;

use crate::config::HealthSettings;

use super::checker::{HealthChecker, PlacementAdapter};
use super::sampler::{SeededSampler, StatusSampler};
use super::types::{SendTarget, ServiceRegistry, ServiceStatus};

/// Replays a fixed list of draws, cycling when exhausted.
struct ScriptedSampler {
    values: Vec<f64>,
    index: usize,
}

impl ScriptedSampler {
    fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }
}

impl StatusSampler for ScriptedSampler {
    fn sample(&mut self) -> f64 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}

fn checker_with(values: Vec<f64>) -> HealthChecker {
    HealthChecker::with_sampler(
        HealthSettings::default(),
        Box::new(ScriptedSampler::new(values)),
    )
}

#[test]
fn sweep_classifies_against_the_sweep_thresholds() {
    // below 0.05 -> down, below 0.10 -> degraded, otherwise healthy
    let mut checker = checker_with(vec![0.02, 0.07, 0.5, 0.95, 0.04, 0.09, 0.6, 0.3]);
    let mut registry = ServiceRegistry::seeded();

    checker.begin_sweep(&mut registry);
    assert!(
        registry
            .services()
            .iter()
            .all(|service| service.status == ServiceStatus::Checking)
    );

    checker.complete_sweep(&mut registry);
    let statuses: Vec<ServiceStatus> = registry
        .services()
        .iter()
        .map(|service| service.status)
        .collect();
    assert_eq!(
        statuses,
        vec![
            ServiceStatus::Down,
            ServiceStatus::Degraded,
            ServiceStatus::Healthy,
            ServiceStatus::Healthy,
            ServiceStatus::Down,
            ServiceStatus::Degraded,
            ServiceStatus::Healthy,
            ServiceStatus::Healthy,
        ]
    );
    assert!(
        registry
            .services()
            .iter()
            .all(|service| service.last_checked == "Just now")
    );
    assert_eq!(registry.down_count(), 2);
    assert_eq!(registry.degraded_count(), 2);
    assert_eq!(registry.healthy_count(), 4);
}

#[test]
fn single_check_uses_the_wider_degraded_threshold() {
    // 0.12 is healthy for a sweep (>= 0.10) but degraded for a single
    // check (< 0.15)
    let mut checker = checker_with(vec![0.12]);
    let mut registry = ServiceRegistry::seeded();

    let status = {
        checker.begin_check(&mut registry, 1).unwrap();
        checker.complete_check(&mut registry, 1).unwrap()
    };
    assert_eq!(status, ServiceStatus::Degraded);
    assert_eq!(registry.get(1).unwrap().status, ServiceStatus::Degraded);
}

#[tokio::test(start_paused = true)]
async fn check_one_waits_out_the_probe_delay() {
    let mut checker = checker_with(vec![0.9]);
    let mut registry = ServiceRegistry::seeded();

    let started = time::Instant::now();
    let status = checker.check_one(&mut registry, 5).await.unwrap();

    assert_eq!(started.elapsed(), Duration::from_millis(1000));
    assert_eq!(status, ServiceStatus::Healthy);
    assert_eq!(registry.get(5).unwrap().last_checked, "Just now");
}

#[test]
fn checks_reject_unknown_services() {
    let mut checker = checker_with(vec![0.9]);
    let mut registry = ServiceRegistry::seeded();

    assert!(checker.begin_check(&mut registry, 99).is_err());
    assert!(checker.complete_check(&mut registry, 99).is_err());
}

#[tokio::test(start_paused = true)]
async fn send_payload_validates_before_the_delay() {
    let checker = checker_with(vec![0.9]);
    let target = SendTarget::MongoDb {
        collection: "test-collection".to_string(),
    };

    let started = time::Instant::now();
    let err = checker.send_payload(&target, "{nope").await.unwrap_err();
    assert!(err.to_string().contains("Invalid JSON format"));
    assert_eq!(started.elapsed(), Duration::ZERO);

    let receipt = checker
        .send_payload(&target, r#"{"order": 17}"#)
        .await
        .unwrap();
    assert_eq!(started.elapsed(), Duration::from_millis(1500));
    assert_eq!(receipt.target, "MongoDB collection: test-collection");
    assert_eq!(receipt.bytes, 13);

    let queue_target = SendTarget::RabbitMq {
        queue: "default-queue".to_string(),
    };
    assert_eq!(queue_target.label(), "RabbitMQ queue: default-queue");
}

struct RecordingPlacement {
    calls: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl PlacementAdapter for RecordingPlacement {
    async fn place(&self, target: &SendTarget, _payload: &Value) -> Result<()> {
        self.calls.lock().unwrap().push(target.label());
        Ok(())
    }
}

#[tokio::test]
async fn invalid_payloads_never_reach_the_placement_adapter() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let checker = checker_with(vec![0.9]).with_placement(Box::new(RecordingPlacement {
        calls: calls.clone(),
    }));
    let target = SendTarget::RabbitMq {
        queue: "default-queue".to_string(),
    };

    assert!(checker.send_payload(&target, "{nope").await.is_err());
    assert!(calls.lock().unwrap().is_empty());

    checker.send_payload(&target, "[1, 2, 3]").await.unwrap();
    assert_eq!(
        calls.lock().unwrap().as_slice(),
        ["RabbitMQ queue: default-queue"]
    );
}

#[test]
fn seeded_sampler_is_reproducible() {
    let mut first = SeededSampler::new(Some(42));
    let mut second = SeededSampler::new(Some(42));
    for _ in 0..16 {
        assert_eq!(first.sample(), second.sample());
    }

    let mut other = SeededSampler::new(Some(43));
    let diverged = (0..16).any(|_| first.sample() != other.sample());
    assert!(diverged);
}
