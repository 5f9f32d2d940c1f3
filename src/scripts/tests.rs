use std::time::Duration;

use tokio::time;

use crate::runner::{StageRunner, StageStatus};

use super::ops::MaintenanceScripts;
use super::types::{
    CleanIntegrationSettings, ConnectionList, ConnectionPatch, ConnectionStatus, KafkaSettings,
    ReplicaSetInventory,
};

const TICK: Duration = Duration::from_millis(1500);
const PROBE: Duration = Duration::from_millis(2000);

fn scripts() -> MaintenanceScripts {
    MaintenanceScripts::with_runner(StageRunner::new(TICK), PROBE)
}

fn names(stages: &[crate::runner::Stage]) -> Vec<&str> {
    stages.iter().map(|stage| stage.name()).collect()
}

#[test]
fn clean_integration_includes_only_enabled_backends() {
    let all = CleanIntegrationSettings::default();
    assert_eq!(
        names(&all.stages()),
        vec![
            "Cleaning MongoDB collections",
            "Flushing Redis cache",
            "Cleaning RabbitMQ queues",
            "Resetting API Connections",
            "Verifying Data Integrity",
        ]
    );

    let no_redis = CleanIntegrationSettings {
        redis: false,
        ..CleanIntegrationSettings::default()
    };
    assert_eq!(
        names(&no_redis.stages()),
        vec![
            "Cleaning MongoDB collections",
            "Cleaning RabbitMQ queues",
            "Resetting API Connections",
            "Verifying Data Integrity",
        ]
    );

    let none = CleanIntegrationSettings {
        mongo: false,
        redis: false,
        rabbitmq: false,
    };
    assert_eq!(
        names(&none.stages()),
        vec!["Resetting API Connections", "Verifying Data Integrity"]
    );
}

#[test]
fn kafka_stages_interpolate_topic_and_partitions() {
    let settings = KafkaSettings {
        topic: "orders".to_string(),
        partitions: 6,
        purge_messages: true,
    };
    assert_eq!(
        names(&settings.stages()),
        vec![
            "Connecting to Kafka Broker",
            "Accessing topic: orders",
            "Checking 6 partitions",
            "Purging old messages",
            "Processing Messages",
            "Updating Offsets",
        ]
    );

    let no_purge = KafkaSettings::default();
    assert!(
        !no_purge
            .stages()
            .iter()
            .any(|stage| stage.name() == "Purging old messages")
    );
}

#[tokio::test(start_paused = true)]
async fn clean_integration_run_completes_every_stage() {
    let report = scripts()
        .run_clean_integration(&CleanIntegrationSettings::default())
        .await
        .unwrap();
    assert_eq!(report.stages.len(), 5);
    assert!(
        report
            .stages
            .iter()
            .all(|stage| stage.status() == StageStatus::Completed)
    );
    assert_eq!(report.removed, 0);
}

#[tokio::test(start_paused = true)]
async fn replicaset_cleanup_removes_only_the_selection() {
    let mut inventory = ReplicaSetInventory::seeded();
    assert_eq!(inventory.len(), 10);
    assert_eq!(inventory.inactive_count(), 7);

    let report = scripts()
        .run_replicaset_cleanup(&mut inventory, &[2, 3, 6])
        .await
        .unwrap();

    assert_eq!(report.removed, 3);
    assert_eq!(report.stages[0].name(), "Backing up 3 replicaset(s)");
    assert_eq!(inventory.len(), 7);
    assert!(inventory.get(2).is_none());
    assert!(inventory.get(1).is_some());
}

#[test]
fn replicaset_cleanup_rejects_bad_selections() {
    let inventory = ReplicaSetInventory::seeded();
    let scripts = scripts();

    let err = scripts
        .begin_replicaset_cleanup(&inventory, &[])
        .map(|_| ())
        .unwrap_err();
    assert!(err.to_string().contains("at least one replicaset"));

    let err = scripts
        .begin_replicaset_cleanup(&inventory, &[42])
        .map(|_| ())
        .unwrap_err();
    assert!(err.to_string().contains("Unknown replicaset id 42"));
}

#[tokio::test(start_paused = true)]
async fn connection_probe_marks_the_connection_connected() {
    let mut connections = ConnectionList::seeded();
    assert_eq!(
        connections.get("postgresql").unwrap().status,
        ConnectionStatus::Disconnected
    );

    let started = time::Instant::now();
    scripts()
        .test_connection(&mut connections, "postgresql")
        .await
        .unwrap();

    assert_eq!(started.elapsed(), PROBE);
    let probed = connections.get("postgresql").unwrap();
    assert_eq!(probed.status, ConnectionStatus::Connected);
    assert_eq!(probed.last_checked, "Just now");
}

#[tokio::test]
async fn connection_probe_rejects_unknown_ids() {
    let mut connections = ConnectionList::seeded();
    let err = scripts()
        .test_connection(&mut connections, "cassandra")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Unknown connection 'cassandra'"));
}

#[test]
fn connection_updates_go_through_the_patch_operation() {
    let mut connections = ConnectionList::seeded();
    connections
        .update(
            "mongodb",
            ConnectionPatch {
                host: Some("mongodb.staging.local".to_string()),
                database: Some("staging_db".to_string()),
                ..ConnectionPatch::default()
            },
        )
        .unwrap();

    let updated = connections.get("mongodb").unwrap();
    assert_eq!(updated.host, "mongodb.staging.local");
    assert_eq!(updated.database.as_deref(), Some("staging_db"));
    assert_eq!(updated.port, "27017");

    assert_eq!(
        connections.toggle_status("mongodb").unwrap(),
        ConnectionStatus::Disconnected
    );
    assert_eq!(
        connections.toggle_status("mongodb").unwrap(),
        ConnectionStatus::Connected
    );
}
