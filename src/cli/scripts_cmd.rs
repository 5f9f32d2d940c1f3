use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::scripts::{
    CleanIntegrationSettings, ConnectionStatus, KafkaSettings, MaintenanceScripts,
    ReplicaSetStatus,
};
use crate::store::AppStore;

use super::args::{ScriptsArgs, ScriptsCommand};
use super::render;
use super::util;

pub(crate) async fn handle(args: ScriptsArgs, config: &Config, store: &mut AppStore) -> Result<()> {
    let scripts = MaintenanceScripts::new(&config.simulation);

    match args.command {
        ScriptsCommand::CleanIntegration {
            skip_mongo,
            skip_redis,
            skip_rabbitmq,
        } => {
            let settings = CleanIntegrationSettings {
                mongo: !skip_mongo,
                redis: !skip_redis,
                rabbitmq: !skip_rabbitmq,
            };
            println!("\n🧹 Clean Integration\n");
            let run = scripts.begin_clean_integration(&settings);
            let follow = tokio::spawn(render::follow_stages(run.subscribe()));
            run.wait().await?;
            let _ = follow.await;
            println!("\n{} Integration cleanup finished", "✅".green());
            Ok(())
        }
        ScriptsCommand::Kafka {
            topic,
            partitions,
            purge,
        } => {
            let settings = KafkaSettings {
                topic,
                partitions,
                purge_messages: purge,
            };
            println!("\n📨 Kafka maintenance\n");
            let run = scripts.begin_kafka(&settings);
            let follow = tokio::spawn(render::follow_stages(run.subscribe()));
            run.wait().await?;
            let _ = follow.await;
            println!("\n{} Kafka maintenance finished", "✅".green());
            Ok(())
        }
        ScriptsCommand::Replicasets { ids, inactive } => {
            if ids.is_empty() && !inactive {
                print_replicasets(store);
                return Ok(());
            }

            let selection: Vec<u32> = if inactive {
                store
                    .replicasets
                    .replicasets()
                    .iter()
                    .filter(|rs| rs.status == ReplicaSetStatus::Inactive)
                    .map(|rs| rs.id)
                    .collect()
            } else {
                ids
            };
            util::log_verbose(format!("cleaning {} replicaset(s)", selection.len()));

            println!("\n🗑  Replicaset cleanup\n");
            let run = scripts.begin_replicaset_cleanup(&store.replicasets, &selection)?;
            let follow = tokio::spawn(render::follow_stages(run.subscribe()));
            run.wait().await?;
            let _ = follow.await;
            let removed = scripts.finish_replicaset_cleanup(&mut store.replicasets, &selection);
            println!(
                "\n{} Removed {} replicaset(s); {} remain",
                "✅".green(),
                removed,
                store.replicasets.len()
            );
            Ok(())
        }
        ScriptsCommand::Connections { test } => {
            if let Some(id) = test {
                println!("Testing connection '{id}'...");
                scripts.test_connection(&mut store.connections, &id).await?;
                let probed = store
                    .connections
                    .get(&id)
                    .map(|conn| conn.status)
                    .unwrap_or(ConnectionStatus::Error);
                println!("{} {} is {}", "✅".green(), id, probed.to_string().green());
            } else {
                print_connections(store);
            }
            Ok(())
        }
    }
}

fn print_replicasets(store: &AppStore) {
    println!(
        "\nReplicasets: {} total, {} active, {} inactive\n",
        store.replicasets.len(),
        store.replicasets.active_count(),
        store.replicasets.inactive_count()
    );
    for rs in store.replicasets.replicasets() {
        let status = match rs.status {
            ReplicaSetStatus::Active => rs.status.to_string().green(),
            ReplicaSetStatus::Inactive => rs.status.to_string().red(),
        };
        println!(
            "  [{}] {:<24} {:<5} {:<10} created {} last accessed {}",
            rs.id, rs.name, rs.pods, status, rs.created, rs.last_accessed
        );
    }
}

fn print_connections(store: &AppStore) {
    println!("\nIntegration connections:\n");
    for conn in store.connections.connections() {
        let status = match conn.status {
            ConnectionStatus::Connected => conn.status.to_string().green(),
            ConnectionStatus::Disconnected => conn.status.to_string().yellow(),
            ConnectionStatus::Error => conn.status.to_string().red(),
        };
        let database = conn
            .database
            .as_deref()
            .map(|db| format!(" db={db}"))
            .unwrap_or_default();
        println!(
            "  {:<12} {:<18} {:<14} {}:{} user={}{} (checked {})",
            conn.id, conn.name, status, conn.host, conn.port, conn.username, database,
            conn.last_checked
        );
    }
}
