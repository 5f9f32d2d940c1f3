use std::fs;

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::config::Config;
use crate::health::{HealthChecker, SendTarget, ServiceStatus};
use crate::store::AppStore;

use super::args::{HealthArgs, HealthCommand};
use super::util;

pub(crate) async fn handle(args: HealthArgs, config: &Config, store: &mut AppStore) -> Result<()> {
    let mut checker = HealthChecker::new(config.health.clone());

    match args.command {
        HealthCommand::Check { service } => {
            match service {
                Some(id) => {
                    let Some(found) = store.services.get(id) else {
                        bail!("Unknown service id {id} (try `opsdrill health check`)");
                    };
                    println!("Checking {}...", found.name);
                    let status = checker.check_one(&mut store.services, id).await?;
                    println!("{} is {}", found_name(store, id), paint(status));
                }
                None => {
                    println!("Checking all services...");
                    checker.sweep(&mut store.services).await;
                    print_services(store);
                }
            }
            Ok(())
        }
        HealthCommand::Send {
            target,
            queue,
            collection,
            data,
            file,
        } => {
            let payload = match (data, file) {
                (Some(data), _) => data,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("Failed reading payload from {}", path.display()))?,
                (None, None) => bail!("Provide the payload with --data or --file"),
            };

            let target = match target.trim() {
                "rabbitmq" => SendTarget::RabbitMq { queue },
                "mongodb" => SendTarget::MongoDb { collection },
                other => bail!("Unknown target '{other}' (expected rabbitmq or mongodb)"),
            };

            util::log_verbose(format!("placing {} bytes", payload.len()));
            println!("Sending data to {}...", target.label());
            let receipt = checker.send_payload(&target, &payload).await?;
            println!(
                "{} Placed {} bytes on {}",
                "✅".green(),
                receipt.bytes,
                receipt.target
            );
            Ok(())
        }
    }
}

fn found_name(store: &AppStore, id: u32) -> String {
    store
        .services
        .get(id)
        .map(|service| service.name.clone())
        .unwrap_or_else(|| format!("service {id}"))
}

fn print_services(store: &AppStore) {
    println!(
        "\nServices: {} healthy, {} degraded, {} down\n",
        store.services.healthy_count(),
        store.services.degraded_count(),
        store.services.down_count()
    );
    for service in store.services.services() {
        println!(
            "  [{}] {:<18} {:<18} {:<10} resp {:<6} uptime {:<7} cpu {:<4} mem {:<7} {} (checked {})",
            service.id,
            service.name,
            service.kind,
            paint(service.status),
            service.response_time,
            service.uptime,
            service.cpu,
            service.memory,
            service.requests,
            service.last_checked
        );
    }
}

fn paint(status: ServiceStatus) -> colored::ColoredString {
    let label = status.to_string();
    match status {
        ServiceStatus::Healthy => label.green(),
        ServiceStatus::Degraded => label.yellow(),
        ServiceStatus::Down => label.red(),
        ServiceStatus::Checking => label.cyan(),
    }
}
