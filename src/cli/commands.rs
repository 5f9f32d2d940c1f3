use anyhow::Result;

use crate::config::Config;
use crate::store::AppStore;

use super::args::{Cli, Command};
use super::config_cmd;
use super::failover_cmd;
use super::health_cmd;
use super::rules_cmd;
use super::scripts_cmd;
use super::util;

pub(crate) async fn run(cli: Cli, config: Config) -> Result<()> {
    util::set_verbose_logging(cli.verbose);
    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let Some(command) = cli.command else {
        show_welcome_message(&config)?;
        return Ok(());
    };

    // domain state is in-memory only: seeded fresh per invocation
    let mut store = AppStore::seeded();
    util::log_verbose(format!(
        "store seeded: {} deployments, {} configmaps, {} services, {} rules",
        store.fleet.deployments().len(),
        store.configmaps.configmaps().len(),
        store.services.services().len(),
        store.rules.rules().len(),
    ));

    match command {
        Command::Failover(args) => failover_cmd::handle(args, &config, &mut store).await,
        Command::Scripts(args) => scripts_cmd::handle(args, &config, &mut store).await,
        Command::Config(args) => config_cmd::handle(args, &mut store),
        Command::Health(args) => health_cmd::handle(args, &config, &mut store).await,
        Command::Rules(args) => rules_cmd::handle(args, &mut store),
    }
}

fn show_welcome_message(config: &Config) -> Result<()> {
    let config_path = Config::config_path()?;

    println!("🧯 Welcome to opsdrill - rehearse your runbooks before you need them!");
    println!();
    println!("📖 What opsdrill does:");
    println!("   • Runs failover drills between simulated primary and secondary sites");
    println!("   • Replays maintenance scripts (integration cleanup, Kafka, replicasets)");
    println!("   • Manages mock ConfigMaps with validation and version history");
    println!("   • Sweeps service health and tests data placement");
    println!("   • Everything is in-memory; no real system is ever touched");
    println!();
    println!("💡 How to use opsdrill:");
    println!("   opsdrill failover status                           # Site and fleet overview");
    println!("   opsdrill failover run --target secondary --all     # Full failover drill");
    println!("   opsdrill scripts clean-integration                 # Clean Mongo/Redis/RabbitMQ");
    println!("   opsdrill scripts kafka --topic orders --purge      # Kafka maintenance");
    println!("   opsdrill scripts replicasets --inactive            # Delete stale replicasets");
    println!("   opsdrill config show myapp-config                  # Pretty-printed payload");
    println!("   opsdrill config restore myapp-config --version 3   # Roll back a payload");
    println!("   opsdrill health check                              # Sweep every service");
    println!("   opsdrill rules list --active                       # Active geo rules");
    println!();
    println!("⚙️  Settings are read from {}", config_path.display());
    println!(
        "   Stage tick: {}ms, finalize delay: {}ms{}",
        config.simulation.tick_ms,
        config.simulation.finalize_delay_ms,
        match config.health.seed {
            Some(seed) => format!(", health seed: {seed}"),
            None => String::new(),
        }
    );
    println!();
    println!("❓ For more help: opsdrill --help");
    Ok(())
}
