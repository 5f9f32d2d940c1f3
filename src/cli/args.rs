use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::Config;

use super::commands;

/// Entry point for the `opsdrill` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "opsdrill",
    about = "Rehearse failover and maintenance runbooks against a simulated two-site cluster",
    version,
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose diagnostics
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Failover drills between the primary and secondary sites
    Failover(FailoverArgs),
    /// Maintenance scripts: integration cleanup, Kafka, replicasets
    Scripts(ScriptsArgs),
    /// View, edit, and restore ConfigMaps
    Config(ConfigArgs),
    /// Service health checks and data placement tests
    Health(HealthArgs),
    /// Manage geographic rules
    Rules(RulesArgs),
}

#[derive(Debug, Args)]
pub struct FailoverArgs {
    #[command(subcommand)]
    pub command: FailoverCommand,
}

#[derive(Debug, Subcommand)]
pub enum FailoverCommand {
    /// Show both sites and the deployment fleet
    Status,
    /// Run a failover drill to the target site
    Run(FailoverRunArgs),
}

#[derive(Debug, Args)]
pub struct FailoverRunArgs {
    /// Target site (primary or secondary)
    #[arg(long)]
    pub target: String,

    /// Deployment ids to move, comma separated
    #[arg(long, value_delimiter = ',')]
    pub deployments: Vec<u32>,

    /// Move every deployment
    #[arg(long)]
    pub all: bool,
}

#[derive(Debug, Args)]
pub struct ScriptsArgs {
    #[command(subcommand)]
    pub command: ScriptsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ScriptsCommand {
    /// Clean the integration backends and verify data integrity
    CleanIntegration {
        /// Leave MongoDB collections alone
        #[arg(long)]
        skip_mongo: bool,
        /// Leave the Redis cache alone
        #[arg(long)]
        skip_redis: bool,
        /// Leave RabbitMQ queues alone
        #[arg(long)]
        skip_rabbitmq: bool,
    },
    /// Run Kafka topic maintenance
    Kafka {
        /// Topic to operate on
        #[arg(long, default_value = "default-topic")]
        topic: String,
        /// Partition count to verify
        #[arg(long, default_value_t = 3)]
        partitions: u32,
        /// Purge old messages before processing
        #[arg(long)]
        purge: bool,
    },
    /// List replicasets, or clean up a selection
    Replicasets {
        /// Replicaset ids to delete, comma separated
        #[arg(long, value_delimiter = ',')]
        ids: Vec<u32>,
        /// Delete every inactive replicaset
        #[arg(long)]
        inactive: bool,
    },
    /// Show integration connections, or probe one
    Connections {
        /// Probe this connection id
        #[arg(long)]
        test: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// List ConfigMaps
    List {
        /// Filter by name or deployment
        #[arg(long)]
        search: Option<String>,
    },
    /// Print one ConfigMap and its payload
    Show {
        name: String,
        /// Print the payload exactly as stored
        #[arg(long)]
        raw: bool,
    },
    /// Replace a ConfigMap payload (validated before saving)
    Edit {
        name: String,
        /// Read the new payload from a file
        #[arg(long)]
        file: Option<PathBuf>,
        /// Pass the new payload inline
        #[arg(long)]
        data: Option<String>,
        /// Recorded as the editing user
        #[arg(long, default_value = "admin@company.com")]
        editor: String,
        /// Recorded as the change summary
        #[arg(long, default_value = "Edited via opsdrill")]
        message: String,
    },
    /// Show a ConfigMap's version history
    History { name: String },
    /// Make a stored version the current payload
    Restore {
        name: String,
        /// Version id from `config history`
        #[arg(long)]
        version: u32,
    },
}

#[derive(Debug, Args)]
pub struct HealthArgs {
    #[command(subcommand)]
    pub command: HealthCommand,
}

#[derive(Debug, Subcommand)]
pub enum HealthCommand {
    /// Sweep every service, or check a single one
    Check {
        /// Check only this service id
        #[arg(long)]
        service: Option<u32>,
    },
    /// Validate a JSON payload and place it on a test target
    Send {
        /// Destination: rabbitmq or mongodb
        #[arg(long)]
        target: String,
        /// RabbitMQ queue name
        #[arg(long, default_value = "default-queue")]
        queue: String,
        /// MongoDB collection name
        #[arg(long, default_value = "test-collection")]
        collection: String,
        /// Inline JSON payload
        #[arg(long)]
        data: Option<String>,
        /// Read the payload from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub struct RulesArgs {
    #[command(subcommand)]
    pub command: RulesCommand,
}

#[derive(Debug, Subcommand)]
pub enum RulesCommand {
    /// List rules
    List {
        /// Filter by name, description, or tag
        #[arg(long)]
        search: Option<String>,
        /// Only active rules
        #[arg(long)]
        active: bool,
        /// Only inactive rules
        #[arg(long)]
        inactive: bool,
    },
    /// Print one rule with its geometry
    Show { id: u32 },
    /// Flip a rule's active flag
    Toggle { id: u32 },
}

impl Cli {
    pub async fn run(self, config: Config) -> Result<()> {
        commands::run(self, config).await
    }
}
