mod cli;
mod config;
mod configmap;
mod failover;
mod health;
mod jsontext;
mod rules;
mod runner;
mod scripts;
mod store;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let config = config::Config::load()?;
    cli.run(config).await
}
