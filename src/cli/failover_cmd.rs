use anyhow::{Result, bail};
use colored::Colorize;

use crate::config::Config;
use crate::failover::{DeploymentFleet, FailoverDrill, Site};
use crate::store::AppStore;

use super::args::{FailoverArgs, FailoverCommand, FailoverRunArgs};
use super::render;
use super::util;

pub(crate) async fn handle(args: FailoverArgs, config: &Config, store: &mut AppStore) -> Result<()> {
    match args.command {
        FailoverCommand::Status => {
            print_status(&store.fleet);
            Ok(())
        }
        FailoverCommand::Run(run_args) => run_drill(run_args, config, store).await,
    }
}

async fn run_drill(args: FailoverRunArgs, config: &Config, store: &mut AppStore) -> Result<()> {
    let target: Site = args.target.trim().parse()?;

    let ids = if args.all {
        store.fleet.ids()
    } else if !args.deployments.is_empty() {
        args.deployments
    } else {
        bail!("Select deployments with --deployments 1,2,3 or pass --all");
    };

    let plan = store.fleet.plan_failover(target, ids)?;
    util::log_verbose(format!("failover plan: {} stage(s)", plan.stages().len()));

    println!(
        "\n{} Failover to {} ({} deployment(s))\n",
        "⇄".cyan(),
        target.display_name().bold(),
        plan.deployment_ids().len()
    );

    let drill = FailoverDrill::new(&config.simulation);
    let run = drill.begin(&plan);
    let follow = tokio::spawn(render::follow_stages(run.subscribe()));
    run.wait().await?;
    let report = drill.finalize(&mut store.fleet, &plan).await;
    let _ = follow.await;

    println!(
        "\n{} {} deployment(s) now running on {}",
        "✅".green(),
        report.moved,
        report.target.display_name().bold()
    );
    print_status(&store.fleet);
    Ok(())
}

fn print_status(fleet: &DeploymentFleet) {
    let active = fleet.active_site();
    println!(
        "\nCurrently active: {} ({} of {} deployments running)\n",
        active.display_name().bold().green(),
        fleet.running_count(active),
        fleet.deployments().len()
    );

    for site in [Site::Primary, Site::Secondary] {
        let marker = if site == active {
            " [active]".green().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} ({}){} - running: {}, stopped: {}, pods: {}",
            site.display_name().bold(),
            site.endpoint(),
            marker,
            fleet.running_count(site),
            fleet.deployments().len() - fleet.running_count(site),
            fleet.ready_pod_total(site)
        );
    }

    println!();
    for deployment in fleet.deployments() {
        println!(
            "  [{}] {:<24} {:<20} primary: {:<9} {:<5} secondary: {:<9} {:<5} {} / {}",
            deployment.id,
            deployment.name,
            deployment.kind,
            deployment.primary_status.to_string(),
            deployment.primary_pods.to_string(),
            deployment.secondary_status.to_string(),
            deployment.secondary_pods.to_string(),
            deployment.memory,
            deployment.cpu
        );
    }
}
