use std::time::Duration;

use tokio::time;

use crate::runner::{StageRunner, StageStatus};

use super::drill::FailoverDrill;
use super::types::{DeploymentFleet, DeploymentStatus, PodCount, Site};

const TICK: Duration = Duration::from_millis(1500);
const FINALIZE: Duration = Duration::from_millis(1000);

fn drill() -> FailoverDrill {
    FailoverDrill::with_runner(StageRunner::new(TICK), FINALIZE)
}

#[test]
fn plan_rejects_an_empty_selection() {
    let fleet = DeploymentFleet::seeded();
    let err = fleet.plan_failover(Site::Secondary, Vec::new()).unwrap_err();
    assert!(err.to_string().contains("at least one deployment"));
}

#[test]
fn plan_rejects_unknown_deployments() {
    let fleet = DeploymentFleet::seeded();
    let err = fleet.plan_failover(Site::Secondary, vec![99]).unwrap_err();
    assert!(err.to_string().contains("Unknown deployment id 99"));
}

#[test]
fn plan_builds_the_nine_stage_list() {
    let fleet = DeploymentFleet::seeded();
    let plan = fleet
        .plan_failover(Site::Secondary, vec![1, 2, 3])
        .unwrap();
    let stages = plan.stages();

    assert_eq!(stages.len(), 9);
    assert_eq!(stages[0].name(), "Validating 3 deployment(s)");
    assert_eq!(stages[1].name(), "Creating snapshots on Primary Site");
    assert_eq!(stages[2].name(), "Syncing data to Secondary Site");
    assert_eq!(stages[3].name(), "Stopping deployments on Primary Site");
    assert_eq!(stages[8].name(), "Finalizing failover");
    assert!(
        stages
            .iter()
            .all(|stage| stage.status() == StageStatus::Pending)
    );
}

#[tokio::test(start_paused = true)]
async fn full_drill_flips_the_selected_deployments() {
    let mut fleet = DeploymentFleet::seeded();
    let plan = fleet.plan_failover(Site::Secondary, vec![1, 4]).unwrap();

    let started = time::Instant::now();
    let report = drill().run(&mut fleet, &plan).await.unwrap();

    // ten ticks of stages plus the trailing flip delay
    assert_eq!(started.elapsed(), TICK * 10 + FINALIZE);
    assert_eq!(report.target, Site::Secondary);
    assert_eq!(report.moved, 2);
    assert_eq!(report.running_on_target, 2);

    assert_eq!(fleet.active_site(), Site::Secondary);
    let moved = fleet.get(1).unwrap();
    assert_eq!(moved.primary_status, DeploymentStatus::Stopped);
    assert_eq!(moved.secondary_status, DeploymentStatus::Running);
    assert_eq!(moved.primary_pods, PodCount::none());
    assert_eq!(moved.secondary_pods, PodCount::full(moved.replicas));

    let untouched = fleet.get(2).unwrap();
    assert_eq!(untouched.primary_status, DeploymentStatus::Running);
    assert_eq!(untouched.secondary_status, DeploymentStatus::Stopped);
}

#[tokio::test(start_paused = true)]
async fn fleet_is_untouched_until_finalize() {
    let mut fleet = DeploymentFleet::seeded();
    let plan = fleet.plan_failover(Site::Secondary, fleet.ids()).unwrap();
    let drill = drill();

    let run = drill.begin(&plan);
    run.wait().await.unwrap();

    // stages are done, but the flip has not happened yet
    assert_eq!(fleet.active_site(), Site::Primary);
    assert_eq!(fleet.running_count(Site::Secondary), 0);

    let report = drill.finalize(&mut fleet, &plan).await;
    assert_eq!(fleet.active_site(), Site::Secondary);
    assert_eq!(report.running_on_target, 8);
    assert_eq!(fleet.running_count(Site::Primary), 0);
}

#[test]
fn fleet_counts_follow_per_site_status() {
    let fleet = DeploymentFleet::seeded();
    assert_eq!(fleet.running_count(Site::Primary), 8);
    assert_eq!(fleet.running_count(Site::Secondary), 0);
    assert_eq!(fleet.ready_pod_total(Site::Primary), 15);
    assert_eq!(fleet.ready_pod_total(Site::Secondary), 0);
}

#[test]
fn site_parsing_and_labels() {
    assert_eq!("primary".parse::<Site>().unwrap(), Site::Primary);
    assert_eq!("secondary".parse::<Site>().unwrap(), Site::Secondary);
    assert!("east".parse::<Site>().is_err());
    assert_eq!(Site::Primary.other(), Site::Secondary);
    assert_eq!(Site::Secondary.display_name(), "Secondary Site");
    assert_eq!(PodCount::full(3).to_string(), "3/3");
}
