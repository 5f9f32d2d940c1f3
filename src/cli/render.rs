use colored::Colorize;
use tokio::sync::watch;

use crate::runner::{Stage, StageStatus};

/// Print stage transitions as they are published, one line per change.
/// Returns once the run's channel closes.
pub(crate) async fn follow_stages(mut rx: watch::Receiver<Vec<Stage>>) {
    let mut seen: Vec<StageStatus> = rx.borrow().iter().map(Stage::status).collect();

    while rx.changed().await.is_ok() {
        let snapshot = rx.borrow_and_update().clone();
        for (index, stage) in snapshot.iter().enumerate() {
            if seen.get(index).copied() != Some(stage.status()) {
                print_transition(stage);
            }
        }
        seen = snapshot.iter().map(Stage::status).collect();
    }
}

fn print_transition(stage: &Stage) {
    match stage.status() {
        StageStatus::Running => println!("  {} {}", "▸".cyan(), stage.name()),
        StageStatus::Completed => println!("  {} {}", "✔".green(), stage.name().green()),
        StageStatus::Error => println!("  {} {}", "✖".red(), stage.name().red()),
        StageStatus::Pending => {}
    }
}
