#![allow(dead_code)]

use std::fmt;

/// Progress of a single step within a staged run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageStatus {
    Pending,
    Running,
    Completed,
    Error,
}

impl StageStatus {
    /// Terminal statuses never change again once reached.
    pub fn is_terminal(self) -> bool {
        matches!(self, StageStatus::Completed | StageStatus::Error)
    }
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StageStatus::Pending => "pending",
            StageStatus::Running => "running",
            StageStatus::Completed => "completed",
            StageStatus::Error => "error",
        };
        write!(f, "{label}")
    }
}

/// One named step of a staged operation. The name is fixed when the stage
/// list is built; only the status moves while a run is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    name: String,
    status: StageStatus,
}

impl Stage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: StageStatus::Pending,
        }
    }

    /// Build a pending stage list from an ordered sequence of names.
    pub fn list<I, S>(names: I) -> Vec<Stage>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(Stage::new).collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> StageStatus {
        self.status
    }

    pub(super) fn set_status(&mut self, status: StageStatus) {
        self.status = status;
    }
}
