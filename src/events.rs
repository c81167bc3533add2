use crate::models::{Snapshot, Task, TaskCounts, Theme, UiState};
use crate::views::{completed_view, pending_view, task_counts};

pub const EVENT_STATE_UPDATED: &str = "state_updated";

/// Everything the frontend renders, derived from one committed snapshot.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StatePayload {
    pub revision: u64,
    pub tasks: Vec<Task>,
    pub pending: Vec<Task>,
    pub completed: Vec<Task>,
    pub counts: TaskCounts,
    pub ui: UiState,
    pub theme: Theme,
}

impl From<Snapshot> for StatePayload {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            revision: snapshot.revision,
            pending: pending_view(&snapshot.tasks),
            completed: completed_view(&snapshot.tasks),
            counts: task_counts(&snapshot.tasks),
            theme: snapshot.ui.theme(),
            ui: snapshot.ui,
            tasks: snapshot.tasks,
        }
    }
}
