use serde::{Deserialize, Serialize};

use crate::models::{Task, TaskCounts};
use crate::reducer::TaskAction;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Pending,
    Completed,
}

impl View {
    pub fn contains(&self, task: &Task) -> bool {
        match self {
            View::Pending => !task.done,
            View::Completed => task.done,
        }
    }

    /// Bulk clear acting on the shared collection, not on a filtered copy.
    pub fn clear_action(&self) -> TaskAction {
        match self {
            View::Pending => TaskAction::ClearPending,
            View::Completed => TaskAction::ClearCompleted,
        }
    }

    pub fn project(&self, tasks: &[Task]) -> Vec<Task> {
        tasks.iter().filter(|t| self.contains(t)).cloned().collect()
    }
}

pub fn pending_view(tasks: &[Task]) -> Vec<Task> {
    View::Pending.project(tasks)
}

pub fn completed_view(tasks: &[Task]) -> Vec<Task> {
    View::Completed.project(tasks)
}

pub fn task_counts(tasks: &[Task]) -> TaskCounts {
    let completed = tasks.iter().filter(|t| t.done).count();
    TaskCounts {
        total: tasks.len(),
        pending: tasks.len() - completed,
        completed,
    }
}
