use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tokio::sync::watch;
use uuid::Uuid;

use crate::models::{Snapshot, Task, TaskCounts, Timestamp, UiState};
use crate::reducer::{reduce_tasks, reduce_ui, TaskAction, Transition, UiAction};
use crate::views::{completed_view, pending_view, task_counts, View};

/// Single writer for both slices. Every intent takes the lock, runs the reducer and
/// publishes the committed snapshot before the lock is released.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Mutex<AppData>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Vec::new(), UiState::default())
    }
}

impl AppState {
    pub fn new(tasks: Vec<Task>, ui: UiState) -> Self {
        let last_created_at = tasks.iter().map(|t| t.created_at).max().unwrap_or(0);
        let (updates, _) = watch::channel(Snapshot {
            revision: 0,
            tasks: tasks.clone(),
            ui,
        });
        Self {
            inner: Arc::new(Mutex::new(AppData {
                tasks,
                ui,
                revision: 0,
                last_created_at,
                updates,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, AppData> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            log::warn!("state: lock poisoned, continuing with last committed data");
            poisoned.into_inner()
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    /// The receiver always holds the latest committed snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.lock().updates.subscribe()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.lock().tasks.clone()
    }

    pub fn ui(&self) -> UiState {
        self.lock().ui
    }

    pub fn pending(&self) -> Vec<Task> {
        pending_view(&self.lock().tasks)
    }

    pub fn completed(&self) -> Vec<Task> {
        completed_view(&self.lock().tasks)
    }

    pub fn counts(&self) -> TaskCounts {
        task_counts(&self.lock().tasks)
    }

    pub fn find_task(&self, task_id: &str) -> Option<Task> {
        self.lock().tasks.iter().find(|t| t.id == task_id).cloned()
    }

    pub fn add_task(&self, title: &str) -> Transition {
        let mut guard = self.lock();
        // Wall clock may step backwards; creation times must not.
        let created_at: Timestamp = Utc::now().timestamp_millis().max(guard.last_created_at);
        let id = Uuid::new_v4().to_string();
        let transition = guard.apply_tasks(TaskAction::Add {
            id: id.clone(),
            title: title.to_string(),
            created_at,
        });
        if transition.is_applied() {
            guard.last_created_at = created_at;
            log::info!("state: task added id={id} created_at={created_at}");
        }
        transition
    }

    pub fn toggle_task(&self, task_id: &str) -> Transition {
        self.lock().apply_tasks(TaskAction::Toggle {
            id: task_id.to_string(),
        })
    }

    pub fn remove_task(&self, task_id: &str) -> Transition {
        self.lock().apply_tasks(TaskAction::Remove {
            id: task_id.to_string(),
        })
    }

    pub fn clear_all(&self) -> Transition {
        self.lock().apply_tasks(TaskAction::ClearAll)
    }

    pub fn clear_pending(&self) -> Transition {
        self.clear_view(View::Pending)
    }

    pub fn clear_completed(&self) -> Transition {
        self.clear_view(View::Completed)
    }

    pub fn clear_view(&self, view: View) -> Transition {
        self.lock().apply_tasks(view.clear_action())
    }

    pub fn toggle_dark_mode(&self) -> Transition {
        self.lock().apply_ui(UiAction::ToggleDarkMode)
    }

    pub fn dismiss_banner(&self) -> Transition {
        self.lock().apply_ui(UiAction::DismissBanner)
    }
}

#[derive(Debug)]
struct AppData {
    tasks: Vec<Task>,
    ui: UiState,
    revision: u64,
    last_created_at: Timestamp,
    updates: watch::Sender<Snapshot>,
}

impl AppData {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            revision: self.revision,
            tasks: self.tasks.clone(),
            ui: self.ui,
        }
    }

    fn apply_tasks(&mut self, action: TaskAction) -> Transition {
        log::debug!("state: task action={action:?}");
        let transition = reduce_tasks(&mut self.tasks, action);
        self.commit(transition)
    }

    fn apply_ui(&mut self, action: UiAction) -> Transition {
        log::debug!("state: ui action={action:?}");
        let transition = reduce_ui(&mut self.ui, action);
        self.commit(transition)
    }

    fn commit(&mut self, transition: Transition) -> Transition {
        match transition {
            Transition::Applied => {
                self.revision += 1;
                self.updates.send_replace(self.snapshot());
            }
            Transition::NoOp(reason) => {
                log::debug!("state: no-op reason={reason:?} revision={}", self.revision);
            }
        }
        transition
    }
}
