//! Pure transitions for the two state slices.
//!
//! Reducers never fail. Input that cannot change state (a blank title, an id
//! that is not in the list, a clear with nothing to remove) is reported as
//! [`Transition::NoOp`] so callers can tell it apart from an applied change.

use serde::Serialize;

use crate::models::{Task, TaskId, Timestamp, UiState};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoOpReason {
    EmptyTitle,
    UnknownTask,
    NothingToClear,
    BannerAlreadyDismissed,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Transition {
    Applied,
    NoOp(NoOpReason),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// `id` and `created_at` are minted by the store.
    Add {
        id: TaskId,
        title: String,
        created_at: Timestamp,
    },
    Toggle {
        id: TaskId,
    },
    Remove {
        id: TaskId,
    },
    ClearAll,
    ClearPending,
    ClearCompleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    ToggleDarkMode,
    DismissBanner,
}

pub fn reduce_tasks(tasks: &mut Vec<Task>, action: TaskAction) -> Transition {
    match action {
        TaskAction::Add {
            id,
            title,
            created_at,
        } => {
            let title = title.trim();
            if title.is_empty() {
                return Transition::NoOp(NoOpReason::EmptyTitle);
            }
            tasks.insert(
                0,
                Task {
                    id,
                    title: title.to_string(),
                    done: false,
                    created_at,
                },
            );
            Transition::Applied
        }
        TaskAction::Toggle { id } => match tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = !task.done;
                Transition::Applied
            }
            None => Transition::NoOp(NoOpReason::UnknownTask),
        },
        TaskAction::Remove { id } => match tasks.iter().position(|t| t.id == id) {
            Some(index) => {
                tasks.remove(index);
                Transition::Applied
            }
            None => Transition::NoOp(NoOpReason::UnknownTask),
        },
        TaskAction::ClearAll => retain_reporting(tasks, |_| false),
        TaskAction::ClearPending => retain_reporting(tasks, |t| t.done),
        TaskAction::ClearCompleted => retain_reporting(tasks, |t| !t.done),
    }
}

fn retain_reporting(tasks: &mut Vec<Task>, keep: impl Fn(&Task) -> bool) -> Transition {
    let before = tasks.len();
    tasks.retain(keep);
    if tasks.len() == before {
        Transition::NoOp(NoOpReason::NothingToClear)
    } else {
        Transition::Applied
    }
}

pub fn reduce_ui(ui: &mut UiState, action: UiAction) -> Transition {
    match action {
        UiAction::ToggleDarkMode => {
            ui.dark_mode = !ui.dark_mode;
            Transition::Applied
        }
        UiAction::DismissBanner => {
            if !ui.show_banner {
                return Transition::NoOp(NoOpReason::BannerAlreadyDismissed);
            }
            ui.show_banner = false;
            Transition::Applied
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(tasks: &mut Vec<Task>, id: &str, title: &str, created_at: i64) -> Transition {
        reduce_tasks(
            tasks,
            TaskAction::Add {
                id: id.to_string(),
                title: title.to_string(),
                created_at,
            },
        )
    }

    fn make_task(id: &str, done: bool) -> Task {
        Task {
            id: id.to_string(),
            title: format!("task-{id}"),
            done,
            created_at: 1,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn add_inserts_newest_first_with_trimmed_title() {
        let mut tasks = Vec::new();
        for i in 0..5 {
            let res = add(&mut tasks, &format!("t{i}"), &format!("  task {i} "), i);
            assert_eq!(res, Transition::Applied);
            assert_eq!(tasks.len(), i as usize + 1);
            assert_eq!(tasks[0].id, format!("t{i}"));
        }
        assert_eq!(tasks[0].title, "task 4");
        assert!(!tasks[0].done);
        assert_eq!(ids(&tasks), vec!["t4", "t3", "t2", "t1", "t0"]);
    }

    #[test]
    fn add_with_blank_title_is_a_no_op() {
        let mut tasks = vec![make_task("a", false)];
        for title in ["", "   ", "\t\n"] {
            let res = add(&mut tasks, "x", title, 10);
            assert_eq!(res, Transition::NoOp(NoOpReason::EmptyTitle));
        }
        assert_eq!(tasks, vec![make_task("a", false)]);
    }

    #[test]
    fn toggle_flips_in_place_and_twice_restores() {
        let mut tasks = vec![make_task("a", false), make_task("b", true)];
        let original = tasks.clone();

        let res = reduce_tasks(&mut tasks, TaskAction::Toggle { id: "b".into() });
        assert!(res.is_applied());
        assert_eq!(ids(&tasks), vec!["a", "b"]);
        assert!(!tasks[1].done);

        reduce_tasks(&mut tasks, TaskAction::Toggle { id: "b".into() });
        assert_eq!(tasks, original);

        let res = reduce_tasks(
            &mut tasks,
            TaskAction::Toggle {
                id: "missing".into(),
            },
        );
        assert_eq!(res, Transition::NoOp(NoOpReason::UnknownTask));
        assert_eq!(tasks, original);
    }

    #[test]
    fn remove_preserves_order_and_ignores_unknown_ids() {
        let mut tasks = vec![
            make_task("a", false),
            make_task("b", true),
            make_task("c", false),
        ];
        let res = reduce_tasks(&mut tasks, TaskAction::Remove { id: "b".into() });
        assert!(res.is_applied());
        assert_eq!(ids(&tasks), vec!["a", "c"]);

        let before = tasks.clone();
        let res = reduce_tasks(&mut tasks, TaskAction::Remove { id: "b".into() });
        assert_eq!(res, Transition::NoOp(NoOpReason::UnknownTask));
        assert_eq!(tasks, before);
    }

    #[test]
    fn bulk_clears_keep_the_other_group_in_order() {
        let seed = vec![
            make_task("a", false),
            make_task("b", true),
            make_task("c", false),
            make_task("d", true),
        ];

        let mut tasks = seed.clone();
        assert!(reduce_tasks(&mut tasks, TaskAction::ClearPending).is_applied());
        assert_eq!(ids(&tasks), vec!["b", "d"]);
        assert_eq!(
            reduce_tasks(&mut tasks, TaskAction::ClearPending),
            Transition::NoOp(NoOpReason::NothingToClear)
        );

        let mut tasks = seed.clone();
        assert!(reduce_tasks(&mut tasks, TaskAction::ClearCompleted).is_applied());
        assert_eq!(ids(&tasks), vec!["a", "c"]);

        let mut tasks = seed;
        assert!(reduce_tasks(&mut tasks, TaskAction::ClearAll).is_applied());
        assert!(tasks.is_empty());
        assert_eq!(
            reduce_tasks(&mut tasks, TaskAction::ClearAll),
            Transition::NoOp(NoOpReason::NothingToClear)
        );
    }

    #[test]
    fn ui_reducer_toggles_theme_and_dismisses_banner_once() {
        let mut ui = UiState::default();
        assert!(reduce_ui(&mut ui, UiAction::ToggleDarkMode).is_applied());
        assert!(ui.dark_mode);
        reduce_ui(&mut ui, UiAction::ToggleDarkMode);
        assert!(!ui.dark_mode);

        assert!(reduce_ui(&mut ui, UiAction::DismissBanner).is_applied());
        assert!(!ui.show_banner);
        assert_eq!(
            reduce_ui(&mut ui, UiAction::DismissBanner),
            Transition::NoOp(NoOpReason::BannerAlreadyDismissed)
        );
        assert!(!ui.show_banner);
    }

    #[test]
    fn transition_serializes_with_status_and_reason() {
        assert_eq!(
            serde_json::to_value(Transition::Applied).unwrap(),
            serde_json::json!({ "status": "applied" })
        );
        assert_eq!(
            serde_json::to_value(Transition::NoOp(NoOpReason::EmptyTitle)).unwrap(),
            serde_json::json!({ "status": "no_op", "reason": "empty_title" })
        );
    }
}
