#[cfg_attr(not(feature = "app"), allow(dead_code))]
mod commands;
pub mod events;
pub mod logging;
pub mod models;
pub mod reducer;
pub mod state;
pub mod views;

pub use crate::models::{Snapshot, Task, TaskCounts, Theme, UiState};
pub use crate::reducer::{NoOpReason, Transition};
pub use crate::state::AppState;
pub use crate::views::View;

#[cfg(all(feature = "app", not(test)))]
use tauri::Manager;

#[cfg(all(feature = "app", not(test)))]
use crate::commands::*;
#[cfg(all(feature = "app", not(test)))]
use crate::logging::init_logging;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
#[cfg(all(feature = "app", not(test)))]
pub fn run() {
    tauri::Builder::default()
        .manage(AppState::default())
        .setup(|app| {
            let log_dir = app.path().app_log_dir()?;
            if let Err(err) = init_logging(&log_dir) {
                // The app stays usable without file logs.
                eprintln!("logging: failed to initialize dir={}: {err}", log_dir.display());
            }
            let counts = app.state::<AppState>().counts();
            log::info!("app: setup complete tasks={}", counts.total);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            load_state,
            add_task,
            toggle_task,
            remove_task,
            clear_pending,
            clear_completed,
            clear_all,
            toggle_dark_mode,
            dismiss_banner,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
