use crate::events::StatePayload;
#[cfg(all(feature = "app", not(test)))]
use crate::events::EVENT_STATE_UPDATED;
use crate::reducer::Transition;
use crate::state::AppState;

#[cfg(all(feature = "app", not(test)))]
use tauri::{AppHandle, Emitter, Runtime, State};

/// What a mutating command hands back: whether it changed anything, and the state
/// the caller should render next.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CommandOutcome {
    pub transition: Transition,
    pub state: StatePayload,
}

trait CommandCtx {
    fn emit_state_updated(&self, payload: StatePayload);
}

fn publish(ctx: &impl CommandCtx, state: &AppState, transition: Transition) -> CommandOutcome {
    let payload = StatePayload::from(state.snapshot());
    if transition.is_applied() {
        ctx.emit_state_updated(payload.clone());
    }
    CommandOutcome {
        transition,
        state: payload,
    }
}

#[cfg(all(feature = "app", not(test)))]
struct TauriCommandCtx<'a, R: Runtime> {
    app: &'a AppHandle<R>,
}

#[cfg(all(feature = "app", not(test)))]
impl<R: Runtime> CommandCtx for TauriCommandCtx<'_, R> {
    fn emit_state_updated(&self, payload: StatePayload) {
        let revision = payload.revision;
        if let Err(err) = self.app.emit(EVENT_STATE_UPDATED, payload) {
            log::warn!("commands: failed to emit state update revision={revision}: {err}");
        }
    }
}

fn load_state_impl(state: &AppState) -> StatePayload {
    StatePayload::from(state.snapshot())
}

fn add_task_impl(ctx: &impl CommandCtx, state: &AppState, title: String) -> CommandOutcome {
    let transition = state.add_task(&title);
    publish(ctx, state, transition)
}

fn toggle_task_impl(ctx: &impl CommandCtx, state: &AppState, task_id: String) -> CommandOutcome {
    let transition = state.toggle_task(&task_id);
    publish(ctx, state, transition)
}

fn remove_task_impl(ctx: &impl CommandCtx, state: &AppState, task_id: String) -> CommandOutcome {
    let transition = state.remove_task(&task_id);
    publish(ctx, state, transition)
}

fn clear_pending_impl(ctx: &impl CommandCtx, state: &AppState) -> CommandOutcome {
    let transition = state.clear_pending();
    publish(ctx, state, transition)
}

fn clear_completed_impl(ctx: &impl CommandCtx, state: &AppState) -> CommandOutcome {
    let transition = state.clear_completed();
    publish(ctx, state, transition)
}

fn clear_all_impl(ctx: &impl CommandCtx, state: &AppState) -> CommandOutcome {
    let transition = state.clear_all();
    publish(ctx, state, transition)
}

fn toggle_dark_mode_impl(ctx: &impl CommandCtx, state: &AppState) -> CommandOutcome {
    let transition = state.toggle_dark_mode();
    publish(ctx, state, transition)
}

fn dismiss_banner_impl(ctx: &impl CommandCtx, state: &AppState) -> CommandOutcome {
    let transition = state.dismiss_banner();
    publish(ctx, state, transition)
}

#[cfg(all(feature = "app", not(test)))]
#[tauri::command]
pub fn load_state(state: State<AppState>) -> StatePayload {
    load_state_impl(state.inner())
}

#[cfg(all(feature = "app", not(test)))]
#[tauri::command]
pub fn add_task(app: AppHandle, state: State<AppState>, title: String) -> CommandOutcome {
    let ctx = TauriCommandCtx { app: &app };
    add_task_impl(&ctx, state.inner(), title)
}

#[cfg(all(feature = "app", not(test)))]
#[tauri::command]
pub fn toggle_task(app: AppHandle, state: State<AppState>, task_id: String) -> CommandOutcome {
    let ctx = TauriCommandCtx { app: &app };
    toggle_task_impl(&ctx, state.inner(), task_id)
}

#[cfg(all(feature = "app", not(test)))]
#[tauri::command]
pub fn remove_task(app: AppHandle, state: State<AppState>, task_id: String) -> CommandOutcome {
    let ctx = TauriCommandCtx { app: &app };
    remove_task_impl(&ctx, state.inner(), task_id)
}

#[cfg(all(feature = "app", not(test)))]
#[tauri::command]
pub fn clear_pending(app: AppHandle, state: State<AppState>) -> CommandOutcome {
    let ctx = TauriCommandCtx { app: &app };
    clear_pending_impl(&ctx, state.inner())
}

#[cfg(all(feature = "app", not(test)))]
#[tauri::command]
pub fn clear_completed(app: AppHandle, state: State<AppState>) -> CommandOutcome {
    let ctx = TauriCommandCtx { app: &app };
    clear_completed_impl(&ctx, state.inner())
}

#[cfg(all(feature = "app", not(test)))]
#[tauri::command]
pub fn clear_all(app: AppHandle, state: State<AppState>) -> CommandOutcome {
    let ctx = TauriCommandCtx { app: &app };
    clear_all_impl(&ctx, state.inner())
}

#[cfg(all(feature = "app", not(test)))]
#[tauri::command]
pub fn toggle_dark_mode(app: AppHandle, state: State<AppState>) -> CommandOutcome {
    let ctx = TauriCommandCtx { app: &app };
    toggle_dark_mode_impl(&ctx, state.inner())
}

#[cfg(all(feature = "app", not(test)))]
#[tauri::command]
pub fn dismiss_banner(app: AppHandle, state: State<AppState>) -> CommandOutcome {
    let ctx = TauriCommandCtx { app: &app };
    dismiss_banner_impl(&ctx, state.inner())
}
