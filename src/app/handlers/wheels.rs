use crate::app::{AppState, PendingRemoval};
use crate::error::WheelError;
use crate::share;
use anyhow::Result;
use tracing::{info, warn};

use super::settle;

pub fn handle_new_wheel(state: &mut AppState) {
    let id = state.registry.add_session();
    if state.registry.set_active(id).is_ok() {
        state.on_wheel_switched();
    }
    state.mark_dirty();
    state.notify(format!("Added Wheel {}", id));
}

pub fn handle_select_wheel(state: &mut AppState, index: usize) {
    let Some(id) = state.registry.sessions().get(index).map(|s| s.id()) else {
        return;
    };
    if id != state.active_id() && state.registry.set_active(id).is_ok() {
        state.on_wheel_switched();
        state.mark_dirty();
    }
}

pub fn handle_cycle_wheel(state: &mut AppState, forward: bool) {
    let before = state.active_id();
    if forward {
        state.registry.select_next();
    } else {
        state.registry.select_prev();
    }
    if state.active_id() != before {
        state.on_wheel_switched();
        state.mark_dirty();
    }
}

/// First press: remember which wheel to remove and ask for confirmation.
pub fn handle_initiate_remove(state: &mut AppState) {
    if state.registry.len() <= 1 {
        state.report(&WheelError::LastSession);
        return;
    }
    let Some(session) = state.active_session() else {
        return;
    };
    let pending = PendingRemoval {
        session_id: session.id(),
        label: session.label().to_string(),
    };
    state.ui.pending_removal = Some(pending);
}

pub fn handle_confirm_remove(state: &mut AppState) {
    let Some(pending) = state.ui.pending_removal.take() else {
        return;
    };
    let result = state.registry.remove_session(pending.session_id);
    if settle(state, result).is_some() {
        state.on_wheel_switched();
        state.notify(format!("Removed {}", pending.label));
    }
}

pub fn handle_set_global_lock(state: &mut AppState, locked: bool) {
    state.registry.set_global_lock(locked);
    state.mark_dirty();
    state.notify(if locked {
        "All wheels locked"
    } else {
        "All wheels unlocked"
    });
}

pub fn handle_rename(state: &mut AppState, label: &str) {
    let id = state.active_id();
    let result = state.registry.rename_session(id, label);
    if settle(state, result).is_some() {
        state.notify("Wheel renamed");
    }
}

pub fn handle_import(state: &mut AppState, token: &str) {
    match share::decode(token) {
        Some(config) => {
            let id = state.registry.import_session(config);
            state.on_wheel_switched();
            state.mark_dirty();
            let label = state
                .active_session()
                .map(|s| s.label().to_string())
                .unwrap_or_default();
            info!(session = id, "imported shared wheel");
            state.notify(format!("Imported {}", label));
        }
        None => state.notify("That share token could not be read"),
    }
}

/// Token for the active wheel, or `None` if there is no active wheel.
pub fn share_token(state: &AppState) -> Option<String> {
    state.active_session().map(|s| share::encode(&s.config()))
}

pub fn handle_copy_share(state: &mut AppState) {
    let Some(token) = share_token(state) else {
        return;
    };
    match copy_to_clipboard(&token) {
        Ok(()) => state.notify("Share token copied to clipboard"),
        Err(e) => {
            warn!(error = %e, "clipboard unavailable");
            state.notify(format!("Share token: {}", token));
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}
