use crate::app::{AppState, FocusPanel};
use crate::error::WheelError;
use crate::models::MAX_MEMBERS_PER_TEAM;

use super::settle;

pub fn handle_add_name(state: &mut AppState, name: &str) {
    let result = state
        .registry
        .active_unlocked_mut()
        .and_then(|session| session.add_name(name));
    if settle(state, result).is_some() {
        let last = state.active_session().map(|s| s.names().len().saturating_sub(1));
        state.ui.selected_name_idx = last.unwrap_or(0);
    }
}

pub fn handle_add_team(state: &mut AppState, name: &str) {
    let result = state
        .registry
        .active_unlocked_mut()
        .and_then(|session| session.add_team(name));
    if settle(state, result).is_some() {
        let last = state.active_session().map(|s| s.teams().len().saturating_sub(1));
        state.ui.selected_team_idx = last.unwrap_or(0);
    }
}

/// Delete the highlighted name or team, depending on focus.
pub fn handle_remove_selected(state: &mut AppState) {
    match state.ui.focus {
        FocusPanel::Pool => {
            let index = state.ui.selected_name_idx;
            let result = state
                .registry
                .active_unlocked_mut()
                .and_then(|session| session.remove_name(index));
            if let Some(name) = settle(state, result) {
                state.notify(format!("Removed {}", name));
            }
        }
        FocusPanel::Teams => {
            let index = state.ui.selected_team_idx;
            let result = state
                .registry
                .active_unlocked_mut()
                .and_then(|session| session.remove_team(index));
            if let Some(team) = settle(state, result) {
                state.notify(format!("Removed {}; members returned to the pool", team));
            }
        }
    }
}

pub fn handle_capacity_step(state: &mut AppState, delta: isize) {
    let Some(current) = state.active_session().map(|s| s.members_per_team()) else {
        return;
    };
    let target = current.saturating_add_signed(delta);
    if target == 0 || target > MAX_MEMBERS_PER_TEAM {
        state.report(&WheelError::InvalidCapacity(target));
        return;
    }

    let result = state
        .registry
        .active_unlocked_mut()
        .and_then(|session| session.set_members_per_team(target));
    if settle(state, result).is_some() {
        state.notify(format!("Members per team: {}", target));
    }
}

pub fn handle_reset_teams(state: &mut AppState) {
    let result = state
        .registry
        .active_unlocked_mut()
        .and_then(|session| session.reset_teams());
    if settle(state, result).is_some() {
        state.ui.result = None;
        state.notify("Teams reset; everyone is back in the pool");
    }
}

pub fn handle_clear_teams(state: &mut AppState) {
    let result = state
        .registry
        .active_unlocked_mut()
        .and_then(|session| session.clear_teams());
    if settle(state, result).is_some() {
        state.ui.result = None;
        state.notify("Teams cleared");
    }
}

pub fn move_selection(state: &mut AppState, down: bool) {
    let Some((names, teams)) = state
        .active_session()
        .map(|s| (s.names().len(), s.teams().len()))
    else {
        return;
    };
    let (len, idx) = match state.ui.focus {
        FocusPanel::Pool => (names, &mut state.ui.selected_name_idx),
        FocusPanel::Teams => (teams, &mut state.ui.selected_team_idx),
    };
    if len == 0 {
        *idx = 0;
        return;
    }
    *idx = if down {
        (*idx + 1) % len
    } else {
        (*idx + len - 1) % len
    };
}
