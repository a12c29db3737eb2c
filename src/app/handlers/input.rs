use crate::app::{AppState, InputMode};

use super::{editing, wheels};

pub fn enter_mode(state: &mut AppState, mode: InputMode) {
    state.ui.input_buffer.clear();
    if mode == InputMode::RenameWheel {
        if let Some(label) = state.active_session().map(|s| s.label().to_string()) {
            state.ui.input_buffer = label;
        }
    }
    state.ui.pending_removal = None;
    state.ui.input_mode = mode;
}

pub fn exit_mode(state: &mut AppState) {
    state.ui.input_mode = InputMode::Normal;
    state.ui.input_buffer.clear();
}

pub fn handle_input_char(state: &mut AppState, c: char) {
    if state.ui.input_mode.is_text_entry() {
        state.ui.input_buffer.push(c);
    }
}

pub fn handle_backspace(state: &mut AppState) {
    state.ui.input_buffer.pop();
}

pub fn handle_paste(state: &mut AppState, data: &str) {
    if state.ui.input_mode.is_text_entry() {
        // Text fields are single-line
        let line = data.lines().next().unwrap_or("");
        state.ui.input_buffer.push_str(line);
    }
}

/// Enter pressed in a text field. Add-name and add-team stay open so several
/// entries can be typed in a row.
pub fn handle_submit(state: &mut AppState) {
    let text = std::mem::take(&mut state.ui.input_buffer);
    match state.ui.input_mode {
        InputMode::AddName => editing::handle_add_name(state, &text),
        InputMode::AddTeam => editing::handle_add_team(state, &text),
        InputMode::RenameWheel => {
            wheels::handle_rename(state, &text);
            exit_mode(state);
        }
        InputMode::ImportToken => {
            wheels::handle_import(state, &text);
            exit_mode(state);
        }
        InputMode::Normal | InputMode::Help => exit_mode(state),
    }
}
