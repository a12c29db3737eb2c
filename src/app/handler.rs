use crate::app::{Action, AppState, InputMode};
use anyhow::Result;

use super::handlers::{editing, input, spin, wheels};

pub fn process_action(state: &mut AppState, action: Action) -> Result<()> {
    // Any action other than the confirmation (or a tick) cancels a pending removal
    if state.ui.pending_removal.is_some()
        && !matches!(
            action,
            Action::ConfirmRemoveWheel | Action::Tick | Action::Frames(_) | Action::Resize(..)
        )
    {
        state.ui.pending_removal = None;
    }

    match action {
        Action::Tick | Action::CancelPending => {}
        Action::Frames(frames) => spin::advance_frames(state, frames),
        Action::Resize(w, h) => {
            state.system.terminal_size = (w, h);
        }
        Action::Quit => {
            state.system.should_quit = true;
        }

        // Spinning
        Action::Spin => spin::handle_spin(state),
        Action::Undo => spin::handle_undo(state),
        Action::DismissResult => {
            state.ui.result = None;
        }

        // Navigation
        Action::ToggleFocus => {
            state.ui.focus = state.ui.focus.toggle();
        }
        Action::MoveUp => editing::move_selection(state, false),
        Action::MoveDown => editing::move_selection(state, true),

        // Pool and teams
        Action::RemoveSelected => editing::handle_remove_selected(state),
        Action::IncreaseCapacity => editing::handle_capacity_step(state, 1),
        Action::DecreaseCapacity => editing::handle_capacity_step(state, -1),
        Action::ResetTeams => editing::handle_reset_teams(state),
        Action::ClearTeams => editing::handle_clear_teams(state),

        // Wheels
        Action::NewWheel => wheels::handle_new_wheel(state),
        Action::NextWheel => wheels::handle_cycle_wheel(state, true),
        Action::PrevWheel => wheels::handle_cycle_wheel(state, false),
        Action::SelectWheel(index) => wheels::handle_select_wheel(state, index),
        Action::InitiateRemoveWheel => wheels::handle_initiate_remove(state),
        Action::ConfirmRemoveWheel => wheels::handle_confirm_remove(state),
        Action::LockAll => wheels::handle_set_global_lock(state, true),
        Action::UnlockAll => wheels::handle_set_global_lock(state, false),
        Action::CopyShareToken => wheels::handle_copy_share(state),
        Action::ImportToken(token) => wheels::handle_import(state, &token),

        // Input modes
        Action::EnterAddNameMode => input::enter_mode(state, InputMode::AddName),
        Action::EnterAddTeamMode => input::enter_mode(state, InputMode::AddTeam),
        Action::EnterRenameMode => input::enter_mode(state, InputMode::RenameWheel),
        Action::EnterImportMode => input::enter_mode(state, InputMode::ImportToken),
        Action::EnterHelpMode => input::enter_mode(state, InputMode::Help),
        Action::ExitMode => input::exit_mode(state),
        Action::InputChar(c) => input::handle_input_char(state, c),
        Action::InputBackspace => input::handle_backspace(state),
        Action::SubmitInput => input::handle_submit(state),
        Action::Paste(data) => input::handle_paste(state, &data),
    }

    Ok(())
}
