//! Tests for action handling
//!
//! These drive `process_action` against an in-memory `AppState`; nothing
//! touches the terminal, audio device or disk.

#[cfg(test)]
mod tests {
    use crate::app::handler::process_action;
    use crate::app::handlers::wheels::share_token;
    use crate::app::{Action, AppState, FocusPanel, InputMode, NoticeLevel, SystemState};
    use crate::audio::Cue;
    use crate::error::WheelError;
    use crate::models::Registry;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Fresh state with the default wheels and a seeded RNG
    fn create_test_state() -> AppState {
        let mut state = AppState::new(Registry::new());
        state.system = SystemState::with_rng(StdRng::seed_from_u64(7));
        state
    }

    fn act(state: &mut AppState, action: Action) {
        process_action(state, action).unwrap();
    }

    /// Feed frames until no wheel is spinning
    fn run_until_rest(state: &mut AppState) {
        for _ in 0..100 {
            if !state.registry.any_spinning() {
                return;
            }
            act(state, Action::Frames(10));
        }
        panic!("wheel never stopped");
    }

    fn notice_text(state: &AppState) -> String {
        state
            .ui
            .notice
            .as_ref()
            .map(|n| n.text.clone())
            .unwrap_or_default()
    }

    // ==================== Spinning ====================

    #[test]
    fn test_spin_lands_and_reports() {
        let mut state = create_test_state();
        act(&mut state, Action::Spin);

        assert!(state.active_session().unwrap().is_spinning());
        assert_eq!(state.system.take_cues(), vec![Cue::SpinStart]);
        assert!(state.system.dirty);

        run_until_rest(&mut state);

        let session = state.active_session().unwrap();
        let result = state.ui.result.clone().expect("result shown");
        assert_eq!(session.names().len(), 5);
        assert_eq!(session.teams()[0], vec![result.name.clone()]);
        assert_eq!(result.team, "Team 1");
        assert_eq!(notice_text(&state), format!("{} joins Team 1", result.name));

        let cues = state.system.take_cues();
        assert_eq!(cues.last(), Some(&Cue::Result));
        assert!(cues[..cues.len() - 1].iter().all(|c| *c == Cue::Tick));
    }

    #[test]
    fn test_second_spin_rejected_while_spinning() {
        let mut state = create_test_state();
        act(&mut state, Action::Spin);
        act(&mut state, Action::Spin);

        assert_eq!(notice_text(&state), WheelError::AlreadySpinning.to_string());
        assert_eq!(state.active_session().unwrap().undo_depth(), 1);
    }

    #[test]
    fn test_background_wheel_lands_without_popup() {
        let mut state = create_test_state();
        act(&mut state, Action::Spin);
        act(&mut state, Action::NextWheel);
        assert_eq!(state.active_id(), 2);

        run_until_rest(&mut state);

        assert!(state.ui.result.is_none());
        assert_eq!(state.registry.get(1).unwrap().stats().total_spins, 1);
        assert_eq!(state.registry.get(2).unwrap().stats().total_spins, 0);
    }

    #[test]
    fn test_undo_after_spin_restores_pool() {
        let mut state = create_test_state();
        let before = state.active_session().unwrap().names().to_vec();

        act(&mut state, Action::Spin);
        run_until_rest(&mut state);
        act(&mut state, Action::Undo);

        let session = state.active_session().unwrap();
        assert_eq!(session.names(), &before[..]);
        assert_eq!(session.assigned_count(), 0);
        assert!(state.ui.result.is_none());
        assert_eq!(notice_text(&state), "Undone");

        act(&mut state, Action::Undo);
        assert_eq!(notice_text(&state), WheelError::NothingToUndo.to_string());
    }

    #[test]
    fn test_global_lock_blocks_spin_and_edits() {
        let mut state = create_test_state();
        act(&mut state, Action::LockAll);
        assert!(!state.controls_enabled());

        act(&mut state, Action::Spin);
        assert_eq!(notice_text(&state), WheelError::RegistryLocked.to_string());
        assert_eq!(state.ui.notice.as_ref().unwrap().level, NoticeLevel::Error);
        assert!(!state.registry.any_spinning());

        act(&mut state, Action::ResetTeams);
        assert_eq!(state.active_session().unwrap().undo_depth(), 0);

        act(&mut state, Action::UnlockAll);
        assert!(state.controls_enabled());
        act(&mut state, Action::Spin);
        assert!(state.registry.any_spinning());
    }

    // ==================== Editing ====================

    #[test]
    fn test_add_name_through_input_mode() {
        let mut state = create_test_state();
        act(&mut state, Action::EnterAddNameMode);
        for c in "Gina".chars() {
            act(&mut state, Action::InputChar(c));
        }
        act(&mut state, Action::SubmitInput);

        assert_eq!(state.ui.input_mode, InputMode::AddName);
        assert!(state.ui.input_buffer.is_empty());
        let session = state.active_session().unwrap();
        assert_eq!(session.names().last().unwrap(), "Gina");
        assert_eq!(state.ui.selected_name_idx, session.names().len() - 1);

        act(&mut state, Action::SubmitInput);
        assert_eq!(notice_text(&state), WheelError::EmptyName.to_string());

        act(&mut state, Action::ExitMode);
        assert_eq!(state.ui.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_remove_selected_follows_focus() {
        let mut state = create_test_state();
        act(&mut state, Action::MoveDown);
        act(&mut state, Action::RemoveSelected);
        assert_eq!(notice_text(&state), "Removed Bella");

        act(&mut state, Action::ToggleFocus);
        assert_eq!(state.ui.focus, FocusPanel::Teams);
        act(&mut state, Action::MoveUp);
        assert_eq!(state.ui.selected_team_idx, 2);
        act(&mut state, Action::RemoveSelected);

        let session = state.active_session().unwrap();
        assert_eq!(session.team_names().len(), 2);
        assert_eq!(state.ui.selected_team_idx, 1);
    }

    #[test]
    fn test_capacity_is_bounded() {
        let mut state = create_test_state();
        act(&mut state, Action::DecreaseCapacity);
        assert_eq!(state.active_session().unwrap().members_per_team(), 1);

        act(&mut state, Action::DecreaseCapacity);
        assert_eq!(state.active_session().unwrap().members_per_team(), 1);
        assert_eq!(notice_text(&state), WheelError::InvalidCapacity(0).to_string());

        for _ in 0..20 {
            act(&mut state, Action::IncreaseCapacity);
        }
        assert_eq!(state.active_session().unwrap().members_per_team(), 10);
        assert_eq!(notice_text(&state), WheelError::InvalidCapacity(11).to_string());
        assert!(notice_text(&state).contains("between 1 and 10"));
    }

    #[test]
    fn test_spin_refused_when_teams_full() {
        let mut state = create_test_state();
        act(&mut state, Action::DecreaseCapacity);
        for _ in 0..3 {
            act(&mut state, Action::Spin);
            run_until_rest(&mut state);
        }

        act(&mut state, Action::Spin);
        assert_eq!(notice_text(&state), WheelError::AllTeamsFull.to_string());
        assert_eq!(state.active_session().unwrap().names().len(), 3);
    }

    // ==================== Wheels ====================

    #[test]
    fn test_remove_wheel_needs_confirmation() {
        let mut state = create_test_state();
        act(&mut state, Action::InitiateRemoveWheel);
        assert!(state.ui.pending_removal.is_some());

        act(&mut state, Action::MoveDown);
        assert!(state.ui.pending_removal.is_none());
        act(&mut state, Action::ConfirmRemoveWheel);
        assert_eq!(state.registry.len(), 2);

        act(&mut state, Action::InitiateRemoveWheel);
        act(&mut state, Action::ConfirmRemoveWheel);
        assert_eq!(state.registry.len(), 1);
        assert_eq!(state.active_id(), 2);
        assert_eq!(notice_text(&state), "Removed Wheel 1");

        act(&mut state, Action::InitiateRemoveWheel);
        assert!(state.ui.pending_removal.is_none());
        assert_eq!(notice_text(&state), WheelError::LastSession.to_string());
    }

    #[test]
    fn test_new_wheel_becomes_active() {
        let mut state = create_test_state();
        act(&mut state, Action::NewWheel);
        assert_eq!(state.active_id(), 3);
        assert_eq!(state.active_session().unwrap().names()[0], "User3A");

        act(&mut state, Action::SelectWheel(0));
        assert_eq!(state.active_id(), 1);
        act(&mut state, Action::PrevWheel);
        assert_eq!(state.active_id(), 3);
    }

    #[test]
    fn test_rename_prefills_and_applies() {
        let mut state = create_test_state();
        act(&mut state, Action::EnterRenameMode);
        assert_eq!(state.ui.input_buffer, "Wheel 1");

        act(&mut state, Action::InputBackspace);
        act(&mut state, Action::Paste("A\nignored".into()));
        act(&mut state, Action::SubmitInput);

        assert_eq!(state.ui.input_mode, InputMode::Normal);
        assert_eq!(state.active_session().unwrap().label(), "Wheel A");
    }

    #[test]
    fn test_share_then_import_clones_setup() {
        let mut state = create_test_state();
        act(&mut state, Action::IncreaseCapacity);
        let token = share_token(&state).unwrap();

        act(&mut state, Action::ImportToken(token));
        let imported = state.active_session().unwrap();
        assert_eq!(state.registry.len(), 3);
        assert_eq!(imported.label(), "Wheel 1");
        assert_eq!(imported.names()[0], "Alex");
        assert_eq!(imported.members_per_team(), 3);
        assert_eq!(imported.assigned_count(), 0);

        act(&mut state, Action::ImportToken("garbage".into()));
        assert_eq!(state.registry.len(), 3);
        assert_eq!(notice_text(&state), "That share token could not be read");
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut state = create_test_state();
        act(&mut state, Action::Quit);
        assert!(state.system.should_quit);
    }
}
