use crate::app::{Action, AppState, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::EventHandler;

impl EventHandler {
    /// Check for global keybindings that work in any mode
    fn check_global_keys(key: &KeyEvent) -> Option<Action> {
        // Ctrl+c - Quit
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }
        None
    }

    pub(super) fn handle_key_event(key: KeyEvent, state: &AppState) -> Action {
        if let Some(action) = Self::check_global_keys(&key) {
            return action;
        }

        // Handle input mode first
        match state.ui.input_mode {
            InputMode::Help => {
                return match key.code {
                    KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
                        Action::ExitMode
                    }
                    _ => Action::Tick,
                };
            }
            mode if mode.is_text_entry() => {
                return match key.code {
                    KeyCode::Esc => Action::ExitMode,
                    KeyCode::Enter => Action::SubmitInput,
                    KeyCode::Backspace => Action::InputBackspace,
                    KeyCode::Char(c)
                        if !key.modifiers.contains(KeyModifiers::CONTROL)
                            && !key.modifiers.contains(KeyModifiers::ALT) =>
                    {
                        Action::InputChar(c)
                    }
                    _ => Action::Tick,
                };
            }
            _ => {}
        }

        // Second 'w' confirms a pending wheel removal; anything else cancels it
        if state.ui.pending_removal.is_some() {
            return match key.code {
                KeyCode::Char('w') => Action::ConfirmRemoveWheel,
                _ => Action::CancelPending,
            };
        }

        // A visible result popup swallows the dismiss keys
        if state.ui.result.is_some() && matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            return Action::DismissResult;
        }

        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::EnterHelpMode,

            // Spinning
            KeyCode::Char(' ') | KeyCode::Enter => Action::Spin,
            KeyCode::Char('u') => Action::Undo,
            KeyCode::Esc => Action::DismissResult,

            // Navigation
            KeyCode::Tab => Action::ToggleFocus,
            KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
            KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,

            // Pool and teams
            KeyCode::Char('a') => Action::EnterAddNameMode,
            KeyCode::Char('t') => Action::EnterAddTeamMode,
            KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => Action::RemoveSelected,
            KeyCode::Char('+') | KeyCode::Char('=') => Action::IncreaseCapacity,
            KeyCode::Char('-') => Action::DecreaseCapacity,
            KeyCode::Char('r') => Action::ResetTeams,
            KeyCode::Char('c') => Action::ClearTeams,

            // Wheels
            KeyCode::Char('n') => Action::NewWheel,
            KeyCode::Char('w') => Action::InitiateRemoveWheel,
            KeyCode::Char(']') | KeyCode::Char('l') | KeyCode::Right => Action::NextWheel,
            KeyCode::Char('[') | KeyCode::Char('h') | KeyCode::Left => Action::PrevWheel,
            KeyCode::Char(c @ '1'..='9') => Action::SelectWheel(c as usize - '1' as usize),
            KeyCode::Char('e') => Action::EnterRenameMode,
            KeyCode::Char('L') => Action::LockAll,
            KeyCode::Char('U') => Action::UnlockAll,
            KeyCode::Char('s') => Action::CopyShareToken,
            KeyCode::Char('i') => Action::EnterImportMode,

            _ => Action::Tick,
        }
    }
}
