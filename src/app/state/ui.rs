use crate::wheel::SpinEvent;

use super::types::{FocusPanel, InputMode, Notice, PendingRemoval};

pub struct UIState {
    pub focus: FocusPanel,
    pub input_mode: InputMode,
    pub input_buffer: String,

    // Selection within the active wheel
    pub selected_name_idx: usize,
    pub selected_team_idx: usize,

    pub pending_removal: Option<PendingRemoval>,
    pub notice: Option<Notice>,
    /// Last landing on the active wheel, shown until dismissed
    pub result: Option<SpinEvent>,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            focus: FocusPanel::default(),
            input_mode: InputMode::default(),
            input_buffer: String::new(),
            selected_name_idx: 0,
            selected_team_idx: 0,
            pending_removal: None,
            notice: None,
            result: None,
        }
    }
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}
