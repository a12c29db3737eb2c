mod system;
mod types;
mod ui;

pub use system::SystemState;
pub use types::*;
pub use ui::UIState;

use crate::error::WheelError;
use crate::models::{Registry, Session};

pub struct AppState {
    pub registry: Registry,
    pub system: SystemState,
    pub ui: UIState,
}

impl AppState {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            system: SystemState::new(),
            ui: UIState::new(),
        }
    }

    pub fn active_session(&self) -> Option<&Session> {
        self.registry.active()
    }

    pub fn active_id(&self) -> u64 {
        self.registry.active_id()
    }

    /// Whether the spin and undo controls of the active wheel are usable.
    pub fn controls_enabled(&self) -> bool {
        self.active_session()
            .map(|s| s.controls_enabled(self.registry.is_globally_locked()))
            .unwrap_or(false)
    }

    pub fn notify(&mut self, text: impl Into<String>) {
        self.ui.notice = Some(Notice::info(text));
    }

    pub fn report(&mut self, error: &WheelError) {
        self.ui.notice = Some(Notice::error(error.to_string()));
    }

    pub fn mark_dirty(&mut self) {
        self.system.dirty = true;
    }

    /// Keep list selections inside the active wheel's lists.
    pub fn clamp_selection(&mut self) {
        let (names, teams) = self
            .active_session()
            .map(|s| (s.names().len(), s.teams().len()))
            .unwrap_or((0, 0));
        self.ui.selected_name_idx = self.ui.selected_name_idx.min(names.saturating_sub(1));
        self.ui.selected_team_idx = self.ui.selected_team_idx.min(teams.saturating_sub(1));
    }

    /// Reset per-wheel view state after the active wheel changes.
    pub fn on_wheel_switched(&mut self) {
        self.ui.selected_name_idx = 0;
        self.ui.selected_team_idx = 0;
        self.ui.result = None;
        self.ui.pending_removal = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Registry::new())
    }
}
