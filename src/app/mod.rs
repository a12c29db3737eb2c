mod action;
mod clock;
mod handler;
mod handlers;
mod runtime;
mod state;

pub use action::Action;
pub use runtime::{load_registry, run_tui, RunOptions};
pub use state::{
    AppState, FocusPanel, InputMode, Notice, NoticeLevel, PendingRemoval, SystemState, UIState,
};
