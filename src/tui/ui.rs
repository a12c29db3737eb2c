use crate::app::{AppState, InputMode};
use crate::tui::components::{
    help_popup, pool_pane, result_popup, stats_pane, status_bar, tab_bar, teams_pane, wheel_pane,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub fn draw(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Wheel tabs
            Constraint::Min(8),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let (tabs_area, main_area, status_area) = (chunks[0], chunks[1], chunks[2]);

    // Wheel on the left, lists on the right
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main_area);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(horizontal[1]);

    tab_bar::render(frame, tabs_area, state);
    wheel_pane::render(frame, horizontal[0], state);
    pool_pane::render(frame, right[0], state);
    teams_pane::render(frame, right[1], state);
    stats_pane::render(frame, right[2], state);
    status_bar::render(frame, status_area, state);

    if state.ui.result.is_some() {
        result_popup::render(frame, state);
    }
    if state.ui.input_mode == InputMode::Help {
        help_popup::render(frame, state);
    }
}
