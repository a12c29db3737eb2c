use crate::app::AppState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Tabs,
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let global_lock = state.registry.is_globally_locked();

    let titles: Vec<Line> = state
        .registry
        .sessions()
        .iter()
        .enumerate()
        .map(|(i, session)| {
            let mut spans = vec![Span::styled(
                format!("{} ", i + 1),
                Style::default().fg(Color::DarkGray),
            )];
            spans.push(Span::raw(session.label()));
            if session.is_spinning() {
                spans.push(Span::styled(" ⟳", Style::default().fg(Color::Yellow)));
            } else if session.is_locked() || global_lock {
                spans.push(Span::styled(" 🔒", Style::default().fg(Color::Red)));
            }
            Line::from(spans)
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.registry.active_index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Style::default().fg(Color::DarkGray)));

    frame.render_widget(tabs, area);
}
