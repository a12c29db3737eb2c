use crate::app::AppState;
use crate::tui::utils::centered_rect;
use chrono::Local;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(event) = &state.ui.result else {
        return;
    };

    let area = centered_rect(40, 30, frame.area());
    frame.render_widget(Clear, area);

    let fill = state
        .active_session()
        .and_then(|s| {
            s.teams()
                .get(event.team_index)
                .map(|members| format!(" ({}/{})", members.len(), s.members_per_team()))
        })
        .unwrap_or_default();
    let time = event.at.with_timezone(&Local).format("%H:%M:%S").to_string();

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            event.name.as_str(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("joins", Style::default().fg(Color::Gray))),
        Line::from(vec![
            Span::styled(
                event.team.as_str(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(fill, Style::default().fg(Color::Gray)),
        ]),
        Line::from(Span::styled(time, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/Esc to close, Space to spin again",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
