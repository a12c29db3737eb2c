use crate::app::AppState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Stats ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(session) = state.active_session() else {
        frame.render_widget(block, area);
        return;
    };

    let label_style = Style::default().fg(Color::Gray);
    let value_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let stats = session.stats();

    let mut lines = vec![Line::from(vec![
        Span::styled("Spins ", label_style),
        Span::styled(stats.total_spins.to_string(), value_style),
        Span::styled("  all wheels ", label_style),
        Span::styled(state.registry.total_spins().to_string(), value_style),
        Span::styled("  assigned ", label_style),
        Span::styled(session.assigned_count().to_string(), value_style),
        Span::styled("  undo ", label_style),
        Span::styled(session.undo_depth().to_string(), value_style),
    ])];

    if !session.team_names().is_empty() {
        let mut spans = vec![Span::styled("Per team ", label_style)];
        for (i, team) in session.team_names().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", label_style));
            }
            spans.push(Span::raw(format!("{} {}", team, stats.assigned_to(i))));
        }
        lines.push(Line::from(spans));
    }

    if !stats.last_picked.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Last picked ", label_style),
            Span::raw(stats.last_picked.join(", ")),
        ]));
    }

    lines.push(Line::from(""));
    if session.history().is_empty() {
        lines.push(Line::from(Span::styled(
            "No spins yet",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for entry in session.history() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", entry.local_time_string()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(entry.name.as_str(), Style::default().fg(Color::Cyan)),
            Span::styled(" → ", label_style),
            Span::raw(entry.team.as_str()),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
