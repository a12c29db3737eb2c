use crate::app::AppState;
use crate::tui::utils::centered_rect;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn binding(keys: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", keys), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}

pub fn render(frame: &mut Frame, _state: &AppState) {
    let area = centered_rect(60, 80, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let help_text = vec![
        Line::from(Span::styled(
            "teamwheel - spin the wheel, fill the teams",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section("Wheel"),
        binding("Space", "Spin the active wheel"),
        binding("u", "Undo the last change"),
        binding("Esc", "Close the result"),
        Line::from(""),
        section("Pool and teams"),
        binding("Tab", "Switch between pool and teams"),
        binding("j/k", "Move selection"),
        binding("a", "Add names"),
        binding("t", "Add teams"),
        binding("d", "Remove selected name or team"),
        binding("+/-", "Members per team"),
        binding("r", "Reset teams (back to pool)"),
        binding("c", "Clear teams"),
        Line::from(""),
        section("Wheels"),
        binding("n", "New wheel"),
        binding("[ ]", "Previous / next wheel"),
        binding("1-9", "Jump to wheel"),
        binding("e", "Rename wheel"),
        binding("w w", "Remove wheel"),
        binding("s", "Copy share token"),
        binding("i", "Import share token"),
        binding("L / U", "Lock / unlock all wheels"),
        Line::from(""),
        section("General"),
        binding("?", "Show this help"),
        binding("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or ? to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
