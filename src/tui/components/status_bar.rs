use crate::app::{AppState, InputMode, NoticeLevel};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn badge(text: &str, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", text),
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}

fn key_hints(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(format!(" {}  ", label), Style::default().fg(Color::Gray)));
    }
    spans
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    // Check for pending removal confirmation first
    if let Some(pending) = &state.ui.pending_removal {
        let spans = vec![
            Span::styled(
                " REMOVE? ",
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                format!("Remove wheel \"{}\"? ", pending.label),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled("[w]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(" to confirm, any other key to cancel", Style::default().fg(Color::Gray)),
        ];
        let paragraph = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));
        frame.render_widget(paragraph, area);
        return;
    }

    let mode = state.ui.input_mode;
    let spans = if mode.is_text_entry() {
        let mut spans = vec![badge(mode.prompt(), Color::Yellow), Span::raw(" ")];
        spans.push(Span::raw(state.ui.input_buffer.clone()));
        spans.push(Span::styled("█", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            "   Enter to submit, Esc to close",
            Style::default().fg(Color::DarkGray),
        ));
        spans
    } else if mode == InputMode::Help {
        vec![
            badge("HELP", Color::Yellow),
            Span::styled(" Press Esc or ? to close", Style::default().fg(Color::Gray)),
        ]
    } else if let Some(notice) = &state.ui.notice {
        let color = match notice.level {
            NoticeLevel::Info => Color::Green,
            NoticeLevel::Error => Color::Red,
        };
        vec![
            badge(if state.controls_enabled() { "READY" } else { "LOCKED" }, color),
            Span::raw(" "),
            Span::styled(notice.text.clone(), Style::default().fg(color)),
        ]
    } else {
        let mut spans = vec![badge(
            if state.controls_enabled() { "READY" } else { "LOCKED" },
            if state.controls_enabled() { Color::Cyan } else { Color::Red },
        )];
        spans.push(Span::raw(" "));
        spans.extend(key_hints(&[
            ("Space", "spin"),
            ("u", "undo"),
            ("a/t", "add name/team"),
            ("n", "new wheel"),
            ("s", "share"),
            ("?", "help"),
            ("q", "quit"),
        ]));
        spans
    };

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(30, 30, 30)));
    frame.render_widget(paragraph, area);
}
