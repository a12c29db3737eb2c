use crate::app::{AppState, FocusPanel};
use crate::tui::utils::slice_color;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let is_focused = state.ui.focus == FocusPanel::Pool;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let names = state
        .active_session()
        .map(|s| s.names())
        .unwrap_or_default();

    let block = Block::default()
        .title(format!(" Pool ({}) ", names.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if names.is_empty() {
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("Empty. Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("a", Style::default().fg(Color::Cyan)),
            Span::styled(" to add a name", Style::default().fg(Color::DarkGray)),
        ]))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(slice_color(i))),
                Span::raw(name.as_str()),
            ]))
        })
        .collect();

    let highlight = if is_focused {
        Style::default()
            .bg(Color::Rgb(40, 40, 60))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let list = List::new(items).block(block).highlight_style(highlight);

    let mut list_state = ListState::default();
    list_state.select(Some(state.ui.selected_name_idx));

    frame.render_stateful_widget(list, area, &mut list_state);
}
