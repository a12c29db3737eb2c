use crate::app::{AppState, FocusPanel};
use crate::models::TeamTile;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

fn team_item(tile: TeamTile<'_>) -> ListItem<'_> {
    let count_style = if tile.is_full() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let members = if tile.members.is_empty() {
        Span::styled("(empty)", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(tile.members.join(", "))
    };

    ListItem::new(Line::from(vec![
        Span::styled(format!("{}. ", tile.index + 1), Style::default().fg(Color::DarkGray)),
        Span::styled(tile.label, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(
            format!("[{}/{}]", tile.members.len(), tile.capacity),
            count_style,
        ),
        Span::raw(" "),
        members,
    ]))
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let is_focused = state.ui.focus == FocusPanel::Teams;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let Some(session) = state.active_session() else {
        return;
    };

    let mut title = vec![Span::raw(format!(
        " Teams · {} per team ",
        session.members_per_team()
    ))];
    if !session.teams().is_empty() && session.all_teams_full() {
        title.push(Span::styled("all full ", Style::default().fg(Color::Green)));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style);

    if session.teams().is_empty() {
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("No teams. Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("t", Style::default().fg(Color::Cyan)),
            Span::styled(" to add one", Style::default().fg(Color::DarkGray)),
        ]))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = session.team_tiles().map(team_item).collect();

    let highlight = if is_focused {
        Style::default().bg(Color::Rgb(40, 40, 60))
    } else {
        Style::default()
    };

    let list = List::new(items).block(block).highlight_style(highlight);

    let mut list_state = ListState::default();
    list_state.select(Some(state.ui.selected_team_idx));

    frame.render_stateful_widget(list, area, &mut list_state);
}
