use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
};

const SLICE_COLORS: [Color; 8] = [
    Color::Rgb(239, 83, 80),
    Color::Rgb(255, 167, 38),
    Color::Rgb(255, 238, 88),
    Color::Rgb(102, 187, 106),
    Color::Rgb(38, 198, 218),
    Color::Rgb(66, 165, 245),
    Color::Rgb(171, 71, 188),
    Color::Rgb(236, 64, 122),
];

/// Color of the wheel slice (and pool chip) at `index`.
pub fn slice_color(index: usize) -> Color {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Shorten `s` to at most `max` characters, marking the cut with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('…');
    out
}
