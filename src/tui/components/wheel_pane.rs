use crate::app::AppState;
use crate::models::Session;
use crate::tui::utils::{slice_color, truncate};
use crate::wheel::{slice_angle, POINTER_ANGLE};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine},
        Block, Borders,
    },
    Frame,
};

const RADIUS: f64 = 1.0;
const BOUND: f64 = 1.2;
/// Angular step between the radial strokes that fill a slice.
const FILL_STEP: f64 = 0.025;

/// Canvas point for a wheel angle. Wheel angles grow clockwise with the
/// pointer at 3π/2 (straight up); the canvas y axis points up.
fn point(angle: f64, r: f64) -> (f64, f64) {
    (r * angle.cos(), -r * angle.sin())
}

/// Start angle of every slice for the given rotation.
fn slice_starts(rotation: f64, count: usize) -> impl Iterator<Item = f64> {
    let width = slice_angle(count);
    (0..count).map(move |i| rotation + i as f64 * width)
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(session) = state.active_session() else {
        return;
    };

    let locked = !state.controls_enabled();
    let border_style = if session.is_spinning() {
        Style::default().fg(Color::Yellow)
    } else if locked {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut title = vec![Span::styled(
        format!(" {} ", session.label()),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if session.is_spinning() {
        title.push(Span::styled(
            format!("spinning {:.2} ", session.velocity()),
            Style::default().fg(Color::Yellow),
        ));
    } else if locked {
        title.push(Span::styled("locked ", Style::default().fg(Color::Red)));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    // Braille cells are 2x4 dots; widen the x range so the wheel stays round
    let aspect = if inner.height == 0 {
        1.0
    } else {
        (inner.width as f64 * 2.0) / (inner.height as f64 * 4.0)
    };

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-BOUND * aspect, BOUND * aspect])
        .y_bounds([-BOUND, BOUND])
        .paint(|ctx| paint_wheel(ctx, session));

    frame.render_widget(canvas, area);
}

fn paint_wheel(ctx: &mut Context, session: &Session) {
    let names = session.names();
    let rotation = session.rotation();

    if names.is_empty() {
        ctx.draw(&Circle {
            x: 0.0,
            y: 0.0,
            radius: RADIUS,
            color: Color::DarkGray,
        });
        ctx.print(
            -0.35,
            0.0,
            Span::styled("Pool is empty", Style::default().fg(Color::DarkGray)),
        );
        paint_pointer(ctx);
        return;
    }

    let width = slice_angle(names.len());

    for (i, start) in slice_starts(rotation, names.len()).enumerate() {
        let color = slice_color(i);
        let mut angle = start;
        while angle < start + width {
            let (x, y) = point(angle, RADIUS);
            ctx.draw(&CanvasLine::new(0.0, 0.0, x, y, color));
            angle += FILL_STEP;
        }
    }

    ctx.layer();

    // Boundaries and labels on top of the fill
    for (i, start) in slice_starts(rotation, names.len()).enumerate() {
        if names.len() > 1 {
            let (x, y) = point(start, RADIUS);
            ctx.draw(&CanvasLine::new(0.0, 0.0, x, y, Color::Black));
        }

        let max_chars = if names.len() > 12 { 6 } else { 10 };
        let label = truncate(&names[i], max_chars);
        let (x, y) = point(start + width / 2.0, RADIUS * 0.6);
        ctx.print(
            x - 0.04 * label.chars().count() as f64,
            y,
            Span::styled(
                label,
                Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            ),
        );
    }

    ctx.draw(&Circle {
        x: 0.0,
        y: 0.0,
        radius: RADIUS,
        color: Color::White,
    });
    paint_pointer(ctx);
}

fn paint_pointer(ctx: &mut Context) {
    let (tip_x, tip_y) = point(POINTER_ANGLE, RADIUS * 0.92);
    let base = BOUND * 0.98;
    ctx.draw(&CanvasLine::new(tip_x - 0.06, base, tip_x, tip_y, Color::Red));
    ctx.draw(&CanvasLine::new(tip_x + 0.06, base, tip_x, tip_y, Color::Red));
    ctx.draw(&CanvasLine::new(-0.06, base, 0.06, base, Color::Red));
    ctx.draw(&Circle {
        x: 0.0,
        y: 0.0,
        radius: 0.04,
        color: Color::White,
    });
}
