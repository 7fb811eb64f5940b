//! Screen frame around the play field: border, status rows, side panel and
//! the crash banner.

use crate::input::GameInput;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const STATUS_ROWS: u16 = 2;
const SIDE_PANEL_COLS: u16 = 22;
/// Narrowest play field that still gets a side panel next to it.
const FIELD_MIN_COLS: u16 = 20;
const BANNER_ROWS: u16 = 4;

/// Areas inside the outer border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub field: Rect,
    pub status: Rect,
    /// Zero-width when the terminal is too narrow for it.
    pub side: Rect,
}

/// Carve the inside of the border into play field, status rows and side panel.
///
/// ```text
/// ┌─ Flappy ────────────────────────┬─ Flight ────┐
/// │   field                         │  side       │
/// │ status (2 rows)                 │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn screen_areas(inner: Rect) -> ScreenAreas {
    let side_cols = if inner.width >= FIELD_MIN_COLS + SIDE_PANEL_COLS {
        SIDE_PANEL_COLS
    } else {
        0
    };
    let left_cols = inner.width - side_cols;
    let status_rows = STATUS_ROWS.min(inner.height);
    let field_rows = inner.height - status_rows;

    ScreenAreas {
        field: Rect {
            width: left_cols,
            height: field_rows,
            ..inner
        },
        status: Rect {
            y: inner.y + field_rows,
            width: left_cols,
            height: status_rows,
            ..inner
        },
        side: Rect {
            x: inner.x + left_cols,
            width: side_cols,
            ..inner
        },
    }
}

/// Draw the outer border and return the areas inside it. The border turns red
/// once the bird has crashed.
pub fn draw_screen_frame(frame: &mut Frame, area: Rect, crashed: bool) -> ScreenAreas {
    frame.render_widget(Clear, area);

    let color = if crashed { Color::Red } else { Color::Cyan };
    let border = Block::default()
        .title(" Flappy ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = border.inner(area);
    frame.render_widget(border, area);

    screen_areas(inner)
}

/// One line of key hints, e.g. `[q/Esc] Quit`, with the keys taken from the
/// input mapping.
pub fn controls_line(hints: &[(GameInput, &str)]) -> Line<'static> {
    let key_style = Style::default().fg(Color::White);
    let action_style = Style::default().fg(Color::DarkGray);

    let spans: Vec<Span> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, (input, action))| {
            let gap = if i == 0 { "" } else { "  " };
            [
                Span::raw(gap),
                Span::styled(format!("[{}]", input.keys()), key_style),
                Span::styled(format!(" {}", action), action_style),
            ]
        })
        .collect();
    Line::from(spans)
}

/// Status message on the first row, key hints on the second.
pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    color: Color,
    hints: &[(GameInput, &str)],
) {
    let mut lines = vec![Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(color),
    ))];
    if area.height >= 2 {
        lines.push(controls_line(hints));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Crash banner across the bottom of the play field. The frozen scene above
/// it stays visible.
pub fn render_crash_banner(frame: &mut Frame, field: Rect, score: u32) {
    if field.height < BANNER_ROWS {
        return;
    }
    let banner = Rect {
        y: field.y + field.height - BANNER_ROWS,
        height: BANNER_ROWS,
        ..field
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "CRASH!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" You passed {} pipes.", score),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(Span::styled(
            format!("[{}] Fly again", GameInput::Tap.keys()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Clear, banner);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        ),
        banner,
    );
}

/// Draw the side panel border and return its inside.
pub fn side_panel(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Flight ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
