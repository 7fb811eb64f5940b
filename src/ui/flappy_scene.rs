//! UI rendering for the Flappy Bird game.

use crate::build_info;
use crate::constants::{BIRD_HEIGHT, BIRD_WIDTH, GROUND_BAND_OFFSET, SCORE_TEXT_Y};
use crate::game::{bird_center, bird_tilt, pipe_rects, FlappyGame};
use crate::input::GameInput;
use crate::ui::game_common::{draw_screen_frame, render_crash_banner, render_status, side_panel};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What occupies one terminal cell of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Sky,
    Pipe,
    Ground,
    Bird,
    /// The cell under the bird's center; drawn with the tilt glyph.
    BirdCenter,
}

/// Sample the scene into a `rows` x `cols` grid.
///
/// Each cell takes the world point at its center. Bird beats ground beats
/// pipe, matching the draw order of the sprites.
pub fn rasterize(game: &FlappyGame, cols: u16, rows: u16) -> Vec<Vec<CellKind>> {
    let viewport = game.viewport;
    let cols_f = cols as f64;
    let rows_f = rows as f64;
    let pipes = pipe_rects(game.scroll.horizontal_offset, &viewport);
    let ground_y = viewport.height - GROUND_BAND_OFFSET;
    let bird_left = viewport.bird_anchor_x();
    let bird_top = game.bird.vertical_position;

    let (cx, cy) = bird_center(&game.bird, &viewport);
    let center_col = (cx / viewport.width * cols_f).floor();
    let center_row = (cy / viewport.height * rows_f).floor();

    let mut grid = Vec::with_capacity(rows as usize);
    for row in 0..rows {
        let wy = (row as f64 + 0.5) * viewport.height / rows_f;
        let mut line = Vec::with_capacity(cols as usize);
        for col in 0..cols {
            let wx = (col as f64 + 0.5) * viewport.width / cols_f;

            let kind = if col as f64 == center_col && row as f64 == center_row {
                CellKind::BirdCenter
            } else if wx >= bird_left
                && wx < bird_left + BIRD_WIDTH
                && wy >= bird_top
                && wy < bird_top + BIRD_HEIGHT
            {
                CellKind::Bird
            } else if wy >= ground_y {
                CellKind::Ground
            } else if pipes
                .iter()
                .any(|p| wx >= p.x && wx < p.right() && wy >= p.y && wy < p.bottom())
            {
                CellKind::Pipe
            } else {
                CellKind::Sky
            };
            line.push(kind);
        }
        grid.push(line);
    }
    grid
}

/// Glyph for the bird's center cell, from its tilt.
pub fn bird_glyph(vertical_velocity: f64) -> &'static str {
    let tilt = bird_tilt(vertical_velocity);
    if tilt < -0.2 {
        "▲" // climbing
    } else if tilt > 0.2 {
        "▼" // diving
    } else {
        "►"
    }
}

/// Render the Flappy Bird game scene.
pub fn render_flappy(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let areas = draw_screen_frame(frame, area, game.is_over());

    render_play_area(frame, areas.field, game);
    render_status_bar_content(frame, areas.status, game);
    if areas.side.width > 0 {
        render_info_panel(frame, areas.side, game);
    }

    if game.is_over() {
        render_crash_banner(frame, areas.field, game.score());
    }
}

/// Render the play field and the score over it.
fn render_play_area(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let bird_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let center_glyph = bird_glyph(game.bird.vertical_velocity);

    let lines: Vec<Line> = rasterize(game, area.width, area.height)
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .map(|cell| match cell {
                    CellKind::Sky => Span::raw(" "),
                    CellKind::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                    CellKind::Ground => {
                        Span::styled("▒", Style::default().fg(Color::Rgb(210, 185, 110)))
                    }
                    CellKind::Bird => Span::styled("▓", bird_style),
                    CellKind::BirdCenter => Span::styled(center_glyph, bird_style),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);

    // Score near the top, centered
    let score_row = (SCORE_TEXT_Y / game.viewport.height * area.height as f64) as u16;
    if score_row < area.height {
        let score = Paragraph::new(Span::styled(
            format!(" {} ", game.score()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(
            score,
            Rect {
                y: area.y + score_row,
                height: 1,
                ..area
            },
        );
    }
}

/// Render the status bar at the bottom.
fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if game.is_over() {
        render_status(
            frame,
            area,
            "Game over",
            Color::Red,
            &[(GameInput::Tap, "Restart"), (GameInput::Quit, "Quit")],
        );
    } else {
        render_status(
            frame,
            area,
            &format!("Score: {}", game.score()),
            Color::Green,
            &[(GameInput::Tap, "Flap"), (GameInput::Quit, "Quit")],
        );
    }
}

/// Render the info panel on the right.
fn render_info_panel(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let inner = side_panel(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                format!("{}", game.score()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Height: ", label),
            Span::styled(
                format!("{:.0}", game.bird.vertical_position),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", label),
            Span::styled(
                format!("{:.0}", game.bird.vertical_velocity),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(
                format!("{:.0}", game.scroll.horizontal_offset),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(format!(" {}", build_info::BUILD_DATE), label)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
