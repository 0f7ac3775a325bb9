//! Canvas rendering of the grid and the animated marks.

use crate::app::App;
use crate::geometry::{Segment, arc_points, cell_origin, cross_strokes, grid_lines, line_through};
use ratatui::{
    style::Color,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Context, Line, Points, Rectangle},
    },
};
use std::time::Instant;
use tictactoe_round::{Mark, Player, Position, rules};

const GRID_COLOR: Color = Color::Gray;
const CURSOR_COLOR: Color = Color::DarkGray;
const WIN_COLOR: Color = Color::Yellow;

/// Builds the board widget for the current frame.
pub fn board_canvas(app: &App, now: Instant) -> impl Widget + '_ {
    Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, 3.0])
        .y_bounds([0.0, 3.0])
        .paint(move |ctx| paint(ctx, app, now))
}

fn paint(ctx: &mut Context<'_>, app: &App, now: Instant) {
    for segment in grid_lines() {
        draw_segment(ctx, segment, GRID_COLOR);
    }

    if app.accepts_input() {
        let (x, y) = cell_origin(app.cursor());
        ctx.draw(&Rectangle {
            x: x + 0.05,
            y: y + 0.05,
            width: 0.9,
            height: 0.9,
            color: CURSOR_COLOR,
        });
    }
    ctx.layer();

    let state = app.state();
    for pos in Position::ALL {
        let progress = app.progress(pos, now);
        match state.cell_at(pos) {
            Mark::Empty => {}
            Mark::Occupied(Player::X) => {
                for stroke in cross_strokes(pos, progress) {
                    draw_segment(ctx, stroke, Color::Red);
                }
            }
            Mark::Occupied(Player::O) => {
                let coords = arc_points(pos, progress);
                ctx.draw(&Points {
                    coords: &coords,
                    color: Color::Green,
                });
            }
        }
    }

    if app.outcome().is_some()
        && let Some((line, _)) = rules::winning_line(state.marks())
    {
        ctx.layer();
        draw_segment(ctx, line_through(line.positions()), WIN_COLOR);
    }
}

fn draw_segment(ctx: &mut Context<'_>, segment: Segment, color: Color) {
    ctx.draw(&Line::new(segment.x1, segment.y1, segment.x2, segment.y2, color));
}
