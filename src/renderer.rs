use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::config::{BORDER_SET, GLYPH_CELL, PALETTE};
use crate::food::FoodKind;
use crate::game::Game;
use crate::grid::{Cell, GridSize};

/// Terminal columns per logical cell, so cells look roughly square.
const CELL_WIDTH: u16 = 2;

/// Renders the status line and the board from immutable game state.
pub fn render(frame: &mut Frame<'_>, game: &Game) {
    let state = game.state();
    let bounds = state.bounds();

    let [status_area, board_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

    frame.render_widget(
        Paragraph::new(status_line(game)).style(Style::new().fg(PALETTE.status)),
        status_area,
    );

    let board = Rect {
        x: board_area.x,
        y: board_area.y,
        width: bounds
            .width
            .saturating_mul(CELL_WIDTH)
            .saturating_add(2)
            .min(board_area.width),
        height: bounds.height.saturating_add(2).min(board_area.height),
    };
    let block = Block::bordered()
        .border_set(BORDER_SET)
        .border_style(Style::new().fg(PALETTE.border))
        .style(Style::new().bg(PALETTE.board_bg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    for obstacle in &state.obstacles {
        paint(frame, inner, bounds, obstacle.position, Style::new().fg(PALETTE.obstacle));
    }

    for food in &state.foods {
        let color = match food.kind {
            FoodKind::Growth => PALETTE.growth_food,
            FoodKind::Shrink => PALETTE.shrink_food,
        };
        paint(frame, inner, bounds, food.position, Style::new().fg(color));
    }

    let head = state.snake.head();
    for segment in state.snake.body().skip(1) {
        paint(frame, inner, bounds, *segment, Style::new().fg(PALETTE.snake_body));
    }
    paint(
        frame,
        inner,
        bounds,
        head,
        Style::new()
            .fg(PALETTE.snake_head)
            .add_modifier(Modifier::BOLD),
    );
}

fn status_line(game: &Game) -> Line<'static> {
    let settings = game.settings();
    Line::from(format!(
        "High Score: {} | Length: {} | Speed: {} | Apples: {} | Rotten: {} | Q/W speed  A/S apples  Z/X rotten  Esc quit",
        settings.high_score(),
        game.state().snake.len(),
        settings.tick_rate(),
        settings.growth_food_count(),
        settings.shrink_food_count(),
    ))
}

fn paint(frame: &mut Frame<'_>, inner: Rect, bounds: GridSize, cell: Cell, style: Style) {
    let Some((x, y)) = logical_to_terminal(inner, bounds, cell) else {
        return;
    };

    let buffer = frame.buffer_mut();
    for column in 0..CELL_WIDTH {
        buffer.set_string(x + column, y, GLYPH_CELL, style);
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.saturating_mul(CELL_WIDTH);
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
