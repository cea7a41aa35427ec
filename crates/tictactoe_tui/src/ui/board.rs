//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use tictactoe::{Board, Cell, Mark, Position};

/// Width of the drawn grid: three 9-wide cells and two dividers.
pub(crate) const BOARD_WIDTH: u16 = 29;
/// Height of the drawn grid: three 3-tall cells and two dividers.
pub(crate) const BOARD_HEIGHT: u16 = 11;

/// Renders the board centered in `area`, highlighting the cursor cell.
pub(crate) fn render_board(f: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let grid = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = grid_rows(grid);

    render_row_divider(f, rows[1]);
    render_row_divider(f, rows[3]);
    for row in [rows[0], rows[2], rows[4]] {
        let cols = grid_cols(row);
        render_col_divider(f, cols[1]);
        render_col_divider(f, cols[3]);
    }

    for (pos, rect) in Position::ALL.into_iter().zip(cell_rects(area)) {
        render_cell(f, rect, board.get(pos), pos, cursor);
    }
}

/// Screen rectangles of the 9 cells, in board index order.
///
/// Hit-testing uses this too, so clicks always agree with the drawing.
pub(crate) fn cell_rects(area: Rect) -> [Rect; 9] {
    let grid = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = grid_rows(grid);

    let mut cells = [Rect::default(); 9];
    for (r, row) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = grid_cols(row);
        for (c, col) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[r * 3 + c] = col;
        }
    }
    cells
}

fn grid_rows(grid: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(grid)
}

fn grid_cols(row: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(row)
}

fn render_cell(f: &mut Frame, area: Rect, cell: Cell, pos: Position, cursor: Position) {
    let (text, mut style) = match cell {
        Cell::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if pos == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Blank first line vertically centers the glyph in the 3-tall cell.
    let paragraph = Paragraph::new(format!("\n{text}"))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_row_divider(f: &mut Frame, area: Rect) {
    let divider = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(divider, area);
}

fn render_col_divider(f: &mut Frame, area: Rect) {
    let divider = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(divider, area);
}

/// Centers a `width` x `height` rectangle inside `area`.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rects_are_disjoint_and_ordered() {
        let area = Rect::new(0, 0, 80, 14);
        let cells = cell_rects(area);

        // Reading order: left to right within a row, rows top to bottom.
        for pair in cells.chunks(3) {
            assert!(pair[0].x < pair[1].x && pair[1].x < pair[2].x);
        }
        assert!(cells[0].y < cells[3].y && cells[3].y < cells[6].y);

        // A divider column separates horizontal neighbors.
        assert_eq!(cells[0].x + cells[0].width + 1, cells[1].x);
    }

    #[test]
    fn test_grid_is_centered() {
        let area = Rect::new(0, 0, 80, 14);
        let grid = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
        assert_eq!(grid.width, BOARD_WIDTH);
        assert_eq!(grid.height, BOARD_HEIGHT);
        assert_eq!(grid.x, (80 - BOARD_WIDTH) / 2);
    }
}
