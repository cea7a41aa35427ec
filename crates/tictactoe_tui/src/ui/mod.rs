//! UI rendering and mouse hit-testing.
//!
//! Rendering and hit-testing share the same layout computations, so a
//! click always lands on the cell that was drawn under it.

mod board;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as Point, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{Game, Position};

/// Width of the centered reset button, including its border.
const RESET_WIDTH: u16 = 11;

/// Fixed screen regions, computed from the terminal area.
struct Screen {
    title: Rect,
    board: Rect,
    status: Rect,
    reset: Rect,
    help: Rect,
}

impl Screen {
    fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(board::BOARD_HEIGHT),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            title: chunks[0],
            board: chunks[1],
            status: chunks[2],
            reset: board::center_rect(chunks[3], RESET_WIDTH, 3),
            help: chunks[4],
        }
    }
}

/// A screen region that responds to a left click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// One of the 9 board cells.
    Cell(Position),
    /// The reset button.
    Reset,
}

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let screen = Screen::new(f.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, screen.title);

    board::render_board(f, screen.board, app.game().board(), app.cursor());

    let status = Paragraph::new(status_line(app.game()))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, screen.status);

    let reset = Paragraph::new("Reset")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(reset, screen.reset);

    let help = Paragraph::new("Click a cell or press 1-9 | Arrows + Enter | R: reset | Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, screen.help);
}

/// Status text: the winner if one exists, otherwise whose move is next.
fn status_line(game: &Game) -> String {
    match game.winner() {
        Some(mark) => format!("Winner: {mark}"),
        None => format!("Next Player: {}", game.to_move()),
    }
}

/// Finds the clickable region under the given terminal coordinates.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Target> {
    let screen = Screen::new(area);
    let point = Point::new(column, row);

    if screen.reset.contains(point) {
        return Some(Target::Reset);
    }
    Position::ALL
        .into_iter()
        .zip(board::cell_rects(screen.board))
        .find(|(_, rect)| rect.contains(point))
        .map(|(pos, _)| Target::Cell(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn test_each_cell_maps_to_itself() {
        let screen = Screen::new(AREA);
        for (pos, rect) in Position::ALL.into_iter().zip(board::cell_rects(screen.board)) {
            let (column, row) = center(rect);
            assert_eq!(hit_test(AREA, column, row), Some(Target::Cell(pos)));
        }
    }

    #[test]
    fn test_separator_between_cells_maps_to_nothing() {
        let screen = Screen::new(AREA);
        let cells = board::cell_rects(screen.board);
        // The column just past the first cell is the vertical divider.
        let column = cells[0].x + cells[0].width;
        let row = cells[0].y + 1;
        assert_eq!(hit_test(AREA, column, row), None);
    }

    #[test]
    fn test_outside_board_maps_to_nothing() {
        assert_eq!(hit_test(AREA, 0, 0), None);
    }

    #[test]
    fn test_reset_button_maps_to_reset() {
        let screen = Screen::new(AREA);
        let (column, row) = center(screen.reset);
        assert_eq!(hit_test(AREA, column, row), Some(Target::Reset));
    }

    #[test]
    fn test_status_line_reports_turn_then_winner() {
        let mut game = Game::new();
        assert_eq!(status_line(&game), "Next Player: X");

        game.play(Position::Center);
        assert_eq!(status_line(&game), "Next Player: O");

        // X takes the top row: 0, 3, 1, 4, 2 from a fresh game.
        let mut game = Game::new();
        for index in [0, 3, 1, 4, 2] {
            game.play(Position::from_index(index).unwrap());
        }
        assert_eq!(status_line(&game), "Winner: X");
    }
}
