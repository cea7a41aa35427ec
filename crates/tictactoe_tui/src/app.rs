//! Application state and logic.

use crate::input;
use crossterm::event::KeyCode;
use tictactoe::{Game, Position};
use tracing::debug;

/// Main application state: the game plus the keyboard cursor.
///
/// Everything shown on screen is a projection of the [`Game`]; the
/// cursor only tracks which cell Enter/Space would play.
pub struct App {
    game: Game,
    cursor: Position,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the keyboard cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Attempts a move at the given position.
    ///
    /// Rejected moves (occupied cell, game already won) are silent
    /// no-ops; the board simply does not change.
    pub fn play(&mut self, pos: Position) {
        if self.game.play(pos) {
            debug!(position = %pos, "move accepted");
        } else {
            debug!(position = %pos, "move ignored");
        }
    }

    /// Moves the keyboard cursor in response to an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key);
    }

    /// Restarts the game.
    pub fn reset(&mut self) {
        debug!("restarting game");
        self.game.reset();
    }
}
