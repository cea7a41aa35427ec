//! Game state controller.

use crate::{Board, Cell, Mark, Position, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state: the board and the mark to move next.
///
/// State changes only through [`Game::play`] and [`Game::reset`], which
/// is what upholds the board invariants: a marked cell never reverts to
/// empty except via reset, and the turn alternates strictly after each
/// accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Mark,
}

impl Game {
    /// Creates a new game with an empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the winner, if any line is uniformly marked.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(&self.board)
    }

    /// Attempts to place the current mark at the given position.
    ///
    /// Returns `true` if the move was accepted. A move on an occupied
    /// cell, or any move once a winner exists, is a no-op returning
    /// `false` - these are defined non-events, not errors.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> bool {
        if !self.board.is_empty(pos) {
            debug!("cell occupied, move ignored");
            return false;
        }
        if self.winner().is_some() {
            debug!("game already decided, move ignored");
            return false;
        }

        self.board.set(pos, Cell::Marked(self.to_move));
        self.to_move = self.to_move.opponent();
        debug!(board = %self.board.display(), "move accepted");
        true
    }

    /// Clears the board and gives the first move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("resetting game");
        self.board = Board::new();
        self.to_move = Mark::X;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
