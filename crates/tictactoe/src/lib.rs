//! Pure tic-tac-toe game logic.
//!
//! This crate holds the board, marks, positions, win detection, and the
//! game state controller. It has no I/O and no terminal coupling - the
//! `tictactoe_tui` crate projects this state onto the screen.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, Mark, Position};
//!
//! let mut game = Game::new();
//! assert!(game.play(Position::Center));
//! assert_eq!(game.to_move(), Mark::O);
//! assert_eq!(game.winner(), None);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
mod rules;
mod types;

pub use game::Game;
pub use position::Position;
pub use rules::winner;
pub use types::{Board, Cell, Mark};
