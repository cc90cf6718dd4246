//! Noughts - a pure tic-tac-toe game engine.
//!
//! The engine owns all game state for a match: the 3x3 board, the
//! current mover, the move history, the round status, and a score
//! tally that accumulates across rounds. Views (this workspace ships a
//! terminal UI) drive it through a small intent interface and render
//! from its read accessors; the engine never touches presentation
//! state.
//!
//! # Example
//!
//! ```
//! use noughts::{GameEngine, Player, Position, RoundStatus};
//!
//! let mut engine = GameEngine::new();
//! engine.apply_move(Position::Center)?;
//! engine.apply_move(Position::TopLeft)?;
//! assert_eq!(engine.to_move(), Player::X);
//!
//! let hint = engine.suggest_move()?;
//! engine.apply_move(hint)?;
//! assert_eq!(engine.status(), RoundStatus::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod score;
mod types;

pub use action::{IllegalMove, NoMovesAvailable, NothingToUndo};
pub use engine::GameEngine;
pub use position::Position;
pub use score::{Outcome, ScoreTally};
pub use types::{Board, Player, RoundStatus, Square};
