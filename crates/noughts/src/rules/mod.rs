//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the engine and tests can evaluate positions directly.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{check_winner, LINES};
