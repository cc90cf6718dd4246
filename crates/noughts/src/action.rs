//! Error taxonomy for engine operations.
//!
//! Every error is local, synchronous, and recoverable: a failed
//! operation leaves the engine untouched, and the view decides whether
//! to surface it or swallow it.

use crate::Position;

/// A move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// The index does not name a board position.
    #[display("Index {_0} is not a board position")]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("{_0} is already occupied")]
    Occupied(Position),

    /// The round has concluded; no further moves are accepted.
    #[display("The round is over")]
    RoundOver,
}

impl std::error::Error for IllegalMove {}

/// Undo was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum NothingToUndo {
    /// No moves have been made this round.
    #[display("No moves to undo")]
    EmptyHistory,

    /// The round has concluded; its moves are final.
    #[display("The round is over; undo is unavailable")]
    RoundOver,
}

impl std::error::Error for NothingToUndo {}

/// A hint could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum NoMovesAvailable {
    /// Every square is occupied.
    #[display("The board is full")]
    BoardFull,

    /// The round has concluded.
    #[display("The round is over")]
    RoundOver,
}

impl std::error::Error for NoMovesAvailable {}
