//! The game engine: board, turn, history, tally, and round status.
//!
//! The engine owns all mutable game state for the lifetime of the
//! process. Views never mutate state directly; they send intents
//! (`apply_move`, `undo_last_move`, ...) and re-render from the read
//! accessors. Every operation is synchronous and either completes in
//! full or fails without touching state.

use crate::invariants::{InvariantSet, RoundInvariants};
use crate::rules;
use crate::{
    Board, IllegalMove, NoMovesAvailable, NothingToUndo, Outcome, Player, Position, RoundStatus,
    ScoreTally, Square,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Game engine for a match of tic-tac-toe.
///
/// A match is a sequence of rounds sharing one [`ScoreTally`]. A round
/// runs from an empty board to a win or draw; `start_new_round`
/// discards it and `reset_match` additionally zeroes the tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) history: Vec<Position>,
    pub(crate) status: RoundStatus,
    pub(crate) scores: ScoreTally,
}

impl GameEngine {
    /// Creates an engine with an empty board, X to move, and a zeroed
    /// tally.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
            status: RoundStatus::InProgress,
            scores: ScoreTally::new(),
        }
    }

    /// Rebuilds an engine by applying a recorded move sequence to a
    /// fresh round.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, IllegalMove> {
        let mut engine = Self::new();
        for &pos in moves {
            engine.apply_move(pos)?;
        }
        Ok(engine)
    }

    /// Places the current mover's mark at the given position.
    ///
    /// On success the move is recorded in history, the terminal
    /// condition is evaluated, and the turn flips only if the round is
    /// still in progress. A win or draw increments the tally at the
    /// moment of the transition.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::RoundOver`] once the round has concluded
    /// and [`IllegalMove::Occupied`] for a taken square. Failed moves
    /// leave the engine unchanged.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, pos: Position) -> Result<RoundStatus, IllegalMove> {
        if !self.status.is_in_progress() {
            return Err(IllegalMove::RoundOver);
        }
        if !self.board.is_empty(pos) {
            return Err(IllegalMove::Occupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);
        self.status = self.evaluate_terminal();

        match self.status {
            RoundStatus::Won { winner, .. } => self.scores.record(Outcome::Win(winner)),
            RoundStatus::Draw => self.scores.record(Outcome::Draw),
            RoundStatus::InProgress => self.to_move = self.to_move.opponent(),
        }

        self.check_invariants();
        Ok(self.status)
    }

    /// Places the current mover's mark at the given board index (0-8).
    ///
    /// # Errors
    ///
    /// As [`GameEngine::apply_move`], plus [`IllegalMove::OutOfRange`]
    /// for indices past the board.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Result<RoundStatus, IllegalMove> {
        let pos = Position::from_index(index).ok_or(IllegalMove::OutOfRange(index))?;
        self.apply_move(pos)
    }

    /// Takes back the most recent move, restoring board and turn.
    ///
    /// Returns the position that was cleared so the view can update.
    ///
    /// # Errors
    ///
    /// Returns [`NothingToUndo::RoundOver`] once the round has
    /// concluded (a recorded outcome is final) and
    /// [`NothingToUndo::EmptyHistory`] when no moves have been made.
    #[instrument(skip(self))]
    pub fn undo_last_move(&mut self) -> Result<Position, NothingToUndo> {
        if !self.status.is_in_progress() {
            return Err(NothingToUndo::RoundOver);
        }
        let last = self.history.pop().ok_or(NothingToUndo::EmptyHistory)?;

        self.board.set(last, Square::Empty);
        self.to_move = self.to_move.opponent();

        self.check_invariants();
        Ok(last)
    }

    /// Discards the current round: empty board, empty history, X to
    /// move. The tally is untouched.
    #[instrument(skip(self))]
    pub fn start_new_round(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.to_move = Player::X;
        self.status = RoundStatus::InProgress;
    }

    /// Zeroes the tally and starts a new round.
    #[instrument(skip(self))]
    pub fn reset_match(&mut self) {
        self.scores.reset();
        self.start_new_round();
    }

    /// Suggests a move for the current mover: the first empty position
    /// in the fixed preference order (center, corners, edges).
    ///
    /// The suggestion is not applied; the caller decides whether to
    /// play it.
    ///
    /// # Errors
    ///
    /// Returns [`NoMovesAvailable::RoundOver`] once the round has
    /// concluded and [`NoMovesAvailable::BoardFull`] when every square
    /// is taken.
    #[instrument(skip(self))]
    pub fn suggest_move(&self) -> Result<Position, NoMovesAvailable> {
        if !self.status.is_in_progress() {
            return Err(NoMovesAvailable::RoundOver);
        }
        Position::PREFERRED
            .iter()
            .copied()
            .find(|pos| self.board.is_empty(*pos))
            .ok_or(NoMovesAvailable::BoardFull)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current mover.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the round status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Returns the score tally.
    pub fn scores(&self) -> &ScoreTally {
        &self.scores
    }

    /// Returns the move history in chronological order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// True when undo would succeed: moves exist and the round is
    /// still in progress.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty() && self.status.is_in_progress()
    }

    /// Evaluates the terminal condition: first completed line in fixed
    /// order, else draw on a full board, else in progress.
    fn evaluate_terminal(&self) -> RoundStatus {
        if let Some((winner, line)) = rules::check_winner(&self.board) {
            RoundStatus::Won { winner, line }
        } else if self.board.is_full() {
            RoundStatus::Draw
        } else {
            RoundStatus::InProgress
        }
    }

    fn check_invariants(&self) {
        debug_assert!(
            RoundInvariants::check_all(self).is_ok(),
            "engine invariants violated"
        );
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine() {
        let engine = GameEngine::new();
        assert_eq!(engine.to_move(), Player::X);
        assert_eq!(engine.status(), RoundStatus::InProgress);
        assert!(engine.history().is_empty());
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_turn_flips_after_move() {
        let mut engine = GameEngine::new();
        engine.apply_move(Position::Center).expect("legal move");
        assert_eq!(engine.to_move(), Player::O);
        assert_eq!(engine.board().get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut engine = GameEngine::new();
        engine.apply_move(Position::Center).expect("legal move");
        let before = engine.clone();
        assert_eq!(
            engine.apply_move(Position::Center),
            Err(IllegalMove::Occupied(Position::Center))
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let mut engine = GameEngine::new();
        let before = engine.clone();
        assert_eq!(engine.apply_index(9), Err(IllegalMove::OutOfRange(9)));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_terminal_round_rejects_moves() {
        // X takes the top row.
        let mut engine = GameEngine::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
        .expect("legal sequence");
        assert!(matches!(engine.status(), RoundStatus::Won { winner: Player::X, .. }));
        assert_eq!(
            engine.apply_move(Position::BottomRight),
            Err(IllegalMove::RoundOver)
        );
    }

    #[test]
    fn test_terminal_round_blocks_hint_and_undo() {
        let mut engine = GameEngine::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
        .expect("legal sequence");
        assert_eq!(engine.suggest_move(), Err(NoMovesAvailable::RoundOver));
        assert_eq!(engine.undo_last_move(), Err(NothingToUndo::RoundOver));
        // A new round clears the way again.
        engine.start_new_round();
        assert_eq!(engine.suggest_move(), Ok(Position::Center));
    }
}
