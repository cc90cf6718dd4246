//! Balanced marks invariant: X moves first, so X leads by at most one.

use super::Invariant;
use crate::{GameEngine, Player};
use tracing::warn;

/// Invariant: X-count minus O-count is 0 or 1.
///
/// X always moves first and turns alternate, so after any legal
/// sequence (including undos) X has placed either as many marks as O
/// or exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<GameEngine> for BalancedMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let x_count = engine.board().count(Player::X);
        let o_count = engine.board().count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X-count minus O-count is 0 or 1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_empty_board_holds() {
        let engine = GameEngine::new();
        assert!(BalancedMarksInvariant::holds(&engine));
    }

    #[test]
    fn test_holds_through_moves_and_undo() {
        let mut engine = GameEngine::new();
        engine.apply_move(Position::Center).expect("legal move");
        assert!(BalancedMarksInvariant::holds(&engine));
        engine.apply_move(Position::TopLeft).expect("legal move");
        assert!(BalancedMarksInvariant::holds(&engine));
        engine.undo_last_move().expect("undoable");
        assert!(BalancedMarksInvariant::holds(&engine));
    }

    #[test]
    fn test_detects_double_mark() {
        let mut engine = GameEngine::new();
        engine.board.set(Position::TopLeft, Square::Occupied(Player::X));
        engine.board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!BalancedMarksInvariant::holds(&engine));
    }
}
