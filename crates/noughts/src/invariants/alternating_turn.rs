//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameEngine, Player, RoundStatus};

/// Invariant: the current mover matches the history parity.
///
/// Moves alternate starting with X, so after an even number of moves
/// X is due, after an odd number O is due. Once the round concludes
/// the turn stops flipping and stays with the player who moved last.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let expected_next = if engine.history().len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        match engine.status() {
            RoundStatus::InProgress => engine.to_move() == expected_next,
            // Terminal: to_move still names the last mover.
            _ => engine.to_move() == expected_next.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_new_engine_holds() {
        let engine = GameEngine::new();
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_single_move_holds() {
        let mut engine = GameEngine::new();
        engine.apply_move(Position::Center).expect("legal move");
        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.to_move(), Player::O);
    }

    #[test]
    fn test_holds_at_win() {
        let engine = GameEngine::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ])
        .expect("legal sequence");
        assert!(matches!(engine.status(), RoundStatus::Won { .. }));
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_detects_skipped_turn() {
        let mut engine = GameEngine::new();
        engine.apply_move(Position::Center).expect("legal move");
        engine.to_move = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
