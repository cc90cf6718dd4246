//! History consistency invariant: the board is exactly the history.

use super::Invariant;
use crate::{GameEngine, Player, Square};
use tracing::warn;

/// Invariant: the move history fully accounts for the board.
///
/// Each history entry is distinct, the mark at the nth entry belongs
/// to the player implied by its parity (X on even, O on odd), and no
/// square is occupied without a history entry.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        for (n, &pos) in history.iter().enumerate() {
            if history[..n].contains(&pos) {
                warn!(%pos, "Position appears twice in history");
                return false;
            }
            let mover = if n % 2 == 0 { Player::X } else { Player::O };
            if engine.board().get(pos) != Square::Occupied(mover) {
                warn!(%pos, %mover, "Board mark does not match history");
                return false;
            }
        }

        let filled = engine
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        let valid = filled == history.len();
        if !valid {
            warn!(filled, history_len = history.len(), "History incomplete");
        }
        valid
    }

    fn description() -> &'static str {
        "Move history matches the occupied squares"
    }
}
