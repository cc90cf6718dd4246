//! Cumulative score tally across rounds of a match.

use crate::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a concluded round, the unit the tally counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player completed a line.
    Win(Player),
    /// Full board, no line.
    Draw,
}

/// Win and draw counters for the current match.
///
/// The tally survives round resets and is zeroed only by an explicit
/// match reset. Each concluded round is counted exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl ScoreTally {
    /// Creates a zeroed tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Rounds won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Rounds drawn.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Rounds won by the given player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Records a concluded round.
    #[instrument]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::X) => self.x_wins += 1,
            Outcome::Win(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Zeroes all counters.
    #[instrument]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tally_zeroed() {
        let tally = ScoreTally::new();
        assert_eq!(tally.x_wins(), 0);
        assert_eq!(tally.o_wins(), 0);
        assert_eq!(tally.draws(), 0);
    }

    #[test]
    fn test_record_outcomes() {
        let mut tally = ScoreTally::new();
        tally.record(Outcome::Win(Player::X));
        tally.record(Outcome::Win(Player::X));
        tally.record(Outcome::Win(Player::O));
        tally.record(Outcome::Draw);
        assert_eq!(tally.x_wins(), 2);
        assert_eq!(tally.o_wins(), 1);
        assert_eq!(tally.draws(), 1);
        assert_eq!(tally.wins(Player::X), 2);
        assert_eq!(tally.wins(Player::O), 1);
    }

    #[test]
    fn test_reset_zeroes_all_counters() {
        let mut tally = ScoreTally::new();
        tally.record(Outcome::Win(Player::O));
        tally.record(Outcome::Draw);
        tally.reset();
        assert_eq!(tally, ScoreTally::new());
    }
}
