//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold throughout a
//! round. They are testable independently and serve as documentation
//! of engine guarantees; the engine debug-asserts the full set after
//! every mutation.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod balanced_marks;
pub mod history_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use balanced_marks::BalancedMarksInvariant;
pub use history_consistent::HistoryConsistentInvariant;

/// All engine invariants as a composable set.
pub type RoundInvariants = (
    BalancedMarksInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_engine() {
        let engine = GameEngine::new();
        assert!(RoundInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let engine = GameEngine::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
        ])
        .expect("legal sequence");
        assert!(RoundInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_corruption() {
        let mut engine = GameEngine::replay(&[Position::Center]).expect("legal move");

        // Corrupt the board behind the engine's back.
        engine
            .board
            .set(Position::TopLeft, Square::Occupied(Player::O));

        let violations = RoundInvariants::check_all(&engine).expect_err("corrupt state");
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = GameEngine::new();

        type TwoInvariants = (BalancedMarksInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }
}
