//! Application state and logic.
//!
//! The app holds the engine plus presentation-only state (status line,
//! end-of-round modal). Every handler funnels a user intent into one
//! engine operation and re-derives the display from the result;
//! nothing here tracks game state of its own.

use noughts::{GameEngine, IllegalMove, RoundStatus};
use tracing::debug;

/// End-of-round popup content.
pub struct Modal {
    /// Headline, e.g. "Player X wins!".
    pub title: String,
    /// Supporting message.
    pub message: String,
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    status_message: String,
    modal: Option<Modal>,
}

const OPENING_PROMPT: &str = "Player X's turn. Press 1-9 to claim a square.";

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            status_message: OPENING_PROMPT.to_string(),
            modal: None,
        }
    }

    /// Gets the engine for rendering.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Gets the end-of-round modal, if one is showing.
    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    /// Claims the square at the given board index for the current mover.
    pub fn make_move(&mut self, index: usize) {
        debug!(index, "Making move");
        let result = self.engine.apply_index(index);
        self.react(result);
    }

    /// Takes back the most recent move.
    pub fn undo(&mut self) {
        debug!("Undoing last move");
        match self.engine.undo_last_move() {
            Ok(pos) => {
                self.status_message = format!(
                    "Took back {}. Player {}'s turn.",
                    pos,
                    self.engine.to_move()
                );
            }
            Err(e) => self.status_message = format!("Cannot undo: {}.", e),
        }
    }

    /// Suggests a move and plays it as the current mover.
    pub fn hint(&mut self) {
        debug!("Applying hint");
        match self.engine.suggest_move() {
            Ok(pos) => {
                self.status_message = format!("Hint: {}.", pos);
                let result = self.engine.apply_move(pos);
                self.react(result);
            }
            Err(e) => self.status_message = format!("No hint: {}.", e),
        }
    }

    /// Starts a fresh round, keeping the score tally.
    pub fn new_round(&mut self) {
        debug!("Starting new round");
        self.engine.start_new_round();
        self.modal = None;
        self.status_message = OPENING_PROMPT.to_string();
    }

    /// Restarts the match: zeroes the tally and starts a fresh round.
    pub fn reset_match(&mut self) {
        debug!("Resetting match");
        self.engine.reset_match();
        self.modal = None;
        self.status_message = format!("Match restarted. {}", OPENING_PROMPT);
    }

    /// Closes the end-of-round modal without starting a new round.
    pub fn dismiss_modal(&mut self) {
        self.modal = None;
    }

    /// Closes the modal and starts the next round.
    pub fn play_again(&mut self) {
        self.new_round();
    }

    fn react(&mut self, result: Result<RoundStatus, IllegalMove>) {
        match result {
            Ok(RoundStatus::InProgress) => {
                self.status_message = format!("Player {}'s turn.", self.engine.to_move());
            }
            Ok(RoundStatus::Won { winner, .. }) => {
                self.status_message =
                    format!("Player {} wins! Press Enter to play again.", winner);
                self.modal = Some(Modal {
                    title: format!("Player {} wins!", winner),
                    message: format!("Nice! Player {} completed three-in-a-row.", winner),
                });
            }
            Ok(RoundStatus::Draw) => {
                self.status_message = "It's a draw. Press Enter to play again.".to_string();
                self.modal = Some(Modal {
                    title: "It's a draw".to_string(),
                    message: "No winner this round.".to_string(),
                });
            }
            Err(e) => {
                self.status_message = format!("Invalid move: {}. Try again.", e);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
