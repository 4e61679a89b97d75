//! Player intents
//!
//! The input collaborator (keyboard, gamepad, buttons, a script) translates
//! raw events into these intents and hands them to `Game::handle_intent`.
//! Level intents carry the new held state; `Start` and `Restart` are one-shot.

use serde::{Deserialize, Serialize};

/// A sampled input signal, decoupled from the raw event source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Accelerate(bool),
    TurnLeft(bool),
    TurnRight(bool),
    Fire(bool),
    /// Leave the start screen
    Start,
    /// Start over from the game-over screen
    Restart,
}

impl Intent {
    /// Whether this intent sets or clears a held control
    pub fn is_level(&self) -> bool {
        !matches!(self, Intent::Start | Intent::Restart)
    }
}
