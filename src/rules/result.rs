//! How a game ended.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Why the game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    /// A word claimed the last unowned tile.
    BoardFull,
    /// Both players skipped back to back.
    BothSkipped,
    /// This player gave up.
    Resigned(PlayerId),
}

/// Lifecycle of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Intents are accepted.
    InProgress,
    /// Terminal; only a new board resumes play.
    Finished(FinishReason),
}

impl Phase {
    /// Whether the game is over.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Phase::Finished(_))
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Committed scores were level.
    Draw,
}

impl GameResult {
    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Decide a game from how it ended and the committed scores.
///
/// A resignation always goes to the other player. Otherwise the strictly
/// higher score wins and level scores draw.
#[must_use]
pub fn decide(reason: FinishReason, first: u32, second: u32) -> GameResult {
    if let FinishReason::Resigned(loser) = reason {
        return GameResult::Winner(loser.other());
    }

    match first.cmp(&second) {
        std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::First),
        std::cmp::Ordering::Less => GameResult::Winner(PlayerId::Second),
        std::cmp::Ordering::Equal => GameResult::Draw,
    }
}
