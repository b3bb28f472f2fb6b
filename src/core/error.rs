//! Game error types.
//!
//! Every error is recoverable: an operation that returns `Err` has left the
//! board exactly as it found it.

use thiserror::Error;

use crate::board::TileId;

/// Why a tile selection was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The tile is already part of the word in progress.
    #[error("tile {0} is already selected")]
    AlreadySelected(TileId),

    /// No tile with this id exists on the board.
    #[error("tile {0} is not on the board")]
    UnknownTile(TileId),

    /// The game is over.
    #[error("the game has finished")]
    GameFinished,
}

/// Why a word may not be submitted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalWordReason {
    /// Fewer tiles than the configured minimum.
    #[error("word has {len} letters, at least {min} required")]
    TooShort {
        /// Letters selected.
        len: usize,
        /// Configured minimum.
        min: usize,
    },

    /// The dictionary does not know the word.
    #[error("not in the dictionary")]
    NotInDictionary,

    /// The word collides with an earlier play.
    #[error("conflicts with previously played word {played:?}")]
    AlreadyPlayed {
        /// The earlier word, lowercased.
        played: String,
    },
}

/// Why a board configuration was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The board must have at least one tile.
    #[error("board size must be at least 1")]
    ZeroSize,

    /// Words may not be shorter than two letters.
    #[error("minimum word length must be at least {floor}, got {min}")]
    MinWordLenTooSmall {
        /// Configured minimum.
        min: usize,
        /// Smallest allowed minimum.
        floor: usize,
    },
}

/// Top-level game error type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A tile could not be selected or deselected.
    #[error("invalid selection: {0}")]
    InvalidSelection(#[from] SelectionError),

    /// The word in progress cannot be played.
    #[error("illegal word {word:?}: {reason}")]
    IllegalWord {
        /// The rejected word as spelled on the tiles.
        word: String,
        /// Why it was rejected.
        reason: IllegalWordReason,
    },

    /// A turn-level intent arrived after the game ended.
    #[error("illegal operation: {0}")]
    IllegalOperation(&'static str),

    /// The board configuration cannot produce a playable game.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// A fixed letter layout does not fit the board.
    #[error("layout has {found} letters, board needs {expected}")]
    InvalidLayout {
        /// Tiles on the board.
        expected: usize,
        /// Letters supplied.
        found: usize,
    },

    /// A fixed letter layout contains something other than an ASCII letter.
    #[error("invalid tile letter {0:?}")]
    InvalidLetter(char),
}

impl GameError {
    /// Whether this is an `IllegalWord` rejection.
    #[must_use]
    pub fn is_illegal_word(&self) -> bool {
        matches!(self, GameError::IllegalWord { .. })
    }
}
