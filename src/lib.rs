//! # tile-press
//!
//! Game-state engine for a two-player word-claiming board game.
//!
//! Players take turns spelling words from a square grid of letter tiles.
//! Every tile a word uses becomes the player's, unless it is fortified:
//! surrounded on all in-bounds sides by tiles of the same owner. A game ends
//! when the board is full, both players skip in a row, or someone resigns.
//!
//! ## Design Principles
//!
//! 1. **Intents in, queries out**: the presentation layer calls intent
//!    methods and re-reads derived values; nothing is pushed or cached.
//!
//! 2. **Ids, not pointers**: tiles refer to their owner by `PlayerId`; the
//!    `Board` owns every tile and both players.
//!
//! 3. **All-or-nothing**: a rejected intent leaves the board untouched.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `board`: Tiles, grid addressing, the `Board` and its intent API
//! - `rules`: Scoring, fortification, word legality, game results
//! - `dictionary`: The `Dictionary` trait and an in-memory `WordList`
//! - `session`: `GameSession` lifecycle and `Intent` dispatch
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use tile_press::{Board, BoardConfig, PlayerId, TileId, WordList};
//!
//! let config = BoardConfig::default().with_size(3);
//! let words = Arc::new(WordList::from_words(["cat"]));
//! let mut board = Board::from_letters(&config, "CAT DOG SUN", words).unwrap();
//!
//! for id in [0, 1, 2] {
//!     board.select_tile(TileId::new(id)).unwrap();
//! }
//! assert_eq!(board.projected_score(PlayerId::First), 3);
//!
//! board.submit_word().unwrap();
//! assert_eq!(board.committed_score(PlayerId::First), 3);
//! assert_eq!(board.current_player(), PlayerId::Second);
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod dictionary;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, ConfigError, GameError, GameRng, IllegalWordReason, Player, PlayerId, PlayerMap,
    SelectionError,
};

pub use crate::board::{Board, Grid, Position, Tile, TileId};

pub use crate::rules::{FinishReason, GameResult, Phase, PlayedWord};

pub use crate::dictionary::{Dictionary, DictionaryError, WordList};

pub use crate::session::{GameSession, Intent};
