//! Dictionary interface.
//!
//! The board only ever asks one question of a dictionary: is this lowercase
//! word valid? Where the words come from is up to the host. `WordList` covers
//! the usual case of a newline-separated list such as EOWL.

pub mod word_list;

pub use word_list::WordList;

use thiserror::Error;

/// Membership test for playable words.
///
/// Queries arrive lowercased. A dictionary is assumed to be static for the
/// lifetime of a session.
pub trait Dictionary: Send + Sync {
    /// Whether `word` may be played.
    fn contains(&self, word: &str) -> bool;
}

/// Failure while loading a word list.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The underlying reader failed.
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}
