//! Word legality.
//!
//! A word may be played when it is long enough, the dictionary knows it, and
//! it does not collide with an earlier play. Two words collide when one is a
//! prefix of the other, compared case-insensitively, which also rules out
//! replaying a word verbatim.

use serde::{Deserialize, Serialize};

use crate::core::{IllegalWordReason, PlayerId};
use crate::dictionary::Dictionary;

/// A word accepted onto the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedWord {
    /// The word as spelled by the tiles.
    pub text: String,
    /// Who played it.
    pub played_by: PlayerId,
}

/// Whether `candidate` and `earlier` are roots or extensions of each other.
///
/// Both arguments must already be lowercase.
#[must_use]
pub fn collides(candidate: &str, earlier: &str) -> bool {
    earlier.starts_with(candidate) || candidate.starts_with(earlier)
}

/// Check `text` against the minimum length, the dictionary and history.
///
/// `len` is the number of tiles selected. The dictionary is queried with the
/// lowercased word.
pub fn check_word<'a>(
    text: &str,
    len: usize,
    min_len: usize,
    played: impl IntoIterator<Item = &'a PlayedWord>,
    dictionary: &dyn Dictionary,
) -> Result<(), IllegalWordReason> {
    if len == 0 || len < min_len {
        return Err(IllegalWordReason::TooShort {
            len,
            min: min_len.max(1),
        });
    }

    let lower = text.to_lowercase();
    if !dictionary.contains(&lower) {
        return Err(IllegalWordReason::NotInDictionary);
    }

    for word in played {
        let earlier = word.text.to_lowercase();
        if collides(&lower, &earlier) {
            return Err(IllegalWordReason::AlreadyPlayed { played: earlier });
        }
    }

    Ok(())
}
