//! Player intents.
//!
//! Every way the presentation layer can change a game, as a plain value.
//! Intents serialize, so a host can forward them over whatever channel
//! carries its UI events.

use serde::{Deserialize, Serialize};

use crate::board::TileId;

/// A request to change the game.
///
/// ```
/// use tile_press::board::TileId;
/// use tile_press::session::Intent;
///
/// let intent = Intent::SelectTile(TileId::new(7));
/// assert_eq!(serde_json::to_string(&intent).unwrap(), r#"{"SelectTile":7}"#);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Append a tile to the word in progress.
    SelectTile(TileId),
    /// Remove a tile from the word in progress.
    DeselectTile(TileId),
    /// Drop the word in progress.
    ClearWord,
    /// Play the word in progress.
    SubmitWord,
    /// Pass the turn.
    SkipTurn,
    /// Concede the game.
    Resign,
    /// Throw the board away and start a new game.
    Restart,
}
