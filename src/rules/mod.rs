//! Game rules as pure functions over the grid.
//!
//! - `scoring`: gain and steal arithmetic for the word in progress
//! - `fortify`: whole-grid fortification pass
//! - `legality`: minimum length, dictionary and history checks
//! - `result`: finish reasons and winner determination
//!
//! The `Board` calls into these; nothing here mutates anything but the grid
//! handed to `refortify`.

pub mod scoring;
pub mod fortify;
pub mod legality;
pub mod result;

pub use scoring::{projected_score, stolen_count, turn_gain};
pub use fortify::refortify;
pub use legality::{check_word, PlayedWord};
pub use result::{FinishReason, GameResult, Phase};
