//! Game session lifecycle.

use std::sync::Arc;

use tracing::{info, instrument};

use super::intent::Intent;
use crate::board::Board;
use crate::core::{BoardConfig, GameError, GameRng};
use crate::dictionary::Dictionary;

/// Holds the one active board and starts replacements on demand.
///
/// A session is an ordinary value owned by the host; there is no global
/// game. Each board's letters come from a fork of the session RNG, so a
/// seeded session replays the same sequence of boards.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use tile_press::core::BoardConfig;
/// use tile_press::dictionary::WordList;
/// use tile_press::session::{GameSession, Intent};
///
/// let config = BoardConfig::default().with_seed(7);
/// let mut session = GameSession::new(config, Arc::new(WordList::from_words(["cat"])));
///
/// session.apply(Intent::SkipTurn).unwrap();
/// session.apply(Intent::SkipTurn).unwrap();
/// assert!(session.board().is_finished());
///
/// session.apply(Intent::Restart).unwrap();
/// assert!(!session.board().is_finished());
/// assert_eq!(session.games_started(), 2);
/// ```
pub struct GameSession {
    config: BoardConfig,
    dictionary: Arc<dyn Dictionary>,
    rng: GameRng,
    board: Board,
    games_started: u32,
}

impl GameSession {
    /// Start a session and its first game.
    ///
    /// Without a configured seed a random one is drawn and logged.
    ///
    /// Panics if `config` does not validate.
    #[must_use]
    pub fn new(config: BoardConfig, dictionary: Arc<dyn Dictionary>) -> Self {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_random_seed(),
        };
        info!(seed = rng.seed(), size = config.size, "starting session");

        let board = Board::new(&config, dictionary.clone(), &mut rng);
        Self {
            config,
            dictionary,
            rng,
            board,
            games_started: 1,
        }
    }

    /// Replace the board with a fresh game.
    #[instrument(skip(self), fields(games = self.games_started))]
    pub fn restart(&mut self) {
        self.board = Board::new(&self.config, self.dictionary.clone(), &mut self.rng);
        self.games_started += 1;
        info!(seed = ?self.board.seed(), "game restarted");
    }

    /// Dispatch an intent to the active board.
    pub fn apply(&mut self, intent: Intent) -> Result<(), GameError> {
        match intent {
            Intent::SelectTile(id) => self.board.select_tile(id),
            Intent::DeselectTile(id) => self.board.deselect_tile(id),
            Intent::ClearWord => self.board.clear_word(),
            Intent::SubmitWord => self.board.submit_word(),
            Intent::SkipTurn => self.board.skip_turn(),
            Intent::Resign => self.board.resign(),
            Intent::Restart => {
                self.restart();
                Ok(())
            }
        }
    }

    /// The active board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The active board, for calling intents directly.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The configuration every board in this session uses.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Seed of the session RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Number of boards created, including the current one.
    #[must_use]
    pub fn games_started(&self) -> u32 {
        self.games_started
    }
}
