//! Board state and the intent API.
//!
//! ## Board
//!
//! Owns the grid, both players, the word in progress and the played-word
//! history. Every mutation goes through an intent method (`select_tile`,
//! `deselect_tile`, `clear_word`, `submit_word`, `skip_turn`, `resign`);
//! everything else is a read-only query computed from current state.
//!
//! Intents are all-or-nothing: an `Err` means nothing changed.

use std::fmt;
use std::sync::Arc;

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use super::grid::{Grid, Position};
use super::tile::{Tile, TileId};
use crate::core::{BoardConfig, GameError, GameRng, Player, PlayerId, PlayerMap, SelectionError};
use crate::dictionary::Dictionary;
use crate::rules::result::decide;
use crate::rules::{self, FinishReason, GameResult, Phase, PlayedWord};

/// A game in progress (or just finished) between two players.
#[derive(Clone)]
pub struct Board {
    grid: Grid,
    min_word_len: usize,
    /// `None` when the letters were supplied by the caller.
    seed: Option<u64>,

    players: PlayerMap<Player>,
    current: PlayerId,
    turn_number: u32,
    last_turn_skipped: bool,

    /// Selected tiles in spelling order. Never holds a tile twice.
    word: SmallVec<[TileId; 8]>,
    played: Vector<PlayedWord>,

    phase: Phase,
    winner: Option<PlayerId>,

    dictionary: Arc<dyn Dictionary>,
}

impl Board {
    /// Create a board of random letters.
    ///
    /// Letters are drawn from a fork of `rng`, so one session RNG can seed a
    /// sequence of distinct, reproducible boards.
    ///
    /// Panics if `config` does not validate. Deserialized configs are
    /// validated on the way in; this only catches fields set by hand.
    #[must_use]
    pub fn new(config: &BoardConfig, dictionary: Arc<dyn Dictionary>, rng: &mut GameRng) -> Self {
        assert!(config.validate().is_ok(), "Board config must validate: {config:?}");

        let mut letters = rng.fork();
        let seed = letters.seed();
        let grid = Grid::new(config.size, |_| letters.gen_letter());

        debug!(size = config.size, seed, "created board");
        Self::with_grid(grid, config.min_word_len, Some(seed), dictionary)
    }

    /// Create a board with a fixed letter layout.
    ///
    /// `letters` lists the tiles row by row; whitespace is ignored and
    /// letters are uppercased.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use tile_press::board::Board;
    /// use tile_press::core::BoardConfig;
    /// use tile_press::dictionary::WordList;
    ///
    /// let config = BoardConfig::default().with_size(2);
    /// let dictionary = Arc::new(WordList::from_words(["cats"]));
    /// let board = Board::from_letters(&config, "ca\nts", dictionary).unwrap();
    ///
    /// assert_eq!(board.tile_at(1, 0).unwrap().letter(), 'T');
    /// ```
    pub fn from_letters(
        config: &BoardConfig,
        letters: &str,
        dictionary: Arc<dyn Dictionary>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let letters: Vec<char> = letters.chars().filter(|c| !c.is_whitespace()).collect();

        if let Some(&bad) = letters.iter().find(|c| !c.is_ascii_alphabetic()) {
            return Err(GameError::InvalidLetter(bad));
        }
        if letters.len() != config.tile_count() {
            return Err(GameError::InvalidLayout {
                expected: config.tile_count(),
                found: letters.len(),
            });
        }

        let grid = Grid::new(config.size, |id| letters[id.index()].to_ascii_uppercase());
        Ok(Self::with_grid(grid, config.min_word_len, None, dictionary))
    }

    fn with_grid(
        grid: Grid,
        min_word_len: usize,
        seed: Option<u64>,
        dictionary: Arc<dyn Dictionary>,
    ) -> Self {
        Self {
            grid,
            min_word_len,
            seed,
            players: PlayerMap::new(Player::new),
            current: PlayerId::First,
            turn_number: 1,
            last_turn_skipped: false,
            word: SmallVec::new(),
            played: Vector::new(),
            phase: Phase::InProgress,
            winner: None,
            dictionary,
        }
    }

    // === Grid ===

    /// The tile grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Edge length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Look up a tile by id.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.grid.get(id)
    }

    /// Look up a tile by coordinate.
    #[must_use]
    pub fn tile_at(&self, row: usize, col: usize) -> Option<&Tile> {
        self.grid.at(Position::new(row, col))
    }

    /// Seed the letters were drawn from, or `None` for a fixed layout.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whether every tile has an owner.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.grid.is_full()
    }

    // === Players ===

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// The player waiting for their turn.
    #[must_use]
    pub fn other_player(&self) -> PlayerId {
        self.current.other()
    }

    /// Whether it is `player`'s turn.
    #[must_use]
    pub fn is_turn(&self, player: PlayerId) -> bool {
        self.current == player
    }

    /// Player record for `player`.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// Score locked in at the end of `player`'s last completed turn.
    #[must_use]
    pub fn committed_score(&self, player: PlayerId) -> u32 {
        self.players[player].committed_score
    }

    /// Score `player` would hold if the word in progress were submitted now.
    ///
    /// Equal to the committed score once the game has finished.
    #[must_use]
    pub fn projected_score(&self, player: PlayerId) -> u32 {
        let committed = self.committed_score(player);
        if self.is_finished() {
            return committed;
        }
        rules::projected_score(&self.grid, &self.word, self.current, player, committed)
    }

    /// Points the current player would gain from the word in progress.
    #[must_use]
    pub fn turn_gain(&self) -> u32 {
        rules::turn_gain(&self.grid, &self.word, self.current)
    }

    /// Points the word in progress would take from the other player.
    #[must_use]
    pub fn stolen_count(&self) -> u32 {
        rules::stolen_count(&self.grid, &self.word, self.other_player())
    }

    /// Turn counter, starting at 1 and advancing whenever the turn passes.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    // === Word in progress ===

    /// Selected tile ids in spelling order.
    #[must_use]
    pub fn word_in_progress(&self) -> &[TileId] {
        &self.word
    }

    /// Selected tiles in spelling order.
    pub fn word_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.word.iter().filter_map(move |&id| self.grid.get(id))
    }

    /// The word in progress as spelled by the tiles.
    #[must_use]
    pub fn current_word_text(&self) -> String {
        self.word_tiles().map(Tile::letter).collect()
    }

    /// Whether `id` is part of the word in progress.
    #[must_use]
    pub fn is_selected(&self, id: TileId) -> bool {
        self.word.contains(&id)
    }

    /// Whether there is a selection to clear.
    #[must_use]
    pub fn can_clear(&self) -> bool {
        !self.is_finished() && !self.word.is_empty()
    }

    /// Whether enough tiles are selected to attempt a submission.
    #[must_use]
    pub fn has_min_letters(&self) -> bool {
        self.word.len() >= self.min_word_len
    }

    /// Why the word in progress cannot be submitted, if it cannot.
    pub fn check_word(&self) -> Result<(), GameError> {
        self.ensure_in_progress("the game has finished")?;

        let text = self.current_word_text();
        rules::check_word(
            &text,
            self.word.len(),
            self.min_word_len,
            &self.played,
            self.dictionary.as_ref(),
        )
        .map_err(|reason| GameError::IllegalWord { word: text, reason })
    }

    /// Whether `submit_word` would succeed.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.check_word().is_ok()
    }

    // === History ===

    /// Every accepted word, oldest first.
    #[must_use]
    pub fn played_words(&self) -> &Vector<PlayedWord> {
        &self.played
    }

    /// Whether any word has been played yet.
    #[must_use]
    pub fn has_history(&self) -> bool {
        !self.played.is_empty()
    }

    // === Outcome ===

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// The winner. `None` while playing, and also after a drawn game.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.is_finished()
            .then(|| self.winner.map_or(GameResult::Draw, GameResult::Winner))
    }

    // === Intents ===

    /// Append a tile to the word in progress.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn select_tile(&mut self, id: TileId) -> Result<(), GameError> {
        if self.is_finished() {
            return Err(SelectionError::GameFinished.into());
        }
        if !self.grid.contains(id) {
            return Err(SelectionError::UnknownTile(id).into());
        }
        if self.is_selected(id) {
            return Err(SelectionError::AlreadySelected(id).into());
        }

        self.word.push(id);
        debug!(word = %self.current_word_text(), "tile selected");
        Ok(())
    }

    /// Remove a tile from the word in progress. Unselected tiles are ignored.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn deselect_tile(&mut self, id: TileId) -> Result<(), GameError> {
        if self.is_finished() {
            return Err(SelectionError::GameFinished.into());
        }

        if let Some(pos) = self.word.iter().position(|&t| t == id) {
            self.word.remove(pos);
            debug!(word = %self.current_word_text(), "tile deselected");
        }
        Ok(())
    }

    /// Drop the whole word in progress.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn clear_word(&mut self) -> Result<(), GameError> {
        if self.is_finished() {
            return Err(SelectionError::GameFinished.into());
        }

        self.word.clear();
        debug!("word cleared");
        Ok(())
    }

    /// Play the word in progress.
    ///
    /// Scores are frozen at their projected values, unfortified selected
    /// tiles change hands, and fortification is recomputed. The game ends if
    /// the board is now full; otherwise the turn passes.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn submit_word(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress("cannot submit a word after the game has finished")?;
        if let Err(err) = self.check_word() {
            debug!(%err, "word rejected");
            return Err(err);
        }

        let mover = self.current;
        let text = self.current_word_text();

        let projected = PlayerMap::new(|p| self.projected_score(p));
        for (id, player) in self.players.iter_mut() {
            player.committed_score = projected[id];
        }

        for &id in &self.word {
            if let Some(tile) = self.grid.get_mut(id) {
                if !tile.is_fortified() {
                    tile.set_owner(mover);
                }
            }
        }

        self.played.push_back(PlayedWord {
            text: text.clone(),
            played_by: mover,
        });

        let full = rules::refortify(&mut self.grid);
        info!(
            word = %text,
            first = self.committed_score(PlayerId::First),
            second = self.committed_score(PlayerId::Second),
            "word played"
        );

        if full {
            self.finish(FinishReason::BoardFull);
        } else {
            self.last_turn_skipped = false;
            self.pass_turn();
        }
        Ok(())
    }

    /// Pass without playing. Two skips in a row end the game.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn skip_turn(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress("cannot skip after the game has finished")?;

        if self.last_turn_skipped {
            self.finish(FinishReason::BothSkipped);
        } else {
            self.last_turn_skipped = true;
            self.pass_turn();
        }
        Ok(())
    }

    /// The current player concedes; the other player wins.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn resign(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress("cannot resign after the game has finished")?;
        self.finish(FinishReason::Resigned(self.current));
        Ok(())
    }

    fn ensure_in_progress(&self, what: &'static str) -> Result<(), GameError> {
        if self.is_finished() {
            Err(GameError::IllegalOperation(what))
        } else {
            Ok(())
        }
    }

    fn pass_turn(&mut self) {
        self.word.clear();
        self.current = self.current.other();
        self.turn_number += 1;
        debug!(player = %self.current, turn = self.turn_number, "turn passed");
    }

    fn finish(&mut self, reason: FinishReason) {
        let result = decide(
            reason,
            self.committed_score(PlayerId::First),
            self.committed_score(PlayerId::Second),
        );
        self.winner = result.winner();
        self.phase = Phase::Finished(reason);

        info!(
            ?reason,
            ?result,
            first = self.committed_score(PlayerId::First),
            second = self.committed_score(PlayerId::Second),
            "game finished"
        );
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("grid", &self.grid)
            .field("players", &self.players)
            .field("current", &self.current)
            .field("word", &self.current_word_text())
            .field("played", &self.played)
            .field("phase", &self.phase)
            .field("winner", &self.winner)
            .finish_non_exhaustive()
    }
}
