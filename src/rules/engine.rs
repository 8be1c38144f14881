//! The two state transitions of the game.
//!
//! - `submit_word`: a user proposes a word. Checked for length, then the
//!   dictionary, then formation from the displayed words.
//! - `reveal_letter`: the board turns over one tile not yet in play.
//!
//! Both take a snapshot by reference and return a new one; the input is
//! never modified. On rejection the returned snapshot is a clone of the
//! input (O(1), and `ptr_eq` to it).

use super::history::RootHistoryGuard;
use super::solver::{CreateResult, WordFormationSolver};
use super::status::WordStatus;
use crate::core::{EngineConfig, GameRng, GameState, RandomSource, User, UserId, Word};
use crate::lexicon::{Dictionary, LetterPool};

/// Result of `Engine::submit_word`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// The new snapshot on `Ok`, otherwise the unchanged input.
    pub state: GameState,
    pub status: WordStatus,
}

impl Submission {
    fn rejected(state: &GameState, status: WordStatus) -> Self {
        Self {
            state: state.clone(),
            status,
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}

/// Rules engine bound to a dictionary, a tile pool and a random source.
///
/// ## Concurrency
///
/// `submit_word` takes `&self` and is pure. `reveal_letter` takes
/// `&mut self` because it advances the random source, so an engine shared
/// across threads must sit behind a lock. Two submissions against the same
/// snapshot both succeed independently; callers serialize writes or retry
/// against the latest snapshot.
///
/// ## Example
///
/// ```
/// use squabble::core::{EngineConfig, GameState, User, UserId};
/// use squabble::lexicon::{TileBag, WordList};
/// use squabble::rules::{Engine, WordStatus};
///
/// let words = WordList::from_words(["TEA", "EAT"]);
/// let mut engine = Engine::new(words, TileBag::parse("T:1 E:1 A:1").unwrap(), &EngineConfig::new().with_seed(1));
///
/// let mut state = GameState::new();
/// for _ in 0..3 {
///     state = engine.reveal_letter(&state, UserId::BOARD);
/// }
///
/// let alice = User::new(UserId::new(1), 3);
/// let submission = engine.submit_word(&state, &alice, "EAT");
/// assert_eq!(submission.status, WordStatus::Ok);
/// assert_eq!(submission.state.words_of(alice.id()).count(), 1);
/// ```
pub struct Engine<D, P, R = GameRng> {
    dictionary: D,
    pool: P,
    rng: R,
    solver: WordFormationSolver,
}

impl<D: Dictionary, P: LetterPool> Engine<D, P, GameRng> {
    /// Create an engine with a ChaCha RNG seeded from `config.seed`, or
    /// from the OS when no seed is set.
    #[must_use]
    pub fn new(dictionary: D, pool: P, config: &EngineConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(dictionary, pool, rng, config)
    }
}

impl<D: Dictionary, P: LetterPool, R: RandomSource> Engine<D, P, R> {
    /// Create an engine with a caller-supplied random source.
    ///
    /// `config.seed` is ignored; the source is used as given.
    #[must_use]
    pub fn with_rng(dictionary: D, pool: P, rng: R, config: &EngineConfig) -> Self {
        Self {
            dictionary,
            pool,
            rng,
            solver: WordFormationSolver::new(RootHistoryGuard::new(config.root_rules.clone())),
        }
    }

    #[must_use]
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    #[must_use]
    pub fn pool(&self) -> &P {
        &self.pool
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    #[must_use]
    pub fn solver(&self) -> &WordFormationSolver {
        &self.solver
    }

    /// Run the formation search with this engine's guard.
    #[must_use]
    pub fn create_word_from(&self, available: &[Word], target: &str) -> CreateResult {
        self.solver.create_word_from(available, target)
    }

    /// Apply a user's word to a snapshot.
    ///
    /// Checks run in order and the first failure wins:
    /// 1. fewer than `user.minimum_chars()` characters: `NotLongEnough`
    /// 2. unknown to the dictionary: `NotInDictionary`
    /// 3. no decomposition of the displayed words: the solver's status
    ///
    /// On success every consumed word leaves its owner's sequence and the
    /// new word is appended to the user's sequence.
    #[must_use]
    pub fn submit_word(&self, state: &GameState, user: &User, word: &str) -> Submission {
        let status = self.check_word(user, word);
        if !status.is_ok() {
            tracing::debug!(user = %user.id(), word, %status, "word rejected");
            return Submission::rejected(state, status);
        }

        let result = self.solver.create_word_from(&state.current_words(), word);
        let Some(parts) = result.parts else {
            tracing::debug!(user = %user.id(), word, status = %result.status, "word rejected");
            return Submission::rejected(state, result.status);
        };

        tracing::debug!(user = %user.id(), word, parts = parts.len(), "word accepted");
        let (next, _) = state.with_composite(user.id(), word, parts);
        Submission {
            state: next,
            status: WordStatus::Ok,
        }
    }

    fn check_word(&self, user: &User, word: &str) -> WordStatus {
        if word.chars().count() < user.minimum_chars() {
            WordStatus::NotLongEnough
        } else if !self.dictionary.is_valid(word) {
            WordStatus::NotInDictionary
        } else {
            WordStatus::Ok
        }
    }

    /// Letters of the pool not currently on display, in pool order.
    ///
    /// Each displayed letter cancels one matching tile. A displayed letter
    /// with no tile left to cancel is ignored.
    #[must_use]
    pub fn available_letters(&self, state: &GameState) -> Vec<char> {
        let mut available = self.pool.letters().to_vec();
        for letter in state.letters_in_play() {
            if let Some(pos) = available.iter().position(|&c| c == letter) {
                available.remove(pos);
            }
        }
        available
    }

    /// Turn over one tile onto `board`.
    ///
    /// The tile is chosen uniformly from `available_letters`. When nothing
    /// is left, or the random source answers out of range, the input
    /// snapshot is returned unchanged.
    #[must_use]
    pub fn reveal_letter(&mut self, state: &GameState, board: impl Into<UserId>) -> GameState {
        let available = self.available_letters(state);
        if available.is_empty() {
            tracing::warn!("no letters left to reveal");
            return state.clone();
        }

        let pick = self.rng.index(available.len());
        let Some(&letter) = available.get(pick) else {
            tracing::warn!(pick, len = available.len(), "random source picked out of range");
            return state.clone();
        };
        let board = board.into();
        tracing::info!(%letter, %board, remaining = available.len() - 1, "revealed letter");
        state.with_tile(board, letter)
    }
}
