//! # squabble
//!
//! Rules engine for a shared-letter word stealing game.
//!
//! Players reveal letter tiles from a common pool onto a board and claim
//! words built from them. A word may also be built by "stealing" words
//! already on display, from anyone, and rearranging all of their letters
//! into a new, longer word.
//!
//! ## Design Principles
//!
//! 1. **Immutable snapshots**: `GameState` is never modified. Transitions
//!    take a snapshot and return a new one, sharing structure via `im-rs`.
//!
//! 2. **In-band outcomes**: a rejected word is a `WordStatus`, returned
//!    alongside the unchanged snapshot. Nothing panics on bad input.
//!
//! 3. **Injected collaborators**: the dictionary, the tile pool and the
//!    random source are traits supplied at construction.
//!
//! ## Modules
//!
//! - `core`: users, words, snapshots, RNG, configuration
//! - `lexicon`: tile pool and dictionary traits with stock implementations
//! - `rules`: formation search, root-history guard, the engine
//! - `error`: setup errors
//!
//! ## Example
//!
//! ```
//! use squabble::{Engine, EngineConfig, GameState, TileBag, User, UserId, WordList, WordStatus};
//!
//! let words = WordList::from_words(["CAT", "ACTS"]);
//! let engine = Engine::new(words, TileBag::standard(), &EngineConfig::new().with_seed(42));
//!
//! let state = GameState::new()
//!     .with_word(UserId::new(1), "CAT")
//!     .with_tile(UserId::BOARD, 'S');
//!
//! let bob = User::new(UserId::new(2), 3);
//! let submission = engine.submit_word(&state, &bob, "ACTS");
//!
//! assert_eq!(submission.status, WordStatus::Ok);
//! assert_eq!(submission.state.words_of(UserId::new(1)).count(), 0);
//! ```

pub mod core;
pub mod error;
pub mod lexicon;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, GameRng, GameRngState, GameState, RandomSource, User, UserId, Word, WordId,
};

pub use crate::error::LoadError;

pub use crate::lexicon::{Dictionary, LetterPool, TileBag, WordList};

pub use crate::rules::{
    create_word_from, CreateResult, Engine, RootHistoryGuard, RootRule, Submission,
    WordFormationSolver, WordStatus,
};
