//! Game rules.
//!
//! - `solver`: can a word be formed from the displayed words, and how
//! - `history`: reject trivial variants of a word already in play
//! - `engine`: the `submit_word` and `reveal_letter` transitions
//!
//! Rejections are reported as a `WordStatus`, never as an error.

pub mod engine;
pub mod history;
pub mod solver;
pub mod status;

pub use engine::{Engine, Submission};
pub use history::{RootHistoryGuard, RootRule};
pub use solver::{create_word_from, CreateResult, WordFormationSolver};
pub use status::WordStatus;
