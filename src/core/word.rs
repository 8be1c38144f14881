//! Words on display.
//!
//! A `Word` is an immutable value created either when a tile is revealed
//! (atomic, no provenance) or when a submission succeeds (composite, made
//! from the words it consumed).
//!
//! ## Identity
//!
//! Two words with the same text are still different words: equality and
//! hashing use the `WordId` assigned by the `GameState` that created them.
//! Provenance is shared through an `Arc`, so cloning a word is O(1).

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::user::UserId;

/// Unique identifier for a word within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WordId(pub u64);

impl WordId {
    /// Create a new word ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The ID following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// IDs start at 1 in a fresh game.
impl Default for WordId {
    fn default() -> Self {
        Self(1)
    }
}

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Word({})", self.0)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct WordData {
    id: WordId,
    text: String,
    owner: UserId,
    made_from: Vec<Word>,
}

/// An immutable displayed word.
///
/// ```
/// use squabble::core::{UserId, Word, WordId};
///
/// let c = Word::new(WordId::new(1), "C", UserId::BOARD, Vec::new());
/// let at = Word::new(WordId::new(2), "AT", UserId::new(1), Vec::new());
/// let cat = Word::new(WordId::new(3), "CAT", UserId::new(2), vec![c, at]);
///
/// assert!(!cat.is_tile());
/// assert_eq!(cat.made_from().len(), 2);
/// assert_eq!(cat.to_string(), "CAT");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Word(Arc<WordData>);

impl Word {
    /// Create a word.
    ///
    /// When `made_from` is non-empty the letters of `text` should be exactly
    /// the letters of the parts; the engine only builds words that satisfy
    /// this, but the constructor does not check it so that arbitrary starting
    /// positions can be set up.
    pub fn new(id: WordId, text: impl Into<String>, owner: UserId, made_from: Vec<Word>) -> Self {
        Self(Arc::new(WordData {
            id,
            text: text.into(),
            owner,
            made_from,
        }))
    }

    /// Create an atomic single-letter tile.
    #[must_use]
    pub fn tile(id: WordId, letter: char, owner: UserId) -> Self {
        Self::new(id, letter.to_string(), owner, Vec::new())
    }

    #[must_use]
    pub fn id(&self) -> WordId {
        self.0.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.0.text
    }

    #[must_use]
    pub fn owner(&self) -> UserId {
        self.0.owner
    }

    /// The words consumed to build this one. Empty for tiles.
    #[must_use]
    pub fn made_from(&self) -> &[Word] {
        &self.0.made_from
    }

    /// True when the word has no provenance.
    #[must_use]
    pub fn is_tile(&self) -> bool {
        self.0.made_from.is_empty()
    }

    /// Number of characters in the text.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.0.text.chars().count()
    }

    /// Letters of the text in sorted order.
    #[must_use]
    pub fn letters_sorted(&self) -> Vec<char> {
        sorted_letters(&self.0.text)
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.text)
    }
}

/// Sort the characters of a string.
#[must_use]
pub fn sorted_letters(text: &str) -> Vec<char> {
    let mut letters: Vec<char> = text.chars().collect();
    letters.sort_unstable();
    letters
}
