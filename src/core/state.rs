//! Game snapshot: who currently displays which words.
//!
//! ## GameState
//!
//! An immutable mapping from `UserId` to the ordered words that user
//! displays. The board (`UserId::BOARD`) holds revealed tiles nobody has
//! claimed yet.
//!
//! Uses `im` persistent data structures, so cloning a snapshot is O(1) and
//! every update returns a new snapshot sharing structure with the old one.
//! Nothing here mutates a snapshot that has been handed out.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::user::UserId;
use super::word::{Word, WordId};

/// Immutable game snapshot.
///
/// ## Ordering
///
/// Users iterate in ascending `UserId` order, which puts the board first.
/// Within a user, words keep insertion order; updates only remove words or
/// append one word at the end.
///
/// ## Empty users
///
/// A user whose last word is consumed is dropped from the map, so
/// `users()` only lists users that display something.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Words displayed per user.
    displayed: OrdMap<UserId, Vector<Word>>,

    /// Next word ID to allocate.
    next_word_id: WordId,
}

impl GameState {
    /// Create an empty snapshot with nothing displayed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a snapshot with `text` appended to `owner`'s words.
    ///
    /// The new word has no provenance. Used for revealed tiles and for
    /// setting up starting positions.
    #[must_use]
    pub fn with_word(&self, owner: UserId, text: &str) -> Self {
        self.with_new_word(|id| Word::new(id, text, owner, Vec::new())).0
    }

    /// Return a snapshot with a single-letter tile appended to `owner`'s words.
    #[must_use]
    pub fn with_tile(&self, owner: UserId, letter: char) -> Self {
        self.with_new_word(|id| Word::tile(id, letter, owner)).0
    }

    /// Replace `parts` with a new composite word owned by `owner`.
    ///
    /// Each part is removed from its own owner's sequence by identity, then
    /// the new word is appended to `owner`'s sequence. Returns the new
    /// snapshot and the created word.
    #[must_use]
    pub fn with_composite(&self, owner: UserId, text: &str, parts: Vec<Word>) -> (Self, Word) {
        let mut next = self.clone();
        for part in &parts {
            next.remove_word(part);
        }
        next.with_new_word(|id| Word::new(id, text, owner, parts))
    }

    fn with_new_word(&self, make: impl FnOnce(WordId) -> Word) -> (Self, Word) {
        let word = make(self.next_word_id);
        let mut next = self.clone();
        next.next_word_id = self.next_word_id.next();

        let mut words = next.displayed.get(&word.owner()).cloned().unwrap_or_default();
        words.push_back(word.clone());
        next.displayed.insert(word.owner(), words);

        (next, word)
    }

    /// Remove one word from its owner's sequence, matched by identity.
    ///
    /// Only ever called on a fresh clone inside a transition.
    fn remove_word(&mut self, word: &Word) -> bool {
        let owner = word.owner();
        let Some(words) = self.displayed.get(&owner) else {
            return false;
        };
        let Some(index) = words.index_of(word) else {
            return false;
        };

        let mut words = words.clone();
        words.remove(index);
        if words.is_empty() {
            self.displayed.remove(&owner);
        } else {
            self.displayed.insert(owner, words);
        }
        true
    }

    // === Queries ===

    /// Words displayed by a user, in order.
    pub fn words_of(&self, user: UserId) -> impl Iterator<Item = &Word> + '_ {
        self.displayed.get(&user).into_iter().flat_map(|words| words.iter())
    }

    /// Users that currently display at least one word.
    pub fn users(&self) -> impl Iterator<Item = UserId> + '_ {
        self.displayed.keys().copied()
    }

    /// Every displayed word, user by user, board first.
    #[must_use]
    pub fn current_words(&self) -> Vec<Word> {
        self.displayed
            .values()
            .flat_map(|words| words.iter().cloned())
            .collect()
    }

    /// Every letter on display, one entry per occurrence.
    #[must_use]
    pub fn letters_in_play(&self) -> Vec<char> {
        self.displayed
            .values()
            .flat_map(|words| words.iter())
            .flat_map(|word| word.text().chars())
            .collect()
    }

    /// Total number of displayed words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.displayed.values().map(Vector::len).sum()
    }

    /// Find a displayed word by ID.
    #[must_use]
    pub fn find(&self, id: WordId) -> Option<&Word> {
        self.displayed
            .values()
            .flat_map(|words| words.iter())
            .find(|word| word.id() == id)
    }

    /// True if both snapshots share the same underlying map.
    ///
    /// Cheap identity check for optimistic-concurrency callers; snapshots
    /// that are equal but were built separately return false.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.next_word_id == other.next_word_id && self.displayed.ptr_eq(&other.displayed)
    }
}
