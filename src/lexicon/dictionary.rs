//! Word validity lookup.
//!
//! The `Dictionary` trait is the seam to the word list. `WordList` is an
//! in-memory implementation that compares case-insensitively.

use std::path::Path;

use rustc_hash::FxHashSet;

use crate::error::LoadError;

/// Oracle answering whether a string is an acceptable word.
///
/// Must be deterministic for a given word for the duration of a decision.
pub trait Dictionary {
    fn is_valid(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_valid(&self, word: &str) -> bool {
        (**self).is_valid(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for std::sync::Arc<D> {
    fn is_valid(&self, word: &str) -> bool {
        (**self).is_valid(word)
    }
}

/// In-memory word list.
///
/// Words are stored uppercase; lookups uppercase the query.
///
/// ## Example
///
/// ```
/// use squabble::lexicon::{Dictionary, WordList};
///
/// let words = WordList::parse("# pets\ncat\ncats\n\ndog\n");
///
/// assert_eq!(words.len(), 3);
/// assert!(words.is_valid("CAT"));
/// assert!(words.is_valid("Dog"));
/// assert!(!words.is_valid("cow"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from any sequence of words. Blank entries are skipped.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut list = Self::new();
        for word in words {
            list.insert(word.as_ref());
        }
        list
    }

    /// Parse one word per line. Blank lines and lines starting with `#` are
    /// ignored; surrounding whitespace is trimmed.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    /// Load a word list file in the `parse` format.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let list = Self::parse(&text);
        tracing::info!(words = list.len(), path = %path.display(), "loaded word list");
        Ok(list)
    }

    /// Add a word. Returns false if it was already present or blank.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word.to_uppercase())
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn is_valid(&self, word: &str) -> bool {
        self.contains(word)
    }
}
