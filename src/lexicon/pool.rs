//! Tile supply.
//!
//! The `LetterPool` trait is the seam to whatever defines the letters in a
//! game. `TileBag` is the stock implementation: an ordered multiset of
//! letters where duplicates express frequency.

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Total tile supply for a game.
///
/// The engine only reads the letters; it never mutates the pool.
pub trait LetterPool {
    /// Every tile in the game, one entry per tile.
    fn letters(&self) -> &[char];
}

impl<P: LetterPool + ?Sized> LetterPool for &P {
    fn letters(&self) -> &[char] {
        (**self).letters()
    }
}

impl<P: LetterPool + ?Sized> LetterPool for std::sync::Arc<P> {
    fn letters(&self) -> &[char] {
        (**self).letters()
    }
}

/// English Scrabble tile counts, blanks excluded (98 tiles).
const STANDARD_COUNTS: [(char, usize); 26] = [
    ('A', 9),
    ('B', 2),
    ('C', 2),
    ('D', 4),
    ('E', 12),
    ('F', 2),
    ('G', 3),
    ('H', 2),
    ('I', 9),
    ('J', 1),
    ('K', 1),
    ('L', 4),
    ('M', 2),
    ('N', 6),
    ('O', 8),
    ('P', 2),
    ('Q', 1),
    ('R', 6),
    ('S', 4),
    ('T', 6),
    ('U', 4),
    ('V', 2),
    ('W', 2),
    ('X', 1),
    ('Y', 2),
    ('Z', 1),
];

/// A fixed bag of letter tiles.
///
/// ## Example
///
/// ```
/// use squabble::lexicon::{LetterPool, TileBag};
///
/// let bag = TileBag::parse("A:2 B:1, C:1").unwrap();
/// assert_eq!(bag.letters(), &['A', 'A', 'B', 'C']);
///
/// assert_eq!(TileBag::standard().len(), 98);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileBag {
    letters: Vec<char>,
}

impl TileBag {
    /// Create a bag from explicit tiles, in order.
    pub fn from_letters(letters: impl IntoIterator<Item = char>) -> Self {
        Self {
            letters: letters.into_iter().collect(),
        }
    }

    /// Create a bag from `(letter, count)` pairs.
    #[must_use]
    pub fn from_counts(counts: &[(char, usize)]) -> Self {
        Self::from_letters(
            counts
                .iter()
                .flat_map(|&(letter, count)| std::iter::repeat(letter).take(count)),
        )
    }

    /// The English Scrabble distribution without blanks.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_counts(&STANDARD_COUNTS)
    }

    /// Parse a distribution such as `"A:9 B:2 C:2"`.
    ///
    /// Entries are separated by whitespace or commas. Letters are taken as
    /// written; each letter may only appear once.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        let mut counts: Vec<(char, usize)> = Vec::new();

        for entry in text.split(|c: char| c == ',' || c.is_whitespace()) {
            if entry.is_empty() {
                continue;
            }

            let malformed = || LoadError::MalformedTile {
                entry: entry.to_string(),
            };

            let (letter, count) = entry.split_once(':').ok_or_else(malformed)?;
            let mut chars = letter.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(malformed()),
            };
            let count = count.parse::<usize>().map_err(|source| LoadError::InvalidCount {
                entry: entry.to_string(),
                source,
            })?;

            if counts.iter().any(|&(seen, _)| seen == letter) {
                return Err(LoadError::DuplicateLetter { letter });
            }
            counts.push((letter, count));
        }

        Ok(Self::from_counts(&counts))
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// How many tiles carry `letter`.
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.letters.iter().filter(|&&c| c == letter).count()
    }
}

impl LetterPool for TileBag {
    fn letters(&self) -> &[char] {
        &self.letters
    }
}
