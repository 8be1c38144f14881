//! Outcome of a word submission.

use serde::{Deserialize, Serialize};

/// Status of a submitted word.
///
/// Every rejection is reported in-band; the state handed back alongside a
/// non-`Ok` status is the unchanged input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WordStatus {
    /// Shorter than the submitting user's minimum.
    NotLongEnough,
    /// The dictionary does not know the word.
    NotInDictionary,
    /// No subset of the displayed words has exactly the target's letters.
    NotAnagram,
    /// The decomposition found is a trivial variant of a word in it.
    RootInHistory,
    /// Accepted.
    Ok,
}

impl WordStatus {
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, WordStatus::Ok)
    }

    /// Upper snake case name, as used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            WordStatus::NotLongEnough => "NOT_LONG_ENOUGH",
            WordStatus::NotInDictionary => "NOT_IN_DICTIONARY",
            WordStatus::NotAnagram => "NOT_ANAGRAM",
            WordStatus::RootInHistory => "ROOT_IN_HISTORY",
            WordStatus::Ok => "OK",
        }
    }
}

impl std::fmt::Display for WordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
