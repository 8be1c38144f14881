//! Word formation search.
//!
//! Decides whether a target word can be built as the exact letter-multiset
//! union of some subset of the displayed words, and if so which subset.
//!
//! ## Algorithm
//!
//! 1. **Prefilter**: keep candidates whose distinct letters all occur in the
//!    target. Multiplicity is ignored here; over-long candidates fall out
//!    later at the exact comparison.
//! 2. **Coverage**: if the kept candidates together miss a target letter,
//!    fail with `NotAnagram` without searching.
//! 3. **Include/exclude search** over a `used`/`unused` partition, depth
//!    first. For each unused candidate in order, first try it included, then
//!    excluded. The first exact match ends the search: it is returned as
//!    `Ok`, or as `RootInHistory` if the guard rejects it. No other
//!    decomposition is tried after a guard rejection.
//!
//! The search runs on an explicit stack of index bitmasks, so stack depth
//! does not grow with the candidate count. A frame reached a second time is
//! skipped: its first visit did not end the search, so it cannot succeed
//! now, and skipping it leaves the first match unchanged.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::history::RootHistoryGuard;
use super::status::WordStatus;
use crate::core::word::sorted_letters;
use crate::core::Word;

/// Result of a formation search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateResult {
    /// The words making up the target, in the order they were chosen.
    /// `None` unless `status` is `Ok`.
    pub parts: Option<Vec<Word>>,

    pub status: WordStatus,
}

impl CreateResult {
    fn found(parts: Vec<Word>) -> Self {
        Self {
            parts: Some(parts),
            status: WordStatus::Ok,
        }
    }

    fn failed(status: WordStatus) -> Self {
        Self {
            parts: None,
            status,
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}

/// Searches the displayed words for a decomposition of a target.
#[derive(Clone, Debug, Default)]
pub struct WordFormationSolver {
    guard: RootHistoryGuard,
}

impl WordFormationSolver {
    #[must_use]
    pub fn new(guard: RootHistoryGuard) -> Self {
        Self { guard }
    }

    #[must_use]
    pub fn guard(&self) -> &RootHistoryGuard {
        &self.guard
    }

    /// Find the first decomposition of `target` into whole words from
    /// `available`.
    ///
    /// An empty target has no decomposition and fails with `NotAnagram`.
    ///
    /// ```
    /// use squabble::core::{UserId, Word, WordId};
    /// use squabble::rules::{WordFormationSolver, WordStatus};
    ///
    /// let tea = Word::new(WordId::new(1), "TEA", UserId::new(1), Vec::new());
    /// let m = Word::tile(WordId::new(2), 'M', UserId::BOARD);
    ///
    /// let result = WordFormationSolver::default().create_word_from(&[tea, m], "MEAT");
    /// assert_eq!(result.status, WordStatus::Ok);
    /// assert_eq!(result.parts.unwrap().len(), 2);
    /// ```
    #[must_use]
    pub fn create_word_from(&self, available: &[Word], target: &str) -> CreateResult {
        if target.is_empty() {
            return CreateResult::failed(WordStatus::NotAnagram);
        }

        let target_letters: FxHashSet<char> = target.chars().collect();

        let candidates: Vec<&Word> = available
            .iter()
            .filter(|word| word.text().chars().all(|c| target_letters.contains(&c)))
            .collect();

        let covered: FxHashSet<char> = candidates
            .iter()
            .flat_map(|word| word.text().chars())
            .collect();
        if !target_letters.is_subset(&covered) {
            tracing::trace!(word = target, "target letters not covered by displayed words");
            return CreateResult::failed(WordStatus::NotAnagram);
        }

        Search::new(&candidates, target, &self.guard).run()
    }
}

/// Convenience wrapper using the standard guard table.
#[must_use]
pub fn create_word_from(available: &[Word], target: &str) -> CreateResult {
    WordFormationSolver::default().create_word_from(available, target)
}

/// Fixed-width set of candidate indices.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Mask {
    blocks: SmallVec<[u64; 2]>,
}

impl Mask {
    fn empty(len: usize) -> Self {
        Self {
            blocks: SmallVec::from_elem(0, len.div_ceil(64)),
        }
    }

    fn full(len: usize) -> Self {
        let mut mask = Self::empty(len);
        for i in 0..len {
            mask.insert(i);
        }
        mask
    }

    fn insert(&mut self, i: usize) {
        self.blocks[i / 64] |= 1 << (i % 64);
    }

    fn remove(&mut self, i: usize) {
        self.blocks[i / 64] &= !(1 << (i % 64));
    }

    fn is_empty(&self) -> bool {
        self.blocks.iter().all(|&b| b == 0)
    }

    /// Indices in ascending order.
    fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.blocks.iter().enumerate().flat_map(|(block, &bits)| {
            (0..64)
                .filter(move |bit| bits & (1 << bit) != 0)
                .map(move |bit| block * 64 + bit)
        })
    }
}

/// One node of the include/exclude tree.
#[derive(Clone, Debug)]
struct Frame {
    /// Candidate indices in the order they were included.
    used: SmallVec<[usize; 8]>,
    used_mask: Mask,
    unused: Mask,
    /// Total characters across `used`.
    used_len: usize,
}

struct Search<'a> {
    candidates: &'a [&'a Word],
    lengths: Vec<usize>,
    target: &'a str,
    target_sorted: Vec<char>,
    guard: &'a RootHistoryGuard,
}

impl<'a> Search<'a> {
    fn new(candidates: &'a [&'a Word], target: &'a str, guard: &'a RootHistoryGuard) -> Self {
        Self {
            candidates,
            lengths: candidates.iter().map(|word| word.char_count()).collect(),
            target,
            target_sorted: sorted_letters(target),
            guard,
        }
    }

    fn run(&self) -> CreateResult {
        let n = self.candidates.len();
        let mut stack = vec![Frame {
            used: SmallVec::new(),
            used_mask: Mask::empty(n),
            unused: Mask::full(n),
            used_len: 0,
        }];
        let mut explored: FxHashSet<(Mask, Mask)> = FxHashSet::default();

        while let Some(frame) = stack.pop() {
            if !explored.insert((frame.used_mask.clone(), frame.unused.clone())) {
                continue;
            }

            if frame.used_len > self.target_sorted.len() {
                continue;
            }

            if frame.used_len == self.target_sorted.len()
                && self.used_sorted(&frame) == self.target_sorted
            {
                let parts: Vec<Word> = frame
                    .used
                    .iter()
                    .map(|&i| self.candidates[i].clone())
                    .collect();

                tracing::trace!(
                    word = self.target,
                    frames = explored.len(),
                    "exact decomposition found"
                );

                if self.guard.match_in_history(&parts, self.target) {
                    return CreateResult::failed(WordStatus::RootInHistory);
                }
                return CreateResult::found(parts);
            }

            if frame.unused.is_empty() {
                continue;
            }

            // Push in reverse so the lowest index is explored first, and its
            // include branch before its exclude branch.
            let indices: SmallVec<[usize; 16]> = frame.unused.iter().collect();
            for &i in indices.iter().rev() {
                let mut rest = frame.unused.clone();
                rest.remove(i);

                stack.push(Frame {
                    used: frame.used.clone(),
                    used_mask: frame.used_mask.clone(),
                    unused: rest.clone(),
                    used_len: frame.used_len,
                });

                let mut used = frame.used.clone();
                used.push(i);
                let mut used_mask = frame.used_mask.clone();
                used_mask.insert(i);
                stack.push(Frame {
                    used,
                    used_mask,
                    unused: rest,
                    used_len: frame.used_len + self.lengths[i],
                });
            }
        }

        tracing::trace!(word = self.target, frames = explored.len(), "search exhausted");
        CreateResult::failed(WordStatus::NotAnagram)
    }

    fn used_sorted(&self, frame: &Frame) -> Vec<char> {
        let mut letters: Vec<char> = frame
            .used
            .iter()
            .flat_map(|&i| self.candidates[i].text().chars())
            .collect();
        letters.sort_unstable();
        letters
    }
}
