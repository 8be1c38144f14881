//! Root-history guard.
//!
//! A steal that only pluralizes or conjugates an existing word is not a new
//! word. When the solver finds a decomposition, the guard checks every word
//! in it, plus each word's own `made_from` parts (one level down), against a
//! table of `RootRule`s. If any rule turns one of those roots into the
//! target, the submission is rejected.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::core::Word;

/// One way of deriving a trivial variant from a root word.
///
/// ```
/// use squabble::rules::RootRule;
///
/// assert!(RootRule::suffix("ing").derives("play", "playing"));
/// assert!(RootRule::prefix("re").derives("play", "replay"));
/// assert!(RootRule::Identity.derives("play", "play"));
/// assert!(!RootRule::suffix("s").derives("play", "player"));
/// assert!(!RootRule::suffix("s").derives("PLAY", "PLAYS"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootRule {
    /// The root itself.
    Identity,
    /// The root followed by this text.
    Suffix(Cow<'static, str>),
    /// This text followed by the root.
    Prefix(Cow<'static, str>),
}

impl RootRule {
    /// The standard table: the root itself; the root with `r`, `s`, `er`,
    /// `es`, `d`, `ed`, `ing` or `n` appended; `re` prepended.
    ///
    /// The affixes are lowercase and only catch lowercase words. Games
    /// played with uppercase tiles pass their own table.
    pub const DEFAULT: &'static [RootRule] = &[
        RootRule::Identity,
        RootRule::Suffix(Cow::Borrowed("r")),
        RootRule::Suffix(Cow::Borrowed("s")),
        RootRule::Suffix(Cow::Borrowed("er")),
        RootRule::Suffix(Cow::Borrowed("es")),
        RootRule::Suffix(Cow::Borrowed("d")),
        RootRule::Suffix(Cow::Borrowed("ed")),
        RootRule::Suffix(Cow::Borrowed("ing")),
        RootRule::Suffix(Cow::Borrowed("n")),
        RootRule::Prefix(Cow::Borrowed("re")),
    ];

    #[must_use]
    pub fn suffix(text: impl Into<Cow<'static, str>>) -> Self {
        Self::Suffix(text.into())
    }

    #[must_use]
    pub fn prefix(text: impl Into<Cow<'static, str>>) -> Self {
        Self::Prefix(text.into())
    }

    /// Build the variant of `root` this rule describes.
    #[must_use]
    pub fn apply(&self, root: &str) -> String {
        match self {
            RootRule::Identity => root.to_string(),
            RootRule::Suffix(suffix) => format!("{root}{suffix}"),
            RootRule::Prefix(prefix) => format!("{prefix}{root}"),
        }
    }

    /// True if `candidate` is exactly this rule's variant of `root`.
    ///
    /// Case is significant in both the root and the affix.
    #[must_use]
    pub fn derives(&self, root: &str, candidate: &str) -> bool {
        match self {
            RootRule::Identity => candidate == root,
            RootRule::Suffix(suffix) => candidate
                .strip_prefix(root)
                .is_some_and(|rest| rest == &**suffix),
            RootRule::Prefix(prefix) => candidate
                .strip_suffix(root)
                .is_some_and(|rest| rest == &**prefix),
        }
    }
}

/// Rejects decompositions that are trivial variants of a word in play.
///
/// Every comparison is exact, case included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootHistoryGuard {
    rules: Vec<RootRule>,
}

impl Default for RootHistoryGuard {
    fn default() -> Self {
        Self::new(RootRule::DEFAULT.to_vec())
    }
}

impl RootHistoryGuard {
    /// Create a guard with a custom rule table.
    #[must_use]
    pub fn new(rules: Vec<RootRule>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &[RootRule] {
        &self.rules
    }

    /// True if any rule derives `target` from `root`.
    #[must_use]
    pub fn is_root_of(&self, root: &str, target: &str) -> bool {
        self.rules.iter().any(|rule| rule.derives(root, target))
    }

    /// True if `target` is a trivial variant of a word in `used` or of one
    /// of their direct parts. A true result means reject.
    #[must_use]
    pub fn match_in_history(&self, used: &[Word], target: &str) -> bool {
        used.iter().any(|word| {
            self.is_root_of(word.text(), target)
                || word
                    .made_from()
                    .iter()
                    .any(|part| self.is_root_of(part.text(), target))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{UserId, WordId};

    fn word(id: u64, text: &str) -> Word {
        Word::new(WordId::new(id), text, UserId::new(1), Vec::new())
    }

    #[test]
    fn test_default_table_variants() {
        let variants: Vec<_> = RootRule::DEFAULT.iter().map(|r| r.apply("cat")).collect();
        assert_eq!(
            variants,
            vec!["cat", "catr", "cats", "cater", "cates", "catd", "cated", "cating", "catn", "recat"]
        );
    }

    #[test]
    fn test_derives_matches_apply() {
        for rule in RootRule::DEFAULT {
            let variant = rule.apply("LOVE");
            assert!(rule.derives("LOVE", &variant), "{rule:?}");
            assert!(!rule.derives("LOVE", &format!("{variant}X")), "{rule:?}");
        }
    }

    #[test]
    fn test_guard_rejects_suffix_and_prefix() {
        let guard = RootHistoryGuard::default();
        let used = [word(1, "play"), word(2, "s")];

        assert!(guard.match_in_history(&used, "plays"));
        assert!(guard.match_in_history(&used, "played"));
        assert!(guard.match_in_history(&used, "replay"));
        assert!(!guard.match_in_history(&used, "splay"));
    }

    #[test]
    fn test_guard_checks_one_level_of_provenance() {
        let guard = RootHistoryGuard::default();
        let rat = word(1, "rat");
        let s = word(2, "s");
        let e = word(3, "e");
        let star = Word::new(WordId::new(4), "star", UserId::new(2), vec![rat, s]);
        let tears = Word::new(WordId::new(5), "tears", UserId::new(2), vec![star.clone(), e]);

        // rat sits one level below star.
        assert!(guard.match_in_history(&[star], "rats"));
        // rat is two levels below tears, out of reach.
        assert!(!guard.match_in_history(&[tears], "rats"));
    }

    #[test]
    fn test_affix_case_must_match() {
        let guard = RootHistoryGuard::default();

        assert!(guard.match_in_history(&[word(1, "cat")], "cats"));
        assert!(guard.match_in_history(&[word(1, "CAT")], "CATs"));
        assert!(guard.match_in_history(&[word(1, "cat")], "recat"));
        // The lowercase table does not reach uppercase variants.
        assert!(!guard.match_in_history(&[word(1, "CAT")], "CATS"));
        assert!(!guard.match_in_history(&[word(1, "CAT")], "RECAT"));
        assert!(!guard.match_in_history(&[word(1, "cat")], "CATS"));
    }

    #[test]
    fn test_custom_rules() {
        let guard = RootHistoryGuard::new(vec![RootRule::suffix("LY")]);

        assert!(guard.is_root_of("QUICK", "QUICKLY"));
        assert!(!guard.is_root_of("QUICK", "QUICK"));
        assert_eq!(guard.rules().len(), 1);
    }

    #[test]
    fn test_rule_serde() {
        let json = serde_json::to_string(&RootRule::suffix("ing")).unwrap();
        assert_eq!(json, r#"{"suffix":"ing"}"#);

        let rule: RootRule = serde_json::from_str(r#""identity""#).unwrap();
        assert_eq!(rule, RootRule::Identity);
    }
}
