//! Game flow tests.
//!
//! These tests drive the engine through whole turns: revealing tiles,
//! claiming words from the board, and stealing words from other players.

use squabble::core::{EngineConfig, GameState, RandomSource, User, UserId, Word};
use squabble::lexicon::{LetterPool, TileBag, WordList};
use squabble::rules::{Engine, RootRule, WordStatus};

/// Always picks the first available tile.
struct First;

impl RandomSource for First {
    fn index(&mut self, _len: usize) -> usize {
        0
    }
}

/// Records every length it is asked about and picks the last tile.
#[derive(Default)]
struct Recording(Vec<usize>);

impl RandomSource for Recording {
    fn index(&mut self, len: usize) -> usize {
        self.0.push(len);
        len - 1
    }
}

const X: UserId = UserId::new(1);
const Y: UserId = UserId::new(2);
const Z: UserId = UserId::new(3);

fn texts(state: &GameState, user: UserId) -> Vec<&str> {
    state.words_of(user).map(Word::text).collect()
}

fn engine(words: &[&str], tiles: &str) -> Engine<WordList, TileBag, First> {
    Engine::with_rng(
        WordList::from_words(words),
        TileBag::parse(tiles).unwrap(),
        First,
        &EngineConfig::default(),
    )
}

/// Stealing from two players at once moves both words into the new one.
#[test]
fn test_steal_from_two_players() {
    let engine = engine(&["ACTS"], "A:1");
    let state = GameState::new().with_word(X, "CAT").with_word(Y, "S");
    let cat = state.words_of(X).next().unwrap().clone();
    let s = state.words_of(Y).next().unwrap().clone();

    let submission = engine.submit_word(&state, &User::new(Z, 3), "ACTS");

    assert_eq!(submission.status, WordStatus::Ok);
    assert!(texts(&submission.state, X).is_empty());
    assert!(texts(&submission.state, Y).is_empty());
    assert_eq!(texts(&submission.state, Z), vec!["ACTS"]);

    let acts = submission.state.words_of(Z).next().unwrap();
    assert_eq!(acts.owner(), Z);
    assert_eq!(acts.made_from(), &[cat, s]);

    // The original snapshot is untouched.
    assert_eq!(texts(&state, X), vec!["CAT"]);
    assert_eq!(texts(&state, Y), vec!["S"]);
}

/// CAT from X and S from Y make CATS for Z.
#[test]
fn test_cats_scenario() {
    let engine = engine(&["CATS"], "A:1");
    let state = GameState::new().with_word(X, "CAT").with_word(Y, "S");
    let cat = state.words_of(X).next().unwrap().clone();
    let s = state.words_of(Y).next().unwrap().clone();

    let submission = engine.submit_word(&state, &User::new(Z, 3), "CATS");

    assert_eq!(submission.status, WordStatus::Ok);
    assert!(texts(&submission.state, X).is_empty());
    assert!(texts(&submission.state, Y).is_empty());
    assert_eq!(texts(&submission.state, Z), vec!["CATS"]);

    let cats = submission.state.words_of(Z).next().unwrap();
    assert_eq!(cats.made_from().len(), 2);
    assert!(std::ptr::eq(cats.made_from()[0].text(), cat.text()));
    assert!(std::ptr::eq(cats.made_from()[1].text(), s.text()));
    assert_eq!(cats.made_from(), &[cat, s]);
}

/// Adding an `s` to cat is a plural, not a steal.
#[test]
fn test_plural_steal_is_rejected() {
    let engine = engine(&["cats"], "A:1");
    let state = GameState::new().with_word(X, "cat").with_word(Y, "s");

    let submission = engine.submit_word(&state, &User::new(Z, 3), "cats");

    assert_eq!(submission.status, WordStatus::RootInHistory);
    assert_eq!(submission.state, state);
}

/// Uppercase tiles need an uppercase rule table.
#[test]
fn test_uppercase_rule_table() {
    let config = EngineConfig::new().with_root_rules(vec![RootRule::Identity, RootRule::suffix("S")]);
    let engine = Engine::with_rng(WordList::from_words(["CATS"]), TileBag::default(), First, &config);
    let state = GameState::new().with_word(X, "CAT").with_word(Y, "S");

    let submission = engine.submit_word(&state, &User::new(Z, 3), "CATS");

    assert_eq!(submission.status, WordStatus::RootInHistory);
    assert!(submission.state.ptr_eq(&state));
}

#[test]
fn test_rearranged_steal_is_accepted() {
    let engine = engine(&["CAST", "SCAT"], "A:1");
    let state = GameState::new().with_word(X, "CAT").with_tile(UserId::BOARD, 'S');

    let submission = engine.submit_word(&state, &User::new(Y, 3), "SCAT");
    assert_eq!(submission.status, WordStatus::Ok);

    let submission = engine.submit_word(&state, &User::new(Y, 3), "CAST");
    assert_eq!(submission.status, WordStatus::Ok);
}

#[test]
fn test_uncovered_letters_leave_state_unchanged() {
    let engine = engine(&["CART"], "A:1");
    let state = GameState::new().with_word(X, "CAT");

    let submission = engine.submit_word(&state, &User::new(Z, 3), "CART");

    assert_eq!(submission.status, WordStatus::NotAnagram);
    assert!(submission.state.ptr_eq(&state));
}

#[test]
fn test_too_short_wins_over_dictionary() {
    let engine = engine(&[], "A:1");
    let state = GameState::new().with_tile(UserId::BOARD, 'A');

    for (word, status) in [
        ("A", WordStatus::NotLongEnough),
        ("AT", WordStatus::NotLongEnough),
        ("ATE", WordStatus::NotInDictionary),
    ] {
        let submission = engine.submit_word(&state, &User::new(X, 3), word);
        assert_eq!(submission.status, status, "{word}");
    }
}

#[test]
fn test_rejection_is_idempotent() {
    let engine = engine(&["cats", "DOGS"], "A:1");
    let state = GameState::new().with_word(X, "cat").with_tile(UserId::BOARD, 's');
    let user = User::new(Y, 3);

    for word in ["cats", "DOGS", "CA", "TACO"] {
        let first = engine.submit_word(&state, &user, word);
        let second = engine.submit_word(&first.state, &user, word);
        assert_eq!(first.status, second.status, "{word}");
        assert!(!first.is_ok());
    }
}

/// A player can steal their own word.
#[test]
fn test_extend_own_word() {
    let engine = engine(&["TEAM", "MEAT"], "A:1");
    let state = GameState::new()
        .with_word(X, "TEA")
        .with_word(X, "DOG")
        .with_tile(UserId::BOARD, 'M');

    let submission = engine.submit_word(&state, &User::new(X, 3), "MEAT");

    assert_eq!(submission.status, WordStatus::Ok);
    assert_eq!(texts(&submission.state, X), vec!["DOG", "MEAT"]);
    assert!(texts(&submission.state, UserId::BOARD).is_empty());
}

/// The guard looks one level into provenance.
#[test]
fn test_guard_sees_provenance() {
    let engine = engine(&["team", "teams", "steam"], "A:1");
    let state = GameState::new().with_word(X, "tea").with_tile(UserId::BOARD, 'm');

    let state = engine.submit_word(&state, &User::new(Y, 3), "team").state;
    let state = state.with_tile(UserId::BOARD, 's');

    // teams is team + s.
    let submission = engine.submit_word(&state, &User::new(Z, 3), "teams");
    assert_eq!(submission.status, WordStatus::RootInHistory);

    // steam is a real rearrangement.
    let submission = engine.submit_word(&state, &User::new(Z, 3), "steam");
    assert_eq!(submission.status, WordStatus::Ok);
    let steam = submission.state.words_of(Z).next().unwrap();
    assert_eq!(steam.made_from()[0].text(), "s");
    assert_eq!(steam.made_from()[1].text(), "team");
    assert_eq!(steam.made_from()[1].made_from()[0].text(), "m");
}

/// Two identical words on display are separate words.
#[test]
fn test_identical_texts_removed_by_identity() {
    let engine = engine(&["TOON"], "A:1");
    let state = GameState::new()
        .with_word(X, "TO")
        .with_word(X, "ON")
        .with_word(Y, "ON");

    let submission = engine.submit_word(&state, &User::new(Z, 3), "TOON");

    assert_eq!(submission.status, WordStatus::Ok);
    // X's TO and ON were taken first; Y's ON stays.
    assert!(texts(&submission.state, X).is_empty());
    assert_eq!(texts(&submission.state, Y), vec!["ON"]);
}

/// Pool [A, A, B, C] with one A already on the board.
#[test]
fn test_reveal_skips_letters_in_play() {
    let mut engine = Engine::with_rng(
        WordList::new(),
        TileBag::from_letters(['A', 'A', 'B', 'C']),
        Recording::default(),
        &EngineConfig::default(),
    );
    let state = GameState::new().with_tile(UserId::BOARD, 'A');

    assert_eq!(engine.available_letters(&state), vec!['A', 'B', 'C']);

    let next = engine.reveal_letter(&state, UserId::BOARD);
    assert_eq!(texts(&next, UserId::BOARD), vec!["A", "C"]);
    assert_eq!(engine.rng().0, vec![3]);
}

#[test]
fn test_claimed_letters_stay_in_play() {
    let mut engine = engine(&["AB"], "A:1 B:1 C:1");

    let mut state = GameState::new();
    state = engine.reveal_letter(&state, UserId::BOARD);
    state = engine.reveal_letter(&state, UserId::BOARD);
    assert_eq!(texts(&state, UserId::BOARD), vec!["A", "B"]);

    state = engine.submit_word(&state, &User::new(X, 2), "AB").state;
    assert_eq!(texts(&state, X), vec!["AB"]);

    // A and B now sit in X's word, so only C is left.
    assert_eq!(engine.available_letters(&state), vec!['C']);
    state = engine.reveal_letter(&state, UserId::BOARD);
    assert_eq!(texts(&state, UserId::BOARD), vec!["C"]);

    let last = engine.reveal_letter(&state, UserId::BOARD);
    assert!(last.ptr_eq(&state));
}

/// Reveal every tile of the standard bag, then one more.
#[test]
fn test_reveal_whole_bag() {
    let config = EngineConfig::new().with_seed(2024);
    let mut engine = Engine::new(WordList::new(), TileBag::standard(), &config);

    let mut state = GameState::new();
    for _ in 0..98 {
        state = engine.reveal_letter(&state, UserId::BOARD);
    }

    let mut revealed = state.letters_in_play();
    revealed.sort_unstable();
    let mut bag = TileBag::standard().letters().to_vec();
    bag.sort_unstable();
    assert_eq!(revealed, bag);

    let after = engine.reveal_letter(&state, UserId::BOARD);
    assert_eq!(after, state);
}

#[test]
fn test_snapshot_serde() {
    let engine = engine(&["ACTS"], "A:1");
    let state = GameState::new().with_word(X, "CAT").with_tile(UserId::BOARD, 'S');
    let state = engine.submit_word(&state, &User::new(Y, 3), "ACTS").state;

    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, state);
    let acts = restored.words_of(Y).next().unwrap();
    assert_eq!(acts.made_from().len(), 2);
}
