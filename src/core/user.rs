//! Player identification.
//!
//! ## UserId
//!
//! Opaque identity of a participant. `UserId::BOARD` is reserved for the
//! shared board that holds revealed, unclaimed tiles.
//!
//! ## User
//!
//! A participant plus the per-user rule attribute `minimum_chars`.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Participant identifier.
///
/// `UserId(0)` is the board. Players are numbered from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl UserId {
    /// The reserved pseudo-player holding unclaimed tiles.
    pub const BOARD: UserId = UserId(0);

    /// Create a new user ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is the board.
    #[must_use]
    pub const fn is_board(self) -> bool {
        self.0 == Self::BOARD.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_board() {
            write!(f, "Board")
        } else {
            write!(f, "User {}", self.0)
        }
    }
}

/// A participant and the shortest word they may submit.
///
/// Two users are the same user when their IDs match; `minimum_chars` is an
/// attribute, not part of the identity.
///
/// ```
/// use squabble::core::{User, UserId};
///
/// let alice = User::new(UserId::new(1), 3);
/// assert_eq!(alice.id(), UserId::new(1));
/// assert_eq!(alice.minimum_chars(), 3);
/// assert_eq!(alice, User::new(UserId::new(1), 5));
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    minimum_chars: usize,
}

impl User {
    /// Create a new user.
    #[must_use]
    pub const fn new(id: UserId, minimum_chars: usize) -> Self {
        Self { id, minimum_chars }
    }

    /// The board user. It never submits words, so its minimum is zero.
    #[must_use]
    pub const fn board() -> Self {
        Self::new(UserId::BOARD, 0)
    }

    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Smallest word length (in characters) this user may submit.
    #[must_use]
    pub const fn minimum_chars(&self) -> usize {
        self.minimum_chars
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl From<User> for UserId {
    fn from(user: User) -> Self {
        user.id
    }
}
